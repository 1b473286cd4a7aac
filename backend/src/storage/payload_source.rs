//! Where the startup payload comes from.

use crate::error::LoadError;
use async_trait::async_trait;
use std::path::PathBuf;

/// A one-shot source of the raw JSON payload
#[async_trait]
pub trait PayloadSource: Send + Sync {
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Short description for log lines
    fn describe(&self) -> String;
}

/// Reads the payload from a JSON file
#[derive(Debug, Clone)]
pub struct FilePayloadSource {
    path: PathBuf,
}

impl FilePayloadSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PayloadSource for FilePayloadSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Serves a payload already held in memory
#[derive(Debug, Clone)]
pub struct StaticPayloadSource {
    body: String,
}

impl StaticPayloadSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl PayloadSource for StaticPayloadSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.body.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory payload ({} bytes)", self.body.len())
    }
}
