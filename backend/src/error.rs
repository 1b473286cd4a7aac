//! Error types for loading the invoice data and for mutating invoices.
//!
//! Lookups never produce errors: a missing entity is reported as `None`.

use shared::EntityId;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to bring the store from empty to ready
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read invoice data from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed invoice data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invoice data has already been loaded")]
    AlreadyLoaded,
}

/// Failure of a mutation that addresses an invoice or line item
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvoiceError {
    #[error("invoice {0} not found")]
    InvoiceNotFound(EntityId),

    #[error("invoice {invoice_id} has no item at index {index} (it has {len})")]
    ItemIndexOutOfRange {
        invoice_id: EntityId,
        index: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = InvoiceError::InvoiceNotFound(EntityId::from("42"));
        assert_eq!(err.to_string(), "invoice 42 not found");

        let err = InvoiceError::ItemIndexOutOfRange {
            invoice_id: EntityId::Number(7),
            index: 3,
            len: 2,
        };
        assert_eq!(err.to_string(), "invoice 7 has no item at index 3 (it has 2)");

        let err = LoadError::Io {
            path: PathBuf::from("json/invoices.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().starts_with("failed to read invoice data from json/invoices.json"));
    }
}
