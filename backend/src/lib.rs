//! # Invoice Manager Backend
//!
//! Contains all non-UI logic of the invoice manager.
//!
//! - **Domain**: entities, VAT arithmetic, derived field recomputation and
//!   change notification
//! - **Storage**: the in-memory collections and the startup payload loader
//! - **IO**: mappers from payload DTOs and the view models handed to a UI
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (any observer)
//!     ↓
//! App State (InvoiceManager)
//!     ↓
//! Domain Layer (services, models, derivation)
//!     ↓
//! Storage Layer (InvoiceStore, PayloadSource)
//! ```

pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod storage;

pub use app_state::{InvoiceManager, LoadState};
pub use config::AppConfig;
pub use error::{InvoiceError, LoadError};
