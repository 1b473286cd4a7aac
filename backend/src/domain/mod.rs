//! # Domain Module
//!
//! Business rules of the invoice manager, independent of where the data comes
//! from and of how it is shown.
//!
//! ## Module Organization
//!
//! - **vat_calculator**: pure VAT and total arithmetic
//! - **models**: senders, recipients, invoices and their line items
//! - **derivation**: the dependency graph of derived fields
//! - **change_notifier**: observers of field changes
//! - **invoice_service**: the mutation operations offered to the presentation layer
//! - **commands**: inputs of those operations
//!
//! ## Business Rules
//!
//! - Invalid or non-positive VAT counts as no VAT
//! - Invoice totals always match the current items
//! - Any status may be set at any time; there is no transition graph

pub mod change_notifier;
pub mod commands;
pub mod derivation;
pub mod invoice_service;
pub mod models;
pub mod vat_calculator;

pub use change_notifier::{ChangeEvent, ChangeNotifier, ChangedValue, FieldChange, SubscriptionId};
pub use commands::*;
pub use derivation::{FieldPath, InvoiceField, ItemField};
pub use invoice_service::InvoiceService;
pub use models::*;
