//! # Storage Module
//!
//! Holds the in-memory store and brings it up from the startup payload.
//!
//! Nothing is written back: the payload is read once and every later change
//! lives only in memory.
//!
//! - **collection**: ordered id-addressable lists
//! - **invoice_store**: the senders, recipients and invoices collections
//! - **payload_source**: where the JSON payload is read from
//! - **loader**: parsing and populating a store

pub mod collection;
pub mod invoice_store;
pub mod loader;
pub mod payload_source;

pub use collection::{Collection, Identified};
pub use invoice_store::InvoiceStore;
pub use loader::{load_store, populate_store};
pub use payload_source::{FilePayloadSource, PayloadSource, StaticPayloadSource};
