//! Entities held by the invoice store.

pub mod invoice;
pub mod invoice_item;
pub mod person;

pub use invoice::Invoice;
pub use invoice_item::{InvoiceItem, ItemFieldValue};
pub use person::{Person, Recipient, Sender};
