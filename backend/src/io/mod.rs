//! # IO Module
//!
//! Boundary between the domain and the outside world: mapping payload DTOs
//! into domain commands and entities, and shaping domain state into the view
//! models the presentation layer renders.

pub mod invoice_views;
pub mod mappers;

pub use invoice_views::InvoiceViewService;
