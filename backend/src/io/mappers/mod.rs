pub mod invoice_mapper;
pub mod person_mapper;

pub use invoice_mapper::InvoiceMapper;
pub use person_mapper::PersonMapper;
