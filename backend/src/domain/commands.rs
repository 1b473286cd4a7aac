//! Domain-level command types.
//!
//! These are the inputs of the mutation operations. The `io` mappers turn the
//! payload DTOs of the `shared` crate into these before they reach a service.

use crate::domain::models::ItemFieldValue;
use shared::{EntityId, InvoiceStatus, VatInput};

/// A line item to be created
#[derive(Debug, Clone, PartialEq)]
pub struct NewItemCommand {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub vat: VatInput,
}

impl Default for NewItemCommand {
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: 0.0,
            unit_price: 0.0,
            vat: VatInput::default(),
        }
    }
}

/// An invoice to be appended to the store, with its items
#[derive(Debug, Clone, PartialEq)]
pub struct AddInvoiceCommand {
    pub id: EntityId,
    pub number: String,
    pub status: InvoiceStatus,
    pub order_date: String,
    pub due_date: String,
    pub sender_id: EntityId,
    pub recipient_id: EntityId,
    pub items: Vec<NewItemCommand>,
}

/// A fresh draft: dates empty, one blank item
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDraftInvoiceCommand {
    pub id: EntityId,
    pub number: String,
    pub sender_id: EntityId,
    pub recipient_id: EntityId,
}

impl From<CreateDraftInvoiceCommand> for AddInvoiceCommand {
    fn from(draft: CreateDraftInvoiceCommand) -> Self {
        Self {
            id: draft.id,
            number: draft.number,
            status: InvoiceStatus::Draft,
            order_date: String::new(),
            due_date: String::new(),
            sender_id: draft.sender_id,
            recipient_id: draft.recipient_id,
            items: vec![NewItemCommand::default()],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddItemCommand {
    pub invoice_id: EntityId,
    pub item: NewItemCommand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveItemCommand {
    pub invoice_id: EntityId,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetInvoiceStatusCommand {
    pub invoice_id: EntityId,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetItemFieldCommand {
    pub invoice_id: EntityId,
    pub index: usize,
    pub value: ItemFieldValue,
}
