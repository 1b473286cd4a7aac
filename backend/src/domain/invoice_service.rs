//! Mutation operations on invoices.
//!
//! Every operation writes through the invoice, lets it recompute its derived
//! fields, and only then notifies observers with the new values. The store is
//! passed in by the caller; the service itself only owns the observers.

use crate::domain::change_notifier::{ChangeEvent, ChangeNotifier, FieldChange, SubscriptionId};
use crate::domain::commands::{
    AddInvoiceCommand, AddItemCommand, CreateDraftInvoiceCommand, RemoveItemCommand,
    SetInvoiceStatusCommand, SetItemFieldCommand,
};
use crate::domain::derivation::FieldPath;
use crate::domain::models::{Invoice, InvoiceItem};
use crate::error::InvoiceError;
use crate::storage::InvoiceStore;
use shared::EntityId;
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct InvoiceService {
    notifier: ChangeNotifier,
}

impl InvoiceService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent) + Send + 'static,
    {
        self.notifier.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Append a new invoice. Duplicate ids are accepted.
    pub fn add_invoice<'a>(&mut self, store: &'a mut InvoiceStore, command: AddInvoiceCommand) -> &'a Invoice {
        let added = store.add_invoice(Invoice::new(command));
        info!(invoice = %added.id(), number = added.number(), "Invoice added");
        self.notifier.notify(&ChangeEvent::InvoiceAdded {
            invoice_id: added.id().clone(),
        });
        added
    }

    /// Append a draft invoice holding one blank item
    pub fn create_draft_invoice<'a>(
        &mut self,
        store: &'a mut InvoiceStore,
        command: CreateDraftInvoiceCommand,
    ) -> &'a Invoice {
        self.add_invoice(store, command.into())
    }

    /// Append an item and return its index
    pub fn add_item_to_invoice(&mut self, store: &mut InvoiceStore, command: AddItemCommand) -> Result<usize, InvoiceError> {
        let invoice = Self::invoice_mut(store, &command.invoice_id)?;
        let changed = invoice.push_item(InvoiceItem::from(command.item));
        let index = invoice.items().len() - 1;
        info!(invoice = %command.invoice_id, index, "Item added to invoice");

        let events = Self::change_events(invoice, &changed);
        self.notifier.notify_all(&events);
        Ok(index)
    }

    /// Remove the item at `index`; later items shift down by one
    pub fn remove_item_from_invoice(
        &mut self,
        store: &mut InvoiceStore,
        command: RemoveItemCommand,
    ) -> Result<InvoiceItem, InvoiceError> {
        let invoice = Self::invoice_mut(store, &command.invoice_id)?;
        let len = invoice.items().len();
        let (removed, changed) =
            invoice
                .remove_item(command.index)
                .ok_or_else(|| InvoiceError::ItemIndexOutOfRange {
                    invoice_id: command.invoice_id.clone(),
                    index: command.index,
                    len,
                })?;
        info!(invoice = %command.invoice_id, index = command.index, "Item removed from invoice");

        let events = Self::change_events(invoice, &changed);
        self.notifier.notify_all(&events);
        Ok(removed)
    }

    /// Set any status; no transition rules apply
    pub fn set_invoice_status(
        &mut self,
        store: &mut InvoiceStore,
        command: SetInvoiceStatusCommand,
    ) -> Result<(), InvoiceError> {
        let invoice = Self::invoice_mut(store, &command.invoice_id)?;
        info!(
            invoice = %command.invoice_id,
            from = %invoice.status(),
            to = %command.status,
            "Invoice status changed"
        );
        let changed = invoice.set_status(command.status);

        let events = Self::change_events(invoice, &changed);
        self.notifier.notify_all(&events);
        Ok(())
    }

    pub fn set_item_field(&mut self, store: &mut InvoiceStore, command: SetItemFieldCommand) -> Result<(), InvoiceError> {
        let invoice = Self::invoice_mut(store, &command.invoice_id)?;
        let len = invoice.items().len();
        let field = command.value.field();
        let changed = invoice
            .set_item_field(command.index, command.value)
            .ok_or_else(|| InvoiceError::ItemIndexOutOfRange {
                invoice_id: command.invoice_id.clone(),
                index: command.index,
                len,
            })?;
        info!(
            invoice = %command.invoice_id,
            index = command.index,
            field = field.as_str(),
            "Item field updated"
        );

        let events = Self::change_events(invoice, &changed);
        self.notifier.notify_all(&events);
        Ok(())
    }

    fn invoice_mut<'a>(store: &'a mut InvoiceStore, invoice_id: &EntityId) -> Result<&'a mut Invoice, InvoiceError> {
        store.find_invoice_mut(invoice_id).ok_or_else(|| {
            warn!(invoice = %invoice_id, "Invoice not found");
            InvoiceError::InvoiceNotFound(invoice_id.clone())
        })
    }

    fn change_events(invoice: &Invoice, changed: &[FieldPath]) -> Vec<ChangeEvent> {
        changed
            .iter()
            .filter_map(|path| {
                invoice.value_at(*path).map(|value| {
                    ChangeEvent::FieldChanged(FieldChange {
                        invoice_id: invoice.id().clone(),
                        path: *path,
                        value,
                    })
                })
            })
            .collect()
    }
}
