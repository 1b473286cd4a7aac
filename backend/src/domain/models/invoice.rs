use crate::domain::change_notifier::ChangedValue;
use crate::domain::commands::{AddInvoiceCommand, NewItemCommand};
use crate::domain::derivation::{self, FieldPath, InvoiceField, Node};
use crate::domain::models::{InvoiceItem, ItemFieldValue};
use crate::domain::vat_calculator;
use shared::{EntityId, InvoiceStatus};
use tracing::debug;

/// An invoice and the line items it owns.
///
/// `sender_id` and `recipient_id` only refer to entries of the store; the
/// invoice does not own its parties. `total_price` and `total_vat_price` are
/// derived from the items and kept current by every mutation below.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    id: EntityId,
    number: String,
    status: InvoiceStatus,
    order_date: String,
    due_date: String,
    sender_id: EntityId,
    recipient_id: EntityId,
    items: Vec<InvoiceItem>,
    total_price: f64,
    total_vat_price: f64,
}

impl Invoice {
    /// Build an invoice; its items are constructed before the totals are computed
    pub fn new(command: AddInvoiceCommand) -> Self {
        let items = command.items.into_iter().map(InvoiceItem::from).collect();
        let mut invoice = Self {
            id: command.id,
            number: command.number,
            status: command.status,
            order_date: command.order_date,
            due_date: command.due_date,
            sender_id: command.sender_id,
            recipient_id: command.recipient_id,
            items,
            total_price: 0.0,
            total_vat_price: 0.0,
        };
        for node in derivation::derived_nodes() {
            if let Node::Invoice(field) = node {
                invoice.recompute(field);
            }
        }
        invoice
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn status(&self) -> &InvoiceStatus {
        &self.status
    }

    pub fn order_date(&self) -> &str {
        &self.order_date
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn sender_id(&self) -> &EntityId {
        &self.sender_id
    }

    pub fn recipient_id(&self) -> &EntityId {
        &self.recipient_id
    }

    pub fn items(&self) -> &[InvoiceItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&InvoiceItem> {
        self.items.get(index)
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn total_vat_price(&self) -> f64 {
        self.total_vat_price
    }

    /// Current value at `path`, or `None` if the path names a missing item
    pub fn value_at(&self, path: FieldPath) -> Option<ChangedValue> {
        match path {
            FieldPath::Invoice(InvoiceField::Status) => Some(ChangedValue::Status(self.status.clone())),
            FieldPath::Invoice(InvoiceField::Items) => Some(ChangedValue::ItemCount(self.items.len())),
            FieldPath::Invoice(InvoiceField::TotalPrice) => Some(ChangedValue::Amount(self.total_price)),
            FieldPath::Invoice(InvoiceField::TotalVatPrice) => {
                Some(ChangedValue::Amount(self.total_vat_price))
            }
            FieldPath::Item { index, field } => self.items.get(index).map(|item| item.value_of(field)),
        }
    }

    // Mutations return every path they wrote or recomputed, in that order.

    pub(crate) fn set_status(&mut self, status: InvoiceStatus) -> Vec<FieldPath> {
        self.status = status;
        let mut changed = vec![FieldPath::Invoice(InvoiceField::Status)];
        self.propagate(Node::Invoice(InvoiceField::Status), None, &mut changed);
        changed
    }

    pub(crate) fn push_item(&mut self, item: InvoiceItem) -> Vec<FieldPath> {
        self.items.push(item);
        self.items_changed()
    }

    pub(crate) fn remove_item(&mut self, index: usize) -> Option<(InvoiceItem, Vec<FieldPath>)> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        Some((removed, self.items_changed()))
    }

    pub(crate) fn set_item_field(&mut self, index: usize, value: ItemFieldValue) -> Option<Vec<FieldPath>> {
        let field = self.items.get_mut(index)?.write(value);
        let mut changed = vec![FieldPath::Item { index, field }];
        self.propagate(Node::Item(field), Some(index), &mut changed);
        Some(changed)
    }

    fn items_changed(&mut self) -> Vec<FieldPath> {
        let mut changed = vec![FieldPath::Invoice(InvoiceField::Items)];
        self.propagate(Node::Invoice(InvoiceField::Items), None, &mut changed);
        changed
    }

    /// Recompute everything downstream of `source`. `index` is the item the
    /// source belongs to, when it is an item field.
    fn propagate(&mut self, source: Node, index: Option<usize>, changed: &mut Vec<FieldPath>) {
        for node in derivation::affected_by(source) {
            match (node, index) {
                (Node::Item(field), Some(index)) => {
                    if let Some(item) = self.items.get_mut(index) {
                        item.recompute(field);
                        changed.push(FieldPath::Item { index, field });
                    }
                }
                (Node::Item(_), None) => {}
                (Node::Invoice(field), _) => {
                    self.recompute(field);
                    changed.push(FieldPath::Invoice(field));
                }
            }
        }
        debug!(
            invoice = %self.id,
            source = ?source,
            recomputed = changed.len().saturating_sub(1),
            "Recomputed derived fields"
        );
    }

    fn recompute(&mut self, field: InvoiceField) {
        match field {
            InvoiceField::TotalPrice => {
                self.total_price = vat_calculator::invoice_total_price(&self.items);
            }
            InvoiceField::TotalVatPrice => {
                self.total_vat_price = vat_calculator::invoice_total_vat_price(&self.items);
            }
            InvoiceField::Status | InvoiceField::Items => {}
        }
    }
}

impl From<NewItemCommand> for InvoiceItem {
    fn from(command: NewItemCommand) -> Self {
        InvoiceItem::new(command.description, command.quantity, command.unit_price, command.vat)
    }
}
