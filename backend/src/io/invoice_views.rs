//! View models handed to the presentation layer.
//!
//! Builds the invoice list rows and the invoice detail view from the store,
//! resolving sender and recipient ids and formatting money for display.

use crate::domain::models::{Invoice, InvoiceItem};
use crate::io::mappers::PersonMapper;
use crate::storage::InvoiceStore;
use shared::{EntityId, FormattedInvoiceItem, InvoiceDetailResponse, InvoiceListRow};

#[derive(Debug, Clone)]
pub struct InvoiceViewService {
    currency_symbol: String,
}

impl InvoiceViewService {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Format amount for display, e.g. `$390.00`
    pub fn format_amount(&self, amount: f64) -> String {
        if amount < 0.0 {
            format!("-{}{:.2}", self.currency_symbol, amount.abs())
        } else {
            format!("{}{:.2}", self.currency_symbol, amount)
        }
    }

    /// One row per invoice, in store order
    pub fn invoice_list(&self, store: &InvoiceStore) -> Vec<InvoiceListRow> {
        store
            .invoices()
            .iter()
            .map(|invoice| self.list_row(store, invoice))
            .collect()
    }

    fn list_row(&self, store: &InvoiceStore, invoice: &Invoice) -> InvoiceListRow {
        InvoiceListRow {
            id: invoice.id().clone(),
            number: invoice.number().to_string(),
            status: invoice.status().clone(),
            sender_name: store
                .sender_name_by_id(invoice.sender_id())
                .unwrap_or_default()
                .to_string(),
            recipient_name: store
                .recipient_name_by_id(invoice.recipient_id())
                .unwrap_or_default()
                .to_string(),
            order_date: invoice.order_date().to_string(),
            due_date: invoice.due_date().to_string(),
            formatted_total: self.format_amount(invoice.total_price()),
            formatted_vat: self.format_amount(invoice.total_vat_price()),
            raw_total: invoice.total_price(),
            raw_vat: invoice.total_vat_price(),
        }
    }

    /// The invoice with its resolved parties; `None` if the invoice is unknown
    pub fn invoice_detail(&self, store: &InvoiceStore, invoice_id: &EntityId) -> Option<InvoiceDetailResponse> {
        let invoice = store.find_invoice(invoice_id)?;

        Some(InvoiceDetailResponse {
            id: invoice.id().clone(),
            number: invoice.number().to_string(),
            status: invoice.status().clone(),
            order_date: invoice.order_date().to_string(),
            due_date: invoice.due_date().to_string(),
            sender: store.find_sender(invoice.sender_id()).map(PersonMapper::sender_to_dto),
            recipient: store
                .find_recipient(invoice.recipient_id())
                .map(PersonMapper::recipient_to_dto),
            items: invoice.items().iter().map(|item| self.format_item(item)).collect(),
            formatted_total: self.format_amount(invoice.total_price()),
            formatted_vat: self.format_amount(invoice.total_vat_price()),
            raw_total: invoice.total_price(),
            raw_vat: invoice.total_vat_price(),
        })
    }

    fn format_item(&self, item: &InvoiceItem) -> FormattedInvoiceItem {
        FormattedInvoiceItem {
            description: item.description().to_string(),
            quantity: item.quantity(),
            unit_price: item.unit_price(),
            vat: item.vat().clone(),
            formatted_vat_price: self.format_amount(item.vat_price()),
            formatted_total_price: self.format_amount(item.total_price()),
            raw_vat_price: item.vat_price(),
            raw_total_price: item.total_price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::{AddInvoiceCommand, NewItemCommand};
    use crate::domain::models::{Recipient, Sender};
    use shared::{InvoiceStatus, VatInput};

    fn create_test_store() -> InvoiceStore {
        let mut store = InvoiceStore::new();
        store.add_sender(Sender {
            id: EntityId::from("1"),
            name: "Acme Studio".to_string(),
            address: "Main St 1".to_string(),
            bank_name: "First Bank".to_string(),
            account_number: "123-456".to_string(),
        });
        store.add_recipient(Recipient {
            id: EntityId::from("5001"),
            name: "Globex".to_string(),
            address: "Side St 2".to_string(),
        });
        store.add_invoice(Invoice::new(AddInvoiceCommand {
            id: EntityId::Number(1),
            number: "2012-001".to_string(),
            status: InvoiceStatus::Published,
            order_date: "01/02/2012".to_string(),
            due_date: "15/02/2012".to_string(),
            sender_id: EntityId::from("1"),
            recipient_id: EntityId::from("5001"),
            items: vec![NewItemCommand {
                description: "Design".to_string(),
                quantity: 2.0,
                unit_price: 100.0,
                vat: VatInput::Number(20.0),
            }],
        }));
        store.add_invoice(Invoice::new(AddInvoiceCommand {
            id: EntityId::Number(2),
            number: "2012-002".to_string(),
            status: InvoiceStatus::Draft,
            order_date: String::new(),
            due_date: String::new(),
            sender_id: EntityId::from("9"),
            recipient_id: EntityId::from("404"),
            items: Vec::new(),
        }));
        store
    }

    #[test]
    fn test_format_amount() {
        let service = InvoiceViewService::new("$");
        assert_eq!(service.format_amount(390.0), "$390.00");
        assert_eq!(service.format_amount(0.005), "$0.01");
        assert_eq!(service.format_amount(-12.5), "-$12.50");
        assert_eq!(InvoiceViewService::new("€").format_amount(1.0), "€1.00");
    }

    #[test]
    fn test_invoice_list_resolves_names() {
        let service = InvoiceViewService::new("$");
        let rows = service.invoice_list(&create_test_store());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sender_name, "Acme Studio");
        assert_eq!(rows[0].recipient_name, "Globex");
        assert_eq!(rows[0].formatted_total, "$240.00");
        assert_eq!(rows[0].formatted_vat, "$40.00");
    }

    #[test]
    fn test_invoice_list_renders_unknown_parties_as_empty() {
        let service = InvoiceViewService::new("$");
        let rows = service.invoice_list(&create_test_store());

        assert_eq!(rows[1].sender_name, "");
        assert_eq!(rows[1].recipient_name, "");
        assert_eq!(rows[1].formatted_total, "$0.00");
    }

    #[test]
    fn test_invoice_detail() {
        let service = InvoiceViewService::new("$");
        let store = create_test_store();

        let detail = service.invoice_detail(&store, &EntityId::Number(1)).unwrap();
        assert_eq!(detail.sender.unwrap().bank_name, "First Bank");
        assert_eq!(detail.recipient.unwrap().name, "Globex");
        assert_eq!(detail.items[0].formatted_total_price, "$240.00");
        assert_eq!(detail.raw_vat, 40.0);

        let orphan = service.invoice_detail(&store, &EntityId::Number(2)).unwrap();
        assert!(orphan.sender.is_none());
        assert!(orphan.recipient.is_none());

        assert!(service.invoice_detail(&store, &EntityId::Number(99)).is_none());
    }
}
