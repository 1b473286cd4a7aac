//! Builds a populated store from the startup payload.

use crate::domain::models::Invoice;
use crate::error::LoadError;
use crate::io::mappers::{InvoiceMapper, PersonMapper};
use crate::storage::{InvoiceStore, PayloadSource};
use shared::InvoicePayload;
use tracing::info;

/// Fetch and parse the payload, then populate a fresh store.
///
/// The store is only returned once it is complete, so a caller that swaps it
/// in never exposes a partially populated state.
pub async fn load_store<S>(source: &S) -> Result<InvoiceStore, LoadError>
where
    S: PayloadSource + ?Sized,
{
    info!("Loading invoice data from {}", source.describe());
    let raw = source.fetch().await?;
    let payload: InvoicePayload = serde_json::from_str(&raw)?;
    Ok(populate_store(payload))
}

/// Sender first, then recipients, then invoices. Each invoice has its items
/// built before it is appended.
pub fn populate_store(payload: InvoicePayload) -> InvoiceStore {
    let mut store = InvoiceStore::new();

    store.add_sender(PersonMapper::sender_to_domain(payload.sender));

    for recipient in payload.recipients {
        store.add_recipient(PersonMapper::recipient_to_domain(recipient));
    }

    for invoice in payload.invoices {
        store.add_invoice(Invoice::new(InvoiceMapper::to_command(invoice)));
    }

    info!(
        senders = store.senders().len(),
        recipients = store.recipients().len(),
        invoices = store.invoices().len(),
        "Invoice store populated"
    );
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StaticPayloadSource;
    use shared::{EntityId, InvoiceStatus};

    const PAYLOAD: &str = r#"{
        "sender": { "id": "1", "name": "Acme Studio", "address": "Main St 1",
                    "bankName": "First Bank", "accountNumber": "123-456" },
        "recipients": [
            { "id": "5001", "name": "Globex", "address": "Side St 2" },
            { "id": "5002", "name": "Initech", "address": "Office Park 3" }
        ],
        "invoices": [
            { "id": 1, "number": "2012-001", "status": "draft",
              "orderDate": "01/02/2012", "dueDate": "15/02/2012",
              "senderId": "1", "recipientId": "5001",
              "items": [
                { "description": "Design", "quantity": 2, "unitPrice": 100, "vat": 20 },
                { "description": "Hosting", "quantity": 3, "unitPrice": 50, "vat": -5 }
              ] },
            { "id": 2, "number": "2012-002", "status": "published",
              "orderDate": "03/02/2012", "dueDate": "17/02/2012",
              "senderId": "1", "recipientId": "5002", "items": [] }
        ]
    }"#;

    #[tokio::test]
    async fn test_load_store_populates_all_collections() {
        let store = load_store(&StaticPayloadSource::new(PAYLOAD)).await.unwrap();

        assert_eq!(store.senders().len(), 1);
        assert_eq!(store.recipients().len(), 2);
        assert_eq!(store.invoices().len(), 2);

        let invoice = store.find_invoice(&EntityId::Number(1)).unwrap();
        assert_eq!(invoice.items().len(), 2);
        assert_eq!(invoice.total_price(), 390.0);
        assert_eq!(invoice.total_vat_price(), 40.0);
        assert_eq!(store.count_by_status(&InvoiceStatus::Published), 1);
    }

    #[tokio::test]
    async fn test_load_store_rejects_malformed_json() {
        let err = load_store(&StaticPayloadSource::new("{ not json")).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_load_store_rejects_missing_sections() {
        let err = load_store(&StaticPayloadSource::new(r#"{ "recipients": [], "invoices": [] }"#))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_load_store_accepts_amounts_typed_as_text() {
        let payload = r#"{
            "sender": { "id": "1", "name": "Acme Studio", "address": "Main St 1",
                        "bankName": "First Bank", "accountNumber": "123-456" },
            "recipients": [],
            "invoices": [
                { "id": 3, "number": "123", "status": "draft", "orderDate": "", "dueDate": "",
                  "senderId": "1", "recipientId": "5001",
                  "items": [
                    { "description": "Design", "quantity": "2", "unitPrice": "100", "vat": "20" },
                    { "description": "", "quantity": "0", "unitPrice": "0", "vat": 0 }
                  ] }
            ]
        }"#;

        let store = load_store(&StaticPayloadSource::new(payload)).await.unwrap();

        let invoice = store.find_invoice(&EntityId::Number(3)).unwrap();
        assert_eq!(invoice.items()[0].quantity(), 2.0);
        assert_eq!(invoice.items()[0].unit_price(), 100.0);
        assert_eq!(invoice.total_price(), 240.0);
        assert_eq!(invoice.total_vat_price(), 40.0);
    }

    #[test]
    fn test_populate_preserves_payload_order() {
        let payload: InvoicePayload = serde_json::from_str(PAYLOAD).unwrap();
        let store = populate_store(payload);

        let numbers: Vec<&str> = store.invoices().iter().map(|invoice| invoice.number()).collect();
        assert_eq!(numbers, vec!["2012-001", "2012-002"]);
        assert_eq!(store.recipient_name_by_id(&EntityId::from("5002")), Some("Initech"));
    }
}
