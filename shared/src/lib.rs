use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a sender, recipient or invoice.
///
/// The payload mixes numeric and string ids, and they never compare equal
/// to each other: `"1"` and `1` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId::Text(value)
    }
}

/// Invoice status as stored on the invoice.
///
/// Three values are recognized; anything else is kept verbatim so the
/// editing UI can round-trip it. There is no transition graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    Draft,
    Published,
    Canceled,
    Other(String),
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Published => "published",
            InvoiceStatus::Canceled => "canceled",
            InvoiceStatus::Other(value) => value,
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "draft" => InvoiceStatus::Draft,
            "published" => InvoiceStatus::Published,
            "canceled" => InvoiceStatus::Canceled,
            _ => InvoiceStatus::Other(value),
        }
    }
}

impl From<&str> for InvoiceStatus {
    fn from(value: &str) -> Self {
        InvoiceStatus::from(value.to_string())
    }
}

impl From<InvoiceStatus> for String {
    fn from(value: InvoiceStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// VAT percentage as entered: a JSON number or the raw text of a form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VatInput {
    Number(f64),
    Text(String),
}

impl Default for VatInput {
    fn default() -> Self {
        VatInput::Number(0.0)
    }
}

impl From<f64> for VatInput {
    fn from(value: f64) -> Self {
        VatInput::Number(value)
    }
}

impl From<&str> for VatInput {
    fn from(value: &str) -> Self {
        VatInput::Text(value.to_string())
    }
}

impl fmt::Display for VatInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VatInput::Number(n) => write!(f, "{}", n),
            VatInput::Text(s) => f.write_str(s),
        }
    }
}

/// Quantity or unit price as entered: a JSON number or the raw text of a form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl Default for AmountInput {
    fn default() -> Self {
        AmountInput::Number(0.0)
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

/// Sender record as it appears in the data payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderDto {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub bank_name: String,
    pub account_number: String,
}

/// Recipient record as it appears in the data payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientDto {
    pub id: EntityId,
    pub name: String,
    pub address: String,
}

/// Invoice line item as it appears in the data payload (no derived values)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemDto {
    pub description: String,
    pub quantity: AmountInput,
    pub unit_price: AmountInput,
    #[serde(default)]
    pub vat: VatInput,
}

/// Invoice record as it appears in the data payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDto {
    pub id: EntityId,
    pub number: String,
    pub status: InvoiceStatus,
    pub order_date: String,
    pub due_date: String,
    pub sender_id: EntityId,
    pub recipient_id: EntityId,
    #[serde(default)]
    pub items: Vec<InvoiceItemDto>,
}

/// The whole data payload consumed once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayload {
    pub sender: SenderDto,
    pub recipients: Vec<RecipientDto>,
    pub invoices: Vec<InvoiceDto>,
}

/// Number of invoices per recognized status, with each share in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub drafts: usize,
    pub published: usize,
    pub canceled: usize,
    pub total: usize,
    pub draft_percent: f64,
    pub published_percent: f64,
    pub canceled_percent: f64,
}

/// One row of the invoice list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceListRow {
    pub id: EntityId,
    pub number: String,
    pub status: InvoiceStatus,
    /// Empty when the sender id does not resolve
    pub sender_name: String,
    /// Empty when the recipient id does not resolve
    pub recipient_name: String,
    pub order_date: String,
    pub due_date: String,
    pub formatted_total: String,
    pub formatted_vat: String,
    pub raw_total: f64,
    pub raw_vat: f64,
}

/// Line item of the invoice detail view, including its derived values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedInvoiceItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub vat: VatInput,
    pub formatted_vat_price: String,
    pub formatted_total_price: String,
    pub raw_vat_price: f64,
    pub raw_total_price: f64,
}

/// Invoice detail view: the invoice with its resolved parties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetailResponse {
    pub id: EntityId,
    pub number: String,
    pub status: InvoiceStatus,
    pub order_date: String,
    pub due_date: String,
    pub sender: Option<SenderDto>,
    pub recipient: Option<RecipientDto>,
    pub items: Vec<FormattedInvoiceItem>,
    pub formatted_total: String,
    pub formatted_vat: String,
    pub raw_total: f64,
    pub raw_vat: f64,
}
