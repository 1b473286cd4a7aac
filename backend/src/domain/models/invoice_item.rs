use crate::domain::change_notifier::ChangedValue;
use crate::domain::derivation::{self, ItemField, Node};
use crate::domain::vat_calculator;
use shared::{AmountInput, VatInput};

/// New value for one stored field of a line item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemFieldValue {
    Description(String),
    Quantity(AmountInput),
    UnitPrice(AmountInput),
    Vat(VatInput),
}

impl ItemFieldValue {
    pub fn field(&self) -> ItemField {
        match self {
            ItemFieldValue::Description(_) => ItemField::Description,
            ItemFieldValue::Quantity(_) => ItemField::Quantity,
            ItemFieldValue::UnitPrice(_) => ItemField::UnitPrice,
            ItemFieldValue::Vat(_) => ItemField::Vat,
        }
    }
}

/// A line of an invoice.
///
/// `vat_price` and `total_price` are derived. They are recomputed whenever a
/// stored field is written through the owning invoice, so reading them never
/// returns a stale value.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceItem {
    description: String,
    quantity: f64,
    unit_price: f64,
    vat: VatInput,
    vat_price: f64,
    total_price: f64,
}

impl InvoiceItem {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64, vat: VatInput) -> Self {
        let mut item = Self {
            description: description.into(),
            quantity,
            unit_price,
            vat,
            vat_price: 0.0,
            total_price: 0.0,
        };
        for node in derivation::derived_nodes() {
            if let Node::Item(field) = node {
                item.recompute(field);
            }
        }
        item
    }

    /// The empty line offered when a user adds an item
    pub fn blank() -> Self {
        Self::new("", 0.0, 0.0, VatInput::default())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn vat(&self) -> &VatInput {
        &self.vat
    }

    pub fn vat_price(&self) -> f64 {
        self.vat_price
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn value_of(&self, field: ItemField) -> ChangedValue {
        match field {
            ItemField::Description => ChangedValue::Text(self.description.clone()),
            ItemField::Quantity => ChangedValue::Amount(self.quantity),
            ItemField::UnitPrice => ChangedValue::Amount(self.unit_price),
            ItemField::Vat => ChangedValue::Vat(self.vat.clone()),
            ItemField::VatPrice => ChangedValue::Amount(self.vat_price),
            ItemField::TotalPrice => ChangedValue::Amount(self.total_price),
        }
    }

    /// Store a field value without touching derived fields.
    /// The caller must follow up with a recompute pass.
    pub(crate) fn write(&mut self, value: ItemFieldValue) -> ItemField {
        let field = value.field();
        match value {
            ItemFieldValue::Description(description) => self.description = description,
            ItemFieldValue::Quantity(quantity) => self.quantity = vat_calculator::parse_amount(&quantity),
            ItemFieldValue::UnitPrice(unit_price) => {
                self.unit_price = vat_calculator::parse_amount(&unit_price)
            }
            ItemFieldValue::Vat(vat) => self.vat = vat,
        }
        field
    }

    pub(crate) fn recompute(&mut self, field: ItemField) {
        match field {
            ItemField::VatPrice => {
                self.vat_price = vat_calculator::vat_price(self.unit_price, self.quantity, &self.vat);
            }
            ItemField::TotalPrice => {
                self.total_price =
                    vat_calculator::item_total_price(self.unit_price, self.quantity, self.vat_price);
            }
            // stored fields
            ItemField::Description | ItemField::Quantity | ItemField::UnitPrice | ItemField::Vat => {}
        }
    }
}
