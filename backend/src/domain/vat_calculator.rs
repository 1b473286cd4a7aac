//! Money and VAT arithmetic for line items and invoices.
//!
//! Everything here is pure. Amounts are plain `f64` and no rounding is applied
//! beyond what floating-point multiplication and addition do on their own.
//!
//! VAT is lenient: a rate that does not parse as an integer, or parses to zero
//! or less, contributes no VAT at all. No error is raised for it. Quantities
//! and unit prices are just as lenient: text that is not a number counts as 0.

use crate::domain::models::InvoiceItem;
use shared::{AmountInput, VatInput};

/// Read a quantity or unit price. Text is trimmed and read as a decimal
/// number; blank text is 0, and so is text that is not a finite number.
pub fn parse_amount(amount: &AmountInput) -> f64 {
    match amount {
        AmountInput::Number(n) if n.is_finite() => *n,
        AmountInput::Number(_) => 0.0,
        AmountInput::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .unwrap_or(0.0),
    }
}

/// Parse a VAT rate the way a form field is read: surrounding whitespace is
/// ignored, an optional sign and the leading run of digits are taken, and
/// anything after them (including a fractional part) is dropped.
///
/// Returns `None` when no digits are found.
pub fn parse_vat(vat: &VatInput) -> Option<i64> {
    match vat {
        VatInput::Number(n) if n.is_finite() => Some(n.trunc() as i64),
        VatInput::Number(_) => None,
        VatInput::Text(text) => parse_leading_integer(text),
    }
}

fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    // only overflow can fail here; saturate like a very large rate
    let value: i64 = digits.parse().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// The VAT rate that actually applies, in percent. Zero for invalid rates.
pub fn effective_vat_rate(vat: &VatInput) -> i64 {
    match parse_vat(vat) {
        Some(rate) if rate > 0 => rate,
        _ => 0,
    }
}

/// VAT owed on one line item
pub fn vat_price(unit_price: f64, quantity: f64, vat: &VatInput) -> f64 {
    match effective_vat_rate(vat) {
        0 => 0.0,
        rate => (unit_price * quantity) * (rate as f64 / 100.0),
    }
}

/// Price of one line item including its VAT
pub fn item_total_price(unit_price: f64, quantity: f64, vat_price: f64) -> f64 {
    (unit_price * quantity) + vat_price
}

/// Sum of the item totals, in item order. Zero for no items.
pub fn invoice_total_price(items: &[InvoiceItem]) -> f64 {
    items.iter().fold(0.0, |total, item| total + item.total_price())
}

/// Sum of the item VAT amounts, in item order. Zero for no items.
pub fn invoice_total_vat_price(items: &[InvoiceItem]) -> f64 {
    items.iter().fold(0.0, |total, item| total + item.vat_price())
}
