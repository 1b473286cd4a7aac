//! Dependency graph of the derived invoice fields.
//!
//! Each derived field declares the fields it is computed from. When a stored
//! field is written, [`affected_by`] lists every derived field that has to be
//! recomputed, in an order where each field comes after the fields it reads.
//!
//! Item-level nodes stand for "this field on the item that changed"; the
//! invoice totals read the item fields of every item.

use std::fmt;

/// A field of a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Description,
    Quantity,
    UnitPrice,
    Vat,
    VatPrice,
    TotalPrice,
}

impl ItemField {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemField::Description => "description",
            ItemField::Quantity => "quantity",
            ItemField::UnitPrice => "unitPrice",
            ItemField::Vat => "vat",
            ItemField::VatPrice => "vatPrice",
            ItemField::TotalPrice => "totalPrice",
        }
    }
}

/// A field of an invoice that takes part in change propagation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceField {
    Status,
    /// The item list itself: an item was added or removed
    Items,
    TotalPrice,
    TotalVatPrice,
}

impl InvoiceField {
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceField::Status => "status",
            InvoiceField::Items => "items",
            InvoiceField::TotalPrice => "totalPrice",
            InvoiceField::TotalVatPrice => "totalVatPrice",
        }
    }
}

/// A node of the dependency graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Item(ItemField),
    Invoice(InvoiceField),
}

use self::InvoiceField as Inv;
use self::ItemField as It;

/// Derived fields and their upstream fields. Listed in topological order.
const DEPENDENCIES: &[(Node, &[Node])] = &[
    (
        Node::Item(It::VatPrice),
        &[Node::Item(It::UnitPrice), Node::Item(It::Quantity), Node::Item(It::Vat)],
    ),
    (
        Node::Item(It::TotalPrice),
        &[Node::Item(It::UnitPrice), Node::Item(It::Quantity), Node::Item(It::VatPrice)],
    ),
    (
        Node::Invoice(Inv::TotalPrice),
        &[Node::Invoice(Inv::Items), Node::Item(It::TotalPrice)],
    ),
    (
        Node::Invoice(Inv::TotalVatPrice),
        &[Node::Invoice(Inv::Items), Node::Item(It::VatPrice)],
    ),
];

/// Upstream fields of a derived field; empty for stored fields
pub fn dependencies_of(node: Node) -> &'static [Node] {
    DEPENDENCIES
        .iter()
        .find(|(derived, _)| *derived == node)
        .map(|(_, upstream)| *upstream)
        .unwrap_or(&[])
}

/// All derived fields in recompute order
pub fn derived_nodes() -> impl Iterator<Item = Node> {
    DEPENDENCIES.iter().map(|(derived, _)| *derived)
}

/// Every derived field that transitively depends on `source`, in recompute order
pub fn affected_by(source: Node) -> Vec<Node> {
    let mut affected: Vec<Node> = Vec::new();
    for derived in derived_nodes() {
        let reads_changed = dependencies_of(derived)
            .iter()
            .any(|node| *node == source || affected.contains(node));
        if reads_changed {
            affected.push(derived);
        }
    }
    affected
}

/// Path of a changed field, relative to its invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Invoice(InvoiceField),
    Item { index: usize, field: ItemField },
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Invoice(field) => f.write_str(field.as_str()),
            FieldPath::Item { index, field } => write!(f, "items.{}.{}", index, field.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_topologically_ordered() {
        for (position, (_, upstream)) in DEPENDENCIES.iter().enumerate() {
            for node in upstream.iter().filter(|node| !dependencies_of(**node).is_empty()) {
                let upstream_position = DEPENDENCIES
                    .iter()
                    .position(|(derived, _)| derived == node)
                    .unwrap();
                assert!(upstream_position < position, "{:?} declared after a dependent", node);
            }
        }
    }

    #[test]
    fn test_quantity_change_reaches_invoice_totals() {
        assert_eq!(
            affected_by(Node::Item(It::Quantity)),
            vec![
                Node::Item(It::VatPrice),
                Node::Item(It::TotalPrice),
                Node::Invoice(Inv::TotalPrice),
                Node::Invoice(Inv::TotalVatPrice),
            ]
        );
    }

    #[test]
    fn test_vat_change_reaches_every_total() {
        assert_eq!(affected_by(Node::Item(It::Vat)), affected_by(Node::Item(It::UnitPrice)));
    }

    #[test]
    fn test_item_list_change_only_reaches_invoice_totals() {
        assert_eq!(
            affected_by(Node::Invoice(Inv::Items)),
            vec![Node::Invoice(Inv::TotalPrice), Node::Invoice(Inv::TotalVatPrice)]
        );
    }

    #[test]
    fn test_fields_without_dependents() {
        assert!(affected_by(Node::Item(It::Description)).is_empty());
        assert!(affected_by(Node::Invoice(Inv::Status)).is_empty());
        assert!(affected_by(Node::Invoice(Inv::TotalPrice)).is_empty());
    }

    #[test]
    fn test_dependencies_of() {
        assert_eq!(dependencies_of(Node::Item(It::Quantity)), &[] as &[Node]);
        assert!(dependencies_of(Node::Invoice(Inv::TotalVatPrice)).contains(&Node::Item(It::VatPrice)));
        assert_eq!(dependencies_of(Node::Item(It::TotalPrice)).len(), 3);
    }

    #[test]
    fn test_field_path_display() {
        assert_eq!(FieldPath::Invoice(Inv::TotalVatPrice).to_string(), "totalVatPrice");
        assert_eq!(
            FieldPath::Item { index: 2, field: It::UnitPrice }.to_string(),
            "items.2.unitPrice"
        );
    }
}
