use shared::EntityId;

/// Anything that can appear as a party on an invoice
pub trait Person {
    fn id(&self) -> &EntityId;
    fn name(&self) -> &str;
    fn address(&self) -> &str;
}

/// The party issuing invoices, with the bank details printed on them
#[derive(Debug, Clone, PartialEq)]
pub struct Sender {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub bank_name: String,
    pub account_number: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipient {
    pub id: EntityId,
    pub name: String,
    pub address: String,
}

impl Person for Sender {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn address(&self) -> &str {
        &self.address
    }
}

impl Person for Recipient {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn address(&self) -> &str {
        &self.address
    }
}
