use crate::domain::models::{Invoice, Person, Recipient, Sender};
use crate::storage::collection::Collection;
use shared::{EntityId, InvoiceStatus, StatusCounts};
use tracing::warn;

/// In-memory store of all top-level entities.
///
/// The store owns every sender, recipient and invoice; invoices own their
/// items. Invoices are only mutated through [`crate::domain::InvoiceService`]
/// so that observers hear about every change.
#[derive(Debug, Clone, Default)]
pub struct InvoiceStore {
    senders: Collection<Sender>,
    recipients: Collection<Recipient>,
    invoices: Collection<Invoice>,
}

impl InvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn senders(&self) -> &Collection<Sender> {
        &self.senders
    }

    pub fn recipients(&self) -> &Collection<Recipient> {
        &self.recipients
    }

    pub fn invoices(&self) -> &Collection<Invoice> {
        &self.invoices
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty() && self.recipients.is_empty() && self.invoices.is_empty()
    }

    pub fn add_sender(&mut self, sender: Sender) -> &Sender {
        self.senders.add(sender)
    }

    pub fn add_recipient(&mut self, recipient: Recipient) -> &Recipient {
        self.recipients.add(recipient)
    }

    pub fn add_invoice(&mut self, invoice: Invoice) -> &Invoice {
        self.invoices.add(invoice)
    }

    pub fn find_sender(&self, id: &EntityId) -> Option<&Sender> {
        self.senders.find_by_id(id)
    }

    pub fn find_recipient(&self, id: &EntityId) -> Option<&Recipient> {
        self.recipients.find_by_id(id)
    }

    pub fn find_invoice(&self, id: &EntityId) -> Option<&Invoice> {
        self.invoices.find_by_id(id)
    }

    pub(crate) fn find_invoice_mut(&mut self, id: &EntityId) -> Option<&mut Invoice> {
        self.invoices.find_by_id_mut(id)
    }

    /// Display name of a sender, `None` when the id does not resolve
    pub fn sender_name_by_id(&self, id: &EntityId) -> Option<&str> {
        let name = self.find_sender(id).map(|sender| sender.name());
        if name.is_none() {
            warn!(sender_id = %id, "Sender not found");
        }
        name
    }

    /// Display name of a recipient, `None` when the id does not resolve
    pub fn recipient_name_by_id(&self, id: &EntityId) -> Option<&str> {
        let name = self.find_recipient(id).map(|recipient| recipient.name());
        if name.is_none() {
            warn!(recipient_id = %id, "Recipient not found");
        }
        name
    }

    /// Number of invoices currently in `status`
    pub fn count_by_status(&self, status: &InvoiceStatus) -> usize {
        self.invoices.count_where(|invoice| invoice.status() == status)
    }

    /// Counts of the three recognized statuses, with their share of all invoices
    pub fn status_counts(&self) -> StatusCounts {
        let mut drafts = 0;
        let mut published = 0;
        let mut canceled = 0;
        for invoice in self.invoices.iter() {
            match invoice.status() {
                InvoiceStatus::Draft => drafts += 1,
                InvoiceStatus::Published => published += 1,
                InvoiceStatus::Canceled => canceled += 1,
                InvoiceStatus::Other(_) => {}
            }
        }

        let total = self.invoices.len();
        let percent = |count: usize| {
            if total == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total as f64
            }
        };

        StatusCounts {
            drafts,
            published,
            canceled,
            total,
            draft_percent: percent(drafts),
            published_percent: percent(published),
            canceled_percent: percent(canceled),
        }
    }
}
