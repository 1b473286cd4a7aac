//! Observer registry for invoice changes.
//!
//! Observers are called synchronously, once per change, after every derived
//! field touched by the mutation has been recomputed. The value carried by a
//! [`FieldChange`] is therefore already consistent with the rest of the invoice.

use crate::domain::derivation::FieldPath;
use shared::{EntityId, InvoiceStatus, VatInput};
use std::fmt;
use tracing::debug;

/// New value of a changed field
#[derive(Debug, Clone, PartialEq)]
pub enum ChangedValue {
    Text(String),
    Amount(f64),
    Vat(VatInput),
    Status(InvoiceStatus),
    /// Length of the item list after an item was added or removed
    ItemCount(usize),
}

/// One field of one invoice that was written or recomputed
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub invoice_id: EntityId,
    pub path: FieldPath,
    pub value: ChangedValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    InvoiceAdded { invoice_id: EntityId },
    FieldChanged(FieldChange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Observer = Box<dyn FnMut(&ChangeEvent) + Send>;

#[derive(Default)]
pub struct ChangeNotifier {
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        debug!(subscription = id.0, observers = self.observer_count(), "Observer subscribed");
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        let removed = self.observer_count() != before;
        if removed {
            debug!(subscription = id.0, observers = self.observer_count(), "Observer unsubscribed");
        }
        removed
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn notify(&mut self, event: &ChangeEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer(event);
        }
    }

    pub fn notify_all(&mut self, events: &[ChangeEvent]) {
        if self.observers.is_empty() {
            return;
        }
        debug!(events = events.len(), observers = self.observers.len(), "Notifying observers");
        for event in events {
            self.notify(event);
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::derivation::InvoiceField;
    use std::sync::{Arc, Mutex};

    fn status_event(id: i64) -> ChangeEvent {
        ChangeEvent::FieldChanged(FieldChange {
            invoice_id: EntityId::Number(id),
            path: FieldPath::Invoice(InvoiceField::Status),
            value: ChangedValue::Status(InvoiceStatus::Published),
        })
    }

    #[test]
    fn test_observers_receive_events_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        let sink = Arc::clone(&seen);
        notifier.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        notifier.notify_all(&[status_event(1), status_event(2)]);

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![status_event(1), status_event(2)]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Arc::new(Mutex::new(0));
        let mut notifier = ChangeNotifier::new();
        let counter = Arc::clone(&count);
        let id = notifier.subscribe(move |_| *counter.lock().unwrap() += 1);

        notifier.notify(&status_event(1));
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.notify(&status_event(2));

        assert_eq!(*count.lock().unwrap(), 1);
        assert_eq!(notifier.observer_count(), 0);
    }

    #[test]
    fn test_subscription_ids_are_unique() {
        let mut notifier = ChangeNotifier::new();
        let first = notifier.subscribe(|_| {});
        let second = notifier.subscribe(|_| {});
        assert_ne!(first, second);
        assert_eq!(notifier.observer_count(), 2);
    }
}
