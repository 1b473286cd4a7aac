use crate::domain::models::{Invoice, Recipient, Sender};
use shared::EntityId;

/// Entities that can be looked up by id
pub trait Identified {
    fn entity_id(&self) -> &EntityId;
}

impl Identified for Sender {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl Identified for Recipient {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl Identified for Invoice {
    fn entity_id(&self) -> &EntityId {
        self.id()
    }
}

/// Ordered, append-only list of entities.
///
/// Ids are not checked for uniqueness on insert. When several entries share an
/// id, lookups return the one added last.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    entries: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T: Identified> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entity` and return the stored entry
    pub fn add(&mut self, entity: T) -> &T {
        self.entries.push(entity);
        &self.entries[self.entries.len() - 1]
    }

    pub fn find_by_id(&self, id: &EntityId) -> Option<&T> {
        self.entries.iter().rev().find(|entry| entry.entity_id() == id)
    }

    pub(crate) fn find_by_id_mut(&mut self, id: &EntityId) -> Option<&mut T> {
        self.entries.iter_mut().rev().find(|entry| entry.entity_id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.entries.iter().filter(|entry| predicate(entry)).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
