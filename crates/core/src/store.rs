//! Insertion-ordered in-memory entity store.

use std::collections::HashMap;

use crate::entity::Entity;

/// In-memory store keyed by entity id.
///
/// Iteration follows first-insertion order. Replacing an existing entry keeps
/// its original position; removing an entry does not disturb the others.
#[derive(Debug, Clone)]
pub struct InMemoryStore<E: Entity> {
    entries: HashMap<E::Id, E>,
    order: Vec<E::Id>,
}

impl<E: Entity> InMemoryStore<E> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &E::Id) -> Option<&E> {
        self.entries.get(id)
    }

    pub fn get_mut(&mut self, id: &E::Id) -> Option<&mut E> {
        self.entries.get_mut(id)
    }

    /// Insert or replace, returning the previous entity for this id.
    pub fn upsert(&mut self, entity: E) -> Option<E> {
        let id = entity.id().clone();
        let previous = self.entries.insert(id.clone(), entity);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    pub fn remove(&mut self, id: &E::Id) -> Option<E> {
        let removed = self.entries.remove(id)?;
        self.order.retain(|k| k != id);
        Some(removed)
    }

    /// Entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}
