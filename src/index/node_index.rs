//! Bidirectional mapping between node identifiers and dense slots.

use std::collections::HashMap;

use crate::types::NodeKey;

/// Maps each identifier to the slot it was assigned at insertion, and back.
///
/// Slots are dense, assigned in insertion order, and never reused.
#[derive(Debug, Clone)]
pub struct NodeIndex<N> {
    slots: HashMap<N, usize>,
    ids: Vec<N>,
}

impl<N: NodeKey> NodeIndex<N> {
    /// Create a new, empty node index.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            ids: Vec::new(),
        }
    }

    /// Slot assigned to `id`, if present.
    pub fn slot(&self, id: &N) -> Option<usize> {
        self.slots.get(id).copied()
    }

    /// Identifier owning `slot`, if in range.
    pub fn id(&self, slot: usize) -> Option<&N> {
        self.ids.get(slot)
    }

    /// Whether `id` has been inserted.
    pub fn contains(&self, id: &N) -> bool {
        self.slots.contains_key(id)
    }

    /// Append `id` at the next slot and return that slot.
    ///
    /// The caller checks uniqueness first; inserting a present identifier
    /// would break the one-to-one slot mapping.
    pub(crate) fn push(&mut self, id: N) -> usize {
        let slot = self.ids.len();
        debug_assert!(!self.slots.contains_key(&id));
        self.slots.insert(id.clone(), slot);
        self.ids.push(id);
        slot
    }

    /// Identifiers in slot order.
    pub fn ids(&self) -> &[N] {
        &self.ids
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<N: NodeKey> Default for NodeIndex<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_follow_insertion_order() {
        let mut index = NodeIndex::new();
        assert_eq!(index.push("c"), 0);
        assert_eq!(index.push("a"), 1);
        assert_eq!(index.push("b"), 2);

        assert_eq!(index.slot(&"a"), Some(1));
        assert_eq!(index.id(2), Some(&"b"));
        assert_eq!(index.ids(), &["c", "a", "b"]);
        assert_eq!(index.slot(&"z"), None);
        assert_eq!(index.id(3), None);
    }
}
