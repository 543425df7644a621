//! Min-priority frontier shared by path search and Prim's builder.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::types::EdgeWeight;

/// Entry in the frontier.
#[derive(Debug, Clone, Copy)]
struct Entry<W, T> {
    priority: W,
    /// Push order, for FIFO ordering within the same priority.
    sequence: u64,
    item: T,
}

impl<W: EdgeWeight, T> Ord for Entry<W, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: lower priority first, then earlier sequence first
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<W: EdgeWeight, T> PartialOrd for Entry<W, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: EdgeWeight, T> PartialEq for Entry<W, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: EdgeWeight, T> Eq for Entry<W, T> {}

/// Min-priority queue with FIFO tie-breaking.
///
/// Callers only push comparable priorities; the fallback to `Equal` in the
/// ordering is never taken.
pub(crate) struct Frontier<W, T> {
    heap: BinaryHeap<Entry<W, T>>,
    next_sequence: u64,
}

impl<W: EdgeWeight, T> Frontier<W, T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub(crate) fn push(&mut self, priority: W, item: T) {
        self.heap.push(Entry {
            priority,
            sequence: self.next_sequence,
            item,
        });
        self.next_sequence += 1;
    }

    /// Remove the entry with the lowest priority, earliest first on ties.
    pub(crate) fn pop(&mut self) -> Option<(W, T)> {
        self.heap.pop().map(|e| (e.priority, e.item))
    }
}
