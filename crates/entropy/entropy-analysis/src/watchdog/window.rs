//! Bounded newest-first window of encoded snapshots.

use std::collections::VecDeque;

use entropy_core::constants::MIN_HISTORY_LEN;

/// Rolling history. Index 0 is always the newest entry; pushing beyond
/// capacity drops the oldest.
#[derive(Debug, Clone)]
pub struct HistoryWindow {
    entries: VecDeque<Vec<u8>>,
    capacity: usize,
}

impl HistoryWindow {
    /// Create a window. Capacities below 2 are raised to 2, the minimum an
    /// evaluation can use.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_HISTORY_LEN);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, encoded: Vec<u8>) {
        self.entries.push_front(encoded);
        self.entries.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn newest(&self) -> Option<&[u8]> {
        self.entries.front().map(Vec::as_slice)
    }

    /// Newest-first slice, suitable for `DriftEvaluator::evaluate`.
    pub fn as_history(&mut self) -> &[Vec<u8>] {
        self.entries.make_contiguous()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
