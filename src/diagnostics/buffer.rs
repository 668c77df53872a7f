// SPDX-License-Identifier: MPL-2.0
//! Bounded event storage.

use std::collections::VecDeque;

/// Ring buffer that evicts its oldest element once full.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    inner: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a buffer holding at most `capacity` elements.
    ///
    /// A zero capacity is clamped to 1; a buffer that can hold nothing is
    /// never useful.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an element, evicting the oldest one when at capacity.
    pub fn push(&mut self, item: T) {
        if self.inner.len() == self.capacity {
            self.inner.pop_front();
        }
        self.inner.push_back(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_within_capacity_keeps_everything() {
        let mut buffer = CircularBuffer::new(3);
        buffer.push(1);
        buffer.push(2);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn push_at_capacity_evicts_oldest() {
        let mut buffer = CircularBuffer::new(2);
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut buffer = CircularBuffer::new(0);
        buffer.push("only");
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut buffer = CircularBuffer::new(4);
        buffer.push(1);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
