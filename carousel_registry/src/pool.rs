// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pool of unbound view handles.

use core::hash::Hash;

use hashbrown::HashSet;

/// Set of view handles kept for reuse instead of being destroyed.
///
/// Enqueueing is idempotent and dequeueing returns an arbitrary handle.
#[derive(Clone, Debug)]
pub struct RecyclePool<V> {
    views: HashSet<V>,
}

impl<V> Default for RecyclePool<V> {
    fn default() -> Self {
        Self {
            views: HashSet::new(),
        }
    }
}

impl<V: Clone + Eq + Hash> RecyclePool<V> {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handle to the pool. Returns `false` if it was already pooled.
    pub fn enqueue(&mut self, view: V) -> bool {
        self.views.insert(view)
    }

    /// Removes and returns some pooled handle, or `None` if the pool is empty.
    pub fn dequeue(&mut self) -> Option<V> {
        let view = self.views.iter().next().cloned()?;
        self.views.remove(&view);
        Some(view)
    }

    /// Removes a specific handle from the pool. Returns `true` if it was pooled.
    pub fn take(&mut self, view: &V) -> bool {
        self.views.remove(view)
    }

    /// Returns `true` if `view` is pooled.
    #[must_use]
    pub fn contains(&self, view: &V) -> bool {
        self.views.contains(view)
    }

    /// Number of pooled handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Returns `true` if no handles are pooled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Iterates pooled handles in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.views.iter()
    }

    /// Drops every pooled handle.
    pub fn clear(&mut self) {
        self.views.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::RecyclePool;

    #[test]
    fn enqueue_is_idempotent() {
        let mut pool = RecyclePool::new();
        assert!(pool.enqueue(7_u32));
        assert!(!pool.enqueue(7));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn dequeue_drains_every_handle_once() {
        let mut pool = RecyclePool::new();
        for v in 0..4_u32 {
            pool.enqueue(v);
        }
        let mut seen = [false; 4];
        while let Some(v) = pool.dequeue() {
            assert!(!seen[v as usize], "handle {v} dequeued twice");
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert!(pool.is_empty());
        assert_eq!(pool.dequeue(), None);
    }

    #[test]
    fn take_removes_a_specific_handle() {
        let mut pool = RecyclePool::new();
        pool.enqueue('a');
        pool.enqueue('b');
        assert!(pool.take(&'a'));
        assert!(!pool.take(&'a'));
        assert!(!pool.contains(&'a'));
        assert_eq!(pool.dequeue(), Some('b'));
    }
}
