// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index-keyed view bindings with a recycle pool.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::Hash;

use carousel_geometry::{shift_indices_on_insert, shift_indices_on_remove};
use hashbrown::HashMap;

use crate::RecyclePool;

/// Bindings from item index to view handle, plus the pool of unbound handles.
///
/// Invariants:
/// - each index has at most one handle and each handle is bound at most once,
/// - a handle is either bound or pooled, never both.
///
/// Every mutating operation maintains these by unbinding or unpooling the
/// handle it is given before placing it.
#[derive(Clone, Debug)]
pub struct ItemRegistry<V> {
    items: HashMap<usize, V>,
    pool: RecyclePool<V>,
}

impl<V> Default for ItemRegistry<V> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            pool: RecyclePool::default(),
        }
    }
}

impl<V: Clone + Eq + Hash> ItemRegistry<V> {
    /// Creates an empty registry with an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle bound to `index`, if any.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<&V> {
        self.items.get(&index)
    }

    /// Returns `true` if a handle is bound to `index`.
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        self.items.contains_key(&index)
    }

    /// Index `view` is bound to, if any.
    #[must_use]
    pub fn index_of(&self, view: &V) -> Option<usize> {
        self.items
            .iter()
            .find_map(|(index, bound)| (bound == view).then_some(*index))
    }

    /// Binds `view` to `index` and returns the handle previously bound there.
    ///
    /// The displaced handle is neither pooled nor dropped by the registry;
    /// the caller decides its fate (usually [`enqueue`](Self::enqueue)).
    pub fn set_item(&mut self, view: V, index: usize) -> Option<V> {
        self.detach(&view);
        self.items.insert(index, view)
    }

    /// Removes the binding at `index` and compacts the indices above it.
    ///
    /// Returns the removed handle, which is not pooled.
    pub fn remove_at(&mut self, index: usize) -> Option<V> {
        let removed = self.items.remove(&index);
        shift_indices_on_remove(&mut self.items, index);
        removed
    }

    /// Shifts every binding at or above `index` up by one, then binds `view`.
    pub fn insert_at(&mut self, index: usize, view: V) {
        self.detach(&view);
        shift_indices_on_insert(&mut self.items, index);
        self.items.insert(index, view);
    }

    /// Unbinds `index` without renumbering and moves its handle to the pool.
    ///
    /// Returns `false` if nothing was bound there.
    pub fn recycle_at(&mut self, index: usize) -> bool {
        match self.items.remove(&index) {
            Some(view) => {
                self.pool.enqueue(view);
                true
            }
            None => false,
        }
    }

    /// Moves every bound handle to the pool.
    pub fn recycle_all(&mut self) {
        for (_, view) in self.items.drain() {
            self.pool.enqueue(view);
        }
    }

    /// Adds a handle to the recycle pool, unbinding it first if needed.
    ///
    /// Returns `false` if the handle was already pooled.
    pub fn enqueue(&mut self, view: V) -> bool {
        if let Some(index) = self.index_of(&view) {
            self.items.remove(&index);
        }
        self.pool.enqueue(view)
    }

    /// Takes an arbitrary handle out of the recycle pool.
    pub fn dequeue(&mut self) -> Option<V> {
        self.pool.dequeue()
    }

    /// The recycle pool.
    #[must_use]
    pub fn pool(&self) -> &RecyclePool<V> {
        &self.pool
    }

    /// Number of bound indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates bound indices in unspecified order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.keys().copied()
    }

    /// Iterates `(index, handle)` bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &V)> {
        self.items.iter().map(|(index, view)| (*index, view))
    }

    /// Bound indices in ascending order.
    #[must_use]
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.indices().collect();
        indices.sort_unstable();
        indices
    }

    /// Finds the first binding, in `front_to_back` order, accepted by `hit_test`.
    ///
    /// `front_to_back` must order nearer bindings first (for example a depth
    /// comparator with its arguments swapped), so overlapping views resolve
    /// to the one drawn on top.
    pub fn view_at_point<F, H>(&self, mut front_to_back: F, mut hit_test: H) -> Option<(usize, &V)>
    where
        F: FnMut((usize, &V), (usize, &V)) -> Ordering,
        H: FnMut(usize, &V) -> bool,
    {
        let mut entries: Vec<(usize, &V)> = self.iter().collect();
        entries.sort_by(|a, b| front_to_back(*a, *b));
        entries
            .into_iter()
            .find(|(index, view)| hit_test(*index, *view))
    }

    /// Removes `view` from the pool and from any index it is bound to.
    fn detach(&mut self, view: &V) {
        self.pool.take(view);
        if let Some(index) = self.index_of(view) {
            self.items.remove(&index);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::ItemRegistry;

    fn registry_with(bindings: &[(usize, u32)]) -> ItemRegistry<u32> {
        let mut registry = ItemRegistry::new();
        for &(index, view) in bindings {
            registry.set_item(view, index);
        }
        registry
    }

    #[test]
    fn set_item_replaces_and_returns_prior() {
        let mut registry = registry_with(&[(0, 10)]);
        assert_eq!(registry.set_item(20, 0), Some(10));
        assert_eq!(registry.item_at(0), Some(&20));
        assert_eq!(registry.index_of(&10), None);
    }

    #[test]
    fn rebinding_a_handle_moves_it() {
        let mut registry = registry_with(&[(0, 10), (1, 11)]);
        registry.set_item(10, 3);
        assert_eq!(registry.item_at(0), None);
        assert_eq!(registry.index_of(&10), Some(3));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn insert_at_shifts_upper_bindings() {
        let mut registry = registry_with(&[(0, 10), (1, 11), (2, 12), (3, 13)]);
        registry.insert_at(2, 99);
        assert_eq!(registry.sorted_indices(), [0, 1, 2, 3, 4]);
        assert_eq!(registry.item_at(2), Some(&99));
        assert_eq!(registry.item_at(3), Some(&12));
        assert_eq!(registry.item_at(4), Some(&13));
    }

    #[test]
    fn insert_then_remove_round_trips() {
        let mut registry = registry_with(&[(0, 10), (1, 11), (2, 12), (3, 13)]);
        let before = registry.sorted_indices();
        registry.insert_at(1, 50);
        assert_eq!(registry.remove_at(1), Some(50));
        assert_eq!(registry.sorted_indices(), before);
        assert_eq!(registry.item_at(1), Some(&11));
        assert_eq!(registry.item_at(3), Some(&13));
    }

    #[test]
    fn remove_at_missing_index_still_compacts() {
        let mut registry = registry_with(&[(0, 10), (2, 12), (3, 13)]);
        assert_eq!(registry.remove_at(1), None);
        assert_eq!(registry.sorted_indices(), [0, 1, 2]);
        assert_eq!(registry.item_at(1), Some(&12));
    }

    #[test]
    fn recycled_handles_are_never_bound_and_pooled_at_once() {
        let mut registry = registry_with(&[(0, 10), (1, 11)]);
        assert!(registry.recycle_at(1));
        assert!(!registry.recycle_at(1));
        assert!(registry.pool().contains(&11));
        assert_eq!(registry.index_of(&11), None);

        // Binding a pooled handle pulls it out of the pool.
        registry.set_item(11, 5);
        assert!(!registry.pool().contains(&11));

        // Enqueueing a bound handle unbinds it.
        assert!(registry.enqueue(10));
        assert_eq!(registry.item_at(0), None);
        assert!(!registry.enqueue(10));
    }

    #[test]
    fn recycle_all_moves_everything_to_the_pool() {
        let mut registry = registry_with(&[(0, 10), (1, 11), (2, 12)]);
        registry.recycle_all();
        assert!(registry.is_empty());
        assert_eq!(registry.pool().len(), 3);
        let mut drained: Vec<u32> = core::iter::from_fn(|| registry.dequeue()).collect();
        drained.sort_unstable();
        assert_eq!(drained, [10, 11, 12]);
    }

    #[test]
    fn view_at_point_tests_front_views_first() {
        // Higher index is "nearer" in this toy ordering.
        let registry = registry_with(&[(0, 10), (1, 11), (2, 12)]);
        let hit = registry.view_at_point(|a, b| b.0.cmp(&a.0), |index, _| index <= 1);
        assert_eq!(hit, Some((1, &11)));

        let miss = registry.view_at_point(|a, b| a.0.cmp(&b.0), |_, _| false);
        assert_eq!(miss, None);
    }
}
