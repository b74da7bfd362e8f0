// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renumbering of index-keyed maps on insertion and removal.
//!
//! Removing an item shifts the whole strip down by one rather than leaving a
//! hole, and inserting shifts it up. Both operations rebuild the key set in
//! one pass so keys stay unique while they move.

use alloc::vec::Vec;

use hashbrown::HashMap;

/// Renumbers keys after the entry at `removed` has been deleted.
///
/// Keys below `removed` are kept, keys above it move down by one.
///
/// The caller must remove the entry at `removed` first; a key equal to
/// `removed` is left in place.
pub fn shift_indices_on_remove<V>(map: &mut HashMap<usize, V>, removed: usize) {
    debug_assert!(
        !map.contains_key(&removed),
        "the entry at the removed index must be deleted before shifting"
    );
    if map.keys().all(|&k| k < removed) {
        return;
    }
    let entries: Vec<(usize, V)> = map.drain().collect();
    map.extend(
        entries
            .into_iter()
            .map(|(k, v)| if k > removed { (k - 1, v) } else { (k, v) }),
    );
}

/// Renumbers keys to open a slot at `inserted`.
///
/// Keys below `inserted` are kept, keys at or above it move up by one, so the
/// slot at `inserted` is free afterwards.
pub fn shift_indices_on_insert<V>(map: &mut HashMap<usize, V>, inserted: usize) {
    if map.keys().all(|&k| k < inserted) {
        return;
    }
    let entries: Vec<(usize, V)> = map.drain().collect();
    map.extend(
        entries
            .into_iter()
            .map(|(k, v)| if k < inserted { (k, v) } else { (k + 1, v) }),
    );
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use hashbrown::HashMap;

    use super::{shift_indices_on_insert, shift_indices_on_remove};

    fn sorted_keys<V>(map: &HashMap<usize, V>) -> Vec<usize> {
        let mut keys: Vec<usize> = map.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn insert_opens_a_slot() {
        let mut map: HashMap<usize, char> = [(0, 'a'), (1, 'b'), (2, 'c'), (3, 'd')]
            .into_iter()
            .collect();
        shift_indices_on_insert(&mut map, 2);
        assert_eq!(sorted_keys(&map), [0, 1, 3, 4]);
        assert_eq!(map[&3], 'c');
        assert_eq!(map[&4], 'd');
    }

    #[test]
    fn remove_compacts_keys_above() {
        let mut map: HashMap<usize, char> = [(0, 'a'), (1, 'b'), (3, 'd'), (4, 'e')]
            .into_iter()
            .collect();
        shift_indices_on_remove(&mut map, 2);
        assert_eq!(sorted_keys(&map), [0, 1, 2, 3]);
        assert_eq!(map[&2], 'd');
        assert_eq!(map[&3], 'e');
    }

    #[test]
    fn insert_then_remove_restores_key_set() {
        let original: HashMap<usize, u32> = [(4, 40), (5, 50), (6, 60), (9, 90)]
            .into_iter()
            .collect();
        for at in 0..11 {
            let mut map = original.clone();
            shift_indices_on_insert(&mut map, at);
            assert!(!map.contains_key(&at), "slot {at} must be free after insert");
            shift_indices_on_remove(&mut map, at);
            assert_eq!(map, original, "round trip at {at}");
        }
    }

    #[test]
    fn shifting_entirely_below_is_a_no_op() {
        let mut map: HashMap<usize, u8> = [(0, 1), (1, 2)].into_iter().collect();
        shift_indices_on_insert(&mut map, 5);
        shift_indices_on_remove(&mut map, 5);
        assert_eq!(sorted_keys(&map), [0, 1]);
    }
}
