// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel Registry: bindings from item indices to realized view handles.
//!
//! A carousel may hold thousands of logical items while only a small window
//! of them is realized as views. This crate keeps track of which view handle
//! currently shows which item index, and retains unbound handles for reuse.
//!
//! - [`ItemRegistry`]: one live handle per realized index. Removing an item
//!   compacts the indices above it; inserting an item opens a slot.
//! - [`RecyclePool`]: handles that are not bound to any index. A handle is
//!   either bound or pooled, never both.
//!
//! View handles are opaque to this crate. Any `Clone + Eq + Hash` type works;
//! hosts typically use a small copyable identifier into their own view arena.
//!
//! ```rust
//! use carousel_registry::ItemRegistry;
//!
//! let mut registry: ItemRegistry<u32> = ItemRegistry::new();
//! for (index, view) in [(0, 10), (1, 11), (2, 12), (3, 13)] {
//!     registry.set_item(view, index);
//! }
//!
//! // Inserting at 2 moves items 2 and 3 up by one.
//! registry.insert_at(2, 99);
//! assert_eq!(registry.item_at(2), Some(&99));
//! assert_eq!(registry.item_at(4), Some(&13));
//!
//! // Recycling keeps the handle around for the next realized item.
//! registry.recycle_at(4);
//! assert_eq!(registry.dequeue(), Some(13));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod pool;
mod registry;

pub use pool::RecyclePool;
pub use registry::ItemRegistry;
