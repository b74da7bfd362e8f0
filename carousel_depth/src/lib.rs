// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel Depth: deterministic ordering of overlapping item views.
//!
//! Carousel items overlap: a 3D ring puts far items behind near ones, and a
//! wrapping ring places items from both ends of the index range at the same
//! depth across the seam. Stacking order and hit testing both need a single
//! well-defined answer to "which of these two views is in front?".
//!
//! This crate does not compute transforms. Hosts render items however they
//! like and report each view's placement as a [`Transform3D`] through a
//! [`TransformLookup`]. The [`DepthSorter`] then ranks views by:
//!
//! 1. projected depth (the transform's z column); smaller sorts behind,
//! 2. for equal depth, lateral distance from the focused item; farther sorts
//!    behind,
//! 3. for a full tie, the item index.
//!
//! Views with no transform sort behind every transformed view.
//! Depths are quantized by the sorter's tolerance before comparison, so
//! "equal within tolerance" is transitive and the ordering is a strict weak
//! order suitable for sorting.
//!
//! ```rust
//! use carousel_depth::{DepthSorter, Transform3D};
//!
//! let sorter = DepthSorter::default();
//! let focused = Transform3D::translation(0.0, 0.0, 10.0);
//! let left = Transform3D::translation(-120.0, 0.0, 0.0);
//! let far_left = Transform3D::translation(-240.0, 0.0, 0.0);
//!
//! assert!(sorter.is_behind(&left, &focused, &focused));
//! // Same depth: the one farther from the focused item goes behind.
//! assert!(sorter.is_behind(&far_left, &left, &focused));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod sorter;
mod transform;

pub use sorter::{DepthKey, DepthOrder, DepthSorter, TransformLookup};
pub use transform::Transform3D;
