// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel Geometry: offset and index arithmetic for a strip or ring of items.
//!
//! A carousel position is a continuous *scroll offset* measured in items:
//! integer values mean "resting on item `n`", fractional values lie between
//! two items. This crate holds the pure arithmetic every other carousel
//! component builds on:
//!
//! - [`RingGeometry`]: item count plus wrap mode, with clamping of offsets and
//!   indices, wrap-aware distances, and the visible window around an item.
//! - [`shift_indices_on_insert`] / [`shift_indices_on_remove`]: renumbering of
//!   an index-keyed map when an item enters or leaves the middle of the strip.
//!
//! An empty carousel has no valid offset or index. Instead of a magic value,
//! the clamping functions return `None` for `count == 0`, and never divide by
//! zero.
//!
//! ## Example
//!
//! ```rust
//! use carousel_geometry::RingGeometry;
//!
//! let ring = RingGeometry::new(5, true);
//! // Negative offsets fold back into `[0, count)`.
//! assert_eq!(ring.clamp_offset(-1.0), Some(4.0));
//! assert_eq!(ring.clamp_index(7), Some(2));
//!
//! let strip = RingGeometry::new(5, false);
//! assert_eq!(strip.clamp_offset(9.5), Some(4.0));
//!
//! let empty = RingGeometry::new(0, true);
//! assert_eq!(empty.clamp_offset(3.0), None);
//! ```
//!
//! ## Float tolerance
//!
//! Comparisons against thresholds go through [`FLOAT_ERROR_MARGIN`]. It is a
//! deliberate tolerance for offsets that are "resting on an item" after
//! repeated float integration, not a rounding artifact.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ring;
mod shift;

pub use ring::{RingGeometry, WindowIndices};
pub use shift::{shift_indices_on_insert, shift_indices_on_remove};

/// Tolerance used for every float equality test on offsets and velocities.
pub const FLOAT_ERROR_MARGIN: f64 = 0.000_001;

/// Upper bound on the number of simultaneously realized items.
pub const MAXIMUM_VISIBLE_ITEMS: usize = 50;
