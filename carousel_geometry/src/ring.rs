// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamping, wrap arithmetic, and visible windows over a strip of items.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use smallvec::SmallVec;

use crate::{FLOAT_ERROR_MARGIN, MAXIMUM_VISIBLE_ITEMS};

/// Indices of the items realized around the current item.
///
/// Typical windows are a handful of items, so they are stored inline.
pub type WindowIndices = SmallVec<[usize; 16]>;

/// Item count and wrap mode of a carousel.
///
/// With wrap enabled the items form a ring and every offset is taken modulo
/// [`count`](Self::count). With wrap disabled the items form a strip and
/// offsets are clamped to `[0, count - 1]`.
///
/// All clamping operations return `None` when the carousel is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RingGeometry {
    count: usize,
    wrap: bool,
}

impl RingGeometry {
    /// Creates a geometry over `count` items.
    #[must_use]
    pub const fn new(count: usize, wrap: bool) -> Self {
        Self { count, wrap }
    }

    /// Number of items.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Whether the items form a ring.
    #[must_use]
    pub const fn wrap(&self) -> bool {
        self.wrap
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Sets the number of items.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    /// Enables or disables wrap-around.
    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Clamps a scroll offset into the valid range.
    ///
    /// - Wrap: true modulo, `offset - floor(offset / count) * count`, so the
    ///   result lies in `[0, count)` even for negative offsets.
    /// - No wrap: clamped to `[0, count - 1]`.
    /// - Empty: `None`.
    #[must_use]
    pub fn clamp_offset(&self, offset: f64) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        let count = self.count as f64;
        if self.wrap {
            let folded = offset - (offset / count).floor() * count;
            // A tiny negative input can round up to exactly `count`.
            Some(if folded >= count { folded - count } else { folded })
        } else {
            Some(offset.clamp(0.0, count - 1.0))
        }
    }

    /// Clamps an item index into the valid range.
    ///
    /// Uses floor division when wrapping, so `-1` maps to `count - 1`.
    #[must_use]
    pub fn clamp_index(&self, index: isize) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        #[allow(
            clippy::cast_possible_wrap,
            reason = "Item counts never approach isize::MAX."
        )]
        let count = self.count as isize;
        let clamped = if self.wrap {
            index.rem_euclid(count)
        } else {
            index.clamp(0, count - 1)
        };
        #[allow(clippy::cast_sign_loss, reason = "Clamped to be non-negative above.")]
        Some(clamped as usize)
    }

    /// Index of the item nearest to `offset`, clamped into range.
    #[must_use]
    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        if !offset.is_finite() {
            return self.clamp_index(0);
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "The rounded offset is clamped to bounds immediately after the cast"
        )]
        let rounded = offset.round() as isize;
        self.clamp_index(rounded)
    }

    /// Distance between `offset` and its clamped value.
    ///
    /// Always `0.0` when wrapping or empty: a ring has no ends to scroll past.
    #[must_use]
    pub fn overscroll(&self, offset: f64) -> f64 {
        if self.wrap {
            return 0.0;
        }
        self.clamp_offset(offset)
            .map_or(0.0, |clamped| (offset - clamped).abs())
    }

    /// Returns `true` if `offset` lies past either end of a non-wrapping strip.
    #[must_use]
    pub fn is_out_of_bounds(&self, offset: f64) -> bool {
        self.overscroll(offset) > FLOAT_ERROR_MARGIN
    }

    /// Signed distance to travel from `from` to `to`.
    ///
    /// When wrapping, the shorter direction around the ring is chosen; exact
    /// half-ring distances keep their sign flipped away from zero.
    #[must_use]
    pub fn shortest_delta(&self, from: f64, to: f64) -> f64 {
        let direct = to - from;
        if !self.wrap || self.count == 0 {
            return direct;
        }
        let count = self.count as f64;
        direct - (direct / count).round() * count
    }

    /// Signed position of item `index` relative to `scroll_offset`, in items.
    ///
    /// Negative values lie before (left of) the current position. When
    /// wrapping, the result is folded into the half-ring around the scroll
    /// offset so items just across the seam appear adjacent.
    #[must_use]
    pub fn item_offset(&self, index: usize, scroll_offset: f64) -> f64 {
        self.shortest_delta(scroll_offset, index as f64)
    }

    /// Indices to realize around `current` for `visible_item_count` visible items.
    ///
    /// The window spans `±ceil(visible_item_count / 2)` items around
    /// `current`, bounded by [`MAXIMUM_VISIBLE_ITEMS`] and by the item count.
    /// Without wrap, the window slides to stay within `[0, count)`. The
    /// result never contains duplicates and is ordered from the leading edge.
    #[must_use]
    pub fn window_indices(&self, current: usize, visible_item_count: usize) -> WindowIndices {
        let mut out = WindowIndices::new();
        if self.count == 0 {
            return out;
        }
        let half = visible_item_count.min(MAXIMUM_VISIBLE_ITEMS).div_ceil(2);
        let span = (2 * half + 1)
            .min(MAXIMUM_VISIBLE_ITEMS)
            .min(self.count);

        #[allow(
            clippy::cast_possible_wrap,
            reason = "Item counts never approach isize::MAX."
        )]
        let (current, span_i, count) = (current as isize, span as isize, self.count as isize);
        let mut start = current - span_i / 2;
        if !self.wrap {
            start = start.clamp(0, count - span_i);
        }
        for raw in start..start + span_i {
            if let Some(index) = self.clamp_index(raw) {
                out.push(index);
            }
        }
        out
    }
}
