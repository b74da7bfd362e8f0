// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth keys, the sorter, and registry-level queries.

use core::cmp::Ordering;
use core::hash::Hash;

use carousel_geometry::FLOAT_ERROR_MARGIN;
use carousel_registry::ItemRegistry;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use smallvec::SmallVec;

use crate::Transform3D;

/// Views of a registry in back-to-front order, with their indices.
pub type DepthOrder<V> = SmallVec<[(usize, V); 16]>;

/// Source of per-view placement transforms.
///
/// Implemented for closures, so a host can pass `|view| surface.transform(view)`.
pub trait TransformLookup<V> {
    /// Current placement of `view`, or `None` if it has none (for example
    /// because it is not attached to the host surface).
    fn transform_of(&self, view: &V) -> Option<Transform3D>;
}

impl<V, F> TransformLookup<V> for F
where
    F: Fn(&V) -> Option<Transform3D>,
{
    fn transform_of(&self, view: &V) -> Option<Transform3D> {
        self(view)
    }
}

/// Sort key of one view relative to the focused item.
///
/// Orders back to front: `a < b` means `a` is drawn behind `b`.
#[derive(Clone, Copy, Debug)]
pub struct DepthKey {
    /// Depth quantized by the sorter tolerance.
    pub depth_bucket: i64,
    /// Lateral distance from the focused item's x position.
    pub distance: f64,
}

impl PartialEq for DepthKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DepthKey {}

impl PartialOrd for DepthKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DepthKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.depth_bucket
            .cmp(&other.depth_bucket)
            // Farther from the focused item sorts behind, i.e. first.
            .then_with(|| other.distance.total_cmp(&self.distance))
    }
}

/// Ranks views by projected depth, then by distance from the focused item.
#[derive(Clone, Copy, Debug)]
pub struct DepthSorter {
    tolerance: f64,
}

impl Default for DepthSorter {
    fn default() -> Self {
        Self::new(FLOAT_ERROR_MARGIN)
    }
}

impl DepthSorter {
    /// Creates a sorter treating depths within `tolerance` of each other as equal.
    ///
    /// Non-positive or non-finite tolerances fall back to [`FLOAT_ERROR_MARGIN`].
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        let tolerance = if tolerance.is_finite() && tolerance > 0.0 {
            tolerance
        } else {
            FLOAT_ERROR_MARGIN
        };
        Self { tolerance }
    }

    /// The depth tolerance.
    #[must_use]
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Sort key for a view placed at `transform` when the focused item sits at `focus_x`.
    #[must_use]
    pub fn key(&self, transform: &Transform3D, focus_x: f64) -> DepthKey {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Depth buckets saturate; only their relative order matters."
        )]
        let depth_bucket = (transform.depth() / self.tolerance).round() as i64;
        DepthKey {
            depth_bucket,
            distance: (transform.x_position() - focus_x).abs(),
        }
    }

    /// Returns `true` if `a` is drawn behind `b`, with `current` the focused item.
    #[must_use]
    pub fn is_behind(&self, a: &Transform3D, b: &Transform3D, current: &Transform3D) -> bool {
        let focus_x = current.x_position();
        self.key(a, focus_x) < self.key(b, focus_x)
    }

    /// Back-to-front comparison of two optional keys with an index tie-break.
    ///
    /// Missing keys sort behind present ones.
    #[must_use]
    pub fn compare(a: (Option<DepthKey>, usize), b: (Option<DepthKey>, usize)) -> Ordering {
        a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1))
    }

    /// Every bound view of `registry` in back-to-front order.
    ///
    /// `current_index` names the focused item; if it has no transform the
    /// focus is taken to be at `x = 0`.
    #[must_use]
    pub fn sorted_back_to_front<V, L>(
        &self,
        registry: &ItemRegistry<V>,
        lookup: &L,
        current_index: Option<usize>,
    ) -> DepthOrder<V>
    where
        V: Clone + Eq + Hash,
        L: TransformLookup<V> + ?Sized,
    {
        let focus_x = self.focus_x(registry, lookup, current_index);
        let mut keyed: SmallVec<[(Option<DepthKey>, usize, V); 16]> = registry
            .iter()
            .map(|(index, view)| {
                let key = lookup.transform_of(view).map(|t| self.key(&t, focus_x));
                (key, index, view.clone())
            })
            .collect();
        keyed.sort_by(|a, b| Self::compare((a.0, a.1), (b.0, b.1)));
        keyed
            .into_iter()
            .map(|(_, index, view)| (index, view))
            .collect()
    }

    /// Frontmost bound view whose hit test accepts `point`.
    ///
    /// Views are tested front to back, so where views overlap the one drawn
    /// on top wins.
    pub fn view_at_point<'r, V, L, H>(
        &self,
        registry: &'r ItemRegistry<V>,
        lookup: &L,
        current_index: Option<usize>,
        point: Point,
        mut hit_test: H,
    ) -> Option<(usize, &'r V)>
    where
        V: Clone + Eq + Hash,
        L: TransformLookup<V> + ?Sized,
        H: FnMut(&V, Point) -> bool,
    {
        let focus_x = self.focus_x(registry, lookup, current_index);
        let key_of = |view: &V| lookup.transform_of(view).map(|t| self.key(&t, focus_x));
        registry.view_at_point(
            |a, b| Self::compare((key_of(b.1), b.0), (key_of(a.1), a.0)),
            |_, view| hit_test(view, point),
        )
    }

    fn focus_x<V, L>(
        &self,
        registry: &ItemRegistry<V>,
        lookup: &L,
        current_index: Option<usize>,
    ) -> f64
    where
        V: Clone + Eq + Hash,
        L: TransformLookup<V> + ?Sized,
    {
        current_index
            .and_then(|index| registry.item_at(index))
            .and_then(|view| lookup.transform_of(view))
            .map_or(0.0, |t| t.x_position())
    }
}
