// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits implemented by the host.

use carousel_depth::Transform3D;
use kurbo::Point;

use crate::{CarouselOption, InputKinds, Placement};

/// Supplies item count and item views.
pub trait ContentProvider<V> {
    /// Number of items.
    fn item_count(&self) -> usize;

    /// View for item `index`.
    ///
    /// `reusable` is a pooled view the provider may reconfigure and return.
    /// Returning `None` leaves a placeholder in the slot.
    fn view_for_item(&mut self, index: usize, reusable: Option<V>) -> Option<V>;
}

/// Receives notifications. Every method has a no-op default.
///
/// `()` is the sink that ignores everything.
pub trait EventSink {
    /// Asked before a tapped item is selected.
    fn should_select(&mut self, index: usize) -> bool {
        let _ = index;
        true
    }

    /// A tapped item was selected.
    fn on_select(&mut self, index: usize) {
        let _ = index;
    }

    /// The scroll offset changed and the layout was refreshed.
    fn on_scroll(&mut self, offset: f64) {
        let _ = offset;
    }

    /// The item nearest the scroll offset changed.
    fn on_current_item_changed(&mut self, index: Option<usize>) {
        let _ = index;
    }

    /// A drag began.
    fn on_drag_begin(&mut self) {}

    /// A drag ended. `will_decelerate` is `true` if the carousel coasts.
    fn on_drag_end(&mut self, will_decelerate: bool) {
        let _ = will_decelerate;
    }

    /// Coasting began after a drag.
    fn on_deceleration_begin(&mut self) {}

    /// Coasting ended.
    fn on_deceleration_end(&mut self) {}

    /// An animated scroll reached its target.
    fn on_scroll_animation_end(&mut self) {}

    /// Per-instance value for `option`; return `default` to keep it.
    fn value_for_option(&self, option: CarouselOption, default: f64) -> f64 {
        let _ = option;
        default
    }
}

impl EventSink for () {}

/// Presents item views and delivers input.
pub trait RenderSurface<V> {
    /// Handle for an input subscription, dropped through
    /// [`detach_input`](Self::detach_input).
    type Subscription;

    /// Adds `view` to the surface for item `index`.
    fn attach(&mut self, view: &V, index: usize);

    /// Removes `view` from the surface. The view may be attached again later.
    fn detach(&mut self, view: &V);

    /// Creates an empty view for a slot the content provider left empty.
    fn make_placeholder(&mut self, index: usize) -> V;

    /// Starts a batch of placements.
    ///
    /// `animation` is `Some(duration)` when the surface should animate the
    /// batch itself, and `None` for an immediate update.
    fn begin_batch(&mut self, animation: Option<core::time::Duration>);

    /// Places one view.
    fn place(&mut self, view: &V, placement: &Placement);

    /// Ends the current batch.
    fn end_batch(&mut self);

    /// Restacks views; `back_to_front[0]` is drawn first.
    fn apply_depth_order(&mut self, back_to_front: &[V]);

    /// Placement of `view` as drawn, if it is attached.
    fn transform_of(&self, view: &V) -> Option<Transform3D>;

    /// Returns `true` if `point` falls on `view`.
    fn hit_test(&self, view: &V, point: Point) -> bool;

    /// Starts delivering input of `kinds`.
    fn attach_input(&mut self, kinds: InputKinds) -> Self::Subscription;

    /// Stops delivering the input of `subscription`.
    fn detach_input(&mut self, subscription: Self::Subscription);
}

/// Upward links of the host's view hierarchy.
pub trait ParentLookup<V> {
    /// Parent of `view`, or `None` at the top.
    fn parent_of(&self, view: &V) -> Option<V>;

    /// Returns `true` if `view` is the carousel's content root, where upward
    /// searches stop.
    fn is_root(&self, view: &V) -> bool {
        let _ = view;
        false
    }
}

/// A hierarchy where every view is top-level.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoParent;

impl<V> ParentLookup<V> for NoParent {
    fn parent_of(&self, _: &V) -> Option<V> {
        None
    }
}

/// Upward searches give up after this many steps.
pub const MAX_ANCESTOR_DEPTH: usize = 64;

/// Finds `view` or its nearest ancestor accepted by `accept`.
///
/// The search stops at the content root (which is never accepted), at the
/// top of the hierarchy, or after [`MAX_ANCESTOR_DEPTH`] steps.
pub fn find_ancestor<V, P, F>(parents: &P, view: V, mut accept: F) -> Option<V>
where
    P: ParentLookup<V> + ?Sized,
    F: FnMut(&V) -> bool,
{
    let mut current = view;
    for _ in 0..MAX_ANCESTOR_DEPTH {
        if parents.is_root(&current) {
            return None;
        }
        if accept(&current) {
            return Some(current);
        }
        current = parents.parent_of(&current)?;
    }
    tracing::warn!(
        max_depth = MAX_ANCESTOR_DEPTH,
        "ancestor search exceeded the depth limit"
    );
    None
}
