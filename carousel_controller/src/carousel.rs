// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;
use core::time::Duration;

use carousel_depth::DepthSorter;
use carousel_geometry::{FLOAT_ERROR_MARGIN, RingGeometry};
use carousel_motion::{MotionEngine, MotionEvent, MotionPhase, Release};
use carousel_registry::ItemRegistry;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::{
    CarouselConfig, CarouselError, CarouselOption, ContentProvider, EventSink, InputEvent,
    InputKinds, ParentLookup, Placement, RenderSurface, SwipeDirection, find_ancestor,
};

type Subscriptions<T> = SmallVec<[(InputKinds, T); 3]>;

/// A headless carousel over host-supplied views.
///
/// This type:
/// - owns the scroll offset and motion state,
/// - keeps views bound only for the indices in the visible window, recycling
///   the rest through a pool,
/// - lays out bound views and restacks them by depth after every offset change,
/// - translates discrete input into motion.
///
/// It never reads a clock: every operation that may start or advance motion
/// takes `now`, the host's monotonic clock reading. Call [`tick`](Self::tick)
/// at the display rate while [`motion_phase`](Self::motion_phase) is not
/// [`MotionPhase::Idle`].
///
/// Item views are handles of type `V`, cheap to clone and compare (for
/// example indices into a host arena).
pub struct Carousel<V, C, S, E = ()>
where
    S: RenderSurface<V>,
{
    config: CarouselConfig,
    resolved: CarouselConfig,
    content: C,
    surface: S,
    sink: E,
    ring: RingGeometry,
    registry: ItemRegistry<V>,
    motion: MotionEngine,
    sorter: DepthSorter,
    inputs: InputKinds,
    subscriptions: Subscriptions<S::Subscription>,
    current: Option<usize>,
}

impl<V, C, S, E> fmt::Debug for Carousel<V, C, S, E>
where
    V: fmt::Debug,
    S: RenderSurface<V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("config", &self.resolved)
            .field("ring", &self.ring)
            .field("registry", &self.registry)
            .field("motion", &self.motion)
            .field("inputs", &self.inputs)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl<V, C, S, E> Carousel<V, C, S, E>
where
    V: Clone + Eq + Hash,
    C: ContentProvider<V>,
    S: RenderSurface<V>,
    E: EventSink,
{
    /// Creates a carousel, subscribes to every input kind, and loads the
    /// initial window.
    pub fn new(
        config: CarouselConfig,
        content: C,
        surface: S,
        sink: E,
    ) -> Result<Self, CarouselError> {
        config.validate()?;
        let mut carousel = Self {
            config,
            resolved: config,
            content,
            surface,
            sink,
            ring: RingGeometry::default(),
            registry: ItemRegistry::new(),
            motion: MotionEngine::new(config.motion_config()),
            sorter: DepthSorter::default(),
            inputs: InputKinds::empty(),
            subscriptions: Subscriptions::new(),
            current: None,
        };
        carousel.enable(InputKinds::all());
        carousel.reload();
        Ok(carousel)
    }

    /// The configuration as given, before option overrides.
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The configuration in effect, with the event sink's option overrides applied.
    #[must_use]
    pub const fn resolved_config(&self) -> &CarouselConfig {
        &self.resolved
    }

    /// Replaces the configuration and reloads.
    pub fn set_config(&mut self, config: CarouselConfig) -> Result<(), CarouselError> {
        config.validate()?;
        self.config = config;
        self.reload();
        Ok(())
    }

    /// The content provider.
    #[must_use]
    pub const fn content(&self) -> &C {
        &self.content
    }

    /// The content provider, for updating the data before [`reload`](Self::reload),
    /// [`insert`](Self::insert), or [`remove`](Self::remove).
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// The render surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// The render surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The event sink.
    #[must_use]
    pub const fn sink(&self) -> &E {
        &self.sink
    }

    /// The event sink.
    pub fn sink_mut(&mut self) -> &mut E {
        &mut self.sink
    }

    /// View bindings and the recycle pool.
    #[must_use]
    pub const fn registry(&self) -> &ItemRegistry<V> {
        &self.registry
    }

    /// Rebuilds everything from the content provider.
    ///
    /// Resolves option overrides, unbinds every view into the recycle pool,
    /// re-reads the item count, clamps the offset, and loads the window
    /// again. Motion in flight is stopped.
    pub fn reload(&mut self) {
        self.resolved = self.resolve_config();
        self.motion.set_config(self.resolved.motion_config());
        self.motion.stop();

        for (_, view) in self.registry.iter() {
            self.surface.detach(view);
        }
        self.registry.recycle_all();

        let count = self.content.item_count();
        self.ring = RingGeometry::new(count, self.resolved.wrap_enabled);
        if count > 0 && self.resolved.slot_width() <= FLOAT_ERROR_MARGIN {
            tracing::warn!(count, "item width is zero; drags will be ignored");
        }
        let offset = self.ring.clamp_offset(self.motion.offset()).unwrap_or(0.0);
        self.motion.set_offset(offset);
        tracing::debug!(count, wrap = self.ring.wrap(), offset, "reloaded");
        self.did_scroll(None);
    }

    /// Number of items as of the last reload, insert, or remove.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.ring.count()
    }

    /// Current scroll offset in items.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.motion.offset()
    }

    /// Index of the item nearest the scroll offset, or `None` when empty.
    #[must_use]
    pub fn current_item_index(&self) -> Option<usize> {
        self.motion.current_index(&self.ring)
    }

    /// View bound to the current item.
    #[must_use]
    pub fn current_item_view(&self) -> Option<&V> {
        self.current_item_index()
            .and_then(|index| self.registry.item_at(index))
    }

    /// Indices with a bound view, ascending.
    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        self.registry.sorted_indices()
    }

    /// What the carousel is doing.
    #[must_use]
    pub const fn motion_phase(&self) -> MotionPhase {
        self.motion.phase()
    }

    /// Index `view` is bound to.
    #[must_use]
    pub fn index_of(&self, view: &V) -> Option<usize> {
        self.registry.index_of(view)
    }

    /// Index bound to `view` or to its nearest bound ancestor.
    ///
    /// The search walks up through `parents` and stops at the content root.
    pub fn index_of_view_or_ancestor<P>(&self, view: V, parents: &P) -> Option<usize>
    where
        P: ParentLookup<V> + ?Sized,
    {
        let mut found = None;
        find_ancestor(parents, view, |candidate| {
            found = self.registry.index_of(candidate);
            found.is_some()
        });
        found
    }

    /// Frontmost bound view under `point`.
    #[must_use]
    pub fn item_at(&self, point: Point) -> Option<&V> {
        self.hit(point).map(|(_, view)| view)
    }

    /// Index of the frontmost bound view under `point`.
    #[must_use]
    pub fn index_at(&self, point: Point) -> Option<usize> {
        self.hit(point).map(|(index, _)| index)
    }

    /// Jumps to item `index`, stopping any motion.
    pub fn set_current_item_index(&mut self, index: usize) -> Result<(), CarouselError> {
        self.check_index(index)?;
        self.set_scroll_offset(index as f64);
        Ok(())
    }

    /// Jumps to `offset`, stopping any motion.
    ///
    /// The offset is clamped, or folded into the ring when wrapping.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        let offset = self.ring.clamp_offset(offset).unwrap_or(0.0);
        if self.motion.set_offset(offset) {
            self.did_scroll(None);
        }
    }

    /// Scrolls to item `index`, animated over the configured scroll duration
    /// or immediately.
    pub fn scroll_to(
        &mut self,
        index: usize,
        animated: bool,
        now: Duration,
    ) -> Result<(), CarouselError> {
        let duration = if animated {
            self.resolved.scroll_duration
        } else {
            Duration::ZERO
        };
        self.scroll_to_with_duration(index, duration, now)
    }

    /// Scrolls to item `index` over `duration`, taking the shorter way around
    /// when wrapping.
    pub fn scroll_to_with_duration(
        &mut self,
        index: usize,
        duration: Duration,
        now: Duration,
    ) -> Result<(), CarouselError> {
        self.check_index(index)?;
        self.animate_to(index as f64, duration, now);
        Ok(())
    }

    /// Scrolls `items` positions from the current item.
    ///
    /// When wrapping the move keeps its direction and may pass the seam;
    /// otherwise it stops at the ends.
    pub fn scroll_by(&mut self, items: isize, animated: bool, now: Duration) {
        let Some(current) = self.current_item_index() else {
            return;
        };
        let duration = if animated {
            self.resolved.scroll_duration
        } else {
            Duration::ZERO
        };
        let before = self.motion.offset();
        let delta = self.ring.shortest_delta(before, current as f64) + items as f64;
        if !self.motion.animate_by(delta, duration, now, &self.ring) && self.motion.offset() != before
        {
            self.did_scroll(None);
        }
    }

    /// Adds a view for item `index` after the content provider has grown.
    ///
    /// Bound views at or above `index` move up by one. With `animated`, the
    /// render surface is asked to animate the relayout over the configured
    /// insert duration.
    pub fn insert(&mut self, index: usize, animated: bool) -> Result<(), CarouselError> {
        let count = self.content.item_count();
        if index >= count {
            return Err(CarouselError::InvalidIndex { index, count });
        }
        self.ring.set_count(count);
        let view = self.fetch_view(index);
        self.registry.insert_at(index, view.clone());
        self.surface.attach(&view, index);
        tracing::debug!(index, count, "item inserted");
        self.did_scroll(animated.then_some(self.resolved.insert_duration));
        Ok(())
    }

    /// Drops the view of item `index` after the content provider has shrunk.
    ///
    /// Bound views above `index` move down by one, and the offset is clamped
    /// to the new range.
    pub fn remove(&mut self, index: usize, animated: bool) -> Result<(), CarouselError> {
        self.check_index(index)?;
        if let Some(view) = self.registry.remove_at(index) {
            self.surface.detach(&view);
            self.registry.enqueue(view);
        }
        let count = self.content.item_count();
        self.ring.set_count(count);
        let offset = self.motion.offset();
        let clamped = self.ring.clamp_offset(offset).unwrap_or(0.0);
        if clamped != offset {
            self.motion.set_offset(clamped);
        }
        tracing::debug!(index, count, "item removed");
        self.did_scroll(animated.then_some(self.resolved.insert_duration));
        Ok(())
    }

    /// Moves every view by `offset` points.
    pub fn set_content_offset(&mut self, offset: Vec2) {
        if self.resolved.content_offset != offset {
            self.config.content_offset = offset;
            self.resolved.content_offset = offset;
            self.layout(None);
        }
    }

    /// Subscribes to `kinds` of input. Already enabled kinds are kept as they are.
    pub fn enable(&mut self, kinds: InputKinds) {
        for kind in kinds.iter() {
            if !self.inputs.contains(kind) {
                let subscription = self.surface.attach_input(kind);
                self.subscriptions.push((kind, subscription));
                self.inputs.insert(kind);
            }
        }
    }

    /// Unsubscribes from `kinds` of input.
    pub fn disable(&mut self, kinds: InputKinds) {
        let (dropped, kept): (Subscriptions<S::Subscription>, Subscriptions<S::Subscription>) = self
            .subscriptions
            .drain(..)
            .partition(|(kind, _)| kinds.contains(*kind));
        self.subscriptions = kept;
        for (kind, subscription) in dropped {
            self.surface.detach_input(subscription);
            self.inputs.remove(kind);
        }
    }

    /// Returns `true` if every kind in `kinds` is enabled.
    #[must_use]
    pub const fn is_enabled(&self, kinds: InputKinds) -> bool {
        self.inputs.contains(kinds)
    }

    /// Returns `true` if a drag with `translation` so far may begin: it must
    /// be at least as horizontal as it is vertical.
    #[must_use]
    pub fn should_begin_drag(translation: Vec2) -> bool {
        translation.x.abs() >= translation.y.abs()
    }

    /// Handles one input event at clock reading `now`.
    ///
    /// Returns `true` if the event was acted on. Events of a disabled kind
    /// are ignored, as are pans and swipes while scrolling is disabled.
    pub fn handle_input(&mut self, event: InputEvent, now: Duration) -> bool {
        if !self.inputs.contains(event.kind()) {
            return false;
        }
        match event {
            InputEvent::DragBegin { translation } => self.begin_drag(translation),
            InputEvent::DragUpdate {
                translation,
                velocity,
            } => self.update_drag(translation, velocity),
            InputEvent::DragEnd => self.end_drag(now),
            InputEvent::Swipe(direction) => self.swipe(direction, now),
            InputEvent::Tap(point) => self.tap(point, now),
        }
    }

    /// Advances motion to clock reading `now`.
    ///
    /// Returns `true` if the offset changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let step = self.motion.tick(now, &self.ring);
        if step.moved {
            self.did_scroll(None);
        }
        match step.event {
            Some(MotionEvent::DecelerationEnded) => self.sink.on_deceleration_end(),
            Some(MotionEvent::AnimationEnded) => self.sink.on_scroll_animation_end(),
            None => {}
        }
        step.moved
    }

    fn begin_drag(&mut self, translation: Vec2) -> bool {
        if !self.resolved.scroll_enabled
            || self.ring.is_empty()
            || !Self::should_begin_drag(translation)
        {
            return false;
        }
        self.motion.begin_drag(translation.x);
        self.sink.on_drag_begin();
        true
    }

    fn update_drag(&mut self, translation: Vec2, velocity: Vec2) -> bool {
        if self.motion.phase() != MotionPhase::Dragging {
            return false;
        }
        // Layout refreshes on every update, even when held at an edge.
        self.motion
            .update_drag(translation.x, velocity.x, &self.ring);
        self.did_scroll(None);
        true
    }

    fn end_drag(&mut self, now: Duration) -> bool {
        let release = self.motion.end_drag(now, &self.ring);
        if release == Release::Ignored {
            return false;
        }
        let will_decelerate = release.will_decelerate();
        self.sink.on_drag_end(will_decelerate);
        if will_decelerate {
            self.sink.on_deceleration_begin();
        }
        if release == Release::Idle {
            self.did_scroll(None);
        }
        true
    }

    fn swipe(&mut self, direction: SwipeDirection, now: Duration) -> bool {
        let count = self.ring.count();
        if !self.resolved.scroll_enabled || count < 2 || self.motion.phase() != MotionPhase::Idle {
            return false;
        }
        let Some(current) = self.current_item_index() else {
            return false;
        };
        let target = match direction {
            SwipeDirection::Left => current as f64 + 1.0,
            SwipeDirection::Right => current as f64 - 1.0,
        };
        if !self.ring.wrap() && !(0.0..count as f64).contains(&target) {
            return false;
        }
        self.animate_to(target, self.resolved.scroll_duration, now);
        true
    }

    fn tap(&mut self, point: Point, now: Duration) -> bool {
        let Some(current) = self.current_item_index() else {
            return false;
        };
        let duration = self.resolved.scroll_duration;
        match self.index_at(point) {
            Some(index) => {
                if self.sink.should_select(index) {
                    if index != current {
                        self.animate_to(index as f64, duration, now);
                    }
                    self.sink.on_select(index);
                }
            }
            None => self.animate_to(current as f64, duration, now),
        }
        true
    }

    fn check_index(&self, index: usize) -> Result<(), CarouselError> {
        let count = self.ring.count();
        if index < count {
            Ok(())
        } else {
            Err(CarouselError::InvalidIndex { index, count })
        }
    }

    fn resolve_config(&self) -> CarouselConfig {
        let mut resolved = self.config;
        for option in CarouselOption::ALL {
            let value = self
                .sink
                .value_for_option(option, self.config.option(option));
            resolved.set_option(option, value);
        }
        match resolved.validate() {
            Ok(()) => resolved,
            Err(err) => {
                tracing::warn!(%err, "ignoring invalid option overrides");
                self.config
            }
        }
    }

    fn animate_to(&mut self, target: f64, duration: Duration, now: Duration) {
        let before = self.motion.offset();
        if !self.motion.animate_to(target, duration, now, &self.ring)
            && self.motion.offset() != before
        {
            self.did_scroll(None);
        }
    }

    fn hit(&self, point: Point) -> Option<(usize, &V)> {
        let surface = &self.surface;
        let lookup = |view: &V| surface.transform_of(view);
        self.sorter.view_at_point(
            &self.registry,
            &lookup,
            self.current_item_index(),
            point,
            |view, point| surface.hit_test(view, point),
        )
    }

    /// Refreshes bindings, layout, and stacking after an offset change.
    fn did_scroll(&mut self, animation: Option<Duration>) {
        let current = self.current_item_index();
        let window = current
            .map(|index| {
                self.ring
                    .window_indices(index, self.resolved.visible_item_count)
            })
            .unwrap_or_default();

        let leaving: SmallVec<[usize; 16]> = self
            .registry
            .indices()
            .filter(|index| !window.contains(index))
            .collect();
        for index in leaving {
            if let Some(view) = self.registry.item_at(index) {
                self.surface.detach(view);
            }
            self.registry.recycle_at(index);
        }
        for &index in &window {
            if !self.registry.contains_index(index) {
                self.load_view(index);
            }
        }

        self.layout(animation);
        self.depth_sort();

        let offset = self.motion.offset();
        tracing::trace!(offset, bound = self.registry.len(), "did scroll");
        self.sink.on_scroll(offset);
        if current != self.current {
            self.current = current;
            self.sink.on_current_item_changed(current);
        }
    }

    fn load_view(&mut self, index: usize) {
        let view = self.fetch_view(index);
        if let Some(displaced) = self.registry.set_item(view.clone(), index) {
            self.surface.detach(&displaced);
            self.registry.enqueue(displaced);
        }
        self.surface.attach(&view, index);
    }

    /// Asks the content provider for a view, offering a pooled one for reuse.
    fn fetch_view(&mut self, index: usize) -> V {
        let reusable = self.registry.dequeue();
        let view = match self.content.view_for_item(index, reusable.clone()) {
            Some(view) => view,
            None => {
                tracing::warn!(index, "content provider returned no view; using a placeholder");
                self.surface.make_placeholder(index)
            }
        };
        if let Some(unused) = reusable.filter(|hint| *hint != view) {
            self.registry.enqueue(unused);
        }
        view
    }

    fn layout(&mut self, animation: Option<Duration>) {
        let offset = self.motion.offset();
        self.surface.begin_batch(animation);
        for index in self.registry.sorted_indices() {
            if let Some(view) = self.registry.item_at(index) {
                let relative = self.ring.item_offset(index, offset);
                self.surface
                    .place(view, &Placement::new(index, relative, &self.resolved));
            }
        }
        self.surface.end_batch();
    }

    fn depth_sort(&mut self) {
        let surface = &self.surface;
        let lookup = |view: &V| surface.transform_of(view);
        let order =
            self.sorter
                .sorted_back_to_front(&self.registry, &lookup, self.current_item_index());
        let views: Vec<V> = order.into_iter().map(|(_, view)| view).collect();
        self.surface.apply_depth_order(&views);
    }
}
