// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The motion state machine.

use core::time::Duration;

use carousel_geometry::{FLOAT_ERROR_MARGIN, RingGeometry};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{MotionConfig, Tween};

/// Coasting after a fast release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Deceleration {
    /// Signed velocity in items per second.
    pub velocity: f64,
    /// Clock reading of the last integration step.
    pub last_tick: Duration,
}

/// What the engine is doing, with the data each activity needs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MotionState {
    /// At rest.
    #[default]
    Idle,
    /// Following a pointer.
    Dragging {
        /// Cumulative translation seen by the previous update.
        previous_translation: f64,
    },
    /// Eased move to a target offset.
    AnimatingToTarget(Tween),
    /// Coasting with decaying velocity.
    Decelerating(Deceleration),
}

impl MotionState {
    /// The data-less phase of this state.
    #[must_use]
    pub const fn phase(&self) -> MotionPhase {
        match self {
            Self::Idle => MotionPhase::Idle,
            Self::Dragging { .. } => MotionPhase::Dragging,
            Self::AnimatingToTarget(_) => MotionPhase::AnimatingToTarget,
            Self::Decelerating(_) => MotionPhase::Decelerating,
        }
    }
}

/// Data-less mirror of [`MotionState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MotionPhase {
    /// At rest.
    #[default]
    Idle,
    /// Following a pointer.
    Dragging,
    /// Eased move to a target offset.
    AnimatingToTarget,
    /// Coasting with decaying velocity.
    Decelerating,
}

/// Outcome of [`MotionEngine::end_drag`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// The engine was not dragging; nothing changed.
    Ignored,
    /// The release was fast enough to coast.
    Decelerate,
    /// The engine is easing toward `target`.
    Animate {
        /// Offset being animated to, before normalization.
        target: f64,
    },
    /// The engine came to rest immediately.
    Idle,
}

impl Release {
    /// Returns `true` if the release started a deceleration.
    #[must_use]
    pub const fn will_decelerate(&self) -> bool {
        matches!(self, Self::Decelerate)
    }
}

/// Notable transition produced by a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionEvent {
    /// Coasting stopped. The engine may go on to settle with an animation.
    DecelerationEnded,
    /// An eased move reached its target.
    AnimationEnded,
}

/// Result of [`MotionEngine::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Step {
    /// Whether the offset changed.
    pub moved: bool,
    /// Transition completed during this tick, if any.
    pub event: Option<MotionEvent>,
}

/// Scroll offset plus the state machine that moves it.
///
/// The engine is agnostic of item count and wrap mode; every operation that
/// needs them takes the current [`RingGeometry`].
#[derive(Clone, Debug)]
pub struct MotionEngine {
    config: MotionConfig,
    state: MotionState,
    offset: f64,
    start_velocity: f64,
}

impl Default for MotionEngine {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

impl MotionEngine {
    /// Creates an idle engine at offset zero.
    #[must_use]
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            state: MotionState::Idle,
            offset: 0.0,
            start_velocity: 0.0,
        }
    }

    /// Current tunables.
    #[must_use]
    pub const fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Replaces the tunables. Motion in flight continues with the new values.
    pub fn set_config(&mut self, config: MotionConfig) {
        self.config = config;
    }

    /// Current scroll offset in items.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Current state, with its data.
    #[must_use]
    pub const fn state(&self) -> &MotionState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> MotionPhase {
        self.state.phase()
    }

    /// Velocity captured by the latest drag update, in items per second.
    ///
    /// Positive values move toward higher indices.
    #[must_use]
    pub const fn start_velocity(&self) -> f64 {
        self.start_velocity
    }

    /// Index of the item nearest the current offset.
    #[must_use]
    pub fn current_index(&self, ring: &RingGeometry) -> Option<usize> {
        ring.index_at_offset(self.offset)
    }

    /// Damping applied to drag movement: `1.0` in range, falling linearly to
    /// `0.0` at `bounce_distance` of overscroll.
    ///
    /// Always `1.0` when wrapping or when bouncing is disabled.
    #[must_use]
    pub fn bounce_factor(&self, ring: &RingGeometry) -> f64 {
        let distance = self.config.bounce_distance;
        if ring.wrap() || !self.config.bounce_enabled || distance <= FLOAT_ERROR_MARGIN {
            return 1.0;
        }
        1.0 - ring.overscroll(self.offset).min(distance) / distance
    }

    /// Returns `true` if the captured velocity is fast enough to step to a
    /// neighbouring item on release.
    #[must_use]
    pub fn should_scroll(&self, ring: &RingGeometry) -> bool {
        !ring.is_empty() && self.start_velocity.abs() > self.config.scroll_speed_threshold
    }

    /// Returns `true` if a release now would coast.
    ///
    /// Requires a fast release that would coast far enough to matter and,
    /// without wrap, an in-range offset.
    #[must_use]
    pub fn should_decelerate(&self, ring: &RingGeometry) -> bool {
        self.should_scroll(ring)
            && self.coast_distance() > self.config.decelerate_threshold
            && (ring.wrap() || !ring.is_out_of_bounds(self.offset))
    }

    /// Distance, in items, a deceleration from the captured velocity would cover.
    ///
    /// This is the sum of the per-frame geometric series.
    #[must_use]
    pub fn coast_distance(&self) -> f64 {
        let rate = self.config.deceleration_rate;
        if rate >= 1.0 {
            return f64::INFINITY;
        }
        self.start_velocity.abs() / (self.config.deceleration_multiplier * (1.0 - rate))
    }

    /// Jumps to `offset` and stops all motion.
    ///
    /// Returns `true` if the offset changed. Non-finite offsets are ignored.
    pub fn set_offset(&mut self, offset: f64) -> bool {
        if !offset.is_finite() {
            return false;
        }
        self.stop();
        let moved = offset != self.offset;
        self.offset = offset;
        moved
    }

    /// Stops all motion, keeping the current offset.
    pub fn stop(&mut self) {
        if self.state != MotionState::Idle {
            tracing::debug!(phase = ?self.phase(), offset = self.offset, "motion stopped");
        }
        self.state = MotionState::Idle;
    }

    /// Starts following a pointer at cumulative `translation`.
    ///
    /// Any animation or deceleration in flight is cancelled and its velocity
    /// discarded.
    pub fn begin_drag(&mut self, translation: f64) {
        let interrupted = self.phase();
        self.state = MotionState::Dragging {
            previous_translation: if translation.is_finite() {
                translation
            } else {
                0.0
            },
        };
        self.start_velocity = 0.0;
        tracing::debug!(?interrupted, offset = self.offset, "drag began");
    }

    /// Follows the pointer to cumulative `translation` moving at `velocity`
    /// (both in points along the scroll axis).
    ///
    /// Returns `true` if the offset changed. Ignored when not dragging, for
    /// an empty ring, or when the item width is degenerate.
    pub fn update_drag(&mut self, translation: f64, velocity: f64, ring: &RingGeometry) -> bool {
        let MotionState::Dragging {
            previous_translation,
        } = self.state
        else {
            return false;
        };
        if !translation.is_finite() || ring.is_empty() {
            return false;
        }
        let width = self.config.item_width;
        if width <= FLOAT_ERROR_MARGIN {
            tracing::warn!(item_width = width, "degenerate item width, drag ignored");
            return false;
        }
        let velocity = if velocity.is_finite() { velocity } else { 0.0 };
        let factor = self.bounce_factor(ring);
        let delta = translation - previous_translation;
        self.state = MotionState::Dragging {
            previous_translation: translation,
        };
        self.start_velocity = -velocity * factor * self.config.scroll_speed / width;

        let before = self.offset;
        self.offset -= delta * factor * self.config.offset_multiplier / width;
        if !ring.wrap() && !self.config.bounce_enabled {
            self.offset = ring.clamp_offset(self.offset).unwrap_or(self.offset);
        }
        tracing::trace!(offset = self.offset, velocity = self.start_velocity, "drag");
        self.offset != before
    }

    /// Ends the drag at clock reading `now`.
    ///
    /// - Fast releases in range coast ([`Release::Decelerate`]).
    /// - Out-of-range releases ease back to the nearest valid item.
    /// - Fast releases that would barely coast step one item in the direction
    ///   of travel; slow releases ease to the nearest item.
    pub fn end_drag(&mut self, now: Duration, ring: &RingGeometry) -> Release {
        if !matches!(self.state, MotionState::Dragging { .. }) {
            return Release::Ignored;
        }
        let Some(current) = self.current_index(ring) else {
            self.state = MotionState::Idle;
            return Release::Idle;
        };
        if self.should_decelerate(ring) {
            self.state = MotionState::Decelerating(Deceleration {
                velocity: self.start_velocity,
                last_tick: now,
            });
            tracing::debug!(velocity = self.start_velocity, "deceleration began");
            return Release::Decelerate;
        }
        let current = current as f64;
        let target = if !ring.is_out_of_bounds(self.offset) && self.should_scroll(ring) {
            current + self.start_velocity.signum()
        } else {
            current
        };
        if self.animate_to(target, self.config.scroll_duration, now, ring) {
            Release::Animate { target }
        } else {
            Release::Idle
        }
    }

    /// Eases from the current offset to `target` over `duration`.
    ///
    /// When wrapping, the move takes the shorter way around the ring;
    /// otherwise `target` is clamped into range. A zero duration, or a target
    /// already reached, jumps immediately.
    ///
    /// Returns `true` if an animation started.
    pub fn animate_to(
        &mut self,
        target: f64,
        duration: Duration,
        now: Duration,
        ring: &RingGeometry,
    ) -> bool {
        if !target.is_finite() {
            return false;
        }
        let Some(clamped) = ring.clamp_offset(target) else {
            self.stop();
            return false;
        };
        let end = if ring.wrap() {
            self.offset + ring.shortest_delta(self.offset, target)
        } else {
            clamped
        };
        self.start_tween(end, duration, now, ring)
    }

    /// Eases by exactly `delta` items over `duration`.
    ///
    /// Unlike [`animate_to`](Self::animate_to) the direction and distance are
    /// kept when wrapping, so a move may pass the seam more than once.
    /// Without wrap the end offset is clamped into range.
    ///
    /// Returns `true` if an animation started.
    pub fn animate_by(
        &mut self,
        delta: f64,
        duration: Duration,
        now: Duration,
        ring: &RingGeometry,
    ) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let end = self.offset + delta;
        let Some(clamped) = ring.clamp_offset(end) else {
            self.stop();
            return false;
        };
        let end = if ring.wrap() { end } else { clamped };
        self.start_tween(end, duration, now, ring)
    }

    fn start_tween(
        &mut self,
        end: f64,
        duration: Duration,
        now: Duration,
        ring: &RingGeometry,
    ) -> bool {
        if duration.is_zero() || (end - self.offset).abs() <= FLOAT_ERROR_MARGIN {
            self.stop();
            self.offset = ring.clamp_offset(end).unwrap_or(end);
            return false;
        }
        self.state = MotionState::AnimatingToTarget(Tween {
            start_offset: self.offset,
            end_offset: end,
            start_time: now,
            duration,
        });
        tracing::debug!(from = self.offset, to = end, ?duration, "animation began");
        true
    }

    /// Advances motion to clock reading `now`.
    pub fn tick(&mut self, now: Duration, ring: &RingGeometry) -> Step {
        match self.state {
            MotionState::Idle | MotionState::Dragging { .. } => Step::default(),
            MotionState::AnimatingToTarget(tween) => self.tick_animation(&tween, now, ring),
            MotionState::Decelerating(decel) => self.tick_deceleration(decel, now, ring),
        }
    }

    fn tick_animation(&mut self, tween: &Tween, now: Duration, ring: &RingGeometry) -> Step {
        let before = self.offset;
        if tween.is_finished(now) {
            self.offset = ring
                .clamp_offset(tween.end_offset)
                .unwrap_or(tween.end_offset);
            self.state = MotionState::Idle;
            tracing::debug!(offset = self.offset, "animation finished");
            return Step {
                moved: self.offset != before,
                event: Some(MotionEvent::AnimationEnded),
            };
        }
        self.offset = tween.sample(now);
        tracing::trace!(offset = self.offset, "animation tick");
        Step {
            moved: self.offset != before,
            event: None,
        }
    }

    fn tick_deceleration(
        &mut self,
        mut decel: Deceleration,
        now: Duration,
        ring: &RingGeometry,
    ) -> Step {
        let dt = now.saturating_sub(decel.last_tick).as_secs_f64();
        if dt <= 0.0 {
            return Step::default();
        }
        let before = self.offset;
        decel.last_tick = now;
        self.offset += decel.velocity * dt;
        decel.velocity *= self
            .config
            .deceleration_rate
            .powf(dt * self.config.deceleration_multiplier);

        let mut stopped = decel.velocity.abs() < self.config.decelerate_threshold;
        if !ring.wrap() {
            let limit = if self.config.bounce_enabled {
                self.config.bounce_distance
            } else {
                0.0
            };
            if let Some(clamped) = ring.clamp_offset(self.offset) {
                let over = self.offset - clamped;
                if over.abs() > limit {
                    self.offset = clamped + limit * over.signum();
                    stopped = true;
                }
            }
        }
        tracing::trace!(offset = self.offset, velocity = decel.velocity, "deceleration tick");

        if !stopped {
            self.state = MotionState::Decelerating(decel);
            return Step {
                moved: self.offset != before,
                event: None,
            };
        }
        tracing::debug!(offset = self.offset, "deceleration ended");
        self.state = MotionState::Idle;
        if let Some(nearest) = self.current_index(ring) {
            self.animate_to(nearest as f64, self.config.scroll_duration, now, ring);
        }
        Step {
            moved: self.offset != before,
            event: Some(MotionEvent::DecelerationEnded),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use carousel_geometry::RingGeometry;

    use super::{MotionEngine, MotionEvent, MotionPhase, Release};
    use crate::MotionConfig;

    const FRAME: Duration = Duration::from_micros(16_667);

    fn engine() -> MotionEngine {
        MotionEngine::new(MotionConfig {
            item_width: 100.0,
            ..MotionConfig::default()
        })
    }

    /// Ticks at 60 Hz until idle, returning the clock and number of ticks.
    fn run_to_idle(
        engine: &mut MotionEngine,
        ring: &RingGeometry,
        mut now: Duration,
    ) -> (Duration, usize) {
        let mut ticks = 0;
        while engine.phase() != MotionPhase::Idle {
            now += FRAME;
            engine.tick(now, ring);
            ticks += 1;
            assert!(ticks < 10_000, "motion never settled");
        }
        (now, ticks)
    }

    #[test]
    fn slow_drag_release_snaps_back() {
        let ring = RingGeometry::new(5, false);
        let mut engine = engine();
        engine.begin_drag(0.0);
        assert!(engine.update_drag(-30.0, -50.0, &ring));
        assert!((engine.offset() - 0.3).abs() < 1e-9);
        // 50 points/s over 100-point items is 0.5 items/s: below the threshold.
        assert!(!engine.should_scroll(&ring));
        assert_eq!(
            engine.end_drag(Duration::ZERO, &ring),
            Release::Animate { target: 0.0 }
        );
        run_to_idle(&mut engine, &ring, Duration::ZERO);
        assert_eq!(engine.offset(), 0.0);
        assert_eq!(engine.current_index(&ring), Some(0));
    }

    #[test]
    fn fast_release_decelerates_and_terminates() {
        let ring = RingGeometry::new(20, false);
        let mut engine = engine();
        engine.set_offset(5.0);
        engine.begin_drag(0.0);
        // Dragging left at 300 points/s gives a start velocity of +3 items/s.
        engine.update_drag(-1.0, -300.0, &ring);
        assert!((engine.start_velocity() - 3.0).abs() < 1e-9);
        let release = engine.end_drag(Duration::ZERO, &ring);
        assert!(release.will_decelerate());

        let mut now = Duration::ZERO;
        let mut ticks = 0;
        let mut ended = false;
        while engine.phase() == MotionPhase::Decelerating {
            now += FRAME;
            ended |= engine.tick(now, &ring).event == Some(MotionEvent::DecelerationEnded);
            ticks += 1;
        }
        assert!(ended);
        // 3 * 0.95^n < 0.1 after 67 frames.
        assert!((60..=70).contains(&ticks), "took {ticks} ticks");
        let (_, settle) = run_to_idle(&mut engine, &ring, now);
        assert!(settle <= 30);
        assert_eq!(engine.offset().fract(), 0.0);
        // Coasting covers roughly one item from 5.01.
        assert_eq!(engine.current_index(&ring), Some(6));
    }

    /// Flicks toward the end of a three-item strip from offset 1.5 and
    /// coasts until deceleration ends, returning the peak offset and the
    /// offset at which coasting stopped.
    fn coast_into_end(engine: &mut MotionEngine, ring: &RingGeometry) -> (f64, f64, Duration) {
        engine.set_offset(1.5);
        engine.begin_drag(0.0);
        // 1000 points/s over 100-point items: 10 items/s toward the end.
        engine.update_drag(-1.0, -1000.0, ring);
        assert!(engine.end_drag(Duration::ZERO, ring).will_decelerate());

        let mut now = Duration::ZERO;
        let mut peak = engine.offset();
        for _ in 0..1000 {
            now += FRAME;
            let step = engine.tick(now, ring);
            peak = peak.max(engine.offset());
            if step.event == Some(MotionEvent::DecelerationEnded) {
                return (peak, engine.offset(), now);
            }
        }
        panic!("deceleration never ended");
    }

    #[test]
    fn coasting_past_the_end_stops_at_the_bounce_limit() {
        let ring = RingGeometry::new(3, false);
        let mut engine = engine();
        let bounce = engine.config().bounce_distance;
        let (peak, stopped_at, now) = coast_into_end(&mut engine, &ring);
        assert!(peak <= 2.0 + bounce + 1e-9, "overshot to {peak}");
        assert!((stopped_at - (2.0 + bounce)).abs() < 1e-9, "stopped at {stopped_at}");
        assert_eq!(engine.phase(), MotionPhase::AnimatingToTarget);

        run_to_idle(&mut engine, &ring, now);
        assert_eq!(engine.offset(), 2.0);
        assert_eq!(engine.current_index(&ring), Some(2));
    }

    #[test]
    fn coasting_without_bounce_stops_at_the_edge() {
        let ring = RingGeometry::new(3, false);
        let mut engine = MotionEngine::new(MotionConfig {
            item_width: 100.0,
            bounce_enabled: false,
            ..MotionConfig::default()
        });
        let (peak, stopped_at, _) = coast_into_end(&mut engine, &ring);
        assert!(peak <= 2.0, "overshot to {peak}");
        assert_eq!(stopped_at, 2.0);
        // Already resting on the last item, so no settling animation.
        assert_eq!(engine.phase(), MotionPhase::Idle);
    }

    #[test]
    fn fast_release_out_of_range_returns_to_nearest_item() {
        let ring = RingGeometry::new(3, false);
        let mut engine = engine();
        engine.begin_drag(0.0);
        engine.update_drag(50.0, 400.0, &ring);
        assert!(engine.offset() < 0.0);
        assert!(!engine.should_decelerate(&ring));
        assert_eq!(
            engine.end_drag(Duration::ZERO, &ring),
            Release::Animate { target: 0.0 }
        );
        run_to_idle(&mut engine, &ring, Duration::ZERO);
        assert_eq!(engine.offset(), 0.0);
    }

    #[test]
    fn rubber_band_damps_overscroll() {
        let ring = RingGeometry::new(3, false);
        let mut engine = engine();
        engine.begin_drag(0.0);
        engine.update_drag(50.0, 0.0, &ring);
        let first = engine.offset();
        assert!((first + 0.5).abs() < 1e-9);
        // Half a bounce distance over: the next 50 points only move a quarter item.
        engine.update_drag(100.0, 0.0, &ring);
        assert!((engine.offset() - first + 0.25).abs() < 1e-9);
        assert!((engine.bounce_factor(&ring) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn drag_is_clamped_without_bounce() {
        let ring = RingGeometry::new(3, false);
        let mut engine = MotionEngine::new(MotionConfig {
            item_width: 100.0,
            bounce_enabled: false,
            ..MotionConfig::default()
        });
        engine.begin_drag(0.0);
        engine.update_drag(500.0, 0.0, &ring);
        assert_eq!(engine.offset(), 0.0);
        engine.update_drag(-1000.0, 0.0, &ring);
        assert_eq!(engine.offset(), 2.0);
    }

    #[test]
    fn degenerate_width_ignores_drags() {
        let ring = RingGeometry::new(3, false);
        let mut engine = MotionEngine::default();
        engine.begin_drag(0.0);
        assert!(!engine.update_drag(-80.0, -1000.0, &ring));
        assert_eq!(engine.offset(), 0.0);
        assert_eq!(engine.end_drag(Duration::ZERO, &ring), Release::Idle);
    }

    #[test]
    fn set_offset_cancels_motion() {
        let ring = RingGeometry::new(5, true);
        let mut engine = engine();
        assert!(engine.animate_to(3.0, Duration::from_millis(400), Duration::ZERO, &ring));
        engine.tick(Duration::from_millis(100), &ring);
        assert_eq!(engine.phase(), MotionPhase::AnimatingToTarget);
        assert!(engine.set_offset(1.0));
        assert_eq!(engine.phase(), MotionPhase::Idle);
        assert_eq!(engine.offset(), 1.0);
        assert!(!engine.tick(Duration::from_secs(1), &ring).moved);
    }

    #[test]
    fn wrapping_animation_takes_the_short_way() {
        let ring = RingGeometry::new(5, true);
        let mut engine = engine();
        engine.set_offset(4.0);
        assert!(engine.animate_to(0.0, Duration::from_millis(400), Duration::ZERO, &ring));
        let step = engine.tick(Duration::from_millis(200), &ring);
        assert!(step.moved);
        // Halfway between 4 and 5, not between 4 and 0.
        assert!((engine.offset() - 4.5).abs() < 1e-9);
        let step = engine.tick(Duration::from_millis(400), &ring);
        assert_eq!(step.event, Some(MotionEvent::AnimationEnded));
        assert_eq!(engine.offset(), 0.0);
    }

    #[test]
    fn zero_duration_animation_jumps() {
        let ring = RingGeometry::new(5, true);
        let mut engine = engine();
        engine.set_offset(1.0);
        assert!(!engine.animate_to(7.0, Duration::ZERO, Duration::ZERO, &ring));
        assert_eq!(engine.offset(), 2.0);
        assert_eq!(engine.phase(), MotionPhase::Idle);
    }

    #[test]
    fn animate_by_keeps_direction_when_wrapping() {
        let ring = RingGeometry::new(5, true);
        let mut engine = engine();
        engine.set_offset(1.0);
        // `animate_to` would go backwards by two; `animate_by` goes forward by three.
        assert!(engine.animate_by(3.0, Duration::from_millis(400), Duration::ZERO, &ring));
        engine.tick(Duration::from_millis(200), &ring);
        assert!((engine.offset() - 2.5).abs() < 1e-9);
        run_to_idle(&mut engine, &ring, Duration::from_millis(200));
        assert_eq!(engine.offset(), 4.0);
    }

    #[test]
    fn non_wrapping_targets_are_clamped() {
        let ring = RingGeometry::new(5, false);
        let mut engine = engine();
        assert!(engine.animate_to(9.0, Duration::from_millis(400), Duration::ZERO, &ring));
        run_to_idle(&mut engine, &ring, Duration::ZERO);
        assert_eq!(engine.offset(), 4.0);
    }

    #[test]
    fn new_drag_interrupts_and_discards_velocity() {
        let ring = RingGeometry::new(10, true);
        let mut engine = engine();
        engine.begin_drag(0.0);
        engine.update_drag(-10.0, -500.0, &ring);
        assert!(engine.end_drag(Duration::ZERO, &ring).will_decelerate());
        engine.tick(FRAME, &ring);
        engine.begin_drag(0.0);
        assert_eq!(engine.phase(), MotionPhase::Dragging);
        assert_eq!(engine.start_velocity(), 0.0);
        assert!(!engine.tick(FRAME * 2, &ring).moved);
    }

    #[test]
    fn flick_without_coasting_steps_one_item() {
        let ring = RingGeometry::new(4, false);
        // A heavy rate makes the projected coast shorter than the threshold.
        let mut engine = MotionEngine::new(MotionConfig {
            item_width: 100.0,
            deceleration_rate: 0.01,
            ..MotionConfig::default()
        });
        engine.set_offset(1.0);
        engine.begin_drag(0.0);
        engine.update_drag(-20.0, -400.0, &ring);
        assert!(engine.coast_distance() < 0.1);
        assert!(!engine.should_decelerate(&ring));
        assert!(engine.should_scroll(&ring));
        assert_eq!(
            engine.end_drag(Duration::ZERO, &ring),
            Release::Animate { target: 2.0 }
        );
        run_to_idle(&mut engine, &ring, Duration::ZERO);
        assert_eq!(engine.offset(), 2.0);
    }

    #[test]
    fn empty_ring_is_inert() {
        let ring = RingGeometry::new(0, true);
        let mut engine = engine();
        engine.begin_drag(0.0);
        assert!(!engine.update_drag(-50.0, -900.0, &ring));
        assert_eq!(engine.end_drag(Duration::ZERO, &ring), Release::Idle);
        assert!(!engine.animate_to(2.0, Duration::from_millis(100), Duration::ZERO, &ring));
        assert_eq!(engine.current_index(&ring), None);
    }
}
