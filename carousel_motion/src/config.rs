// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Motion tunables and their defaults.

use core::time::Duration;

/// Per-second decay exponent scale: one deceleration `rate` factor per 60 Hz frame.
pub const DECELERATION_MULTIPLIER: f64 = 60.0;

/// Release speed, in items per second, above which a drag flicks to the next item.
pub const SCROLL_SPEED_THRESHOLD: f64 = 2.0;

/// Speed, in items per second, below which deceleration stops. Also the
/// minimum projected coasting distance, in items, for a release to coast.
pub const DECELERATE_THRESHOLD: f64 = 0.1;

/// Default length of a programmatic scroll or settle animation.
pub const SCROLL_DURATION: Duration = Duration::from_millis(400);

/// Default length of the layout animation after an insertion or removal.
pub const INSERT_DURATION: Duration = Duration::from_millis(400);

/// Default fraction of velocity kept per 60 Hz frame while decelerating.
pub const DEFAULT_DECELERATION_RATE: f64 = 0.95;

/// Default maximum overscroll, in items, before rubber-banding stops movement.
pub const DEFAULT_BOUNCE_DISTANCE: f64 = 1.0;

/// Tunables for a [`MotionEngine`](crate::MotionEngine).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Width of one item slot in points. Converts drag translation to items.
    pub item_width: f64,
    /// Scales drag translation into offset change.
    pub offset_multiplier: f64,
    /// Scales release velocity into start velocity.
    pub scroll_speed: f64,
    /// Whether a non-wrapping strip may be dragged past its ends.
    pub bounce_enabled: bool,
    /// Maximum overscroll in items when bouncing.
    pub bounce_distance: f64,
    /// Fraction of velocity kept per 60 Hz frame while decelerating.
    pub deceleration_rate: f64,
    /// See [`DECELERATION_MULTIPLIER`].
    pub deceleration_multiplier: f64,
    /// See [`SCROLL_SPEED_THRESHOLD`].
    pub scroll_speed_threshold: f64,
    /// See [`DECELERATE_THRESHOLD`].
    pub decelerate_threshold: f64,
    /// Length of settle animations started by the engine itself.
    pub scroll_duration: Duration,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            item_width: 0.0,
            offset_multiplier: 1.0,
            scroll_speed: 1.0,
            bounce_enabled: true,
            bounce_distance: DEFAULT_BOUNCE_DISTANCE,
            deceleration_rate: DEFAULT_DECELERATION_RATE,
            deceleration_multiplier: DECELERATION_MULTIPLIER,
            scroll_speed_threshold: SCROLL_SPEED_THRESHOLD,
            decelerate_threshold: DECELERATE_THRESHOLD,
            scroll_duration: SCROLL_DURATION,
        }
    }
}
