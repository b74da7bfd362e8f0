// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel Motion: the scroll-offset state machine behind a carousel.
//!
//! [`MotionEngine`] owns the continuous scroll offset and moves it in
//! response to discrete input and periodic ticks. It is in exactly one
//! [`MotionState`] at a time:
//!
//! - `Idle`: at rest.
//! - `Dragging`: following a pointer; offset changes are damped near the ends
//!   of a non-wrapping strip (rubber-banding).
//! - `Decelerating`: coasting after a fast release; velocity decays
//!   exponentially until it drops below a threshold, then the engine settles
//!   on the nearest item.
//! - `AnimatingToTarget`: an eased, time-based move to a target offset. When
//!   wrapping, the move takes the shorter way around the ring.
//!
//! Starting a drag or a new animation cancels whatever motion was in flight;
//! residual velocity is discarded rather than blended. Setting the offset
//! directly always returns to `Idle`.
//!
//! Time is supplied by the caller as a [`Duration`](core::time::Duration)
//! read from a monotonic clock. The engine never reads a clock itself, which
//! keeps it deterministic under test.
//!
//! ```rust
//! use core::time::Duration;
//! use carousel_geometry::RingGeometry;
//! use carousel_motion::{MotionConfig, MotionEngine, MotionPhase};
//!
//! let ring = RingGeometry::new(5, false);
//! let mut engine = MotionEngine::new(MotionConfig {
//!     item_width: 100.0,
//!     ..MotionConfig::default()
//! });
//!
//! // Drag left by 30 points, slowly, then let go.
//! engine.begin_drag(0.0);
//! engine.update_drag(-30.0, -10.0, &ring);
//! assert!((engine.offset() - 0.3).abs() < 1e-9);
//! engine.end_drag(Duration::ZERO, &ring);
//! assert_eq!(engine.phase(), MotionPhase::AnimatingToTarget);
//!
//! // Tick until the snap back to item 0 completes.
//! let mut now = Duration::ZERO;
//! while engine.phase() != MotionPhase::Idle {
//!     now += Duration::from_millis(16);
//!     engine.tick(now, &ring);
//! }
//! assert_eq!(engine.offset(), 0.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod config;
mod engine;
mod tween;

pub use config::{
    DECELERATE_THRESHOLD, DECELERATION_MULTIPLIER, DEFAULT_BOUNCE_DISTANCE,
    DEFAULT_DECELERATION_RATE, INSERT_DURATION, MotionConfig, SCROLL_DURATION,
    SCROLL_SPEED_THRESHOLD,
};
pub use engine::{Deceleration, MotionEngine, MotionEvent, MotionPhase, MotionState, Release, Step};
pub use tween::{Tween, ease_in_out};
