// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based eased interpolation between two offsets.

use core::time::Duration;

/// Cubic ease-in-out over `t` in `[0, 1]`.
///
/// Inputs outside the unit interval are clamped.
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        0.5 * u * u * u + 1.0
    }
}

/// An eased move from `start_offset` to `end_offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Offset when the move began.
    pub start_offset: f64,
    /// Offset the move ends on. May lie outside the clamped range while
    /// wrapping; it is normalized once the move completes.
    pub end_offset: f64,
    /// Clock reading when the move began.
    pub start_time: Duration,
    /// Total length of the move.
    pub duration: Duration,
}

impl Tween {
    /// Fraction of the move elapsed at `now`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start_time);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Eased offset at `now`.
    #[must_use]
    pub fn sample(&self, now: Duration) -> f64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.end_offset;
        }
        self.start_offset + (self.end_offset - self.start_offset) * ease_in_out(t)
    }

    /// Returns `true` once `now` reaches the end of the move.
    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::{Tween, ease_in_out};

    #[test]
    fn easing_is_anchored_and_symmetric() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-12);
        for i in 1..10 {
            let t = f64::from(i) / 10.0;
            let mirrored = 1.0 - ease_in_out(1.0 - t);
            assert!((ease_in_out(t) - mirrored).abs() < 1e-12, "t = {t}");
        }
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(7.0), 1.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = ease_in_out(f64::from(i) / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn tween_samples_over_its_duration() {
        let tween = Tween {
            start_offset: 1.0,
            end_offset: 3.0,
            start_time: Duration::from_millis(100),
            duration: Duration::from_millis(400),
        };
        assert_eq!(tween.sample(Duration::ZERO), 1.0);
        assert!((tween.sample(Duration::from_millis(300)) - 2.0).abs() < 1e-9);
        assert!(!tween.is_finished(Duration::from_millis(499)));
        assert!(tween.is_finished(Duration::from_millis(500)));
        assert_eq!(tween.sample(Duration::from_secs(10)), 3.0);
    }

    #[test]
    fn zero_duration_is_immediately_finished() {
        let tween = Tween {
            start_offset: 0.0,
            end_offset: 2.0,
            start_time: Duration::from_secs(1),
            duration: Duration::ZERO,
        };
        assert!(tween.is_finished(Duration::ZERO));
        assert_eq!(tween.sample(Duration::ZERO), 2.0);
    }
}
