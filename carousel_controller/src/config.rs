// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration and per-instance option overrides.

use core::time::Duration;

use carousel_motion::{
    DEFAULT_BOUNCE_DISTANCE, DEFAULT_DECELERATION_RATE, INSERT_DURATION, MotionConfig,
    SCROLL_DURATION,
};
use kurbo::Vec2;

use crate::ConfigError;

/// Scale of the focused item.
pub const MAX_SCALE: f64 = 1.1;

/// Scale of items one slot or more away from the focused item.
pub const MIN_SCALE: f64 = 0.75;

/// Options an [`EventSink`](crate::EventSink) may override per instance.
///
/// Overrides are resolved on every [`Carousel::reload`](crate::Carousel::reload).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CarouselOption {
    /// Wrap-around; non-zero enables it.
    Wrap,
    /// Number of items visible around the focused one.
    VisibleItems,
    /// Gap between item slots, in points.
    Spacing,
    /// Offset below which items start fading.
    FadeMin,
    /// Offset above which items start fading.
    FadeMax,
    /// Distance over which items fade to the minimum alpha.
    FadeRange,
    /// Alpha of fully faded items.
    FadeMinAlpha,
    /// Scale from drag translation to offset change.
    OffsetMultiplier,
    /// Width of an item, in points.
    ItemWidth,
}

impl CarouselOption {
    /// Every option, in resolution order.
    pub const ALL: [Self; 9] = [
        Self::Wrap,
        Self::VisibleItems,
        Self::Spacing,
        Self::FadeMin,
        Self::FadeMax,
        Self::FadeRange,
        Self::FadeMinAlpha,
        Self::OffsetMultiplier,
        Self::ItemWidth,
    ];
}

/// Behaviour and presentation settings for a [`Carousel`](crate::Carousel).
///
/// Offsets and distances named "in items" are in units of one item slot;
/// widths and spacing are in points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CarouselConfig {
    /// Treat items as a ring.
    pub wrap_enabled: bool,
    /// Allow dragging past the ends of a non-wrapping strip.
    pub bounce_enabled: bool,
    /// Accept pans and swipes.
    pub scroll_enabled: bool,
    /// Number of items kept loaded on each side is `ceil(visible_item_count / 2)`.
    pub visible_item_count: usize,
    /// Gap between item slots, in points.
    pub item_spacing: f64,
    /// Width of an item, in points. Drags are ignored while this is zero.
    pub item_width: f64,
    /// Fraction of velocity kept per 60 Hz frame while decelerating.
    pub deceleration_rate: f64,
    /// Scale from drag translation to offset change.
    pub offset_multiplier: f64,
    /// Scale from release velocity to coasting velocity.
    pub scroll_speed: f64,
    /// Maximum overscroll in items when bouncing.
    pub bounce_distance: f64,
    /// Length of animated scrolls.
    pub scroll_duration: Duration,
    /// Length of the layout animation after an insertion or removal.
    pub insert_duration: Duration,
    /// Offset below which items start fading.
    pub fade_min: f64,
    /// Offset above which items start fading.
    pub fade_max: f64,
    /// Distance in items over which a fading item reaches `fade_min_alpha`.
    pub fade_range: f64,
    /// Alpha of fully faded items.
    pub fade_min_alpha: f64,
    /// Scale of items one slot or more away from the focused one.
    pub min_scale: f64,
    /// Scale of the focused item.
    pub max_scale: f64,
    /// Translation added to every placement, in points.
    pub content_offset: Vec2,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::RING
    }
}

impl CarouselConfig {
    /// A wrapping ring with no fading.
    pub const RING: Self = Self {
        wrap_enabled: true,
        bounce_enabled: true,
        scroll_enabled: true,
        visible_item_count: 5,
        item_spacing: 0.0,
        item_width: 0.0,
        deceleration_rate: DEFAULT_DECELERATION_RATE,
        offset_multiplier: 1.0,
        scroll_speed: 1.0,
        bounce_distance: DEFAULT_BOUNCE_DISTANCE,
        scroll_duration: SCROLL_DURATION,
        insert_duration: INSERT_DURATION,
        fade_min: f64::NEG_INFINITY,
        fade_max: f64::INFINITY,
        fade_range: 1.0,
        fade_min_alpha: 0.0,
        min_scale: MIN_SCALE,
        max_scale: MAX_SCALE,
        content_offset: Vec2::ZERO,
    };

    /// A bounded strip that rubber-bands at both ends.
    pub const STRIP: Self = Self {
        wrap_enabled: false,
        ..Self::RING
    };

    /// Returns this configuration with `item_width` replaced.
    #[must_use]
    pub const fn with_item_width(mut self, item_width: f64) -> Self {
        self.item_width = item_width;
        self
    }

    /// Width of one item slot, item plus spacing, in points.
    #[must_use]
    pub fn slot_width(&self) -> f64 {
        self.item_width + self.item_spacing
    }

    /// Checks every field for a usable value.
    ///
    /// The fade bounds may be infinite but not NaN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.item_width.is_finite() && self.item_width >= 0.0) {
            return Err(ConfigError::ItemWidth(self.item_width));
        }
        if !(self.deceleration_rate > 0.0 && self.deceleration_rate < 1.0) {
            return Err(ConfigError::DecelerationRate(self.deceleration_rate));
        }
        let finite = [
            ("item_spacing", self.item_spacing),
            ("offset_multiplier", self.offset_multiplier),
            ("scroll_speed", self.scroll_speed),
            ("bounce_distance", self.bounce_distance),
            ("fade_range", self.fade_range),
            ("fade_min_alpha", self.fade_min_alpha),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("content_offset.x", self.content_offset.x),
            ("content_offset.y", self.content_offset.y),
        ];
        if let Some(&(name, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite(name));
        }
        if self.fade_min.is_nan() {
            return Err(ConfigError::NonFinite("fade_min"));
        }
        if self.fade_max.is_nan() {
            return Err(ConfigError::NonFinite("fade_max"));
        }
        Ok(())
    }

    /// Current value of an overridable option.
    #[must_use]
    pub fn option(&self, option: CarouselOption) -> f64 {
        match option {
            CarouselOption::Wrap => {
                if self.wrap_enabled {
                    1.0
                } else {
                    0.0
                }
            }
            CarouselOption::VisibleItems => self.visible_item_count as f64,
            CarouselOption::Spacing => self.item_spacing,
            CarouselOption::FadeMin => self.fade_min,
            CarouselOption::FadeMax => self.fade_max,
            CarouselOption::FadeRange => self.fade_range,
            CarouselOption::FadeMinAlpha => self.fade_min_alpha,
            CarouselOption::OffsetMultiplier => self.offset_multiplier,
            CarouselOption::ItemWidth => self.item_width,
        }
    }

    /// Overrides an option.
    ///
    /// Visible item counts are rounded and saturate at zero.
    pub fn set_option(&mut self, option: CarouselOption, value: f64) {
        match option {
            CarouselOption::Wrap => self.wrap_enabled = value != 0.0,
            CarouselOption::VisibleItems => {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "Float to usize casts saturate, and visible counts are small."
                )]
                let count = value.max(0.0).round() as usize;
                self.visible_item_count = count;
            }
            CarouselOption::Spacing => self.item_spacing = value,
            CarouselOption::FadeMin => self.fade_min = value,
            CarouselOption::FadeMax => self.fade_max = value,
            CarouselOption::FadeRange => self.fade_range = value,
            CarouselOption::FadeMinAlpha => self.fade_min_alpha = value,
            CarouselOption::OffsetMultiplier => self.offset_multiplier = value,
            CarouselOption::ItemWidth => self.item_width = value,
        }
    }

    /// Motion tunables derived from this configuration.
    ///
    /// Drags are converted using the full slot width so the focused item
    /// tracks the pointer.
    #[must_use]
    pub fn motion_config(&self) -> MotionConfig {
        MotionConfig {
            item_width: self.slot_width(),
            offset_multiplier: self.offset_multiplier,
            scroll_speed: self.scroll_speed,
            bounce_enabled: self.bounce_enabled,
            bounce_distance: self.bounce_distance,
            deceleration_rate: self.deceleration_rate,
            scroll_duration: self.scroll_duration,
            ..MotionConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{CarouselConfig, CarouselOption};
    use crate::ConfigError;

    #[test]
    fn presets_are_valid() {
        assert_eq!(CarouselConfig::RING.validate(), Ok(()));
        assert_eq!(CarouselConfig::STRIP.validate(), Ok(()));
        assert!(CarouselConfig::default().wrap_enabled);
        assert!(!CarouselConfig::STRIP.wrap_enabled);
    }

    #[test]
    fn validation_rejects_bad_values() {
        let bad_rate = CarouselConfig {
            deceleration_rate: 1.0,
            ..CarouselConfig::RING
        };
        assert_eq!(
            bad_rate.validate(),
            Err(ConfigError::DecelerationRate(1.0))
        );

        let bad_width = CarouselConfig::RING.with_item_width(-3.0);
        assert_eq!(bad_width.validate(), Err(ConfigError::ItemWidth(-3.0)));

        let bad_offset = CarouselConfig {
            content_offset: Vec2::new(0.0, f64::NAN),
            ..CarouselConfig::RING
        };
        assert_eq!(
            bad_offset.validate(),
            Err(ConfigError::NonFinite("content_offset.y"))
        );
    }

    #[test]
    fn options_round_trip_through_the_config() {
        let mut config = CarouselConfig::STRIP;
        for option in CarouselOption::ALL {
            let value = config.option(option);
            config.set_option(option, value);
        }
        assert_eq!(config, CarouselConfig::STRIP);

        config.set_option(CarouselOption::Wrap, 1.0);
        config.set_option(CarouselOption::VisibleItems, -4.0);
        config.set_option(CarouselOption::Spacing, 12.0);
        assert!(config.wrap_enabled);
        assert_eq!(config.visible_item_count, 0);
        assert_eq!(config.option(CarouselOption::Spacing), 12.0);
    }

    #[test]
    fn motion_uses_the_slot_width() {
        let config = CarouselConfig {
            item_spacing: 20.0,
            ..CarouselConfig::STRIP.with_item_width(100.0)
        };
        let motion = config.motion_config();
        assert_eq!(motion.item_width, 120.0);
        assert!(motion.bounce_enabled);
    }
}
