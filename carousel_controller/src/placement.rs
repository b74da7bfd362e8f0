// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item presentation values pushed to the render surface.

use kurbo::Vec2;

use crate::CarouselConfig;

/// Where and how to present one item view.
///
/// The controller computes a flat layout; hosts are free to derive a richer
/// 3D transform from [`offset`](Self::offset), as long as what they report
/// back through [`RenderSurface::transform_of`](crate::RenderSurface::transform_of)
/// reflects what they drew.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Item index.
    pub index: usize,
    /// Signed distance from the scroll position, in items. Folded across the
    /// seam when wrapping.
    pub offset: f64,
    /// Translation from the carousel origin, in points.
    pub translation: Vec2,
    /// Uniform scale.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Whether the item should be shown at all.
    pub visible: bool,
}

impl Placement {
    /// Placement of item `index` at relative `offset` under `config`.
    #[must_use]
    pub fn new(index: usize, offset: f64, config: &CarouselConfig) -> Self {
        let alpha = alpha_for_offset(offset, config);
        Self {
            index,
            offset,
            translation: Vec2::new(offset * config.slot_width(), 0.0) + config.content_offset,
            scale: scale_for_offset(offset, config.min_scale, config.max_scale),
            alpha,
            visible: alpha > 0.0,
        }
    }
}

/// Opacity of an item at relative `offset`.
///
/// Fully opaque between `fade_min` and `fade_max`, then falling linearly to
/// `fade_min_alpha` over `fade_range` items.
#[must_use]
pub fn alpha_for_offset(offset: f64, config: &CarouselConfig) -> f64 {
    let past = if offset > config.fade_max {
        offset - config.fade_max
    } else if offset < config.fade_min {
        config.fade_min - offset
    } else {
        0.0
    };
    if past <= 0.0 {
        return 1.0;
    }
    if config.fade_range <= 0.0 {
        return config.fade_min_alpha.clamp(0.0, 1.0);
    }
    let faded = past.min(config.fade_range) / config.fade_range;
    (1.0 - faded * (1.0 - config.fade_min_alpha)).clamp(0.0, 1.0)
}

/// Scale of an item at relative `offset`: `max` at the focused slot, falling
/// linearly to `min` one slot away.
#[must_use]
pub fn scale_for_offset(offset: f64, min: f64, max: f64) -> f64 {
    let distance = offset.abs().min(1.0);
    max - (max - min) * distance
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{Placement, alpha_for_offset, scale_for_offset};
    use crate::CarouselConfig;

    #[test]
    fn scale_peaks_at_the_focused_slot() {
        assert_eq!(scale_for_offset(0.0, 0.75, 1.1), 1.1);
        assert!((scale_for_offset(0.5, 0.75, 1.1) - 0.925).abs() < 1e-12);
        assert_eq!(scale_for_offset(-1.0, 0.75, 1.1), 0.75);
        assert_eq!(scale_for_offset(3.0, 0.75, 1.1), 0.75);
    }

    #[test]
    fn fade_window() {
        let config = CarouselConfig {
            fade_min: -1.0,
            fade_max: 1.0,
            fade_range: 2.0,
            fade_min_alpha: 0.2,
            ..CarouselConfig::STRIP
        };
        assert_eq!(alpha_for_offset(0.0, &config), 1.0);
        assert_eq!(alpha_for_offset(1.0, &config), 1.0);
        assert!((alpha_for_offset(2.0, &config) - 0.6).abs() < 1e-12);
        assert!((alpha_for_offset(-3.0, &config) - 0.2).abs() < 1e-12);
        assert!((alpha_for_offset(-9.0, &config) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn default_config_never_fades() {
        let config = CarouselConfig::RING;
        assert_eq!(alpha_for_offset(-40.0, &config), 1.0);
        assert_eq!(alpha_for_offset(40.0, &config), 1.0);
    }

    #[test]
    fn placement_translates_by_slot_and_content_offset() {
        let config = CarouselConfig {
            item_spacing: 10.0,
            content_offset: Vec2::new(5.0, -2.0),
            fade_max: 1.0,
            fade_range: 1.0,
            ..CarouselConfig::STRIP.with_item_width(90.0)
        };
        let p = Placement::new(3, -1.5, &config);
        assert_eq!(p.translation, Vec2::new(-145.0, -2.0));
        assert_eq!(p.scale, config.min_scale);
        assert!(p.visible);

        let gone = Placement::new(4, 2.0, &config);
        assert_eq!(gone.alpha, 0.0);
        assert!(!gone.visible);
    }
}
