// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use thiserror::Error;

/// A rejected [`CarouselConfig`](crate::CarouselConfig) value.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The deceleration rate must lie strictly between 0 and 1.
    #[error("deceleration rate must lie in (0, 1), got {0}")]
    DecelerationRate(f64),
    /// The item width must be finite and non-negative.
    #[error("item width must be finite and non-negative, got {0}")]
    ItemWidth(f64),
    /// The named field must be finite.
    #[error("`{0}` must be finite")]
    NonFinite(&'static str),
}

/// Errors reported by [`Carousel`](crate::Carousel) operations.
///
/// Gesture input never fails; these cover programmatic misuse only.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CarouselError {
    /// An item index outside the valid range. Indices are rejected, never clamped.
    #[error("item index {index} is out of range for {count} items")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// Number of items at the time of the call.
        count: usize,
    },
    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
