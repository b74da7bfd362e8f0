// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete input events and input kinds.

use kurbo::{Point, Vec2};

bitflags::bitflags! {
    /// Kinds of input a carousel subscribes to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InputKinds: u8 {
        /// Dragging (pan) gestures.
        const PAN   = 0b0000_0001;
        /// Left and right swipes.
        const SWIPE = 0b0000_0010;
        /// Taps.
        const TAP   = 0b0000_0100;
    }
}

impl Default for InputKinds {
    fn default() -> Self {
        Self::all()
    }
}

/// Direction of a swipe gesture, named by finger movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Finger moved left: advance to the next item.
    Left,
    /// Finger moved right: go back to the previous item.
    Right,
}

/// A discrete input event delivered by the host.
///
/// Drag translations are cumulative since the drag began, in points. Only
/// the x components move the carousel; y is consulted to reject
/// vertical-dominant drags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A drag started.
    DragBegin {
        /// Translation when the gesture was recognized.
        translation: Vec2,
    },
    /// A drag moved.
    DragUpdate {
        /// Cumulative translation.
        translation: Vec2,
        /// Instantaneous velocity in points per second.
        velocity: Vec2,
    },
    /// The drag was released or cancelled.
    DragEnd,
    /// A swipe was recognized.
    Swipe(SwipeDirection),
    /// A tap at a point in the carousel's content coordinates.
    Tap(Point),
}

impl InputEvent {
    /// The input kind that must be enabled for this event to be handled.
    #[must_use]
    pub const fn kind(&self) -> InputKinds {
        match self {
            Self::DragBegin { .. } | Self::DragUpdate { .. } | Self::DragEnd => InputKinds::PAN,
            Self::Swipe(_) => InputKinds::SWIPE,
            Self::Tap(_) => InputKinds::TAP,
        }
    }
}
