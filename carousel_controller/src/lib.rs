// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel Controller: a headless carousel over host-supplied views.
//!
//! A [`Carousel`] scrolls a horizontal run of items, optionally wrapping
//! into a ring. It never draws anything. Three host-implemented traits
//! connect it to the outside world:
//!
//! - [`ContentProvider`] reports the item count and hands out item views,
//!   reusing pooled ones when it can.
//! - [`RenderSurface`] attaches views, applies each [`Placement`], restacks
//!   views by depth, hit-tests points, and delivers input.
//! - [`EventSink`] hears about scrolling, selection, and drag lifecycle, and
//!   may override [`CarouselOption`]s per instance.
//!
//! Only the items around the focused one keep a bound view. As the offset
//! moves, views leaving that window go back to a recycle pool and are
//! offered to the content provider for the items coming into view.
//!
//! Input arrives as [`InputEvent`]s, and time as a monotonic
//! [`Duration`](core::time::Duration) passed to every call that may animate.
//! The host calls [`Carousel::tick`] each frame while motion is in progress.
//!
//! ```rust
//! use core::time::Duration;
//! use carousel_controller::{
//!     Carousel, CarouselConfig, ContentProvider, InputEvent, InputKinds, MotionPhase, Placement,
//!     RenderSurface, SwipeDirection, Transform3D,
//! };
//! use kurbo::Point;
//!
//! /// Views are plain ids.
//! struct Cards {
//!     count: usize,
//!     created: u32,
//! }
//!
//! impl ContentProvider<u32> for Cards {
//!     fn item_count(&self) -> usize {
//!         self.count
//!     }
//!
//!     fn view_for_item(&mut self, _index: usize, reusable: Option<u32>) -> Option<u32> {
//!         Some(reusable.unwrap_or_else(|| {
//!             self.created += 1;
//!             self.created
//!         }))
//!     }
//! }
//!
//! /// Remembers where each view was put.
//! #[derive(Default)]
//! struct Canvas {
//!     placed: Vec<(u32, Placement)>,
//! }
//!
//! impl RenderSurface<u32> for Canvas {
//!     type Subscription = ();
//!
//!     fn attach(&mut self, _: &u32, _: usize) {}
//!     fn detach(&mut self, view: &u32) {
//!         self.placed.retain(|(v, _)| v != view);
//!     }
//!     fn make_placeholder(&mut self, _: usize) -> u32 {
//!         0
//!     }
//!     fn begin_batch(&mut self, _: Option<Duration>) {}
//!     fn place(&mut self, view: &u32, placement: &Placement) {
//!         self.placed.retain(|(v, _)| v != view);
//!         self.placed.push((*view, *placement));
//!     }
//!     fn end_batch(&mut self) {}
//!     fn apply_depth_order(&mut self, _: &[u32]) {}
//!     fn transform_of(&self, view: &u32) -> Option<Transform3D> {
//!         let (_, p) = self.placed.iter().find(|(v, _)| v == view)?;
//!         Some(Transform3D::translation(p.translation.x, 0.0, -p.offset.abs()))
//!     }
//!     fn hit_test(&self, _: &u32, _: Point) -> bool {
//!         false
//!     }
//!     fn attach_input(&mut self, _: InputKinds) {}
//!     fn detach_input(&mut self, _: ()) {}
//! }
//!
//! let config = CarouselConfig::RING.with_item_width(200.0);
//! let cards = Cards { count: 12, created: 0 };
//! let mut carousel = Carousel::new(config, cards, Canvas::default(), ()).unwrap();
//!
//! // Only the window around item 0 is bound, wrapping across the seam.
//! assert_eq!(carousel.visible_indices(), [0, 1, 2, 3, 9, 10, 11]);
//!
//! // Swiping right from the first item wraps to the last.
//! let mut now = Duration::ZERO;
//! carousel.handle_input(InputEvent::Swipe(SwipeDirection::Right), now);
//! while carousel.motion_phase() != MotionPhase::Idle {
//!     now += Duration::from_millis(16);
//!     carousel.tick(now);
//! }
//! assert_eq!(carousel.current_item_index(), Some(11));
//! assert_eq!(carousel.content().created, 7);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod carousel;
mod config;
mod error;
mod host;
mod input;
mod placement;

pub use carousel::Carousel;
pub use config::{CarouselConfig, CarouselOption, MAX_SCALE, MIN_SCALE};
pub use error::{CarouselError, ConfigError};
pub use host::{
    ContentProvider, EventSink, MAX_ANCESTOR_DEPTH, NoParent, ParentLookup, RenderSurface,
    find_ancestor,
};
pub use input::{InputEvent, InputKinds, SwipeDirection};
pub use placement::{Placement, alpha_for_offset, scale_for_offset};

pub use carousel_depth::Transform3D;
pub use carousel_motion::MotionPhase;
pub use carousel_registry::{ItemRegistry, RecyclePool};
