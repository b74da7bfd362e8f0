// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted carousel session against a text-only host.
//!
//! The host keeps views in an arena, records placements, and prints the
//! strip after each step. Input is replayed from a fixed script with a
//! simulated 60 Hz clock, so the output is the same on every run.
//!
//! Run:
//! - `cargo run -p carousel_demos --example headless_ring`
//! - `RUST_LOG=carousel_motion=debug cargo run -p carousel_demos --example headless_ring`

use std::collections::HashMap;
use std::time::Duration;

use carousel_controller::{
    Carousel, CarouselConfig, CarouselOption, ContentProvider, EventSink, InputEvent, InputKinds,
    MotionPhase, Placement, RenderSurface, SwipeDirection, Transform3D,
};
use kurbo::{Point, Rect, Vec2};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_micros(16_667);
const CARD_WIDTH: f64 = 160.0;
const CARD_HEIGHT: f64 = 220.0;

/// Titles, plus an arena of card views labelled with the item they show.
struct Deck {
    titles: Vec<String>,
    cards: Vec<usize>,
}

impl Deck {
    fn new(titles: &[&str]) -> Self {
        Self {
            titles: titles.iter().map(|t| (*t).to_owned()).collect(),
            cards: Vec::new(),
        }
    }
}

impl ContentProvider<usize> for Deck {
    fn item_count(&self) -> usize {
        self.titles.len()
    }

    fn view_for_item(&mut self, index: usize, reusable: Option<usize>) -> Option<usize> {
        let card = reusable.unwrap_or_else(|| {
            self.cards.push(index);
            self.cards.len() - 1
        });
        self.cards[card] = index;
        Some(card)
    }
}

/// Records where each card is drawn.
#[derive(Default)]
struct Stage {
    placements: HashMap<usize, Placement>,
    stacking: Vec<usize>,
    subscriptions: u32,
}

impl Stage {
    fn frame_of(&self, card: usize) -> Option<Rect> {
        let p = self.placements.get(&card)?;
        let center = Point::new(p.translation.x, p.translation.y);
        Some(Rect::from_center_size(
            center,
            (CARD_WIDTH * p.scale, CARD_HEIGHT * p.scale),
        ))
    }
}

impl RenderSurface<usize> for Stage {
    type Subscription = u32;

    fn attach(&mut self, card: &usize, index: usize) {
        tracing::debug!(card, index, "attach");
    }

    fn detach(&mut self, card: &usize) {
        self.placements.remove(card);
    }

    fn make_placeholder(&mut self, _: usize) -> usize {
        usize::MAX
    }

    fn begin_batch(&mut self, animation: Option<Duration>) {
        if let Some(duration) = animation {
            tracing::info!(?duration, "animated relayout");
        }
    }

    fn place(&mut self, card: &usize, placement: &Placement) {
        self.placements.insert(*card, *placement);
    }

    fn end_batch(&mut self) {}

    fn apply_depth_order(&mut self, back_to_front: &[usize]) {
        self.stacking = back_to_front.to_vec();
    }

    fn transform_of(&self, card: &usize) -> Option<Transform3D> {
        let p = self.placements.get(card)?;
        // Cards recede as they move away from the middle.
        Some(Transform3D::translation(
            p.translation.x,
            p.translation.y,
            -p.offset.abs() * 50.0,
        ))
    }

    fn hit_test(&self, card: &usize, point: Point) -> bool {
        self.frame_of(*card).is_some_and(|frame| frame.contains(point))
    }

    fn attach_input(&mut self, kinds: InputKinds) -> u32 {
        self.subscriptions += 1;
        tracing::debug!(?kinds, id = self.subscriptions, "input attached");
        self.subscriptions
    }

    fn detach_input(&mut self, id: u32) {
        tracing::debug!(id, "input detached");
    }
}

/// Prints notifications and fades distant cards.
struct Log;

impl EventSink for Log {
    fn on_select(&mut self, index: usize) {
        println!("  selected item {index}");
    }

    fn on_current_item_changed(&mut self, index: Option<usize>) {
        println!("  current item is now {index:?}");
    }

    fn on_drag_end(&mut self, will_decelerate: bool) {
        println!("  drag ended, coasting: {will_decelerate}");
    }

    fn on_deceleration_end(&mut self) {
        println!("  coasting ended");
    }

    fn on_scroll_animation_end(&mut self) {
        println!("  scroll animation ended");
    }

    fn value_for_option(&self, option: CarouselOption, default: f64) -> f64 {
        match option {
            CarouselOption::FadeMin => -1.0,
            CarouselOption::FadeMax => 1.0,
            CarouselOption::FadeRange => 2.0,
            CarouselOption::FadeMinAlpha => 0.2,
            _ => default,
        }
    }
}

type Ring = Carousel<usize, Deck, Stage, Log>;

fn settle(carousel: &mut Ring, now: &mut Duration) {
    let mut frames = 0;
    while carousel.motion_phase() != MotionPhase::Idle {
        *now += FRAME;
        carousel.tick(*now);
        frames += 1;
    }
    println!("  settled after {frames} frames");
}

fn show(step: &str, carousel: &Ring) {
    println!(
        "{step}: offset {:.3}, current {:?}",
        carousel.scroll_offset(),
        carousel.current_item_index()
    );
    let stage = carousel.surface();
    for index in carousel.visible_indices() {
        let Some(card) = carousel.registry().item_at(index) else {
            continue;
        };
        let Some(p) = stage.placements.get(card) else {
            continue;
        };
        let depth = stage.stacking.iter().position(|c| c == card).unwrap_or(0);
        println!(
            "    {:>2} {:<10} x {:>7.1}  scale {:.2}  alpha {:.2}  layer {depth}",
            index,
            carousel.content().titles[index],
            p.translation.x,
            p.scale,
            p.alpha,
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let deck = Deck::new(&[
        "Aurora", "Basalt", "Cinder", "Delta", "Ember", "Fjord", "Glacier", "Harbor",
    ]);
    let config = CarouselConfig {
        item_spacing: 20.0,
        ..CarouselConfig::RING.with_item_width(CARD_WIDTH)
    };
    let mut carousel = match Carousel::new(config, deck, Stage::default(), Log) {
        Ok(carousel) => carousel,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };
    let mut now = Duration::ZERO;
    show("loaded", &carousel);

    // A slow drag a little past halfway snaps to the next card.
    carousel.handle_input(
        InputEvent::DragBegin {
            translation: Vec2::ZERO,
        },
        now,
    );
    for step in 1..=6 {
        now += FRAME;
        carousel.handle_input(
            InputEvent::DragUpdate {
                translation: Vec2::new(-17.0 * f64::from(step), 2.0),
                velocity: Vec2::new(-60.0, 0.0),
            },
            now,
        );
    }
    carousel.handle_input(InputEvent::DragEnd, now);
    settle(&mut carousel, &mut now);
    show("after slow drag", &carousel);

    // A fast fling coasts across several cards.
    carousel.handle_input(
        InputEvent::DragBegin {
            translation: Vec2::ZERO,
        },
        now,
    );
    now += FRAME;
    carousel.handle_input(
        InputEvent::DragUpdate {
            translation: Vec2::new(-40.0, 0.0),
            velocity: Vec2::new(-1400.0, 0.0),
        },
        now,
    );
    carousel.handle_input(InputEvent::DragEnd, now);
    settle(&mut carousel, &mut now);
    show("after fling", &carousel);

    // Swipes step one card and wrap around the seam.
    for _ in 0..3 {
        carousel.handle_input(InputEvent::Swipe(SwipeDirection::Right), now);
        settle(&mut carousel, &mut now);
    }
    show("after three right swipes", &carousel);

    // Tap the card to the right of the focused one.
    let tap = Point::new(CARD_WIDTH + 20.0, 0.0);
    carousel.handle_input(InputEvent::Tap(tap), now);
    settle(&mut carousel, &mut now);
    show("after tap", &carousel);

    // Grow and shrink the deck.
    carousel.content_mut().titles.insert(2, "Inlet".to_owned());
    if let Err(err) = carousel.insert(2, true) {
        eprintln!("insert failed: {err}");
    }
    show("after insert", &carousel);
    carousel.content_mut().titles.remove(0);
    if let Err(err) = carousel.remove(0, true) {
        eprintln!("remove failed: {err}");
    }
    show("after remove", &carousel);

    // Without swipes, only pans and taps get through.
    carousel.disable(InputKinds::SWIPE);
    let handled = carousel.handle_input(InputEvent::Swipe(SwipeDirection::Left), now);
    println!("swipe handled while disabled: {handled}");

    println!(
        "{} card views created for {} items",
        carousel.content().cards.len(),
        carousel.item_count()
    );
}
