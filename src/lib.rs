//! card-fan plays a scripted "card fan" overlay transition over a host page.
//!
//! A full-screen overlay darkens the view, a deck of cards fans in, a caption fades in and out,
//! the cards radiate outward and disperse, then the overlay clears. With `hold_at_black` the
//! overlay stays opaque instead, so the host can navigate underneath it.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: viewport → [`ResponsiveGeometry`] (star density, fan radius)
//! 2. **Build**: [`create_overlay`], [`create_deck`], [`create_bottom_text`] attach the overlay
//!    subtree to the shared [`Document`]
//! 3. **Sequence**: a spawned task walks the [`Timeline`] and applies each [`Stage`] at its
//!    cumulative offset
//! 4. **Complete**: the [`Completion`] returned by [`play_fan_transition`] resolves once the final
//!    stage's policy is met
//!
//! The host owns rendering. It mirrors the [`Document`] into a real page (or compositor) and
//! fires [`PageLifecycle::page_hide`] when the page is discarded, which cancels every pending
//! stage without rolling back what was already applied.
//!
//! Stage offsets never depend on configuration; only their visual effect does.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod geometry;
mod scene;
mod timeline;
mod transition;

pub use animation::ease::Ease;
pub use foundation::core::{Affine, Point, Size, Vec2, Viewport};
pub use foundation::error::{FanError, FanResult};
pub use geometry::fan::{Pointing, card_angles, counter_rotation, fan_transform};
pub use geometry::responsive::{ResponsiveGeometry, StarDensity, fan_radius_vmin};
pub use scene::builder::{
    BACKGROUND_CLASS, CAPTION_CLASS, CARD_BORDER_CLASS, CARD_CLASS, CARD_CORE_CLASS,
    CARD_EMBLEM_CLASS, CARD_IDLE_SCALE, CARD_IDLE_TRANSITION_MS, Card, DECK_CLASS,
    DECK_MOUNT_CLASS, Deck, OVERLAY_CLASS, Overlay, STARS_CLASS, create_bottom_text, create_deck,
    create_overlay,
};
pub use scene::document::{Document, Element, ElementId, SharedDocument, lock_document};
pub use scene::stars::{Star, StarField};
pub use scene::style::{
    Filter, Rgba, Style, Transform, TransformOp, Transition, TransitionProperty,
};
pub use timeline::completion::{Completion, PageLifecycle};
pub use timeline::plan::{Stage, Timeline, TimelineEntry, VirtualClock};
pub use timeline::sequencer::{CAPTION_EXIT_OFFSET_PX, CARD_SHADOW, RunState, apply_stage};
pub use timeline::timings::StageTimings;
pub use transition::{
    DEFAULT_CAPTION, DEFAULT_CARD_COUNT, Host, TransitionConfig, TransitionOptions,
    play_fan_transition, play_fan_transition_with_rng,
};
