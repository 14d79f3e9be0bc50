//! Entry point: merge caller options over defaults, build the overlay, start the sequencer.

use rand::Rng;
use tokio::{runtime::Handle, time::Instant};

use crate::{
    animation::ease::Ease,
    foundation::{core::Viewport, error::FanResult},
    geometry::{fan::Pointing, responsive::ResponsiveGeometry},
    scene::{
        builder::{create_bottom_text, create_deck, create_overlay},
        document::{Document, SharedDocument, lock_document},
    },
    timeline::{
        completion::{Completion, PageLifecycle},
        plan::Timeline,
        sequencer::{RunState, StageSequencer},
    },
};

/// Cards in the deck when the caller does not say.
pub const DEFAULT_CARD_COUNT: usize = 22;
/// Caption shown when the caller does not say.
pub const DEFAULT_CAPTION: &str = "- 命运 -";

/// Resolved configuration of one run. Immutable once the run starts.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionConfig {
    /// Cards in the deck; zero plays every stage with an empty deck.
    pub card_count: usize,
    /// Caption text.
    pub caption_text: String,
    /// Which way radially aligned cards face.
    pub pointing: Pointing,
    /// Turn cards by a quarter turn instead of keeping them upright.
    pub radial_align: bool,
    /// Draw the star layer.
    pub enable_stars: bool,
    /// Resolve with the overlay opaque instead of fading and detaching it.
    pub hold_at_black: bool,
    /// Timing function of every stage transition.
    pub ease: Ease,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            card_count: DEFAULT_CARD_COUNT,
            caption_text: DEFAULT_CAPTION.to_string(),
            pointing: Pointing::Inward,
            radial_align: true,
            enable_stars: true,
            hold_at_black: false,
            ease: Ease::default(),
        }
    }
}

/// Caller-supplied options; every field is optional and falls back to
/// [`TransitionConfig::default`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitionOptions {
    /// Negative counts resolve to an empty deck.
    pub card_count: Option<i64>,
    /// Caption text; `text` is accepted as an alias.
    #[serde(alias = "text")]
    pub caption_text: Option<String>,
    /// See [`TransitionConfig::pointing`].
    pub pointing: Option<Pointing>,
    /// See [`TransitionConfig::radial_align`].
    pub radial_align: Option<bool>,
    /// See [`TransitionConfig::enable_stars`].
    pub enable_stars: Option<bool>,
    /// See [`TransitionConfig::hold_at_black`].
    pub hold_at_black: Option<bool>,
    /// See [`TransitionConfig::ease`]; takes a CSS keyword such as `"ease-in-out"`.
    pub ease: Option<Ease>,
}

impl TransitionOptions {
    /// Parse options from a camelCase JSON object. Unknown keys are ignored.
    pub fn from_json(s: &str) -> FanResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Merge over [`TransitionConfig::default`].
    pub fn resolve(self) -> TransitionConfig {
        let defaults = TransitionConfig::default();
        TransitionConfig {
            card_count: self
                .card_count
                .map_or(defaults.card_count, |n| usize::try_from(n).unwrap_or(0)),
            caption_text: self.caption_text.unwrap_or(defaults.caption_text),
            pointing: self.pointing.unwrap_or(defaults.pointing),
            radial_align: self.radial_align.unwrap_or(defaults.radial_align),
            enable_stars: self.enable_stars.unwrap_or(defaults.enable_stars),
            hold_at_black: self.hold_at_black.unwrap_or(defaults.hold_at_black),
            ease: self.ease.unwrap_or(defaults.ease),
        }
    }
}

/// What a run needs from the host page.
#[derive(Clone, Debug)]
pub struct Host {
    document: SharedDocument,
    viewport: Viewport,
    lifecycle: PageLifecycle,
}

impl Host {
    /// A host around an existing document, with a fresh page lifecycle.
    pub fn new(document: SharedDocument, viewport: Viewport) -> Self {
        Self {
            document,
            viewport,
            lifecycle: PageLifecycle::new(),
        }
    }

    /// A host around a fresh, empty document.
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self::new(Document::new().shared(), viewport)
    }

    /// The shared page tree runs build into.
    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    /// Viewport the next run resolves its geometry from.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Runs already started keep the viewport they were resolved with.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Unload signal shared by every run on this host.
    pub fn lifecycle(&self) -> &PageLifecycle {
        &self.lifecycle
    }
}

/// Play the card fan transition with an unseeded star field.
///
/// The overlay is built and attached before this returns; the returned [`Completion`] resolves
/// when the overlay has been detached, or, with `hold_at_black`, as soon as the final stage fires
/// with the overlay still opaque.
///
/// Stages are driven by a task on the current tokio runtime. Called outside one, nothing is
/// attached and the returned [`Completion`] never resolves.
pub fn play_fan_transition(host: &Host, options: TransitionOptions) -> Completion {
    play_fan_transition_with_rng(host, options, &mut rand::rng())
}

/// [`play_fan_transition`] with an explicit randomness source for the star field.
#[tracing::instrument(skip_all)]
pub fn play_fan_transition_with_rng<R: Rng + ?Sized>(
    host: &Host,
    options: TransitionOptions,
    rng: &mut R,
) -> Completion {
    let Ok(runtime) = Handle::try_current() else {
        tracing::error!("no tokio runtime to drive the transition; overlay not attached");
        return Completion::never();
    };
    let config = options.resolve();
    let geometry = ResponsiveGeometry::resolve(host.viewport());
    let start = Instant::now();

    let run = {
        let mut doc = lock_document(host.document());
        let overlay = create_overlay(&mut doc, &geometry, config.enable_stars, rng);
        let deck = create_deck(&mut doc, &overlay, config.card_count);
        let caption = create_bottom_text(&mut doc, &overlay, &config.caption_text);
        RunState {
            overlay,
            deck,
            caption,
            geometry,
            config,
        }
    };
    tracing::debug!(
        cards = run.deck.cards.len(),
        stars = run.overlay.star_count,
        radius_vmin = run.geometry.fan_radius_vmin,
        hold_at_black = run.config.hold_at_black,
        "transition started"
    );

    let (signal, completion) = Completion::channel();
    StageSequencer::new(
        host.document().clone(),
        Timeline::standard(),
        run,
        host.lifecycle().run_token(),
        signal,
    )
    .spawn(&runtime, start);
    completion
}

#[cfg(test)]
#[path = "../tests/unit/transition/options.rs"]
mod tests;
