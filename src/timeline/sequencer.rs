//! Drives one run through its [`Timeline`].
//!
//! A run is a single spawned task: it sleeps until each stage's absolute deadline
//! (`start + offset`), applies the stage under the document lock, and moves on. Stage effects are
//! plain functions over the document so they can be exercised without a clock.

use tokio::{runtime::Handle, time::Instant};
use tokio_util::sync::CancellationToken;

use crate::{
    geometry::{
        fan::{counter_rotation, fan_transform},
        responsive::ResponsiveGeometry,
    },
    scene::{
        builder::{Card, Deck, Overlay},
        document::{Document, ElementId, SharedDocument, lock_document},
        style::{Filter, Rgba, Transform, Transition, TransitionProperty},
    },
    timeline::{
        completion::CompletionSignal,
        plan::{Stage, Timeline},
        timings::StageTimings,
    },
    transition::TransitionConfig,
};

/// Shadow cast by fanned cards.
pub const CARD_SHADOW: Filter = Filter::DropShadow {
    offset_x_px: 0.0,
    offset_y_px: 12.0,
    blur_px: 16.0,
    color: Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.45,
    },
};

/// Caption drop distance when it fades out, in px.
pub const CAPTION_EXIT_OFFSET_PX: f64 = 10.0;

/// Everything one run owns. Never shared between runs.
#[derive(Clone, Debug)]
pub struct RunState {
    /// Overlay root and its background layers.
    pub overlay: Overlay,
    /// Cards in creation order.
    pub deck: Deck,
    /// Caption element.
    pub caption: ElementId,
    /// Geometry resolved from the viewport at start.
    pub geometry: ResponsiveGeometry,
    /// Options merged over defaults.
    pub config: TransitionConfig,
}

impl RunState {
    fn transition(&self, duration_ms: u64, properties: &[TransitionProperty]) -> Transition {
        Transition::new(duration_ms, properties).with_ease(self.config.ease)
    }

    fn radial_transform(&self, card: &Card, radius_vmin: f64) -> Transform {
        let counter = counter_rotation(
            card.angle_deg,
            self.config.pointing,
            self.config.radial_align,
        );
        fan_transform(card.angle_deg, radius_vmin, counter)
    }
}

/// Apply `stage`'s visual effect. Elements the host already removed are skipped.
pub fn apply_stage(doc: &mut Document, run: &RunState, stage: Stage, timings: &StageTimings) {
    use TransitionProperty::{Filter as FilterProp, Opacity, Transform as TransformProp};

    match stage {
        Stage::Darken => {}
        Stage::DeckIn => {
            for card in &run.deck.cards {
                doc.update_style(card.element, |s| {
                    s.transition = Some(run.transition(timings.deck_in, &[TransformProp, Opacity]));
                    s.opacity = Some(1.0);
                    s.transform = Some(Transform::centered(1.0));
                });
            }
        }
        Stage::CaptionIn => {
            doc.update_style(run.caption, |s| {
                s.transition = Some(run.transition(timings.text_in, &[Opacity, TransformProp]));
                s.transform = Some(Transform::translate_y_px(0.0));
                s.opacity = Some(1.0);
            });
        }
        Stage::CaptionOut => {
            doc.update_style(run.caption, |s| {
                s.transition = Some(run.transition(timings.text_out, &[Opacity, TransformProp]));
                s.transform = Some(Transform::translate_y_px(CAPTION_EXIT_OFFSET_PX));
                s.opacity = Some(0.0);
            });
        }
        Stage::Fan => {
            let radius = run.geometry.fan_radius_vmin;
            for card in &run.deck.cards {
                let transform = run.radial_transform(card, radius);
                doc.update_style(card.element, |s| {
                    s.transition = Some(run.transition(
                        timings.fan,
                        &[TransformProp, Opacity, FilterProp],
                    ));
                    s.transform = Some(transform);
                    s.filter = Some(CARD_SHADOW);
                });
            }
        }
        Stage::Disperse => {
            let radius = run.geometry.fan_radius_vmin * 2.0;
            for card in &run.deck.cards {
                let transform = run.radial_transform(card, radius);
                doc.update_style(card.element, |s| {
                    s.transition =
                        Some(run.transition(timings.disperse, &[TransformProp, Opacity]));
                    s.transform = Some(transform);
                    s.opacity = Some(0.0);
                });
            }
        }
        Stage::Resolve => {
            if !run.config.hold_at_black {
                doc.update_style(run.overlay.root, |s| {
                    s.transition = Some(run.transition(timings.overlay_fade, &[Opacity]));
                    s.opacity = Some(0.0);
                });
            }
        }
    }
}

pub(crate) struct StageSequencer {
    document: SharedDocument,
    timeline: Timeline,
    run: RunState,
    cancel: CancellationToken,
    signal: CompletionSignal,
}

impl StageSequencer {
    pub(crate) fn new(
        document: SharedDocument,
        timeline: Timeline,
        run: RunState,
        cancel: CancellationToken,
        signal: CompletionSignal,
    ) -> Self {
        Self {
            document,
            timeline,
            run,
            cancel,
            signal,
        }
    }

    /// Start driving the timeline on `runtime`, measured from `start`.
    pub(crate) fn spawn(self, runtime: &Handle, start: Instant) {
        runtime.spawn(self.drive(start));
    }

    #[tracing::instrument(
        name = "stage_sequencer",
        skip_all,
        fields(overlay = ?self.run.overlay.root)
    )]
    async fn drive(self, start: Instant) {
        let Self {
            document,
            timeline,
            run,
            cancel,
            signal,
        } = self;

        for entry in timeline.scheduled() {
            if !wait_until(&cancel, start + entry.offset()).await {
                tracing::debug!(pending = ?entry.stage, "run cancelled by page unload");
                return;
            }
            tracing::debug!(stage = ?entry.stage, offset_ms = entry.offset_ms, "stage fired");
            {
                let mut doc = lock_document(&document);
                apply_stage(&mut doc, &run, entry.stage, timeline.timings());
            }
        }

        if !run.config.hold_at_black {
            if !wait_until(&cancel, start + timeline.detach_offset()).await {
                tracing::debug!("run cancelled before overlay detach");
                return;
            }
            let removed = {
                let mut doc = lock_document(&document);
                doc.remove(run.overlay.root)
            };
            tracing::debug!(removed, "overlay detached");
        }

        tracing::debug!(hold_at_black = run.config.hold_at_black, "transition complete");
        signal.resolve();
    }
}

/// Sleep until `deadline`; `false` if the run was cancelled first.
async fn wait_until(cancel: &CancellationToken, deadline: Instant) -> bool {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        _ = tokio::time::sleep_until(deadline) => true,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequencer.rs"]
mod tests;
