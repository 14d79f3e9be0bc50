//! The transition as data: an ordered list of `(offset, stage)` pairs.
//!
//! Offsets come from a virtual cumulative clock. Each stage declares how long to wait after the
//! previous stage *started*, so a stage may fire while the previous stage's CSS transition is
//! still animating. Offsets depend only on [`StageTimings`], never on the run's configuration.

use std::time::Duration;

use crate::{foundation::error::FanResult, timeline::timings::StageTimings};

/// One step of the transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// The overlay's presence is the darkening; nothing is scheduled for it.
    Darken,
    /// Cards fade in at full scale.
    DeckIn,
    /// Caption fades in.
    CaptionIn,
    /// Caption fades out and drops.
    CaptionOut,
    /// Cards move out to the fan radius and gain a shadow.
    Fan,
    /// Cards move to twice the radius and fade out.
    Disperse,
    /// Hold at black, or fade the overlay out and detach it.
    Resolve,
}

impl Stage {
    /// Every stage in firing order.
    pub const ALL: [Stage; 7] = [
        Stage::Darken,
        Stage::DeckIn,
        Stage::CaptionIn,
        Stage::CaptionOut,
        Stage::Fan,
        Stage::Disperse,
        Stage::Resolve,
    ];

    /// Stages with no scheduled effect.
    pub fn is_implicit(self) -> bool {
        matches!(self, Self::Darken)
    }
}

/// Running sum of stage budgets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VirtualClock {
    now_ms: u64,
}

impl VirtualClock {
    /// Current offset in ms.
    pub fn now_ms(self) -> u64 {
        self.now_ms
    }

    /// Move the clock forward by `ms` and return the new offset.
    pub fn advance(&mut self, ms: u64) -> u64 {
        self.now_ms = self.now_ms.saturating_add(ms);
        self.now_ms
    }
}

/// A stage and when it fires, relative to the run's start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TimelineEntry {
    /// The stage.
    pub stage: Stage,
    /// Cumulative offset in ms.
    pub offset_ms: u64,
}

impl TimelineEntry {
    /// Offset as a [`Duration`].
    pub fn offset(&self) -> Duration {
        Duration::from_millis(self.offset_ms)
    }
}

/// Every stage with its offset, plus the overlay detach offset.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Timeline {
    timings: StageTimings,
    entries: Vec<TimelineEntry>,
    detach_offset_ms: u64,
}

impl Timeline {
    /// The timeline every run uses.
    pub fn standard() -> Self {
        Self::from_timings(StageTimings::STANDARD)
    }

    /// Build a timeline from custom budgets, rejecting zero-length stages.
    pub fn build(timings: StageTimings) -> FanResult<Self> {
        timings.validate()?;
        Ok(Self::from_timings(timings))
    }

    fn from_timings(timings: StageTimings) -> Self {
        let mut clock = VirtualClock::default();
        let mut entries = Vec::with_capacity(Stage::ALL.len());
        let mut place = |stage: Stage, budget_ms: u64| {
            let offset_ms = clock.advance(budget_ms);
            entries.push(TimelineEntry { stage, offset_ms });
            offset_ms
        };

        place(Stage::Darken, 0);
        place(Stage::DeckIn, timings.darken + timings.deck_in_delay);
        place(Stage::CaptionIn, timings.deck_in);
        place(Stage::CaptionOut, timings.text_in + timings.text_hold);
        place(Stage::Fan, timings.text_out);
        place(Stage::Disperse, timings.fan + timings.fan_hold);
        let resolve_ms = place(Stage::Resolve, timings.disperse + timings.overlay_fade);

        Self {
            timings,
            entries,
            detach_offset_ms: resolve_ms + timings.overlay_fade,
        }
    }

    /// Budgets the offsets were computed from.
    pub fn timings(&self) -> &StageTimings {
        &self.timings
    }

    /// All entries, implicit ones included.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Entries that need a timer, in firing order.
    pub fn scheduled(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.entries.iter().filter(|e| !e.stage.is_implicit())
    }

    /// Offset of `stage`, if it is on the timeline.
    pub fn offset_of(&self, stage: Stage) -> Option<Duration> {
        self.entries
            .iter()
            .find(|e| e.stage == stage)
            .map(TimelineEntry::offset)
    }

    /// When a non-holding run detaches its overlay, once the fade-out has played.
    pub fn detach_offset(&self) -> Duration {
        Duration::from_millis(self.detach_offset_ms)
    }

    /// Pretty JSON dump, for inspection.
    pub fn to_json(&self) -> FanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/plan.rs"]
mod tests;
