use crate::foundation::error::{FanError, FanResult};

/// Stage budgets in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTimings {
    /// Overlay darkening before anything else happens.
    pub darken: u64,
    /// Pause before the deck appears.
    pub deck_in_delay: u64,
    /// Deck fade-in.
    pub deck_in: u64,
    /// Caption fade-in.
    pub text_in: u64,
    /// Caption fully shown.
    pub text_hold: u64,
    /// Caption fade-out.
    pub text_out: u64,
    /// Fan-out movement.
    pub fan: u64,
    /// Fan fully spread.
    pub fan_hold: u64,
    /// Dispersal movement.
    pub disperse: u64,
    /// Overlay fade-out.
    pub overlay_fade: u64,
}

impl StageTimings {
    /// Budgets every run uses.
    pub const STANDARD: Self = Self {
        darken: 600,
        deck_in_delay: 200,
        deck_in: 900,
        text_in: 700,
        text_hold: 400,
        text_out: 600,
        fan: 1100,
        fan_hold: 450,
        disperse: 900,
        overlay_fade: 700,
    };

    fn named(&self) -> [(&'static str, u64); 10] {
        [
            ("darken", self.darken),
            ("deckInDelay", self.deck_in_delay),
            ("deckIn", self.deck_in),
            ("textIn", self.text_in),
            ("textHold", self.text_hold),
            ("textOut", self.text_out),
            ("fan", self.fan),
            ("fanHold", self.fan_hold),
            ("disperse", self.disperse),
            ("overlayFade", self.overlay_fade),
        ]
    }

    const fn all_positive(&self) -> bool {
        self.darken > 0
            && self.deck_in_delay > 0
            && self.deck_in > 0
            && self.text_in > 0
            && self.text_hold > 0
            && self.text_out > 0
            && self.fan > 0
            && self.fan_hold > 0
            && self.disperse > 0
            && self.overlay_fade > 0
    }

    /// Reject zero-length budgets, naming the first offending field.
    pub fn validate(&self) -> FanResult<()> {
        match self.named().into_iter().find(|(_, ms)| *ms == 0) {
            Some((name, _)) => Err(FanError::validation(format!(
                "stage timing '{name}' must be > 0"
            ))),
            None => Ok(()),
        }
    }
}

impl Default for StageTimings {
    fn default() -> Self {
        Self::STANDARD
    }
}

const _: () = assert!(StageTimings::STANDARD.all_positive());

#[cfg(test)]
#[path = "../../tests/unit/timeline/timings.rs"]
mod tests;
