//! Core value types shared across the crate.

pub use kurbo::{Affine, Point, Size, Vec2};

/// Viewport dimensions in CSS pixels, as read by the host when a run starts.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport from its dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The shorter of the two dimensions; all responsive thresholds key off this.
    pub fn shorter_side(self) -> f64 {
        self.width.min(self.height)
    }

    /// Pixels per `vmin` unit (1% of the shorter side).
    pub fn vmin_px(self) -> f64 {
        self.shorter_side() / 100.0
    }

    /// Dimensions as a kurbo [`Size`].
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
