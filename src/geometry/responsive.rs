//! Viewport-driven sizing for the star field and the fan.
//!
//! Everything keys off the viewport's shorter side, read once when a run starts. Resizing the
//! window mid-run does not change an already resolved geometry.

use crate::foundation::core::Viewport;

/// Star field density tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum StarDensity {
    /// Shorter side below 520px.
    Low,
    /// Shorter side below 768px.
    Mid,
    /// Everything larger.
    High,
}

impl StarDensity {
    /// Tier for `viewport`'s shorter side.
    pub fn for_viewport(viewport: Viewport) -> Self {
        let short = viewport.shorter_side();
        if short < 520.0 {
            Self::Low
        } else if short < 768.0 {
            Self::Mid
        } else {
            Self::High
        }
    }

    /// Stars generated for this tier.
    pub fn star_count(self) -> usize {
        match self {
            Self::Low => 80,
            Self::Mid => 110,
            Self::High => 140,
        }
    }
}

/// Fan radius in `vmin` units.
pub fn fan_radius_vmin(viewport: Viewport) -> f64 {
    let short = viewport.shorter_side();
    if short < 560.0 {
        22.0
    } else if short < 768.0 {
        26.0
    } else if short > 1200.0 {
        32.0
    } else {
        28.0
    }
}

/// Geometry resolved for one run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ResponsiveGeometry {
    /// Viewport the geometry was resolved from.
    pub viewport: Viewport,
    /// Star field tier.
    pub density: StarDensity,
    /// Fan radius in `vmin` units; dispersal uses twice this.
    pub fan_radius_vmin: f64,
}

impl ResponsiveGeometry {
    /// Resolve star density and fan radius for `viewport`.
    pub fn resolve(viewport: Viewport) -> Self {
        Self {
            viewport,
            density: StarDensity::for_viewport(viewport),
            fan_radius_vmin: fan_radius_vmin(viewport),
        }
    }

    /// Stars in this run's field.
    pub fn star_count(&self) -> usize {
        self.density.star_count()
    }

    /// Fan radius converted to CSS pixels for this viewport.
    pub fn fan_radius_px(&self) -> f64 {
        self.fan_radius_vmin * self.viewport.vmin_px()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/responsive.rs"]
mod tests;
