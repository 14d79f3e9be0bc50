//! Star backdrop generation.

use std::fmt::Write as _;

use anyhow::Context;
use rand::Rng;

use crate::foundation::error::FanResult;

/// One circular mark, positioned in percent of the overlay box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Star {
    /// Horizontal position, `0..100`.
    pub x_pct: f64,
    /// Vertical position, `0..100`.
    pub y_pct: f64,
    /// Radius in SVG user units.
    pub radius: f64,
}

/// The star backdrop, drawn as a single SVG layer rather than one element per star.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct StarField {
    /// Stars in drawing order.
    pub stars: Vec<Star>,
}

impl StarField {
    /// Scatter `count` stars uniformly. Pass a seeded rng for a reproducible layout.
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                x_pct: rng.random_range(0.0..100.0),
                y_pct: rng.random_range(0.0..100.0),
                radius: rng.random_range(0.1..0.9),
            })
            .collect();
        Self { stars }
    }

    /// Number of stars.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Whether the field has no stars.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// The field as a standalone `<svg>` of circles.
    pub fn to_svg(&self) -> String {
        let mut svg = String::from(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%">"#,
        );
        for star in &self.stars {
            // Writing into a String cannot fail.
            let _ = write!(
                svg,
                r#"<circle cx="{}%" cy="{}%" r="{}" fill="white" />"#,
                star.x_pct, star.y_pct, star.radius
            );
        }
        svg.push_str("</svg>");
        svg
    }

    /// Parse the layer into a `usvg` tree for hosts that rasterize it themselves.
    ///
    /// `usvg` needs an absolute canvas to resolve the percentage coordinates, so the markup is
    /// re-rooted at `width` x `height` pixels.
    pub fn to_tree(&self, width: f64, height: f64) -> FanResult<usvg::Tree> {
        let markup = self.to_svg().replacen(
            r#"width="100%" height="100%""#,
            &format!(r#"width="{width}" height="{height}""#),
            1,
        );
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(markup.as_bytes(), &opts).context("parse star field svg")?;
        Ok(tree)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/stars.rs"]
mod tests;
