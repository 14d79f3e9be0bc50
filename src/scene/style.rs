//! Typed inline styles for page elements.
//!
//! The sequencer only ever writes four properties: `opacity`, `transform`, `transition` and
//! `filter`. Each has a typed value here, rendered to CSS for browser hosts and resolvable to a
//! pixel-space [`Affine`] for hosts that composite the tree themselves.

use crate::{
    animation::ease::Ease,
    foundation::core::{Affine, Size, Vec2, Viewport},
};

/// One function of a CSS transform list.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum TransformOp {
    /// `translate(x%, y%)`, relative to the element's own box.
    TranslatePercent {
        /// Percent of the element's width.
        x: f64,
        /// Percent of the element's height.
        y: f64,
    },
    /// `translate(d vmin)` along the current x axis.
    TranslateVmin(f64),
    /// `translateY(y px)`.
    TranslateYPx(f64),
    /// `rotate(deg)`, clockwise on screen.
    Rotate(f64),
    /// `scale(s)`.
    Scale(f64),
}

impl TransformOp {
    /// CSS function syntax, e.g. `rotate(90deg)`.
    pub fn to_css(self) -> String {
        match self {
            Self::TranslatePercent { x, y } => format!("translate({x}%, {y}%)"),
            Self::TranslateVmin(d) => format!("translate({d}vmin)"),
            Self::TranslateYPx(y) => format!("translateY({y}px)"),
            Self::Rotate(deg) => format!("rotate({deg}deg)"),
            Self::Scale(s) => format!("scale({s})"),
        }
    }

    /// Pixel-space affine for this single function.
    pub fn to_affine(self, viewport: Viewport, element: Size) -> Affine {
        match self {
            Self::TranslatePercent { x, y } => Affine::translate(Vec2::new(
                x / 100.0 * element.width,
                y / 100.0 * element.height,
            )),
            Self::TranslateVmin(d) => Affine::translate(Vec2::new(d * viewport.vmin_px(), 0.0)),
            Self::TranslateYPx(y) => Affine::translate(Vec2::new(0.0, y)),
            Self::Rotate(deg) => Affine::rotate(deg.to_radians()),
            Self::Scale(s) => Affine::scale(s),
        }
    }
}

/// A CSS transform list, applied left to right.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Transform {
    ops: Vec<TransformOp>,
}

impl Transform {
    /// The empty list (`none`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `op` to the end of the list.
    pub fn then(mut self, op: TransformOp) -> Self {
        self.ops.push(op);
        self
    }

    /// `translate(-50%, -50%) scale(s)`: centered on the element's anchor point.
    pub fn centered(scale: f64) -> Self {
        Self::new()
            .then(TransformOp::TranslatePercent { x: -50.0, y: -50.0 })
            .then(TransformOp::Scale(scale))
    }

    /// `translateY(y px)`.
    pub fn translate_y_px(y: f64) -> Self {
        Self::new().then(TransformOp::TranslateYPx(y))
    }

    /// Functions in application order.
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// CSS `transform` value, `none` when empty.
    pub fn to_css(&self) -> String {
        if self.ops.is_empty() {
            return "none".to_string();
        }
        self.ops
            .iter()
            .map(|op| op.to_css())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resolve to a pixel-space affine, given the viewport (for `vmin`) and the element's own box
    /// (for percentages).
    pub fn to_affine(&self, viewport: Viewport, element: Size) -> Affine {
        self.ops.iter().fold(Affine::IDENTITY, |acc, op| {
            acc * op.to_affine(viewport, element)
        })
    }
}

/// A style property a [`Transition`] animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TransitionProperty {
    /// `transform`
    Transform,
    /// `opacity`
    Opacity,
    /// `filter`
    Filter,
}

impl TransitionProperty {
    /// CSS property name.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Opacity => "opacity",
            Self::Filter => "filter",
        }
    }
}

/// A `transition` declaration sharing one duration and timing function across properties.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Transition {
    /// Animated properties, in declaration order.
    pub properties: Vec<TransitionProperty>,
    /// Duration shared by every property.
    pub duration_ms: u64,
    /// Timing function shared by every property.
    pub ease: Ease,
}

impl Transition {
    /// A transition with the default `ease` timing function.
    pub fn new(duration_ms: u64, properties: &[TransitionProperty]) -> Self {
        Self {
            properties: properties.to_vec(),
            duration_ms,
            ease: Ease::default(),
        }
    }

    /// Replace the timing function.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// CSS `transition` value, one entry per property.
    pub fn to_css(&self) -> String {
        self.properties
            .iter()
            .map(|p| {
                format!(
                    "{} {}ms {}",
                    p.css_name(),
                    self.duration_ms,
                    self.ease.css_keyword()
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Eased progress `0..=1` after `elapsed_ms` of this transition.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.ease.apply(elapsed_ms / self.duration_ms as f64)
    }
}

/// An `rgba()` color.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `0..=1`.
    pub a: f64,
}

/// A CSS `filter` function.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum Filter {
    /// `drop-shadow(x y blur color)`.
    DropShadow {
        /// Horizontal offset in px.
        offset_x_px: f64,
        /// Vertical offset in px.
        offset_y_px: f64,
        /// Blur radius in px.
        blur_px: f64,
        /// Shadow color.
        color: Rgba,
    },
}

impl Filter {
    /// CSS function syntax.
    pub fn to_css(self) -> String {
        match self {
            Self::DropShadow {
                offset_x_px,
                offset_y_px,
                blur_px,
                color,
            } => format!(
                "drop-shadow({offset_x_px}px {offset_y_px}px {blur_px}px rgba({}, {}, {}, {}))",
                color.r, color.g, color.b, color.a
            ),
        }
    }
}

/// Inline style of one element. Unset properties fall back to the stylesheet.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Style {
    /// `opacity`
    pub opacity: Option<f64>,
    /// `transform`
    pub transform: Option<Transform>,
    /// `transition`
    pub transition: Option<Transition>,
    /// `filter`
    pub filter: Option<Filter>,
}

impl Style {
    /// Opacity as rendered; elements without an inline value are fully opaque.
    pub fn effective_opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }

    /// Inline `style` attribute text; unset properties are omitted.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(opacity) = self.opacity {
            decls.push(format!("opacity: {opacity}"));
        }
        if let Some(transform) = &self.transform {
            decls.push(format!("transform: {}", transform.to_css()));
        }
        if let Some(transition) = &self.transition {
            decls.push(format!("transition: {}", transition.to_css()));
        }
        if let Some(filter) = self.filter {
            decls.push(format!("filter: {}", filter.to_css()));
        }
        decls.join("; ")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/style.rs"]
mod tests;
