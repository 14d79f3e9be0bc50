use crate::scene::style::{Transform, TransformOp};

/// Which way a fanned card's face points relative to the center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pointing {
    /// Card tops turn toward the center.
    #[default]
    Inward,
    /// Card tops turn away from the center.
    Outward,
}

/// Slot angles in degrees, `index * 360 / count`. Empty for a zero-card deck.
pub fn card_angles(count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = 360.0 / count as f64;
    (0..count).map(|i| i as f64 * step).collect()
}

/// Rotation applied after the outward translation.
///
/// Radially aligned cards turn a quarter turn toward (`Inward`) or away from (`Outward`) the
/// center. Otherwise the card's own angle is undone so it stays upright on screen.
pub fn counter_rotation(angle_deg: f64, pointing: Pointing, radial_align: bool) -> f64 {
    if radial_align {
        match pointing {
            Pointing::Inward => -90.0,
            Pointing::Outward => 90.0,
        }
    } else {
        -angle_deg
    }
}

/// `translate(-50%, -50%) rotate(angle) translate(radius vmin) rotate(counter)`.
pub fn fan_transform(angle_deg: f64, radius_vmin: f64, counter_deg: f64) -> Transform {
    Transform::new()
        .then(TransformOp::TranslatePercent { x: -50.0, y: -50.0 })
        .then(TransformOp::Rotate(angle_deg))
        .then(TransformOp::TranslateVmin(radius_vmin))
        .then(TransformOp::Rotate(counter_deg))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/fan.rs"]
mod tests;
