/// CSS timing functions used by style transitions.
///
/// `apply` lets a host without a compositor sample a running transition at a given progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    /// `linear`
    Linear,
    /// `ease`, the CSS default and what every stage uses unless configured otherwise.
    #[default]
    Ease,
    /// `ease-in`
    EaseIn,
    /// `ease-out`
    EaseOut,
    /// `ease-in-out`
    EaseInOut,
}

impl Ease {
    /// CSS keyword for this timing function.
    pub fn css_keyword(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }

    /// Control points of the equivalent `cubic-bezier(x1, y1, x2, y2)`.
    pub fn control_points(self) -> [f64; 4] {
        match self {
            Self::Linear => [0.0, 0.0, 1.0, 1.0],
            Self::Ease => [0.25, 0.1, 0.25, 1.0],
            Self::EaseIn => [0.42, 0.0, 1.0, 1.0],
            Self::EaseOut => [0.0, 0.0, 0.58, 1.0],
            Self::EaseInOut => [0.42, 0.0, 0.58, 1.0],
        }
    }

    /// Eased value at progress `t`, clamped to `0..=1`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if matches!(self, Self::Linear) || t == 0.0 || t == 1.0 {
            return t;
        }
        let [x1, y1, x2, y2] = self.control_points();
        let s = solve_curve_x(x1, x2, t);
        bezier(y1, y2, s)
    }
}

// One coordinate of a cubic bezier anchored at 0 and 1.
fn bezier(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

// Curve parameter `s` with x(s) == x. Newton first, bisection when the slope flattens out.
fn solve_curve_x(x1: f64, x2: f64, x: f64) -> f64 {
    const EPS: f64 = 1e-7;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < EPS {
            return s;
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let v = bezier(x1, x2, s);
        if (v - x).abs() < EPS {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
