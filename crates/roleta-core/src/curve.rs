//! Easing curves for the spin animation
//!
//! Every curve is monotonic and decelerating with `apply(0) = 0` and
//! `apply(1) = 1`, so the wheel never regresses and never overshoots the
//! target. The curve is a pure function of elapsed progress.

use serde::{Deserialize, Serialize};

/// Deceleration curve applied to spin progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpinCurve {
    /// Quadratic ease-out
    EaseOutQuad,
    /// Cubic ease-out
    #[default]
    EaseOutCubic,
    /// Quartic ease-out (harder brake)
    EaseOutQuart,
    /// Exponential ease-out
    EaseOutExpo,
    /// Sine ease-out (gentlest)
    EaseOutSine,
}

impl SpinCurve {
    /// Apply the curve to a linear progress value (0.0-1.0)
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            SpinCurve::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            SpinCurve::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            SpinCurve::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            SpinCurve::EaseOutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - (2.0_f64).powf(-10.0 * t)
                }
            }
            SpinCurve::EaseOutSine => (t * std::f64::consts::FRAC_PI_2).sin(),
        }
    }
}
