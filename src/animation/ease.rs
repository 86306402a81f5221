#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Fixed easing curve applied to a clamped linear ratio.
pub enum Curve {
    /// Identity over the clamped ratio.
    Linear,
    /// Cubic ease-out, `1 - (1-t)^3`.
    OutCubic,
    /// Cubic ease-in-out, `4t^3` below the midpoint mirrored above.
    InOutCubic,
}

impl Curve {
    /// Shape `t` through the curve. Input is clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
