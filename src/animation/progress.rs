use serde::{Deserialize, Serialize};

use crate::{
    animation::ease::Curve,
    animation::spring::SpringConfig,
    foundation::core::{Fps, FrameIndex},
    foundation::error::PivraResult,
    foundation::math::clamp01,
};

/// Progress strategy mapping a frame index to a normalized progress value.
///
/// Curve modes clamp `frame / duration` to `[0, 1]` and shape it, so
/// progress is 0 at frame 0 and pins to 1 from the last frame onward.
/// Spring mode is driven by wall-clock seconds (`frame / fps`) instead of
/// the duration ratio and may transiently overshoot 1 before settling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Clamped ratio shaped by a fixed curve.
    Eased(Curve),
    /// Damped harmonic oscillator step response.
    Spring(SpringConfig),
}

impl Default for Easing {
    fn default() -> Self {
        Self::Eased(Curve::OutCubic)
    }
}

impl Easing {
    /// Validate strategy parameters.
    pub fn validate(&self) -> PivraResult<()> {
        match self {
            Self::Eased(_) => Ok(()),
            Self::Spring(cfg) => cfg.validate(),
        }
    }

    /// Compute progress for `frame` on a timeline of `duration` frames.
    pub fn progress_at(self, frame: FrameIndex, duration: FrameIndex, fps: Fps) -> f64 {
        match self {
            Self::Eased(curve) => {
                if duration.0 == 0 {
                    return 1.0;
                }
                let t = clamp01((frame.0 as f64) / (duration.0 as f64));
                curve.apply(t)
            }
            Self::Spring(cfg) => cfg.step_response(fps.frames_to_secs(frame.0)),
        }
    }
}

impl Serialize for Easing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Eased(Curve::Linear) => serializer.serialize_str("linear"),
            Self::Eased(Curve::OutCubic) => serializer.serialize_str("ease_out"),
            Self::Eased(Curve::InOutCubic) => serializer.serialize_str("ease_in_out"),
            Self::Spring(cfg) => {
                #[derive(Serialize)]
                struct Repr<'a> {
                    spring: &'a SpringConfig,
                }
                Repr { spring: cfg }.serialize(serializer)
            }
        }
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            Spring { spring: SpringConfig },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => match s.as_str() {
                "linear" => Ok(Self::Eased(Curve::Linear)),
                "ease_out" | "easeOut" => Ok(Self::Eased(Curve::OutCubic)),
                "ease_in_out" | "easeInOut" => Ok(Self::Eased(Curve::InOutCubic)),
                "spring" => Ok(Self::Spring(SpringConfig::default())),
                other => Err(serde::de::Error::custom(format!(
                    "unknown easing \"{other}\""
                ))),
            },
            Repr::Spring { spring } => Ok(Self::Spring(spring)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
