use crate::foundation::error::{PivraError, PivraResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Zero-based output frame index on the composition timeline.
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Half-open frame range `[start, end)`.
pub struct FrameRange {
    /// First frame in the range.
    pub start: FrameIndex,
    /// One past the last frame in the range.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> PivraResult<Self> {
        if start.0 > end.0 {
            return Err(PivraError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered by the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// True when the range covers no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// True when `f` lies inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Rational frame rate (`num / den` frames per second).
pub struct Fps {
    /// Numerator, must be > 0.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a frame rate, rejecting zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> PivraResult<Self> {
        if den == 0 {
            return Err(PivraError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(PivraError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frame rate as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Output canvas dimensions in pixels.
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

/// Straight-alpha RGBA8 color.
///
/// The engine never blends pixels itself, so colors stay straight (not
/// premultiplied) and are handed to the compositor as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Lowercase hex form, `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_hex_string(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Camera pose applied to the full-bleed media layer for one frame.
///
/// Swivel rotates about the vertical (Y) axis, tilt about the horizontal
/// (X) axis, both in degrees. Scale is uniform. Vertical drift is a
/// percentage of the layer height.
pub struct Pose3D {
    /// Rotation about the Y axis, degrees.
    pub swivel_deg: f64,
    /// Rotation about the X axis, degrees.
    pub tilt_deg: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Vertical offset as a percentage of layer height.
    pub translate_y_pct: f64,
}

impl Default for Pose3D {
    fn default() -> Self {
        Self {
            swivel_deg: 0.0,
            tilt_deg: 0.0,
            scale: 1.0,
            translate_y_pct: 0.0,
        }
    }
}

impl Pose3D {
    /// Assemble the canonical transform descriptor for this pose.
    ///
    /// Component order is fixed: vertical drift, then swivel, then tilt,
    /// then scale. The compositor applies them right to left.
    pub fn to_transform_string(self) -> String {
        format!(
            "translateY({}%) rotateY({}deg) rotateX({}deg) scale({})",
            self.translate_y_pct, self.swivel_deg, self.tilt_deg, self.scale
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
