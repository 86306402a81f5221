use crate::{
    animation::progress::Easing,
    assets::color::Color,
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::{PivraError, PivraResult},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A complete pan-and-tilt composition.
///
/// A composition is a pure data model that can be:
/// - built programmatically (see [`crate::CompositionBuilder`])
/// - serialized/deserialized via Serde (JSON)
///
/// Planning a composition is performed by the pipeline:
/// [`crate::plan_frame`] / [`crate::plan_frames`].
pub struct Composition {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Total composition duration in frames.
    pub duration: FrameIndex,
    /// Layer drawn under the transformed media.
    #[serde(default)]
    pub background: Background,
    /// The media layer driven through the sweep.
    pub source: Source,
    /// Camera sweep parameters.
    #[serde(default)]
    pub sweep: Sweep,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Static layer composited under the transformed media.
pub enum Background {
    /// Solid fill.
    Color(Color),
    /// Full-bleed static image.
    Image(ImageSource),
}

impl Default for Background {
    fn default() -> Self {
        Self::Color(Color::BLACK)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// The media source driven through the sweep.
///
/// The variant selects the asset-resolution strategy only; progress and
/// pose interpolation are shared.
pub enum Source {
    /// A single still image.
    Image(ImageSource),
    /// A video file sampled by source time.
    Video(VideoSource),
    /// A pre-extracted frame archive addressed by index.
    FrameSequence(SequenceSource),
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Still image source configuration.
pub struct ImageSource {
    /// Relative path to the image file.
    pub source: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Video source configuration.
pub struct VideoSource {
    /// Relative path to the video file.
    pub source: String,
    /// Source playback rate multiplier.
    #[serde(default = "default_playback_rate")]
    pub playback_rate: f64,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Frame archive source configuration.
///
/// The archive holds files named with the 1-based `frame_%04d.jpg`
/// pattern under `directory`.
pub struct SequenceSource {
    /// Relative path to the archive directory.
    pub directory: String,
    /// Number of files in the archive, must be > 0.
    pub frame_count: u64,
    /// Source playback rate multiplier.
    #[serde(default = "default_playback_rate")]
    pub playback_rate: f64,
}

fn default_playback_rate() -> f64 {
    1.0
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
/// Camera sweep parameters interpolated over the composition duration.
///
/// Defaults reproduce the stock reveal: the layer starts swiveled 30
/// degrees left and tilted 15 degrees with a 10 % zoom, and eases out to
/// rest.
pub struct Sweep {
    /// Swivel (Y-axis rotation) at progress 0, degrees.
    #[serde(default = "default_swivel_start")]
    pub swivel_start_deg: f64,
    /// Swivel at progress 1, degrees.
    #[serde(default)]
    pub swivel_end_deg: f64,
    /// Tilt (X-axis rotation) at progress 0, degrees.
    #[serde(default = "default_tilt_start")]
    pub tilt_start_deg: f64,
    /// Tilt at progress 1, degrees.
    #[serde(default)]
    pub tilt_end_deg: f64,
    /// Uniform scale at progress 0.
    #[serde(default = "default_scale_start")]
    pub scale_start: f64,
    /// Uniform scale at progress 1.
    #[serde(default = "default_scale_end")]
    pub scale_end: f64,
    /// Constant vertical drift as a percentage of layer height.
    #[serde(default)]
    pub translate_y_pct: f64,
    /// Perspective depth of the 3D container, pixels.
    #[serde(default = "default_perspective_px")]
    pub perspective_px: f64,
    /// Progress strategy.
    #[serde(default)]
    pub easing: Easing,
}

fn default_swivel_start() -> f64 {
    -30.0
}

fn default_tilt_start() -> f64 {
    15.0
}

fn default_scale_start() -> f64 {
    1.1
}

fn default_scale_end() -> f64 {
    1.0
}

fn default_perspective_px() -> f64 {
    1000.0
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            swivel_start_deg: default_swivel_start(),
            swivel_end_deg: 0.0,
            tilt_start_deg: default_tilt_start(),
            tilt_end_deg: 0.0,
            scale_start: default_scale_start(),
            scale_end: default_scale_end(),
            translate_y_pct: 0.0,
            perspective_px: default_perspective_px(),
            easing: Easing::default(),
        }
    }
}

impl Sweep {
    /// Validate sweep invariants.
    pub fn validate(&self) -> PivraResult<()> {
        for (name, value) in [
            ("swivel_start_deg", self.swivel_start_deg),
            ("swivel_end_deg", self.swivel_end_deg),
            ("tilt_start_deg", self.tilt_start_deg),
            ("tilt_end_deg", self.tilt_end_deg),
            ("translate_y_pct", self.translate_y_pct),
        ] {
            if !value.is_finite() {
                return Err(PivraError::validation(format!(
                    "sweep {name} must be finite"
                )));
            }
        }
        for (name, value) in [
            ("scale_start", self.scale_start),
            ("scale_end", self.scale_end),
            ("perspective_px", self.perspective_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PivraError::validation(format!(
                    "sweep {name} must be finite and > 0"
                )));
            }
        }
        self.easing.validate()
    }
}

impl Composition {
    /// Validate composition invariants and source configuration.
    pub fn validate(&self) -> PivraResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(PivraError::validation("fps must have num>0 and den>0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PivraError::validation("canvas width/height must be > 0"));
        }
        if self.duration.0 == 0 {
            return Err(PivraError::validation("duration must be > 0 frames"));
        }

        self.sweep.validate()?;

        match &self.background {
            Background::Color(c) => {
                for (name, value) in [("r", c.r), ("g", c.g), ("b", c.b), ("a", c.a)] {
                    if !value.is_finite() {
                        return Err(PivraError::validation(format!(
                            "background color {name} must be finite"
                        )));
                    }
                }
            }
            Background::Image(img) => validate_rel_source(&img.source, "background image source")?,
        }

        match &self.source {
            Source::Image(img) => validate_rel_source(&img.source, "image source")?,
            Source::Video(video) => {
                validate_rel_source(&video.source, "video source")?;
                validate_playback_rate(video.playback_rate, "video")?;
            }
            Source::FrameSequence(seq) => {
                validate_rel_source(&seq.directory, "sequence directory")?;
                validate_playback_rate(seq.playback_rate, "sequence")?;
                if seq.frame_count == 0 {
                    return Err(PivraError::validation("sequence frame_count must be > 0"));
                }
            }
        }

        Ok(())
    }
}

fn validate_rel_source(source: &str, field: &str) -> PivraResult<()> {
    if source.trim().is_empty() {
        return Err(PivraError::validation(format!("{field} must be non-empty")));
    }
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(PivraError::validation(format!(
            "{field} must be a relative path"
        )));
    }
    for part in s.split('/') {
        if part == ".." {
            return Err(PivraError::validation(format!(
                "{field} must not contain '..'"
            )));
        }
    }
    Ok(())
}

fn validate_playback_rate(rate: f64, kind: &str) -> PivraResult<()> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(PivraError::validation(format!(
            "{kind} playback_rate must be finite and > 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
