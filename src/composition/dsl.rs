use crate::{
    composition::model::{
        Background, Composition, ImageSource, SequenceSource, Source, Sweep, VideoSource,
    },
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::{PivraError, PivraResult},
};

/// Fluent builder for [`Composition`] values.
///
/// `build` validates the result, so a successfully built composition can
/// be planned without further checks.
pub struct CompositionBuilder {
    fps: Fps,
    canvas: Canvas,
    duration: FrameIndex,
    background: Background,
    source: Option<Source>,
    sweep: Sweep,
}

impl CompositionBuilder {
    /// Start a builder with the mandatory timeline parameters.
    pub fn new(fps: Fps, canvas: Canvas, duration: FrameIndex) -> Self {
        Self {
            fps,
            canvas,
            duration,
            background: Background::default(),
            source: None,
            sweep: Sweep::default(),
        }
    }

    /// Set the background layer.
    pub fn background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Set the media source.
    pub fn source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the camera sweep parameters.
    pub fn sweep(mut self, sweep: Sweep) -> Self {
        self.sweep = sweep;
        self
    }

    /// Finish and validate the composition.
    pub fn build(self) -> PivraResult<Composition> {
        let source = self
            .source
            .ok_or_else(|| PivraError::validation("composition requires a source"))?;
        let comp = Composition {
            fps: self.fps,
            canvas: self.canvas,
            duration: self.duration,
            background: self.background,
            source,
            sweep: self.sweep,
        };
        comp.validate()?;
        Ok(comp)
    }
}

/// Build a still-image source.
pub fn image_source(source: impl Into<String>) -> Source {
    Source::Image(ImageSource {
        source: source.into(),
    })
}

/// Build a video source played at `playback_rate`.
pub fn video_source(source: impl Into<String>, playback_rate: f64) -> Source {
    Source::Video(VideoSource {
        source: source.into(),
        playback_rate,
    })
}

/// Build a frame-archive source played at `playback_rate`.
pub fn sequence_source(
    directory: impl Into<String>,
    frame_count: u64,
    playback_rate: f64,
) -> Source {
    Source::FrameSequence(SequenceSource {
        directory: directory.into(),
        frame_count,
        playback_rate,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
