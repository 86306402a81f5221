use crate::{
    assets::sequence::frame_rel_path,
    composition::model::{Background, Composition, Source},
    eval::evaluator::EvaluatedFrame,
    foundation::core::{Canvas, FrameIndex, Pose3D, Rgba8},
    foundation::error::{PivraError, PivraResult},
};

#[derive(Clone, Debug, serde::Serialize)]
/// Compositor-agnostic plan for a single frame.
///
/// Ops are listed in painter's order: the backdrop first, then the
/// transformed media layer. The perspective depth applies to the 3D
/// container holding the layer.
pub struct FramePlan {
    /// Planned frame index.
    pub frame: FrameIndex,
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Perspective depth of the 3D container, pixels.
    pub perspective_px: f64,
    /// Draw operations in painter's order.
    pub ops: Vec<DrawOp>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// A draw operation handed to the external compositor.
pub enum DrawOp {
    /// Full-bleed solid fill.
    Backdrop {
        /// Fill color.
        color: Rgba8,
    },
    /// Full-bleed static image under the transformed layer.
    BackdropImage {
        /// Relative path to the image file.
        source: String,
    },
    /// The transformed full-bleed media layer.
    Layer {
        /// Resolved media reference for this frame.
        source: ResolvedSource,
        /// Camera pose, for matrix-based compositors.
        pose: Pose3D,
        /// Assembled transform descriptor, for style-based compositors.
        transform: String,
    },
}

#[derive(Clone, Debug, serde::Serialize)]
/// Media reference resolved for a specific frame.
pub enum ResolvedSource {
    /// A still image shown on every frame.
    Image {
        /// Relative path to the image file.
        source: String,
    },
    /// One decoded moment of a video file.
    VideoFrame {
        /// Relative path to the video file.
        source: String,
        /// Source time to decode, seconds.
        source_time_s: f64,
    },
    /// One file of a frame archive.
    SequenceFrame {
        /// Relative path to the archive file.
        source: String,
        /// Resolved archive index (0-based).
        index: u64,
    },
}

/// Compile an evaluated frame into a [`FramePlan`].
pub fn compile_frame(comp: &Composition, eval: &EvaluatedFrame) -> PivraResult<FramePlan> {
    let mut ops = Vec::with_capacity(2);

    match &comp.background {
        Background::Color(c) => ops.push(DrawOp::Backdrop {
            color: c.to_rgba8(),
        }),
        Background::Image(img) => ops.push(DrawOp::BackdropImage {
            source: img.source.clone(),
        }),
    }

    let source = match &comp.source {
        Source::Image(img) => ResolvedSource::Image {
            source: img.source.clone(),
        },
        Source::Video(video) => ResolvedSource::VideoFrame {
            source: video.source.clone(),
            source_time_s: eval.source_time_s.unwrap_or(0.0),
        },
        Source::FrameSequence(seq) => {
            let index = eval.source_frame.ok_or_else(|| {
                PivraError::evaluation("evaluated frame carries no archive index")
            })?;
            ResolvedSource::SequenceFrame {
                source: frame_rel_path(&seq.directory, index),
                index,
            }
        }
    };

    ops.push(DrawOp::Layer {
        source,
        pose: eval.pose,
        transform: eval.pose.to_transform_string(),
    });

    Ok(FramePlan {
        frame: eval.frame,
        canvas: comp.canvas,
        perspective_px: comp.sweep.perspective_px,
        ops,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
