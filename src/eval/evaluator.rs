use crate::{
    assets::sequence::{source_frame_index, video_source_time_sec},
    composition::model::{Composition, Source},
    foundation::core::{FrameIndex, Pose3D},
    foundation::error::{PivraError, PivraResult},
    foundation::math::lerp,
};

#[derive(Clone, Debug, serde::Serialize)]
/// Fully evaluated frame state before plan compilation.
pub struct EvaluatedFrame {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Animation progress; `[0, 1]` for curve easings, transiently above 1
    /// for underdamped springs.
    pub progress: f64,
    /// Interpolated camera pose.
    pub pose: Pose3D,
    /// Source media time (video sources), if applicable.
    pub source_time_s: Option<f64>,
    /// Resolved archive index (sequence sources), if applicable.
    pub source_frame: Option<u64>,
}

/// Stateless evaluator from composition timeline to frame state.
///
/// Evaluation is a pure function of `(Composition, FrameIndex)`: identical
/// inputs yield bit-identical output, so callers may re-evaluate the same
/// frame freely.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(comp))]
    /// Evaluate one frame, validating the composition first.
    pub fn eval_frame(comp: &Composition, frame: FrameIndex) -> PivraResult<EvaluatedFrame> {
        Self::eval_frame_impl(comp, frame, true)
    }

    pub(crate) fn eval_frame_unchecked(
        comp: &Composition,
        frame: FrameIndex,
    ) -> PivraResult<EvaluatedFrame> {
        Self::eval_frame_impl(comp, frame, false)
    }

    fn eval_frame_impl(
        comp: &Composition,
        frame: FrameIndex,
        validate_comp: bool,
    ) -> PivraResult<EvaluatedFrame> {
        if validate_comp {
            comp.validate()?;
        }
        if frame.0 >= comp.duration.0 {
            return Err(PivraError::evaluation("frame is out of bounds"));
        }

        let sweep = &comp.sweep;
        let progress = sweep.easing.progress_at(frame, comp.duration, comp.fps);

        let pose = Pose3D {
            swivel_deg: lerp(sweep.swivel_start_deg, sweep.swivel_end_deg, progress),
            tilt_deg: lerp(sweep.tilt_start_deg, sweep.tilt_end_deg, progress),
            scale: lerp(sweep.scale_start, sweep.scale_end, progress),
            translate_y_pct: sweep.translate_y_pct,
        };

        let (source_time_s, source_frame) = match &comp.source {
            Source::Image(_) => (None, None),
            Source::Video(video) => (
                Some(video_source_time_sec(video.playback_rate, frame, comp.fps)),
                None,
            ),
            Source::FrameSequence(seq) => (
                None,
                Some(source_frame_index(
                    frame,
                    seq.playback_rate,
                    seq.frame_count,
                )?),
            ),
        };

        Ok(EvaluatedFrame {
            frame,
            progress,
            pose,
            source_time_s,
            source_frame,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
