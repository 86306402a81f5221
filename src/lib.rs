//! Pivra is a declarative 3D pan-and-tilt transition engine.
//!
//! Pivra turns a timeline (`Composition`) describing one media source and
//! one camera sweep into per-frame render plans (`FramePlan`) for an
//! external compositor. Rasterizing, decoding and encoding stay outside
//! this crate.
//!
//! # Pipeline overview
//!
//! 1. **Evaluate**: `Composition + FrameIndex -> EvaluatedFrame` (progress
//!    and interpolated camera pose)
//! 2. **Compile**: `EvaluatedFrame -> FramePlan` (backdrop + transformed
//!    layer with an assembled transform descriptor)
//! 3. **Hand off**: the external compositor draws the plan
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: evaluation and compilation are pure and
//!   stable for a given input; re-evaluating a frame is always safe.
//! - **No IO in the engine**: sources are carried as relative paths and
//!   resolved by the caller.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod composition;
mod eval;
mod foundation;
mod render;

pub use animation::ease::Curve;
pub use animation::progress::Easing;
pub use animation::spring::SpringConfig;
pub use assets::color::Color;
pub use assets::sequence::{
    frame_file_name, frame_rel_path, source_frame_index, video_source_time_sec,
};
pub use composition::dsl::{CompositionBuilder, image_source, sequence_source, video_source};
pub use composition::model::{
    Background, Composition, ImageSource, SequenceSource, Source, Sweep, VideoSource,
};
pub use eval::evaluator::{EvaluatedFrame, Evaluator};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Pose3D, Rgba8};
pub use foundation::error::{PivraError, PivraResult};
pub use render::pipeline::{PlanThreading, plan_frame, plan_frames, plan_frames_with};
pub use render::plan::{DrawOp, FramePlan, ResolvedSource, compile_frame};
