use rayon::prelude::*;

use crate::{
    composition::model::Composition,
    eval::evaluator::Evaluator,
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{PivraError, PivraResult},
    render::plan::{FramePlan, compile_frame},
};

/// Evaluate + compile a single frame.
///
/// This is the primary one-shot API for producing a plan from a
/// [`Composition`].
///
/// Pipeline:
/// 1. [`Evaluator::eval_frame`](crate::Evaluator::eval_frame)
/// 2. [`compile_frame`](crate::compile_frame)
#[tracing::instrument(skip(comp))]
pub fn plan_frame(comp: &Composition, frame: FrameIndex) -> PivraResult<FramePlan> {
    let eval = Evaluator::eval_frame(comp, frame)?;
    compile_frame(comp, &eval)
}

/// Plan a range of frames (inclusive start, exclusive end).
pub fn plan_frames(comp: &Composition, range: FrameRange) -> PivraResult<Vec<FramePlan>> {
    plan_frames_with(comp, range, &PlanThreading::default())
}

#[derive(Clone, Debug)]
/// Threading controls for batch planning.
pub struct PlanThreading {
    /// Plan frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Explicit worker count; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for PlanThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
        }
    }
}

/// Plan a range of frames with explicit threading controls.
///
/// Frames are independent pure computations, so parallel and sequential
/// planning produce identical output in the same order.
#[tracing::instrument(skip(comp))]
pub fn plan_frames_with(
    comp: &Composition,
    range: FrameRange,
    threading: &PlanThreading,
) -> PivraResult<Vec<FramePlan>> {
    if range.is_empty() {
        return Err(PivraError::validation("plan range must be non-empty"));
    }
    if range.end.0 > comp.duration.0 {
        return Err(PivraError::validation(
            "plan range exceeds composition duration",
        ));
    }
    comp.validate()?;

    if !threading.parallel {
        let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
        for f in range.start.0..range.end.0 {
            let eval = Evaluator::eval_frame_unchecked(comp, FrameIndex(f))?;
            out.push(compile_frame(comp, &eval)?);
        }
        return Ok(out);
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| {
                let eval = Evaluator::eval_frame_unchecked(comp, FrameIndex(f))?;
                compile_frame(comp, &eval)
            })
            .collect::<PivraResult<Vec<_>>>()
    })
}

fn build_thread_pool(threads: Option<usize>) -> PivraResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PivraError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
