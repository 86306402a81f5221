//! Source-frame resolution for sped-up media.
//!
//! A playback rate above 1 maps each output frame to several source
//! frames, fast-forwarding the source inside a fixed output duration.

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{PivraError, PivraResult};

/// Resolve the source frame shown at `frame` for a bounded frame archive.
///
/// `index = min(floor(frame * playback_rate), frame_count - 1)`; the result
/// is always within `[0, frame_count - 1]`.
pub fn source_frame_index(
    frame: FrameIndex,
    playback_rate: f64,
    frame_count: u64,
) -> PivraResult<u64> {
    if frame_count == 0 {
        return Err(PivraError::validation("frame_count must be > 0"));
    }
    if !playback_rate.is_finite() || playback_rate <= 0.0 {
        return Err(PivraError::validation(
            "playback_rate must be finite and > 0",
        ));
    }

    let raw = ((frame.0 as f64) * playback_rate).floor().max(0.0) as u64;
    Ok(raw.min(frame_count - 1))
}

/// File name of a source frame inside an extracted archive.
///
/// Archives are produced with a 1-based `frame_%04d.jpg` pattern, so index
/// 0 resolves to `frame_0001.jpg`.
pub fn frame_file_name(index: u64) -> String {
    format!("frame_{:04}.jpg", index + 1)
}

/// Join an archive directory with the file name for `index`.
///
/// Directories are relative with forward slashes; a trailing slash on
/// `directory` is tolerated.
pub fn frame_rel_path(directory: &str, index: u64) -> String {
    let dir = directory.trim_end_matches('/');
    if dir.is_empty() {
        frame_file_name(index)
    } else {
        format!("{dir}/{}", frame_file_name(index))
    }
}

/// Source media time for a video played at `playback_rate`.
pub fn video_source_time_sec(playback_rate: f64, frame: FrameIndex, fps: Fps) -> f64 {
    let timeline_t = fps.frames_to_secs(frame.0);
    (timeline_t * playback_rate).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sequence.rs"]
mod tests;
