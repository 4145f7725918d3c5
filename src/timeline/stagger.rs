use crate::animation::interpolate::{InterpolateOpts, interpolate2};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{StargazeError, StargazeResult};

/// Seconds the first entity is already running when the video starts.
pub const PRE_ROLL_SECS: f64 = 0.5;

/// Seconds the last entity gets to settle before the video ends.
pub const SETTLE_TAIL_SECS: f64 = 2.0;

/// Activation point of one entity on the global timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EntityWindow {
    /// Entity index into the stargazer list.
    pub index: usize,
    /// Global frame at which this entity's local clock reads 0. May be negative.
    pub sequence_start: f64,
}

impl EntityWindow {
    /// Entity-local frame for a global frame. Negative before activation.
    pub fn local_frame(self, frame: FrameIndex) -> f64 {
        frame.as_f64() - self.sequence_start
    }

    /// Whether the entity's clock has reached 0 at `frame`.
    pub fn has_started(self, frame: FrameIndex) -> bool {
        self.local_frame(frame) >= 0.0
    }
}

/// Compute where entity `index` of `entity_count` starts its local animation.
///
/// Starts are spread linearly from `-fps * 0.5` (first entity) to
/// `duration_frames - fps * 2` (last entity). A single entity gets the first start. When the
/// video is too short for the tail, every entity shares the first start so order is kept.
pub fn entity_window(
    index: usize,
    entity_count: usize,
    duration_frames: u64,
    fps: Fps,
) -> StargazeResult<EntityWindow> {
    if index >= entity_count {
        return Err(StargazeError::evaluation(format!(
            "entity index {index} out of range for {entity_count} entities"
        )));
    }

    let first = -fps.as_f64() * PRE_ROLL_SECS;
    if entity_count == 1 {
        return Ok(EntityWindow {
            index,
            sequence_start: first,
        });
    }

    let last = (duration_frames as f64 - fps.as_f64() * SETTLE_TAIL_SECS).max(first);
    let sequence_start = interpolate2(
        index as f64,
        [0.0, (entity_count - 1) as f64],
        [first, last],
        InterpolateOpts::default(),
    )?;
    Ok(EntityWindow {
        index,
        sequence_start,
    })
}

/// Windows for every entity, in index order (and therefore non-decreasing start order).
pub fn entity_windows(
    entity_count: usize,
    duration_frames: u64,
    fps: Fps,
) -> StargazeResult<Vec<EntityWindow>> {
    (0..entity_count)
        .map(|i| entity_window(i, entity_count, duration_frames, fps))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/stagger.rs"]
mod tests;
