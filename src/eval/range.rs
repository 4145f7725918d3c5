use rayon::prelude::*;

use crate::eval::resolver::{VisualState, resolve_visual_state};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{StargazeError, StargazeResult};
use crate::scene::model::AnimationConfig;

#[derive(Clone, Debug, Default)]
/// Threading controls for multi-frame resolution.
pub struct ResolveThreading {
    /// Resolve frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// Resolve every frame of `range` (inclusive start, exclusive end), in frame order.
///
/// Parallel and sequential modes return identical results; frames share nothing but the
/// read-only `config`.
#[tracing::instrument(skip(config))]
pub fn resolve_range(
    config: &AnimationConfig,
    range: FrameRange,
    threading: &ResolveThreading,
) -> StargazeResult<Vec<VisualState>> {
    if !threading.parallel {
        return range
            .frames()
            .map(|f| resolve_visual_state(config, f))
            .collect();
    }

    let frames: Vec<FrameIndex> = range.frames().collect();
    let pool = build_thread_pool(threading.threads)?;
    tracing::debug!(
        frames = frames.len(),
        threads = pool.current_num_threads(),
        "resolving frames in parallel"
    );
    pool.install(|| {
        frames
            .par_iter()
            .map(|&f| resolve_visual_state(config, f))
            .collect()
    })
}

fn build_thread_pool(threads: Option<usize>) -> StargazeResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(StargazeError::evaluation(
            "resolve threads must be > 0 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| StargazeError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/range.rs"]
mod tests;
