use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};

/// Repository label shown in the video. Presentation-only; the engine never reads it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RepoLabel {
    /// Owner or organisation.
    pub org: String,
    /// Repository name.
    pub name: String,
}

/// Validated, immutable configuration of one render job.
///
/// Only produced by [`crate::StarsConfig::validate`]; every engine call borrows it and none
/// retains it. It is `Send + Sync`, so frames may be resolved from any number of threads.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    pub(crate) duration_frames: u64,
    pub(crate) fps: Fps,
    pub(crate) canvas: Canvas,
    pub(crate) avatar_size: f64,
    pub(crate) avatar_gap: f64,
    pub(crate) star_size: f64,
    pub(crate) stars_final: i64,
    pub(crate) stargazers: Vec<String>,
    pub(crate) repo: RepoLabel,
}

impl AnimationConfig {
    /// Animation length in frames (`seconds * fps`, rounded).
    pub fn duration_frames(&self) -> u64 {
        self.duration_frames
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Output dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Avatar edge length in pixels.
    pub fn avatar_size(&self) -> f64 {
        self.avatar_size
    }

    /// Horizontal gap between avatars in pixels.
    pub fn avatar_gap(&self) -> f64 {
        self.avatar_gap
    }

    /// Star glyph edge length in pixels.
    pub fn star_size(&self) -> f64 {
        self.star_size
    }

    /// Star count shown on the last frame.
    pub fn stars_final(&self) -> i64 {
        self.stars_final
    }

    /// Opaque avatar image references, one per entity.
    pub fn stargazers(&self) -> &[String] {
        &self.stargazers
    }

    /// Number of animated entities.
    pub fn entity_count(&self) -> usize {
        self.stargazers.len()
    }

    /// Repository label.
    pub fn repo(&self) -> &RepoLabel {
        &self.repo
    }

    /// Every frame of the video.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration_frames),
        }
    }

    /// Per-job metadata the renderer needs to size its output.
    pub fn metadata(&self) -> VideoMetadata {
        VideoMetadata {
            duration_frames: self.duration_frames,
            fps: self.fps,
            canvas: self.canvas,
        }
    }
}

/// Output container parameters, derived once per job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VideoMetadata {
    /// Total frame count.
    pub duration_frames: u64,
    /// Frame rate.
    pub fps: Fps,
    /// Output dimensions in pixels.
    pub canvas: Canvas,
}
