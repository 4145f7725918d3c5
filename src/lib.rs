//! Stargaze is a frame-deterministic animation engine for "GitHub stars" videos.
//!
//! Given a validated [`AnimationConfig`] and a [`FrameIndex`], the engine computes every
//! animated parameter of that frame: the displayed star count, each avatar's horizontal
//! position and pop-in scale, and the star glyph's scale. Painting pixels, loading images and
//! encoding video are left to the surrounding renderer.
//!
//! # Pipeline overview
//!
//! 1. **Load**: JSON -> [`StarsConfig`] (parse errors are config validation errors)
//! 2. **Validate**: [`StarsConfig::validate`] -> immutable [`AnimationConfig`]
//! 3. **Resolve**: [`resolve_visual_state`] per frame, or [`resolve_range`] for a batch
//!
//! Resolution is pure in `(config, frame)`: no caching, no interior mutability, no IO. Frames
//! can be resolved out of order and on any number of threads with identical results.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod eval;
mod foundation;
mod scene;
mod schema;
mod timeline;

pub use animation::ease::Ease;
pub use animation::interpolate::{Extrapolate, InterpolateOpts, interpolate, interpolate2};
pub use animation::spring::{SpringConfig, SpringOpts, measure_spring, spring, spring_value};
pub use eval::range::{ResolveThreading, resolve_range};
pub use eval::resolver::{
    AvatarState, VisualState, avatar_left, avatar_scale, avatar_scroll, resolve_visual_state,
    star_count, star_scale,
};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange, MAX_EXACT_INT};
pub use foundation::error::{StargazeError, StargazeResult};
pub use scene::config::{StarsConfig, StarsConfigDef};
pub use scene::model::{AnimationConfig, RepoLabel, VideoMetadata};
pub use timeline::layers::{Layer, LayerKind, build_layers};
pub use timeline::stagger::{
    EntityWindow, PRE_ROLL_SECS, SETTLE_TAIL_SECS, entity_window, entity_windows,
};
