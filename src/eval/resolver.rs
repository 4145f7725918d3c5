use crate::animation::ease::Ease;
use crate::animation::interpolate::{InterpolateOpts, interpolate2};
use crate::animation::spring::{SpringConfig, spring_value};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::StargazeResult;
use crate::scene::model::AnimationConfig;
use crate::timeline::layers::{Layer, LayerKind, build_layers};
use crate::timeline::stagger::entity_window;

/// Curve of the star counter: fast start, long soft landing.
const COUNT_EASE: Ease = Ease::Bezier {
    x1: 0.5,
    y1: 1.0,
    x2: 0.5,
    y2: 1.0,
};

/// Curve of the avatar scroll.
const SCROLL_EASE: Ease = Ease::Elastic { bounciness: 1.5 };

/// Spring used for avatar and star pop-in.
const POP_SPRING: SpringConfig = SpringConfig {
    stiffness: 100.0,
    damping: 10.0,
    mass: 1.0,
    overshoot_clamping: false,
};

/// Resolved state of one avatar.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AvatarState {
    /// Entity index.
    pub index: usize,
    /// Horizontal position in pixels.
    pub left: f64,
    /// Scale factor; 0 before the avatar's window opens.
    pub scale: f64,
    /// Whether the avatar's window has opened.
    pub visible: bool,
}

/// Everything the presentation layer paints for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VisualState {
    /// Frame this state belongs to.
    pub frame: FrameIndex,
    /// Displayed star count.
    pub star_count: i64,
    /// One entry per stargazer, in index order.
    pub avatars: Vec<AvatarState>,
    /// Star glyph scale factor.
    pub star_scale: f64,
}

/// Displayed star count at `frame`.
///
/// Counts up from `stars_final - entity_count` (which may be negative) to `stars_final` and
/// holds there from the last frame on. Halves round up.
pub fn star_count(config: &AnimationConfig, frame: FrameIndex) -> StargazeResult<i64> {
    let n = config.entity_count() as f64;
    let end = config.stars_final as f64;
    // Left side keeps the default extend policy; frames cannot be negative.
    let opts = InterpolateOpts::default()
        .clamp_right()
        .with_easing(COUNT_EASE);
    let v = interpolate2(
        frame.as_f64(),
        [0.0, config.duration_frames as f64],
        [end - n, end],
        opts,
    )?;
    Ok(round_half_up(v) as i64)
}

fn round_half_up(v: f64) -> f64 {
    // `v + 0.5` would round to even above 2^52.
    let floor = v.floor();
    if v - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Horizontal offset shared by all avatars at `frame`.
pub fn avatar_scroll(config: &AnimationConfig, frame: FrameIndex) -> StargazeResult<f64> {
    let n = config.entity_count() as f64;
    let travel = -n * config.avatar_size + f64::from(config.canvas.width) * 2.0 / 3.0;
    let opts = InterpolateOpts::default()
        .clamp_right()
        .with_easing(SCROLL_EASE);
    interpolate2(
        frame.as_f64(),
        [0.0, config.duration_frames as f64],
        [0.0, travel],
        opts,
    )
}

fn slot_offset(config: &AnimationConfig, index: usize) -> f64 {
    config.avatar_gap + index as f64 * (config.avatar_size + config.avatar_gap)
}

/// Horizontal position of avatar `index` at `frame`.
pub fn avatar_left(
    config: &AnimationConfig,
    index: usize,
    frame: FrameIndex,
) -> StargazeResult<f64> {
    Ok(slot_offset(config, index) + avatar_scroll(config, frame)?)
}

/// Pop-in scale of avatar `index` at `frame`, measured on the avatar's own clock.
pub fn avatar_scale(
    config: &AnimationConfig,
    index: usize,
    frame: FrameIndex,
) -> StargazeResult<f64> {
    let window = entity_window(
        index,
        config.entity_count(),
        config.duration_frames,
        config.fps,
    )?;
    Ok(spring_value(window.local_frame(frame), config.fps, &POP_SPRING))
}

/// Star scale at `frame`: pops on the clock of the most recently arrived avatar.
///
/// Rests at 1 when there are no stargazers or none has arrived yet.
pub fn star_scale(config: &AnimationConfig, frame: FrameIndex) -> StargazeResult<f64> {
    let layers = build_layers(config)?;
    Ok(star_scale_on(&layers, config, frame))
}

fn star_scale_on(layers: &[Layer], config: &AnimationConfig, frame: FrameIndex) -> f64 {
    // Avatar layers are in non-decreasing start order.
    layers
        .iter()
        .rev()
        .find(|l| matches!(l.kind, LayerKind::Avatar(_)) && l.is_active(frame))
        .map_or(1.0, |l| spring_value(l.local_frame(frame), config.fps, &POP_SPRING))
}

/// Resolve the complete visual state of one frame.
///
/// Pure in `(config, frame)`: frames may be resolved in any order and on any thread.
#[tracing::instrument(skip(config))]
pub fn resolve_visual_state(
    config: &AnimationConfig,
    frame: FrameIndex,
) -> StargazeResult<VisualState> {
    let layers = build_layers(config)?;

    let mut state = VisualState {
        frame,
        star_count: 0,
        avatars: Vec::with_capacity(config.entity_count()),
        star_scale: 1.0,
    };
    let mut scroll = 0.0;

    for layer in &layers {
        match layer.kind {
            LayerKind::Counter => state.star_count = star_count(config, frame)?,
            LayerKind::Scroll => scroll = avatar_scroll(config, frame)?,
            LayerKind::Avatar(index) => state.avatars.push(AvatarState {
                index,
                left: slot_offset(config, index) + scroll,
                scale: spring_value(layer.local_frame(frame), config.fps, &POP_SPRING),
                visible: layer.is_active(frame),
            }),
            LayerKind::Star => state.star_scale = star_scale_on(&layers, config, frame),
        }
    }

    Ok(state)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/resolver.rs"]
mod tests;
