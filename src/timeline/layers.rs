use crate::foundation::core::FrameIndex;
use crate::foundation::error::StargazeResult;
use crate::scene::model::AnimationConfig;
use crate::timeline::stagger::entity_windows;

/// What a layer contributes to the visual state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerKind {
    /// Star counter text.
    Counter,
    /// Horizontal scroll shared by all avatars.
    Scroll,
    /// Avatar of the entity with this index.
    Avatar(usize),
    /// Star glyph popping with each arriving avatar.
    Star,
}

/// One time window of the flattened composition.
///
/// `start` may be negative (pre-roll). Layers never end before the video does; frames past
/// the end hold the settled state, so `end` is unbounded unless set otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    /// First global frame at which the layer is active.
    pub start: f64,
    /// Global frame at which the layer stops (exclusive).
    pub end: f64,
    /// Resolver selector.
    pub kind: LayerKind,
}

impl Layer {
    fn open_ended(start: f64, kind: LayerKind) -> Self {
        Self {
            start,
            end: f64::INFINITY,
            kind,
        }
    }

    /// Whether `frame` lies inside `[start, end)`.
    pub fn is_active(&self, frame: FrameIndex) -> bool {
        let f = frame.as_f64();
        self.start <= f && f < self.end
    }

    /// Frame relative to the layer start.
    pub fn local_frame(&self, frame: FrameIndex) -> f64 {
        frame.as_f64() - self.start
    }
}

/// Flatten the composition into independently evaluable layers.
///
/// Order is counter, scroll, avatars by index, star. Avatars appear in non-decreasing start
/// order, so the last active avatar before the star is the most recent arrival.
pub fn build_layers(config: &AnimationConfig) -> StargazeResult<Vec<Layer>> {
    let windows = entity_windows(config.entity_count(), config.duration_frames, config.fps)?;

    let mut layers = Vec::with_capacity(windows.len() + 3);
    layers.push(Layer::open_ended(0.0, LayerKind::Counter));
    layers.push(Layer::open_ended(0.0, LayerKind::Scroll));
    layers.extend(
        windows
            .iter()
            .map(|w| Layer::open_ended(w.sequence_start, LayerKind::Avatar(w.index))),
    );
    layers.push(Layer::open_ended(0.0, LayerKind::Star));
    Ok(layers)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/layers.rs"]
mod tests;
