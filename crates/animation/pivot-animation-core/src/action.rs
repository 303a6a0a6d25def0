//! Clip actions: playable, stateful handles over clips.

use crate::ids::{ActionId, ClipId};
use crate::inputs::LoopMode;

/// Weight/speed blend in flight on an action.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fade {
    /// Mixer clock at which the fade started.
    pub start: f64,
    pub duration: f32,
    pub from_weight: f32,
    pub to_weight: f32,
    pub warp: Option<Warp>,
}

/// Playback-speed ramp applied for the duration of a fade.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Warp {
    pub start_scale: f32,
    pub end_scale: f32,
}

/// A playable handle over a clip.
///
/// `playing` governs whether local time advances; `enabled` governs whether the
/// action contributes to the blended pose at all. A faded-out action ends up
/// with both cleared.
#[derive(Clone, Debug)]
pub struct ClipAction {
    pub id: ActionId,
    pub clip: ClipId,
    /// Local clip time in seconds.
    pub time: f32,
    pub time_scale: f32,
    /// Blend weight in [0,1].
    pub weight: f32,
    pub enabled: bool,
    pub playing: bool,
    pub mode: LoopMode,
    pub(crate) fade: Option<Fade>,
}

impl ClipAction {
    pub(crate) fn new(id: ActionId, clip: ClipId) -> Self {
        Self {
            id,
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 1.0,
            enabled: false,
            playing: false,
            mode: LoopMode::Repeat,
            fade: None,
        }
    }

    /// Effective contribution this tick: zero while disabled.
    #[inline]
    pub fn effective_weight(&self) -> f32 {
        if self.enabled {
            self.weight
        } else {
            0.0
        }
    }

    #[inline]
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }
}
