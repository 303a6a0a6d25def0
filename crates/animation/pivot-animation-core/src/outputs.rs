//! Output contracts from the mixer.
//!
//! Changes carry the active actions' pose weights for this tick; events carry
//! the discrete transition/clip signals. The host applies changes to its
//! skeleton binding and reacts to events.

use serde::{Deserialize, Serialize};

use crate::ids::{ActionId, ClipId};

/// One active action's contribution this tick.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Change {
    pub action: ActionId,
    pub clip: ClipId,
    /// Blend weight in [0,1].
    pub weight: f32,
    /// Local clip time in seconds.
    pub time: f32,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CoreEvent {
    ClipFinished { action: ActionId },
    TransitionStarted { turn: ActionId, to_idle: ActionId },
    TransitionRejected { turn: ActionId },
    TransitionCompleted { idle: ActionId },
}

/// Outputs returned by Mixer::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<CoreEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: CoreEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
