//! Input contracts for the mixer.
//!
//! Hosts build these per tick and pass them into Mixer::update(). Commands are
//! applied in order, before time advances.

use serde::{Deserialize, Serialize};

use crate::ids::ActionId;

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Action-level commands applied before stepping.
    #[serde(default)]
    pub action_cmds: Vec<ActionCommand>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ActionCommand {
    Play {
        action: ActionId,
    },
    Stop {
        action: ActionId,
    },
    /// Rewind local time to zero without touching weight or enabled state.
    Reset {
        action: ActionId,
    },
    SetLoopMode {
        action: ActionId,
        mode: LoopMode,
    },
    SetWeight {
        action: ActionId,
        weight: f32,
    },
    SetTimeScale {
        action: ActionId,
        time_scale: f32,
    },
    SetEnabled {
        action: ActionId,
        enabled: bool,
    },
    /// Start a timed blend from one action into another. With `warp` the
    /// playback speeds of both ends are ramped across the blend.
    CrossFadeTo {
        from: ActionId,
        to: ActionId,
        duration: f32,
        warp: bool,
    },
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum LoopMode {
    Once,
    Repeat,
}
