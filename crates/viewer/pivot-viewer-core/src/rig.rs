//! Character rig: the named actions the viewer drives. The base idle loops by
//! default; each turn direction pairs a one-shot turn clip with a directional
//! idle derived from the base idle clip.

use pivot_animation_core::{
    ActionId, ClipData, Mixer, TransitionRequest, TransitionScheduler,
};
use serde::{Deserialize, Serialize};

use crate::clipset::ClipSet;
use crate::error::LoadError;

pub const CLIP_IDLE: &str = "idle";
pub const CLIP_TURN_RIGHT: &str = "turn1";
pub const CLIP_TURN_LEFT: &str = "turn2";
pub const CLIP_TURN_BACK: &str = "turn3";

// Blend timings in seconds. The 180-degree turn covers more ground and gets a
// longer fade out of the idle.
const TURN_FADE_OUT: f32 = 0.165;
const BACK_FADE_OUT: f32 = 0.25;
const TURN_FADE_IN: f32 = 0.233;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnCommand {
    Left,
    Right,
    Back,
}

#[derive(Clone, Debug)]
pub struct CharacterRig {
    pub idle: ActionId,
    pub idle_right: ActionId,
    pub idle_left: ActionId,
    pub idle_back: ActionId,
    pub turn_right: ActionId,
    pub turn_left: ActionId,
    pub turn_back: ActionId,
}

fn require<'a>(set: &'a ClipSet, name: &'static str) -> Result<&'a ClipData, LoadError> {
    set.get(name).ok_or(LoadError::MissingClip(name))
}

/// A directional idle reuses the base idle's timing under a derived name.
fn derived(base: &ClipData, name: &str) -> ClipData {
    ClipData::new(name, base.duration_ms)
}

impl CharacterRig {
    /// Resolve required clips by name, derive the directional idles, create
    /// one action per clip, and start the base idle loop.
    pub fn from_clipset(mixer: &mut Mixer, set: &ClipSet) -> Result<Self, LoadError> {
        let idle_clip = require(set, CLIP_IDLE)?.clone();
        let turn_right_clip = require(set, CLIP_TURN_RIGHT)?.clone();
        let turn_left_clip = require(set, CLIP_TURN_LEFT)?.clone();
        let turn_back_clip = require(set, CLIP_TURN_BACK)?.clone();

        let idle_id = mixer.load_clip(idle_clip.clone());
        let idle_right_id = mixer.load_clip(derived(&idle_clip, "idle-right"));
        let idle_left_id = mixer.load_clip(derived(&idle_clip, "idle-left"));
        let idle_back_id = mixer.load_clip(derived(&idle_clip, "idle-back"));
        let turn_right_id = mixer.load_clip(turn_right_clip);
        let turn_left_id = mixer.load_clip(turn_left_clip);
        let turn_back_id = mixer.load_clip(turn_back_clip);

        let rig = Self {
            idle: mixer.clip_action(idle_id),
            idle_right: mixer.clip_action(idle_right_id),
            idle_left: mixer.clip_action(idle_left_id),
            idle_back: mixer.clip_action(idle_back_id),
            turn_right: mixer.clip_action(turn_right_id),
            turn_left: mixer.clip_action(turn_left_id),
            turn_back: mixer.clip_action(turn_back_id),
        };
        mixer.play(rig.idle);
        Ok(rig)
    }

    /// Map a turn command to its transition request. Every turn fades out of
    /// the base idle and lands on its directional idle.
    pub fn transition_for(&self, cmd: TurnCommand) -> TransitionRequest {
        match cmd {
            TurnCommand::Right => TransitionRequest {
                from_idle: self.idle,
                fade_out: TURN_FADE_OUT,
                turn: self.turn_right,
                fade_in: TURN_FADE_IN,
                to_idle: self.idle_right,
            },
            TurnCommand::Left => TransitionRequest {
                from_idle: self.idle,
                fade_out: TURN_FADE_OUT,
                turn: self.turn_left,
                fade_in: TURN_FADE_IN,
                to_idle: self.idle_left,
            },
            TurnCommand::Back => TransitionRequest {
                from_idle: self.idle,
                fade_out: BACK_FADE_OUT,
                turn: self.turn_back,
                fade_in: TURN_FADE_IN,
                to_idle: self.idle_back,
            },
        }
    }

    /// Caller-side busy guard: drop the command outright when a transition is
    /// in flight, otherwise submit it.
    pub fn request_turn(
        &self,
        mixer: &mut Mixer,
        scheduler: &mut TransitionScheduler,
        cmd: TurnCommand,
    ) -> bool {
        if scheduler.is_busy() {
            log::debug!("{cmd:?} ignored, transition in flight");
            return false;
        }
        scheduler.request(mixer, self.transition_for(cmd))
    }
}
