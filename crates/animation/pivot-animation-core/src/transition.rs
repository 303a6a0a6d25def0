//! Turn-transition scheduling: a one-shot turn clip with timed cross-fades at
//! both ends, at most one transition in flight.

use serde::{Deserialize, Serialize};

use crate::ids::ActionId;
use crate::inputs::LoopMode;
use crate::mixer::Mixer;
use crate::outputs::CoreEvent;
use crate::schedule::TimerQueue;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TransitionState {
    Idle,
    Transitioning,
}

/// One requested idle → turn → idle transition. Fade durations are seconds.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub from_idle: ActionId,
    pub fade_out: f32,
    pub turn: ActionId,
    pub fade_in: f32,
    pub to_idle: ActionId,
}

#[derive(Clone, Copy, Debug)]
struct Completion {
    turn: ActionId,
    to_idle: ActionId,
    fade_in: f32,
}

/// Drives transitions on a mixer. Requests arriving while one is in flight are
/// dropped, never queued.
#[derive(Debug)]
pub struct TransitionScheduler {
    state: TransitionState,
    timers: TimerQueue<Completion>,
}

impl TransitionScheduler {
    pub fn new() -> Self {
        Self::with_capacity(4)
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            state: TransitionState::Idle,
            timers: TimerQueue::with_capacity(cap),
        }
    }

    #[inline]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.state == TransitionState::Transitioning
    }

    /// Deadline of the pending completion, on the mixer clock (tests/tooling).
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers.next_deadline()
    }

    /// Begin a transition: play the turn clip once from the start, cross-fade
    /// the current idle into it, and defer the hand-off to the target idle.
    /// Returns false (emitting TransitionRejected) when one is already in
    /// flight.
    pub fn request(&mut self, mixer: &mut Mixer, req: TransitionRequest) -> bool {
        if self.is_busy() {
            log::debug!("transition request dropped, another is in flight");
            mixer.push_event(CoreEvent::TransitionRejected { turn: req.turn });
            return false;
        }

        let turn_duration = mixer.action_clip_duration(req.turn).unwrap_or(0.0);

        mixer.set_loop_mode(req.turn, LoopMode::Once);
        mixer.reset(req.turn);
        mixer.play(req.turn);
        mixer.cross_fade_to(req.from_idle, req.turn, req.fade_out, true);

        // The hand-off lands shortly before the turn clip ends so the end
        // blend finishes together with the clip. A fade pair longer than the
        // clip makes this negative; the queue clamps it to "now" and the
        // completion runs on the next tick, as the platform timer would.
        let delay = f64::from(turn_duration) - f64::from(req.fade_in + req.fade_out);
        self.timers.schedule_in(
            mixer.clock(),
            delay,
            Completion {
                turn: req.turn,
                to_idle: req.to_idle,
                fade_in: req.fade_in,
            },
        );

        self.state = TransitionState::Transitioning;
        mixer.push_event(CoreEvent::TransitionStarted {
            turn: req.turn,
            to_idle: req.to_idle,
        });
        true
    }

    /// Run completions whose deadline has passed on the mixer clock. Call once
    /// per frame, after `Mixer::update`.
    pub fn run_due(&mut self, mixer: &mut Mixer) {
        for c in self.timers.pop_due(mixer.clock()) {
            mixer.set_enabled(c.to_idle, true);
            mixer.cross_fade_to(c.turn, c.to_idle, c.fade_in, true);
            self.state = TransitionState::Idle;
            mixer.play(c.to_idle);
            mixer.push_event(CoreEvent::TransitionCompleted { idle: c.to_idle });
        }
    }
}

impl Default for TransitionScheduler {
    fn default() -> Self {
        Self::new()
    }
}
