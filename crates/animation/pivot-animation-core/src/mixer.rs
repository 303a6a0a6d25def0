//! Mixer: clip/action ownership and the per-tick update.
//!
//! Update order per tick: apply commands → advance the virtual clock → advance
//! fades (weight lerp, warp speed ramp) → advance action local times under
//! their loop mode → emit per-action changes and events.

use crate::action::{ClipAction, Fade, Warp};
use crate::clip::ClipData;
use crate::config::Config;
use crate::ids::{ActionId, ClipId, IdAllocator};
use crate::inputs::{ActionCommand, Inputs, LoopMode};
use crate::outputs::{Change, CoreEvent, Outputs};

/// Minimal clip library storage.
#[derive(Default, Debug)]
struct ClipLib {
    items: Vec<(ClipId, ClipData)>,
}

impl ClipLib {
    fn with_capacity(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
        }
    }
    fn insert(&mut self, id: ClipId, data: ClipData) {
        self.items.push((id, data));
    }
    fn get(&self, id: ClipId) -> Option<&ClipData> {
        self.items
            .iter()
            .find_map(|(c, d)| if *c == id { Some(d) } else { None })
    }
}

fn fmod(a: f32, b: f32) -> f32 {
    if b == 0.0 {
        return 0.0;
    }
    let m = a % b;
    if (m < 0.0 && b > 0.0) || (m > 0.0 && b < 0.0) {
        m + b
    } else {
        m
    }
}

/// Single-threaded animation mixer over opaque clip handles.
#[derive(Debug)]
pub struct Mixer {
    cfg: Config,
    ids: IdAllocator,
    clips: ClipLib,
    actions: Vec<ClipAction>,

    /// Monotonic virtual time in seconds, advanced only by `update`.
    clock: f64,

    // Per-tick outputs
    outputs: Outputs,
}

impl Mixer {
    /// Create a new mixer with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            ids: IdAllocator::new(),
            clips: ClipLib::with_capacity(cfg.clip_capacity),
            actions: Vec::with_capacity(cfg.action_capacity),
            clock: 0.0,
            outputs: Outputs::default(),
            cfg,
        }
    }

    #[inline]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    #[inline]
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// All actions in creation order; hosts read pose state from here.
    #[inline]
    pub fn actions(&self) -> &[ClipAction] {
        &self.actions
    }

    /// Load clip data into the mixer, returning a ClipId.
    pub fn load_clip(&mut self, mut data: ClipData) -> ClipId {
        let id = self.ids.alloc_clip();
        data.id = Some(id);
        self.clips.insert(id, data);
        id
    }

    pub fn clip(&self, id: ClipId) -> Option<&ClipData> {
        self.clips.get(id)
    }

    /// Create a playable action over a loaded clip.
    pub fn clip_action(&mut self, clip: ClipId) -> ActionId {
        let id = self.ids.alloc_action();
        self.actions.push(ClipAction::new(id, clip));
        id
    }

    pub fn action(&self, id: ActionId) -> Option<&ClipAction> {
        self.actions.iter().find(|a| a.id == id)
    }

    fn action_mut(&mut self, id: ActionId) -> Option<&mut ClipAction> {
        self.actions.iter_mut().find(|a| a.id == id)
    }

    /// Duration in seconds of the clip behind an action.
    pub fn action_clip_duration(&self, action: ActionId) -> Option<f32> {
        self.action(action)
            .and_then(|a| self.clips.get(a.clip))
            .map(ClipData::duration_secs)
    }

    // ---- Action controls (also reachable through Inputs commands) ----

    pub fn play(&mut self, id: ActionId) {
        if let Some(a) = self.action_mut(id) {
            a.enabled = true;
            a.playing = true;
        }
    }

    pub fn stop(&mut self, id: ActionId) {
        if let Some(a) = self.action_mut(id) {
            a.playing = false;
        }
    }

    pub fn reset(&mut self, id: ActionId) {
        if let Some(a) = self.action_mut(id) {
            a.time = 0.0;
        }
    }

    pub fn set_loop_mode(&mut self, id: ActionId, mode: LoopMode) {
        if let Some(a) = self.action_mut(id) {
            a.mode = mode;
        }
    }

    pub fn set_weight(&mut self, id: ActionId, weight: f32) {
        if let Some(a) = self.action_mut(id) {
            a.weight = weight.clamp(0.0, 1.0);
        }
    }

    pub fn set_time_scale(&mut self, id: ActionId, time_scale: f32) {
        if let Some(a) = self.action_mut(id) {
            a.time_scale = time_scale;
        }
    }

    pub fn set_enabled(&mut self, id: ActionId, enabled: bool) {
        if let Some(a) = self.action_mut(id) {
            a.enabled = enabled;
        }
    }

    /// Start a cross-fade: `from` ramps to zero weight and deactivates, `to`
    /// ramps to full weight, both over `duration` seconds. With `warp` the two
    /// playback speeds trade rates across the blend (the outgoing clip ramps
    /// toward the incoming clip's rate and vice versa).
    pub fn cross_fade_to(&mut self, from: ActionId, to: ActionId, duration: f32, warp: bool) {
        let now = self.clock;
        let (warp_out, warp_in) = if warp {
            match (self.action_clip_duration(from), self.action_clip_duration(to)) {
                (Some(fd), Some(td)) if fd > 0.0 && td > 0.0 => {
                    let ratio = td / fd;
                    (
                        Some(Warp {
                            start_scale: 1.0,
                            end_scale: ratio,
                        }),
                        Some(Warp {
                            start_scale: 1.0 / ratio,
                            end_scale: 1.0,
                        }),
                    )
                }
                _ => (None, None),
            }
        } else {
            (None, None)
        };

        if let Some(a) = self.action_mut(from) {
            a.fade = Some(Fade {
                start: now,
                duration,
                from_weight: a.weight,
                to_weight: 0.0,
                warp: warp_out,
            });
        }
        if let Some(a) = self.action_mut(to) {
            a.enabled = true;
            a.fade = Some(Fade {
                start: now,
                duration,
                from_weight: 0.0,
                to_weight: 1.0,
                warp: warp_in,
            });
        }
    }

    /// Push an event, honoring the per-tick cap.
    pub(crate) fn push_event(&mut self, event: CoreEvent) {
        if self.outputs.events.len() >= self.cfg.max_events_per_tick {
            log::debug!(
                "event dropped, per-tick cap {} reached",
                self.cfg.max_events_per_tick
            );
            return;
        }
        self.outputs.push_event(event);
    }

    fn apply_inputs(&mut self, inputs: Inputs) {
        for cmd in inputs.action_cmds {
            match cmd {
                ActionCommand::Play { action } => self.play(action),
                ActionCommand::Stop { action } => self.stop(action),
                ActionCommand::Reset { action } => self.reset(action),
                ActionCommand::SetLoopMode { action, mode } => self.set_loop_mode(action, mode),
                ActionCommand::SetWeight { action, weight } => self.set_weight(action, weight),
                ActionCommand::SetTimeScale { action, time_scale } => {
                    self.set_time_scale(action, time_scale)
                }
                ActionCommand::SetEnabled { action, enabled } => self.set_enabled(action, enabled),
                ActionCommand::CrossFadeTo {
                    from,
                    to,
                    duration,
                    warp,
                } => self.cross_fade_to(from, to, duration, warp),
            }
        }
    }

    /// Advance in-flight fades against the current clock. A finished fade-out
    /// deactivates its action; finishing either way stops warping.
    fn advance_fades(&mut self) {
        let now = self.clock;
        for a in &mut self.actions {
            let Some(fade) = a.fade else { continue };
            let raw = if fade.duration > 0.0 {
                ((now - fade.start) as f32) / fade.duration
            } else {
                1.0
            };
            let t = raw.clamp(0.0, 1.0);
            a.weight = fade.from_weight + (fade.to_weight - fade.from_weight) * t;
            if let Some(w) = fade.warp {
                a.time_scale = w.start_scale + (w.end_scale - w.start_scale) * t;
            }
            if t >= 1.0 {
                a.fade = None;
                a.time_scale = 1.0;
                if a.weight <= f32::EPSILON {
                    a.enabled = false;
                    a.playing = false;
                }
            }
        }
    }

    /// Advance local times. Once-mode clips clamp at the end and stop playing;
    /// Repeat wraps modulo the clip duration.
    fn advance_action_times(&mut self, dt: f32) {
        let clips = &self.clips;
        let mut finished: Vec<ActionId> = Vec::new();
        for a in &mut self.actions {
            if !(a.enabled && a.playing) {
                continue;
            }
            let Some(clip) = clips.get(a.clip) else { continue };
            let dur = clip.duration_secs();
            if dur <= 0.0 {
                continue;
            }
            a.time += dt * a.time_scale;
            match a.mode {
                LoopMode::Once => {
                    if a.time >= dur {
                        a.time = dur;
                        a.playing = false;
                        finished.push(a.id);
                    } else if a.time < 0.0 {
                        a.time = 0.0;
                    }
                }
                LoopMode::Repeat => {
                    let m = fmod(a.time, dur);
                    a.time = if m < 0.0 { m + dur } else { m };
                }
            }
        }
        for id in finished {
            self.push_event(CoreEvent::ClipFinished { action: id });
        }
    }

    fn emit_changes(&mut self) {
        for a in &self.actions {
            let weight = a.effective_weight();
            if weight <= 0.0 {
                continue;
            }
            self.outputs.push_change(Change {
                action: a.id,
                clip: a.clip,
                weight,
                time: a.time,
            });
        }
    }

    /// Step the mixer by dt with given inputs, producing outputs.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        self.apply_inputs(inputs);
        self.clock += f64::from(dt);
        self.advance_fades();
        self.advance_action_times(dt);
        self.emit_changes();

        &self.outputs
    }
}
