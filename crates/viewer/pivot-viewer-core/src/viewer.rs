//! The owned viewer context: mixer, transition scheduler, rig and viewport,
//! stepped once per frame on one thread.

use pivot_animation_core::{
    ClipSetData, Config, Inputs, Mixer, Outputs, TransitionScheduler,
};

use crate::clipset::ClipSet;
use crate::error::LoadError;
use crate::rig::{CharacterRig, TurnCommand};
use crate::viewport::{Viewport, ViewportSize};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug)]
pub struct Viewer {
    mixer: Mixer,
    scheduler: TransitionScheduler,
    viewport: Viewport,
    rig: Option<CharacterRig>,
    load_state: LoadState,
}

impl Viewer {
    pub fn new(cfg: Config, viewport: Viewport) -> Self {
        let scheduler = TransitionScheduler::with_capacity(cfg.timer_capacity);
        Self {
            mixer: Mixer::new(cfg),
            scheduler,
            viewport,
            rig: None,
            load_state: LoadState::Loading,
        }
    }

    #[inline]
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    #[inline]
    pub fn rig(&self) -> Option<&CharacterRig> {
        self.rig.as_ref()
    }

    #[inline]
    pub fn mixer(&self) -> &Mixer {
        &self.mixer
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn outputs(&self) -> &Outputs {
        self.mixer.outputs()
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.scheduler.is_busy()
    }

    /// Consume the asset loader's result. Failure is logged and terminal: the
    /// viewer keeps running without a rig and the loader indicator stays up.
    pub fn finish_load(&mut self, result: Result<ClipSetData, LoadError>) {
        let set = match result {
            Ok(data) => ClipSet::from_data(data),
            Err(err) => {
                log::error!("clip-set load failed: {err}");
                self.load_state = LoadState::Failed;
                return;
            }
        };
        match CharacterRig::from_clipset(&mut self.mixer, &set) {
            Ok(rig) => {
                log::info!("clip-set '{}' ready, {} clips", set.name, set.len());
                self.rig = Some(rig);
                self.load_state = LoadState::Ready;
            }
            Err(err) => {
                log::error!("clip-set load failed: {err}");
                self.load_state = LoadState::Failed;
            }
        }
    }

    /// One frame: step the mixer, run due transition completions, apply turn
    /// commands (busy-guarded, so their blends start from this frame's clock),
    /// then the once-per-frame resize check. Returns whether the viewport size
    /// changed.
    pub fn advance(&mut self, dt: f32, commands: &[TurnCommand], reported: ViewportSize) -> bool {
        self.mixer.update(dt, Inputs::default());
        self.scheduler.run_due(&mut self.mixer);

        if let Some(rig) = &self.rig {
            for &cmd in commands {
                rig.request_turn(&mut self.mixer, &mut self.scheduler, cmd);
            }
        } else if !commands.is_empty() {
            log::debug!("turn commands ignored, no rig loaded");
        }

        self.viewport.resize_if_needed(reported)
    }
}
