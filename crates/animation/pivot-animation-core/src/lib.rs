#![allow(dead_code)]
//! Pivot Animation Core (engine-agnostic)
//!
//! Clip actions, weighted cross-fades with warp, a deadline-keyed timer queue,
//! and the turn-transition scheduler. The crate owns no rendering and no I/O:
//! hosts feed `Mixer::update` a dt once per frame, run due transition
//! completions, and apply the resulting outputs to their skeleton binding.

pub mod action;
pub mod clip;
pub mod config;
pub mod ids;
pub mod inputs;
pub mod mixer;
pub mod outputs;
pub mod schedule;
pub mod stored_clipset;
pub mod transition;

// Re-exports for consumers (adapters)
pub use action::ClipAction;
pub use clip::ClipData;
pub use config::Config;
pub use ids::{ActionId, ClipId};
pub use inputs::{ActionCommand, Inputs, LoopMode};
pub use mixer::Mixer;
pub use outputs::{Change, CoreEvent, Outputs};
pub use schedule::TimerQueue;
pub use stored_clipset::{parse_stored_clipset_json, ClipSetData};
pub use transition::{TransitionRequest, TransitionScheduler, TransitionState};
