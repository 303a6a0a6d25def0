#![allow(dead_code)]
//! Pivot Viewer Core
//!
//! The thin composition over pivot-animation-core that the character viewer
//! needs: a rig of named idle/turn actions, turn commands with the
//! one-transition-at-a-time guard, clip-set load handling, and the idempotent
//! viewport resize check. Rendering and asset decoding stay with the host.

pub mod clipset;
pub mod error;
pub mod rig;
pub mod viewer;
pub mod viewport;

pub use clipset::ClipSet;
pub use error::LoadError;
pub use rig::{CharacterRig, TurnCommand};
pub use viewer::{LoadState, Viewer};
pub use viewport::{Camera, Viewport, ViewportSize};
