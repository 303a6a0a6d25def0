//! Core configuration for pivot-animation-core.

use serde::{Deserialize, Serialize};

/// Configuration for mixer sizing and event backpressure.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Initial capacity hints for clip/action storage.
    pub clip_capacity: usize,
    pub action_capacity: usize,

    /// Initial capacity hint for the deferred-completion heap.
    pub timer_capacity: usize,

    /// Maximum events retained per tick; extras are dropped (logged at debug).
    pub max_events_per_tick: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clip_capacity: 16,
            action_capacity: 16,
            timer_capacity: 4,
            max_events_per_tick: 256,
        }
    }
}
