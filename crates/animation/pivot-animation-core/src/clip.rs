//! Clip data model. Durations are stored in milliseconds (authoritative);
//! playback math works in seconds.

use serde::{Deserialize, Serialize};

use crate::ids::ClipId;

/// A named, playable animation clip. The decoded keyframe payload stays with
/// the host's asset loader; the mixer only needs name and duration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClipData {
    /// Optional internal id assigned when loaded into the mixer.
    #[serde(skip)]
    pub id: Option<ClipId>,
    pub name: String,
    /// Duration in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: u32,
}

impl ClipData {
    pub fn new(name: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            duration_ms,
        }
    }

    #[inline]
    pub fn duration_secs(&self) -> f32 {
        self.duration_ms as f32 / 1000.0
    }

    /// Validate basic invariants (non-empty name, non-zero duration).
    pub fn validate_basic(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("ClipData.name must not be empty".into());
        }
        if self.duration_ms == 0 {
            return Err(format!(
                "ClipData.duration must be > 0 ms for '{}'",
                self.name
            ));
        }
        Ok(())
    }
}
