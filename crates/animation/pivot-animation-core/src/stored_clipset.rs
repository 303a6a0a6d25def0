//! Stored clip-set manifest: the JSON contract an asset loader produces once a
//! model's animations are decoded (clip names plus durations; see
//! fixtures/clipsets/*.json).
//!
//! Notes:
//! - Duration is provided in milliseconds in the JSON and kept as milliseconds.
//! - Clip names must be unique within a set; rig resolution looks clips up by
//!   name and would otherwise be ambiguous.

use serde::Deserialize;

use crate::clip::ClipData;

/// A named set of clips belonging to one loaded model.
#[derive(Clone, Debug)]
pub struct ClipSetData {
    pub name: String,
    pub clips: Vec<ClipData>,
}

/// Parse a stored clip-set JSON document into ClipSetData, validating each
/// clip's basic invariants and name uniqueness on the way in.
pub fn parse_stored_clipset_json(s: &str) -> Result<ClipSetData, String> {
    let sc: StoredClipSet = serde_json::from_str(s).map_err(|e| format!("parse error: {e}"))?;

    let mut clips: Vec<ClipData> = Vec::with_capacity(sc.clips.len());
    for c in sc.clips {
        let clip = ClipData::new(c.name, c.duration as u32);
        clip.validate_basic()?;
        clips.push(clip);
    }
    for i in 0..clips.len() {
        for j in (i + 1)..clips.len() {
            if clips[i].name == clips[j].name {
                return Err(format!("duplicate clip name '{}'", clips[i].name));
            }
        }
    }
    Ok(ClipSetData {
        name: sc.name,
        clips,
    })
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredClipSet {
    pub name: String,
    pub clips: Vec<StoredClip>,
}

#[derive(Debug, Deserialize)]
struct StoredClip {
    pub name: String,
    pub duration: u64, // milliseconds
}
