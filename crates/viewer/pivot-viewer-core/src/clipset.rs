//! Name-indexed view over a loaded clip set.

use hashbrown::HashMap;
use pivot_animation_core::{ClipData, ClipSetData};

#[derive(Clone, Debug, Default)]
pub struct ClipSet {
    pub name: String,
    by_name: HashMap<String, ClipData>,
}

impl ClipSet {
    pub fn from_data(data: ClipSetData) -> Self {
        let mut by_name = HashMap::with_capacity(data.clips.len());
        for clip in data.clips {
            by_name.insert(clip.name.clone(), clip);
        }
        Self {
            name: data.name,
            by_name,
        }
    }

    pub fn get(&self, name: &str) -> Option<&ClipData> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
