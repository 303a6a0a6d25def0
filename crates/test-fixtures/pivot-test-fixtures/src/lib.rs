//! Shared fixtures for the Pivot workspace tests. Clip-set documents live in
//! the repository-root `fixtures/` directory and are addressed through the
//! manifest by short name.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    clipsets: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

/// Raw JSON for a clip-set fixture, by manifest name.
pub fn clipset_json(name: &str) -> Result<String> {
    let rel = MANIFEST
        .clipsets
        .get(name)
        .ok_or_else(|| anyhow!("unknown clip-set fixture '{name}'"))?;
    read_to_string(rel)
}

/// Names registered in the manifest, sorted (for discovery in tests).
pub fn clipset_names() -> Vec<String> {
    let mut names: Vec<String> = MANIFEST.clipsets.keys().cloned().collect();
    names.sort();
    names
}
