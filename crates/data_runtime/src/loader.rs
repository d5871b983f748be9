//! Data loaders resolving paths under the workspace `data/` directory.

use crate::project::ProjectSpec;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Prefer the top-level workspace `data/` so tests and tools can run from
/// any crate.
pub fn data_root() -> PathBuf {
    let here = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

/// Resolve a config-relative asset path (e.g. `assets/frames/frame1.png`)
/// against the workspace root, so any crate can load it.
pub fn asset_path(rel: impl AsRef<Path>) -> PathBuf {
    let here = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../..");
    if ws.join("Cargo.toml").is_file() {
        ws.join(rel)
    } else {
        here.join(rel)
    }
}

/// Read a raw JSON file under `data/` and return its string.
pub fn read_json(rel: impl AsRef<Path>) -> Result<String> {
    let path = data_root().join(rel);
    let s = fs::read_to_string(&path).with_context(|| format!("read data: {}", path.display()))?;
    Ok(s)
}

/// Load the project manifest (`data/exhibit/projects.json`).
pub fn load_projects() -> Result<Vec<ProjectSpec>> {
    let txt = read_json("exhibit/projects.json")?;
    let specs: Vec<ProjectSpec> = serde_json::from_str(&txt).context("parse projects manifest")?;
    Ok(specs)
}
