//! data_runtime: config schemas and loaders.
//!
//! Tuning lives in TOML under `data/config/` (absent files fall back to
//! compiled-in defaults), content manifests in JSON under `data/`.

pub mod loader;
pub mod project;
pub mod configs {
    pub mod display;
    pub mod exhibit;
}
