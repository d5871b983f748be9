//! vt_assets: CPU-side asset ingestion.
//!
//! Imports glTF scenes into the `scene_core` node arena and decodes
//! textures to RGBA8. Everything here is renderer-agnostic; failures are
//! `anyhow` errors the caller recovers from (the exhibit stays interactive
//! with missing assets).

pub mod gltf;
pub mod loadset;
pub mod texture;
pub mod types;

pub use texture::load_texture;
pub use types::TextureCpu;
