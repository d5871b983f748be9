//! Texture decode to RGBA8.

use crate::types::TextureCpu;
use anyhow::{Context, Result};
use std::path::Path;

/// Decode an image file to an RGBA8 [`TextureCpu`]. Display textures are
/// authored in sRGB.
pub fn load_texture(path: &Path) -> Result<TextureCpu> {
    let img = image::open(path).with_context(|| format!("read texture: {}", path.display()))?;
    let rgba = img.to_rgba8();
    Ok(TextureCpu {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
        srgb: true,
    })
}
