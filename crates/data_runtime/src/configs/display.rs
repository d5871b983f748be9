//! Display/camera tuning loaded from data/config/display.toml.
//!
//! Bloom and exposure values are pass-through for the external render
//! host; this crate only carries them.

use crate::loader::data_root;
use anyhow::{Context, Result};
use glam::Vec3;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayCfg {
    pub home_eye: Option<[f32; 3]>,
    pub fovy_deg: Option<f32>,
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
    pub exposure: Option<f32>,
    pub bloom_strength: Option<f32>,
    pub bloom_radius: Option<f32>,
    pub bloom_threshold: Option<f32>,
}

/// Post-process parameters handed to the renderer unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BloomParams {
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
    pub exposure: f32,
}

impl DisplayCfg {
    /// Idle camera pose the Back action returns to.
    #[must_use]
    pub fn home_eye(&self) -> Vec3 {
        self.home_eye
            .map_or(Vec3::new(10.0, 10.0, 10.0), Vec3::from)
    }

    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy_deg.unwrap_or(75.0).to_radians()
    }

    #[must_use]
    pub fn min_distance(&self) -> f32 {
        self.min_distance.unwrap_or(0.5)
    }

    #[must_use]
    pub fn max_distance(&self) -> f32 {
        self.max_distance.unwrap_or(4.5)
    }

    #[must_use]
    pub fn bloom(&self) -> BloomParams {
        BloomParams {
            strength: self.bloom_strength.unwrap_or(0.9),
            radius: self.bloom_radius.unwrap_or(0.5),
            threshold: self.bloom_threshold.unwrap_or(0.0),
            exposure: self.exposure.unwrap_or(0.8),
        }
    }
}

/// Load `data/config/display.toml`, falling back to defaults when the file
/// is absent. Env overrides for quick tuning.
pub fn load_default() -> Result<DisplayCfg> {
    let path = data_root().join("config/display.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<DisplayCfg>(&txt).context("parse display TOML")?
    } else {
        DisplayCfg::default()
    };
    if let Ok(v) = std::env::var("CAM_MIN_DIST") {
        cfg.min_distance = v.parse().ok();
    }
    if let Ok(v) = std::env::var("CAM_MAX_DIST") {
        cfg.max_distance = v.parse().ok();
    }
    if let Ok(v) = std::env::var("CAM_FOV_DEG") {
        cfg.fovy_deg = v.parse().ok();
    }
    Ok(cfg)
}
