//! Exhibit layout and asset paths from data/config/exhibit.toml.

use crate::loader::data_root;
use anyhow::{Context, Result};
use glam::{Vec2, Vec3};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExhibitCfg {
    pub model: Option<PathBuf>,
    pub frames: Option<Vec<PathBuf>>,
    pub frame_period_secs: Option<f32>,
    pub screen_pos: Option<[f32; 3]>,
    pub screen_scale: Option<[f32; 3]>,
    pub grid_offset: Option<[f32; 2]>,
    pub slate_size: Option<[f32; 3]>,
    pub spinners: Option<Vec<SpinnerCfg>>,
    pub learn_more_url: Option<String>,
    pub music: Option<PathBuf>,
}

/// A decor node spun continuously while the exhibit idles.
#[derive(Debug, Clone, Deserialize)]
pub struct SpinnerCfg {
    pub node: String,
    #[serde(default)]
    pub axis: SpinAxisCfg,
    pub rate: Option<f32>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpinAxisCfg {
    X,
    #[default]
    Y,
}

/// Hand-tuned fan speed in radians per second.
pub const DEFAULT_SPIN_RATE: f32 = -1.2;

impl ExhibitCfg {
    #[must_use]
    pub fn model(&self) -> PathBuf {
        self.model
            .clone()
            .unwrap_or_else(|| PathBuf::from("assets/exhibit.glb"))
    }

    /// Image sequence cycled on the vending screen.
    #[must_use]
    pub fn frames(&self) -> Vec<PathBuf> {
        self.frames.clone().unwrap_or_else(|| {
            (1..=5)
                .map(|i| PathBuf::from(format!("assets/frames/frame{i}.png")))
                .collect()
        })
    }

    #[must_use]
    pub fn frame_period_secs(&self) -> f32 {
        self.frame_period_secs.unwrap_or(1.0)
    }

    #[must_use]
    pub fn screen_pos(&self) -> Vec3 {
        self.screen_pos
            .map_or(Vec3::new(-1.15, 0.9, 1.64), Vec3::from)
    }

    #[must_use]
    pub fn screen_scale(&self) -> Vec3 {
        self.screen_scale
            .map_or(Vec3::new(0.23, 0.3, 0.4), Vec3::from)
    }

    /// Horizontal/vertical placeholder offsets from the screen center.
    #[must_use]
    pub fn grid_offset(&self) -> Vec2 {
        self.grid_offset.map_or(Vec2::new(0.2, 0.2), Vec2::from)
    }

    /// Width/height/depth of one project slate.
    #[must_use]
    pub fn slate_size(&self) -> Vec3 {
        self.slate_size.map_or(Vec3::new(0.4, 0.4, 0.05), Vec3::from)
    }

    #[must_use]
    pub fn spinners(&self) -> Vec<SpinnerCfg> {
        self.spinners.clone().unwrap_or_else(|| {
            vec![
                SpinnerCfg {
                    node: "fan_hub".into(),
                    axis: SpinAxisCfg::X,
                    rate: None,
                },
                SpinnerCfg {
                    node: "fan_left".into(),
                    axis: SpinAxisCfg::Y,
                    rate: None,
                },
                SpinnerCfg {
                    node: "fan_right".into(),
                    axis: SpinAxisCfg::Y,
                    rate: None,
                },
            ]
        })
    }

    #[must_use]
    pub fn learn_more_url(&self) -> String {
        self.learn_more_url
            .clone()
            .unwrap_or_else(|| "https://example.com/portfolio".into())
    }

    #[must_use]
    pub fn music(&self) -> PathBuf {
        self.music
            .clone()
            .unwrap_or_else(|| PathBuf::from("assets/ambience.mp3"))
    }
}

/// Load `data/config/exhibit.toml`, falling back to defaults when the file
/// is absent.
pub fn load_default() -> Result<ExhibitCfg> {
    let path = data_root().join("config/exhibit.toml");
    let cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<ExhibitCfg>(&txt).context("parse exhibit TOML")?
    } else {
        ExhibitCfg::default()
    };
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_lay_out_the_stock_exhibit() {
        let cfg = ExhibitCfg::default();
        assert_eq!(cfg.frames().len(), 5);
        assert_eq!(cfg.screen_pos(), Vec3::new(-1.15, 0.9, 1.64));
        assert_eq!(cfg.grid_offset(), Vec2::new(0.2, 0.2));
        assert_eq!(cfg.slate_size(), Vec3::new(0.4, 0.4, 0.05));
        assert_eq!(cfg.spinners().len(), 3);
    }

    #[test]
    fn spinner_axis_parses_lowercase() {
        let cfg: ExhibitCfg = toml::from_str(
            r#"
            [[spinners]]
            node = "fan_hub"
            axis = "x"
            rate = -0.8
            "#,
        )
        .expect("parse");
        let spinners = cfg.spinners();
        assert_eq!(spinners.len(), 1);
        assert_eq!(spinners[0].axis, SpinAxisCfg::X);
        assert!((spinners[0].rate.unwrap() + 0.8).abs() < f32::EPSILON);
    }
}
