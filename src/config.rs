// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Editor configuration, loaded from TOML.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::constant::{CONFIG_DIR, CONFIG_FILE, HANDLE_HIT_SIZE, MIN_REGION_SIZE};

/// Coordinate frame in which the host reports pointer positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSpace {
    /// Pointer positions share the displayed (rotated) image's axes.
    #[default]
    Screen,
    /// Pointer positions are in the unrotated image's axes, e.g. when the
    /// host rotates the whole editor surface.
    Image,
}

/// Configuration for one image editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Width/height ratio of the initial crop (and of every crop when fixed).
    pub aspect_ratio: Option<f64>,
    /// Whether resizing keeps the ratio locked.
    pub fixed_aspect_ratio: bool,
    /// Smallest edge length a resize may produce, in pixels.
    pub min_region_size: f64,
    /// Square hit area around each resize handle, in pixels.
    pub handle_hit_size: f64,
    /// Remap the crop through a rotation instead of resetting it.
    pub preserve_crop_on_rotate: bool,
    /// Frame of incoming pointer positions.
    pub pointer_space: PointerSpace,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: None,
            fixed_aspect_ratio: false,
            min_region_size: MIN_REGION_SIZE,
            handle_hit_size: HANDLE_HIT_SIZE,
            preserve_crop_on_rotate: false,
            pointer_space: PointerSpace::Screen,
        }
    }
}

impl EditorConfig {
    /// Platform config file location, e.g. `~/.config/cropset/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => path,
                None => {
                    log::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config =
            Self::from_toml(&text).with_context(|| format!("Invalid config {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(ratio) = self.aspect_ratio {
            anyhow::ensure!(
                ratio.is_finite() && ratio > 0.0,
                "aspect_ratio must be a positive number, got {ratio}"
            );
        }
        anyhow::ensure!(
            self.min_region_size.is_finite() && self.min_region_size >= 0.0,
            "min_region_size must not be negative, got {}",
            self.min_region_size
        );
        anyhow::ensure!(
            self.handle_hit_size.is_finite() && self.handle_hit_size > 0.0,
            "handle_hit_size must be positive, got {}",
            self.handle_hit_size
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        assert_eq!(EditorConfig::from_toml("").unwrap(), EditorConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = EditorConfig::from_toml(
            r#"
            aspect_ratio = 1.5
            fixed_aspect_ratio = true
            min_region_size = 8.0
            handle_hit_size = 30.0
            preserve_crop_on_rotate = true
            pointer_space = "image"
            "#,
        )
        .unwrap();
        assert_eq!(config.aspect_ratio, Some(1.5));
        assert!(config.fixed_aspect_ratio);
        assert_eq!(config.min_region_size, 8.0);
        assert_eq!(config.pointer_space, PointerSpace::Image);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(EditorConfig::from_toml("aspect_ratio = -1.0").is_err());
        assert!(EditorConfig::from_toml("handle_hit_size = 0.0").is_err());
        assert!(EditorConfig::from_toml("unknown = 1").is_err());
    }

    #[test]
    fn explicit_missing_path_fails() {
        assert!(EditorConfig::load(Some(Path::new("/nonexistent/cropset.toml"))).is_err());
    }
}
