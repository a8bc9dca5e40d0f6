use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::tooltip::anchor::{DEFAULT_ARROW_SIZE, DEFAULT_OFFSET};
use crate::tooltip::placement::{Placement, DEFAULT_MARGIN};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TooltipConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default)]
    pub placement: Placement,
    #[serde(default = "default_margin")]
    pub margin: f32,
    #[serde(default = "default_offset")]
    pub offset: f32,
    #[serde(default = "default_arrow_size")]
    pub arrow_size: f32,
    /// Keep the tooltip this far inside the viewport. Unset disables clamping.
    #[serde(default)]
    pub clamp_inset: Option<f32>,
    #[serde(default = "default_padding_x")]
    pub padding_x: f32,
    #[serde(default = "default_padding_y")]
    pub padding_y: f32,
}

fn default_delay_ms() -> u64 { 200 }
fn default_margin() -> f32 { DEFAULT_MARGIN }
fn default_offset() -> f32 { DEFAULT_OFFSET }
fn default_arrow_size() -> f32 { DEFAULT_ARROW_SIZE }
fn default_padding_x() -> f32 { 8.0 }
fn default_padding_y() -> f32 { 4.0 }

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            placement: Placement::Auto,
            margin: default_margin(),
            offset: default_offset(),
            arrow_size: default_arrow_size(),
            clamp_inset: None,
            padding_x: default_padding_x(),
            padding_y: default_padding_y(),
        }
    }
}

impl TooltipConfig {
    fn config_dir() -> Option<PathBuf> {
        std::env::var("HOME").ok().map(|h| PathBuf::from(h).join(".config").join("smart-tooltip"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("settings.json"))
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Load from the user config dir, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring tooltip config: {e:#}");
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn save(&self) {
        let Some(dir) = Self::config_dir() else {
            return;
        };
        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create config dir: {e}");
            return;
        }
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Err(e) = self.save_to(&path) {
            tracing::warn!("Failed to save config: {e:#}");
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }
}
