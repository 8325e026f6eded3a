//! JSON configuration for the demo tools.
use crate::edge::EdgeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Named edge policy, as it appears in config files. The constant-value
/// policy is API-only: a config cannot carry an arbitrary pixel value.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Zero,
    #[default]
    Clamp,
    Reflect,
    Periodic,
}

impl EdgeKind {
    pub fn mode<P: Copy>(self) -> EdgeMode<P> {
        match self {
            EdgeKind::Zero => EdgeMode::Zero,
            EdgeKind::Clamp => EdgeMode::Clamp,
            EdgeKind::Reflect => EdgeMode::Reflect,
            EdgeKind::Periodic => EdgeMode::Periodic,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub image_out: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BlurToolConfig {
    pub input: PathBuf,
    #[serde(default = "default_sigma")]
    pub sigma: f32,
    #[serde(default = "default_radius")]
    pub radius: usize,
    #[serde(default)]
    pub edge: EdgeKind,
    #[serde(default = "default_band_rows")]
    pub band_rows: usize,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_sigma() -> f32 {
    1.4
}

fn default_radius() -> usize {
    3
}

fn default_band_rows() -> usize {
    64
}

pub fn load_config(path: &Path) -> Result<BlurToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
