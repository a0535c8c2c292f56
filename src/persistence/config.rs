use crate::labels::Language;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Presentation settings stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub language: Language,
    /// Widths at or below this many logical pixels use the narrow layout
    #[serde(default = "default_narrow_max_width_px")]
    pub narrow_max_width_px: u32,
    /// Logical pixels per terminal column
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u32,
}

fn default_narrow_max_width_px() -> u32 {
    768
}

fn default_cell_width_px() -> u32 {
    8
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            narrow_max_width_px: default_narrow_max_width_px(),
            cell_width_px: default_cell_width_px(),
        }
    }
}

/// Load config from config.json, defaults if the file is missing or malformed
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed config, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// Save config to config.json
pub fn save_config<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    super::files::atomic_write(path, &json)?;
    Ok(())
}
