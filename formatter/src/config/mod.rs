// Formatter configuration module
pub mod locale;
pub mod palette;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use locale::{DatePatterns, LocaleSettings, RelativeLabels};
pub use palette::PnlPalette;

/// Whole formatter configuration, mirroring `assets/config/pt-BR.json`.
/// Every field has a pt-BR default, so a file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub version: String,
    pub locale: LocaleSettings,
    pub palette: PnlPalette,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            version: "1.0".to_string(),
            locale: LocaleSettings::default(),
            palette: PnlPalette::default(),
        }
    }
}

impl FormatConfig {
    pub fn from_json_str(config_str: &str) -> Result<Self> {
        let config: FormatConfig = serde_json::from_str(config_str)?;
        config.locale.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&config_str).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Rejected formatter configuration");
        })?;
        tracing::info!(path = %path.display(), version = %config.version, "Loaded formatter configuration");
        Ok(config)
    }
}
