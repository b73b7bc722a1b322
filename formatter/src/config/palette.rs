// Colors for profit/loss classes, matching the dashboard's chart theme.
use serde::{Deserialize, Serialize};
use shared::ColorClass;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PnlPalette {
    pub positive: String,
    pub negative: String,
    pub neutral: String,
}

impl PnlPalette {
    pub fn default_dark() -> Self {
        Self {
            positive: "#26a69a".to_string(),
            negative: "#ef5350".to_string(),
            neutral: "#d1d4dc".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            positive: "#4caf50".to_string(),
            negative: "#f44336".to_string(),
            neutral: "#000000".to_string(),
        }
    }

    pub fn color_for(&self, class: ColorClass) -> &str {
        match class {
            ColorClass::Positive => &self.positive,
            ColorClass::Negative => &self.negative,
            ColorClass::Neutral => &self.neutral,
        }
    }
}

impl Default for PnlPalette {
    fn default() -> Self {
        Self::default_dark()
    }
}
