// Profit/loss color classification.
use super::{parse_number, Formatter};
use shared::{ColorClass, RawValue};

impl Formatter {
    /// Sign of the parsed value; absent or invalid input is neutral.
    pub fn classify<'a>(&self, value: impl Into<RawValue<'a>>) -> ColorClass {
        let raw = value.into();
        match parse_number(&raw) {
            Ok(n) if n > 0.0 => ColorClass::Positive,
            Ok(n) if n < 0.0 => ColorClass::Negative,
            Ok(_) => ColorClass::Neutral,
            Err(e) => {
                tracing::trace!(raw = %raw, reason = %e, "Classifying as neutral");
                ColorClass::Neutral
            }
        }
    }

    /// Theme color for the value's class.
    pub fn pnl_color<'a>(&self, value: impl Into<RawValue<'a>>) -> &str {
        self.palette().color_for(self.classify(value))
    }
}
