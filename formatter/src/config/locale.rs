// Locale tables for the display formatter: separators, currency symbols,
// month names, date patterns and relative-time labels.
use crate::error::{FormatError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSettings {
    /// Rendered for absent or unparseable input.
    pub placeholder: String,
    pub decimal_separator: char,
    pub group_separator: char,
    pub default_currency: String,
    /// ISO 4217 code -> display symbol. Unknown codes render as the code itself.
    pub currency_symbols: BTreeMap<String, String>,
    /// Offset of the display zone from UTC. Brasília is UTC-03:00 year-round.
    pub utc_offset_minutes: i32,
    pub month_names: Vec<String>,
    pub month_abbreviations: Vec<String>,
    pub date_patterns: DatePatterns,
    pub relative: RelativeLabels,
}

/// chrono strftime patterns, one per date mode. `%B` and `%b` are replaced by
/// the localized month name and abbreviation before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatePatterns {
    pub short: String,
    pub medium: String,
    pub long: String,
    pub datetime: String,
    pub datetime_short: String,
    /// Used when a mode name is not recognized.
    pub fallback: String,
}

/// Relative-time labels. `{n}` is replaced by the elapsed count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelativeLabels {
    pub now: String,
    pub minutes: String,
    pub hours: String,
    pub yesterday: String,
    pub days: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for LocaleSettings {
    fn default() -> Self {
        let currency_symbols = [("BRL", "R$"), ("USD", "US$"), ("EUR", "€"), ("GBP", "£")]
            .into_iter()
            .map(|(code, symbol)| (code.to_string(), symbol.to_string()))
            .collect();

        LocaleSettings {
            placeholder: "-".to_string(),
            decimal_separator: ',',
            group_separator: '.',
            default_currency: "BRL".to_string(),
            currency_symbols,
            utc_offset_minutes: -180,
            month_names: strings(&[
                "janeiro", "fevereiro", "março", "abril", "maio", "junho",
                "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
            ]),
            month_abbreviations: strings(&[
                "jan.", "fev.", "mar.", "abr.", "mai.", "jun.",
                "jul.", "ago.", "set.", "out.", "nov.", "dez.",
            ]),
            date_patterns: DatePatterns::default(),
            relative: RelativeLabels::default(),
        }
    }
}

impl Default for DatePatterns {
    fn default() -> Self {
        DatePatterns {
            short: "%d/%m/%Y".to_string(),
            medium: "%d de %b de %Y".to_string(),
            long: "%d de %B de %Y".to_string(),
            datetime: "%d/%m/%Y %H:%M".to_string(),
            datetime_short: "%d/%m %H:%M".to_string(),
            fallback: "%d/%m/%Y".to_string(),
        }
    }
}

impl Default for RelativeLabels {
    fn default() -> Self {
        RelativeLabels {
            now: "agora".to_string(),
            minutes: "{n} min atrás".to_string(),
            hours: "{n}h atrás".to_string(),
            yesterday: "ontem".to_string(),
            days: "{n} dias atrás".to_string(),
        }
    }
}

impl LocaleSettings {
    /// The display zone. Falls back to UTC if the configured offset is out of range;
    /// `validate` rejects such configs at load time.
    pub fn offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }

    /// Display symbol for a currency code; empty code means the default currency.
    pub fn currency_symbol(&self, code: Option<&str>) -> String {
        let code = code
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.default_currency)
            .to_ascii_uppercase();
        match self.currency_symbols.get(&code) {
            Some(symbol) => symbol.clone(),
            None => code,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.decimal_separator == self.group_separator {
            return Err(FormatError::ConfigError(format!(
                "decimal and group separators must differ (both '{}')",
                self.decimal_separator
            )));
        }
        if self.utc_offset_minutes.checked_mul(60).and_then(FixedOffset::east_opt).is_none() {
            return Err(FormatError::ConfigError(format!(
                "utc_offset_minutes {} is out of range",
                self.utc_offset_minutes
            )));
        }
        for (name, table) in [("month_names", &self.month_names), ("month_abbreviations", &self.month_abbreviations)] {
            if table.len() != 12 {
                return Err(FormatError::ConfigError(format!(
                    "{} must have 12 entries, found {}",
                    name,
                    table.len()
                )));
            }
        }
        self.date_patterns.validate()
    }
}

impl DatePatterns {
    fn validate(&self) -> Result<()> {
        let patterns = [
            ("short", &self.short),
            ("medium", &self.medium),
            ("long", &self.long),
            ("datetime", &self.datetime),
            ("datetime_short", &self.datetime_short),
            ("fallback", &self.fallback),
        ];
        for (name, pattern) in patterns {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(FormatError::ConfigError(format!(
                    "date pattern '{}' is not a valid strftime pattern: {:?}",
                    name, pattern
                )));
            }
        }
        Ok(())
    }
}

impl RelativeLabels {
    pub fn minutes_ago(&self, n: i64) -> String {
        self.minutes.replace("{n}", &n.to_string())
    }

    pub fn hours_ago(&self, n: i64) -> String {
        self.hours.replace("{n}", &n.to_string())
    }

    pub fn days_ago(&self, n: i64) -> String {
        self.days.replace("{n}", &n.to_string())
    }
}
