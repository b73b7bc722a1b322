// Display formatting for dashboard values.
//
// Every public formatter is total: absent, empty or unparseable input renders
// the locale placeholder instead of failing. Parsing steps return
// `FormatError` internally and are absorbed in `or_placeholder`.
pub mod date;
pub mod file_size;
pub mod number;
pub mod pnl;
pub mod relative;

use crate::clock::{Clock, SystemClock};
use crate::config::{FormatConfig, LocaleSettings, PnlPalette};
use crate::error::{FormatError, Result};
use chrono::{DateTime, Utc};
use shared::{ColorClass, FormatMode, RawDate, RawValue};
use std::fmt;
use std::sync::{Arc, OnceLock};

pub const DEFAULT_DECIMALS: usize = 2;
pub const DEFAULT_QUANTITY_DECIMALS: usize = 6;
/// Larger precisions are clamped; f64 carries no meaningful digits past this.
pub const MAX_DECIMALS: usize = 20;

#[derive(Clone)]
pub struct Formatter {
    config: Arc<FormatConfig>,
    clock: Arc<dyn Clock>,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: FormatConfig, clock: impl Clock + 'static) -> Self {
        Formatter {
            config: Arc::new(config),
            clock: Arc::new(clock),
        }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn locale(&self) -> &LocaleSettings {
        &self.config.locale
    }

    pub fn palette(&self) -> &PnlPalette {
        &self.config.palette
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    fn or_placeholder(&self, kind: &'static str, raw: &dyn fmt::Display, result: Result<String>) -> String {
        result.unwrap_or_else(|e| {
            tracing::trace!(kind, raw = %raw, reason = %e, "Rendering placeholder");
            self.locale().placeholder.clone()
        })
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(FormatConfig::default())
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Normalizes a raw value to a finite number. Text is trimmed and parsed as a
/// plain decimal ("1234.56", "-5", "1e3"); negative zero becomes zero.
pub(crate) fn parse_number(raw: &RawValue<'_>) -> Result<f64> {
    let value = match raw {
        RawValue::Absent => return Err(FormatError::Absent),
        RawValue::Number(n) => *n,
        RawValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(FormatError::Absent);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| FormatError::InvalidNumber(s.to_string()))?
        }
    };
    if !value.is_finite() {
        return Err(FormatError::NonFinite(value));
    }
    Ok(if value == 0.0 { 0.0 } else { value })
}

/// Process-wide pt-BR formatter on the system clock, backing the free functions below.
pub fn default_formatter() -> &'static Formatter {
    static DEFAULT: OnceLock<Formatter> = OnceLock::new();
    DEFAULT.get_or_init(Formatter::default)
}

pub fn format_currency<'a>(value: impl Into<RawValue<'a>>, currency: Option<&str>) -> String {
    default_formatter().format_currency(value, currency)
}

pub fn format_currency_with_sign<'a>(value: impl Into<RawValue<'a>>, currency: Option<&str>) -> String {
    default_formatter().format_currency_with_sign(value, currency)
}

pub fn format_percent<'a>(value: impl Into<RawValue<'a>>, decimals: usize, show_sign: bool) -> String {
    default_formatter().format_percent(value, decimals, show_sign)
}

pub fn format_number<'a>(value: impl Into<RawValue<'a>>, decimals: usize) -> String {
    default_formatter().format_number(value, decimals)
}

pub fn format_quantity<'a>(value: impl Into<RawValue<'a>>, max_decimals: usize) -> String {
    default_formatter().format_quantity(value, max_decimals)
}

pub fn format_date<'a>(date: impl Into<RawDate<'a>>, mode: FormatMode) -> String {
    default_formatter().format_date(date, mode)
}

pub fn relative_time<'a>(date: impl Into<RawDate<'a>>, now: DateTime<Utc>) -> String {
    default_formatter().relative_time(date, now)
}

pub fn format_file_size<'a>(bytes: impl Into<RawValue<'a>>) -> String {
    default_formatter().format_file_size(bytes)
}

pub fn classify<'a>(value: impl Into<RawValue<'a>>) -> ColorClass {
    default_formatter().classify(value)
}
