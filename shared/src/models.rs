use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A value as it arrives from the backend, before any parsing.
///
/// Numeric fields may come as JSON numbers, as strings ("1234.56"), or be
/// missing altogether. The formatter decides how each case is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue<'a> {
    Absent,
    Number(f64),
    Text(Cow<'a, str>),
}

impl fmt::Display for RawValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Absent => write!(f, "<absent>"),
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<f64> for RawValue<'_> {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<f32> for RawValue<'_> {
    fn from(value: f32) -> Self {
        RawValue::Number(value as f64)
    }
}

// Integer inputs (quantities, byte counts) widen to f64.
macro_rules! raw_value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawValue<'_> {
                fn from(value: $t) -> Self {
                    RawValue::Number(value as f64)
                }
            }
        )*
    };
}

raw_value_from_int!(i32, i64, u32, u64, usize);

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(value: &'a str) -> Self {
        RawValue::Text(Cow::Borrowed(value))
    }
}

impl From<String> for RawValue<'_> {
    fn from(value: String) -> Self {
        RawValue::Text(Cow::Owned(value))
    }
}

impl<'a, T: Into<RawValue<'a>>> From<Option<T>> for RawValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Absent, Into::into)
    }
}

impl<'a> From<&'a serde_json::Value> for RawValue<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawValue::Absent,
            serde_json::Value::Number(n) => n.as_f64().map_or(RawValue::Absent, RawValue::Number),
            serde_json::Value::String(s) => RawValue::Text(Cow::Borrowed(s)),
            // Booleans, arrays and objects are never numbers; keep their text for diagnostics.
            other => RawValue::Text(Cow::Owned(other.to_string())),
        }
    }
}

/// A date-like value as it arrives from the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum RawDate<'a> {
    Absent,
    /// A point in time, independent of the display zone.
    Instant(DateTime<Utc>),
    /// A wall-clock date-time already expressed in the display zone.
    Local(NaiveDateTime),
    /// A calendar day with no time component.
    Day(NaiveDate),
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    Text(Cow<'a, str>),
}

impl fmt::Display for RawDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawDate::Absent => write!(f, "<absent>"),
            RawDate::Instant(dt) => write!(f, "{}", dt.to_rfc3339()),
            RawDate::Local(dt) => write!(f, "{}", dt),
            RawDate::Day(d) => write!(f, "{}", d),
            RawDate::EpochMillis(ms) => write!(f, "{}ms", ms),
            RawDate::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for RawDate<'_> {
    fn from(value: DateTime<Tz>) -> Self {
        RawDate::Instant(value.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for RawDate<'_> {
    fn from(value: NaiveDateTime) -> Self {
        RawDate::Local(value)
    }
}

impl From<NaiveDate> for RawDate<'_> {
    fn from(value: NaiveDate) -> Self {
        RawDate::Day(value)
    }
}

impl From<i64> for RawDate<'_> {
    fn from(value: i64) -> Self {
        RawDate::EpochMillis(value)
    }
}

impl<'a> From<&'a str> for RawDate<'a> {
    fn from(value: &'a str) -> Self {
        RawDate::Text(Cow::Borrowed(value))
    }
}

impl From<String> for RawDate<'_> {
    fn from(value: String) -> Self {
        RawDate::Text(Cow::Owned(value))
    }
}

impl<'a, T: Into<RawDate<'a>>> From<Option<T>> for RawDate<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawDate::Absent, Into::into)
    }
}

impl<'a> From<&'a serde_json::Value> for RawDate<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawDate::Absent,
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(ms) => RawDate::EpochMillis(ms),
                // Fractional millis are truncated toward negative infinity, like a JS Date.
                None => n
                    .as_f64()
                    .filter(|ms| ms.is_finite() && ms.abs() < i64::MAX as f64)
                    .map_or(RawDate::Absent, |ms| RawDate::EpochMillis(ms.floor() as i64)),
            },
            serde_json::Value::String(s) => RawDate::Text(Cow::Borrowed(s)),
            other => RawDate::Text(Cow::Owned(other.to_string())),
        }
    }
}

/// Output shape for date rendering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FormatMode {
    #[default]
    Short,
    Medium,
    Long,
    Relative,
    Datetime,
    DatetimeShort,
}

impl FormatMode {
    pub const ALL: [FormatMode; 6] = [
        FormatMode::Short,
        FormatMode::Medium,
        FormatMode::Long,
        FormatMode::Relative,
        FormatMode::Datetime,
        FormatMode::DatetimeShort,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatMode::Short => "short",
            FormatMode::Medium => "medium",
            FormatMode::Long => "long",
            FormatMode::Relative => "relative",
            FormatMode::Datetime => "datetime",
            FormatMode::DatetimeShort => "datetime-short",
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        FormatMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::anyhow!("Unknown date format mode '{}'", s))
    }
}

/// Profit/loss color tag derived from a value's sign.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
    Positive,
    Negative,
    Neutral,
}

impl ColorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorClass::Positive => "positive",
            ColorClass::Negative => "negative",
            ColorClass::Neutral => "neutral",
        }
    }
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
