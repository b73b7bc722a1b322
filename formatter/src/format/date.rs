// Date rendering in the display zone.
use super::Formatter;
use crate::error::{FormatError, Result};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use shared::utils::brazilian_format;
use shared::{FormatMode, RawDate};
use std::fmt::Write;

// ISO-like wall-clock layouts the backend emits without an offset.
const NAIVE_DATETIME_PATTERNS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

impl Formatter {
    pub fn format_date<'a>(&self, date: impl Into<RawDate<'a>>, mode: FormatMode) -> String {
        let raw = date.into();
        let result = self.resolve_date(&raw).and_then(|dt| match mode {
            FormatMode::Relative => self.relative_from(&dt, self.now()),
            other => self.render_pattern(&dt, self.pattern_for(other)),
        });
        self.or_placeholder("date", &raw, result)
    }

    /// Like `format_date`, but takes the mode by name. Unknown names render
    /// with the locale's fallback pattern instead of failing.
    pub fn format_date_named<'a>(&self, date: impl Into<RawDate<'a>>, mode: &str) -> String {
        match mode.parse::<FormatMode>() {
            Ok(mode) => self.format_date(date, mode),
            Err(e) => {
                tracing::trace!(error = %e, "Unknown date mode, using fallback pattern");
                let raw = date.into();
                let pattern = &self.locale().date_patterns.fallback;
                let result = self.resolve_date(&raw).and_then(|dt| self.render_pattern(&dt, pattern));
                self.or_placeholder("date", &raw, result)
            }
        }
    }

    fn pattern_for(&self, mode: FormatMode) -> &str {
        let patterns = &self.locale().date_patterns;
        match mode {
            FormatMode::Short => &patterns.short,
            FormatMode::Medium => &patterns.medium,
            FormatMode::Long => &patterns.long,
            FormatMode::Datetime => &patterns.datetime,
            FormatMode::DatetimeShort => &patterns.datetime_short,
            FormatMode::Relative => &patterns.fallback,
        }
    }

    /// Resolves any accepted date input to an instant in the display zone.
    pub(crate) fn resolve_date(&self, raw: &RawDate<'_>) -> Result<DateTime<FixedOffset>> {
        let offset = self.locale().offset();
        match raw {
            RawDate::Absent => Err(FormatError::Absent),
            RawDate::Instant(dt) => Ok(dt.with_timezone(&offset)),
            RawDate::Local(naive) => in_zone(naive, offset),
            RawDate::Day(day) => midnight(day, offset),
            RawDate::EpochMillis(ms) => DateTime::from_timestamp_millis(*ms)
                .map(|dt| dt.with_timezone(&offset))
                .ok_or_else(|| FormatError::InvalidDate(format!("{}ms is out of range", ms))),
            RawDate::Text(s) => parse_date_text(s, offset),
        }
    }

    pub(crate) fn render_pattern(&self, dt: &DateTime<FixedOffset>, pattern: &str) -> Result<String> {
        let locale = self.locale();
        let month = dt.month0() as usize;
        let fallback = format!("{:02}", month + 1);
        let name = locale.month_names.get(month).unwrap_or(&fallback);
        let abbreviation = locale.month_abbreviations.get(month).unwrap_or(&fallback);
        let pattern = pattern.replace("%B", name).replace("%b", abbreviation);

        let mut out = String::new();
        write!(out, "{}", dt.format(&pattern))
            .map_err(|_| FormatError::ConfigError(format!("invalid date pattern {:?}", pattern)))?;
        Ok(out)
    }
}

fn in_zone(naive: &NaiveDateTime, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    offset
        .from_local_datetime(naive)
        .single()
        .ok_or_else(|| FormatError::InvalidDate(naive.to_string()))
}

fn midnight(day: &NaiveDate, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    let naive = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| FormatError::InvalidDate(day.to_string()))?;
    in_zone(&naive, offset)
}

// Accepted text, in order: RFC 3339, ISO wall-clock date-time, ISO day,
// then the Brazilian "dd/mm/yyyy[ HH:MM[:SS]]" layouts.
fn parse_date_text(s: &str, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(FormatError::Absent);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&offset));
    }
    for pattern in NAIVE_DATETIME_PATTERNS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return in_zone(&naive, offset);
        }
    }
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return midnight(&day, offset);
    }
    let naive = brazilian_format::parse_timestamp(trimmed)
        .map_err(|e| FormatError::InvalidDate(e.to_string()))?;
    in_zone(&naive, offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::FormatConfig;
    use chrono::{Duration, Utc};

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 13, 30, 0).unwrap()
    }

    fn fmt() -> Formatter {
        Formatter::with_clock(FormatConfig::default(), FixedClock(test_now()))
    }

    #[test]
    fn test_every_mode_on_an_instant() {
        let f = fmt();
        // 13:30 UTC is 10:30 in Brasília.
        let at = test_now();
        assert_eq!(f.format_date(at, FormatMode::Short), "15/01/2024");
        assert_eq!(f.format_date(at, FormatMode::Medium), "15 de jan. de 2024");
        assert_eq!(f.format_date(at, FormatMode::Long), "15 de janeiro de 2024");
        assert_eq!(f.format_date(at, FormatMode::Datetime), "15/01/2024 10:30");
        assert_eq!(f.format_date(at, FormatMode::DatetimeShort), "15/01 10:30");
        assert_eq!(f.format_date(at, FormatMode::Relative), "agora");
    }

    #[test]
    fn test_month_names_and_zero_padding() {
        let f = fmt();
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(f.format_date(day, FormatMode::Medium), "05 de mar. de 2024");
        assert_eq!(f.format_date(day, FormatMode::Long), "05 de março de 2024");
        assert_eq!(f.format_date(day, FormatMode::Datetime), "05/03/2024 00:00");
    }

    #[test]
    fn test_instant_crossing_midnight_uses_display_zone() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap();
        assert_eq!(fmt().format_date(at, FormatMode::Datetime), "31/12/2023 22:00");
    }

    #[test]
    fn test_text_inputs() {
        let f = fmt();
        assert_eq!(f.format_date("2024-01-15T13:30:00Z", FormatMode::Datetime), "15/01/2024 10:30");
        assert_eq!(f.format_date("2024-01-15T10:30:00-03:00", FormatMode::Datetime), "15/01/2024 10:30");
        assert_eq!(f.format_date("2024-01-15T10:30:00", FormatMode::Datetime), "15/01/2024 10:30");
        assert_eq!(f.format_date("2024-01-15 10:30:00.123", FormatMode::Datetime), "15/01/2024 10:30");
        assert_eq!(f.format_date("2024-01-15T10:30", FormatMode::Datetime), "15/01/2024 10:30");
        assert_eq!(f.format_date("2024-01-15", FormatMode::Short), "15/01/2024");
        assert_eq!(f.format_date("15/01/2024 10:30", FormatMode::Datetime), "15/01/2024 10:30");
        assert_eq!(f.format_date("15/01/2024", FormatMode::Long), "15 de janeiro de 2024");
    }

    #[test]
    fn test_epoch_millis() {
        assert_eq!(fmt().format_date(1_705_325_400_000i64, FormatMode::Datetime), "15/01/2024 10:30");
        assert_eq!(fmt().format_date(i64::MAX, FormatMode::Short), "-");
    }

    #[test]
    fn test_unparseable_dates_render_placeholder() {
        let f = fmt();
        assert_eq!(f.format_date("not a date", FormatMode::Short), "-");
        assert_eq!(f.format_date("2024-13-45", FormatMode::Short), "-");
        assert_eq!(f.format_date("31/02/2024", FormatMode::Short), "-");
        assert_eq!(f.format_date("   ", FormatMode::Medium), "-");
        assert_eq!(f.format_date(None::<NaiveDate>, FormatMode::Long), "-");
    }

    #[test]
    fn test_named_modes() {
        let f = fmt();
        let at = test_now();
        assert_eq!(f.format_date_named(at, "datetime-short"), "15/01 10:30");
        assert_eq!(f.format_date_named(at, "medium"), "15 de jan. de 2024");
        assert_eq!(f.format_date_named(at, "weekly"), "15/01/2024");
        assert_eq!(f.format_date_named("garbage", "weekly"), "-");
    }

    #[test]
    fn test_relative_mode_uses_injected_clock() {
        let f = fmt();
        let at = test_now() - Duration::hours(3);
        assert_eq!(f.format_date(at, FormatMode::Relative), "3h atrás");
    }

    #[test]
    fn test_custom_pattern_and_offset() {
        let mut config = FormatConfig::default();
        config.locale.utc_offset_minutes = 0;
        config.locale.date_patterns.medium = "%b %d, %Y".to_string();
        config.locale.month_abbreviations = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let f = Formatter::new(config);
        assert_eq!(f.format_date(test_now(), FormatMode::Medium), "Jan 15, 2024");
        assert_eq!(f.format_date(test_now(), FormatMode::Datetime), "15/01/2024 13:30");
    }

    #[test]
    fn test_invalid_pattern_renders_placeholder() {
        let mut config = FormatConfig::default();
        config.locale.date_patterns.short = "%d %Q".to_string();
        let f = Formatter::new(config);
        assert_eq!(f.format_date(test_now(), FormatMode::Short), "-");
    }
}
