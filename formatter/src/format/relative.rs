// "5 min atrás"-style rendering against an injected `now`.
use super::Formatter;
use crate::error::Result;
use chrono::{DateTime, FixedOffset, Utc};
use shared::RawDate;

impl Formatter {
    pub fn relative_time<'a>(&self, date: impl Into<RawDate<'a>>, now: DateTime<Utc>) -> String {
        let raw = date.into();
        let result = self.resolve_date(&raw).and_then(|dt| self.relative_from(&dt, now));
        self.or_placeholder("relative", &raw, result)
    }

    /// `relative_time` against this formatter's clock.
    pub fn relative_time_now<'a>(&self, date: impl Into<RawDate<'a>>) -> String {
        self.relative_time(date, self.now())
    }

    // Buckets are checked in order; the first match wins. Future dates fall in
    // the first bucket. Anything a week or older renders as a medium date.
    pub(crate) fn relative_from(&self, date: &DateTime<FixedOffset>, now: DateTime<Utc>) -> Result<String> {
        let labels = &self.locale().relative;
        let elapsed = now - date.with_timezone(&Utc);

        let minutes = elapsed.num_minutes();
        if minutes < 1 {
            return Ok(labels.now.clone());
        }
        if minutes < 60 {
            return Ok(labels.minutes_ago(minutes));
        }
        let hours = elapsed.num_hours();
        if hours < 24 {
            return Ok(labels.hours_ago(hours));
        }
        let days = elapsed.num_days();
        if days == 1 {
            return Ok(labels.yesterday.clone());
        }
        if days < 7 {
            return Ok(labels.days_ago(days));
        }
        self.render_pattern(date, &self.locale().date_patterns.medium)
    }
}
