// Parsing helpers for the Brazilian date formats the backend sometimes sends
// as plain text (e.g. "30/12/2024" or "30/12/2024 18:20:00").
pub mod brazilian_format {
    use anyhow::{anyhow, Result};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    // Parses a date "dd/mm/yyyy"
    pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(date_str.trim(), "%d/%m/%Y")
            .map_err(|e| anyhow!("Failed to parse date '{}': {}", date_str, e))
    }

    // Parses a time "HH:MM:SS" or "HH:MM"
    pub fn parse_time(time_str: &str) -> Result<NaiveTime> {
        let trimmed = time_str.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .map_err(|e| anyhow!("Failed to parse time '{}': {}", time_str, e))
    }

    // Parses date "dd/mm/yyyy" and time "HH:MM[:SS]" into a wall-clock date-time.
    // No zone is attached; callers decide which zone the wall clock belongs to.
    pub fn parse_datetime(date_str: &str, time_str: &str) -> Result<NaiveDateTime> {
        let date = parse_date(date_str)?;
        let time = parse_time(time_str)?;
        Ok(date.and_time(time))
    }

    // Parses a single "dd/mm/yyyy[ HH:MM[:SS]]" string. A bare date maps to midnight.
    pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
        let trimmed = s.trim();
        match trimmed.split_once(' ') {
            Some((date_str, time_str)) => parse_datetime(date_str, time_str),
            None => {
                let date = parse_date(trimmed)?;
                date.and_hms_opt(0, 0, 0)
                    .ok_or_else(|| anyhow!("Failed to build midnight for '{}'", s))
            }
        }
    }

}
