// Byte counts for attachment and export listings.
use super::{parse_number, Formatter};
use crate::error::FormatError;
use shared::RawValue;

const KB: f64 = 1024.0;
const MB: f64 = 1024.0 * 1024.0;

impl Formatter {
    /// `"500 B"`, `"2.0 KB"`, `"5.00 MB"`. Megabytes is the largest unit.
    /// The tier is picked after rounding, so 1023.6 bytes is `"1.0 KB"`.
    /// Negative counts are invalid and render the placeholder.
    pub fn format_file_size<'a>(&self, bytes: impl Into<RawValue<'a>>) -> String {
        let raw = bytes.into();
        let result = parse_number(&raw).and_then(|n| {
            if n < 0.0 {
                return Err(FormatError::NegativeSize(n));
            }
            // Round first so a value never renders as the next tier's threshold.
            let bytes = n.round();
            if bytes < KB {
                return Ok(format!("{} B", bytes));
            }
            let kilobytes = (n / KB * 10.0).round() / 10.0;
            if kilobytes < KB {
                return Ok(format!("{:.1} KB", kilobytes));
            }
            Ok(format!("{:.2} MB", n / MB))
        });
        self.or_placeholder("file_size", &raw, result)
    }
}
