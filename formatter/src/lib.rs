// Formatter library root
// Display formatting for the investment dashboard: currency, percent, number,
// quantity, dates, relative time, file sizes and profit/loss classification.

pub mod clock;
pub mod config;
pub mod error;
pub mod format;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::FormatConfig;
pub use error::FormatError;
pub use format::{
    classify, format_currency, format_currency_with_sign, format_date, format_file_size,
    format_number, format_percent, format_quantity, relative_time, Formatter,
    DEFAULT_DECIMALS, DEFAULT_QUANTITY_DECIMALS,
};
pub use shared::{ColorClass, FormatMode, RawDate, RawValue};
