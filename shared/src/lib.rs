// Types shared between the formatter and the dashboard code that calls it.
pub mod models;
pub mod utils;

pub use models::{ColorClass, FormatMode, RawDate, RawValue};
