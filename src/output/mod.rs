//! Helpers for the output layer: file naming and date display.

mod filename;
mod time;

pub use filename::{OutputFilenameFormat, output_name, safe_filename};
pub use time::format_timestamp_millis;
