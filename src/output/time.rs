//! Timestamp formatting for release dates.

use chrono::{DateTime, FixedOffset, Utc};

/// Offset the providers' release dates are reported in (UTC+8).
const PROVIDER_UTC_OFFSET_SECS: i32 = 8 * 3600;

/// Format epoch milliseconds as `yyyy-MM-dd HH:mm:ss` in UTC+8.
///
/// Returns `None` for timestamps outside chrono's range.
pub fn format_timestamp_millis(millis: i64) -> Option<String> {
    let offset = FixedOffset::east_opt(PROVIDER_UTC_OFFSET_SECS)?;
    let utc = DateTime::<Utc>::from_timestamp_millis(millis)?;
    Some(
        utc.with_timezone(&offset)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
    )
}
