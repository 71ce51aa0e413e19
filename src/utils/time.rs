//! Block timestamp formatting

use chrono::DateTime;

pub fn timestamp_to_date(timestamp: u64) -> String {
    if timestamp == 0 {
        return "unknown".to_string();
    }
    i64::try_from(timestamp)
        .ok()
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
