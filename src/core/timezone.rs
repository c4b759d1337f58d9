use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Allowed UTC offsets, in minutes (UTC-12:00 to UTC+14:00)
pub const MIN_OFFSET_MINUTES: i32 = -12 * 60;
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Build the fixed offset the dashboard's charts are viewed in.
/// Returns error when the offset is outside UTC-12:00..=UTC+14:00
pub fn dashboard_offset(offset_minutes: i32) -> Result<FixedOffset, String> {
    if !(MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&offset_minutes) {
        return Err(format!(
            "UTC offset {} minutes is outside {}..={}",
            offset_minutes, MIN_OFFSET_MINUTES, MAX_OFFSET_MINUTES
        ));
    }
    FixedOffset::east_opt(offset_minutes * 60)
        .ok_or_else(|| format!("Invalid UTC offset: {} minutes", offset_minutes))
}

/// Parse a backend timestamp into UTC.
///
/// Accepts RFC 3339 (`2025-11-03T10:00:00.000Z`), a naive
/// `YYYY-MM-DD HH:MM:SS` taken as UTC, and a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Format timestamp as ISO 8601 UTC for API responses
pub fn format_iso8601(utc_time: DateTime<Utc>) -> String {
    utc_time.to_rfc3339()
}
