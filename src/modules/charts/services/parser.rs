use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tracing::debug;

use crate::core::timezone::parse_timestamp;
use crate::modules::charts::models::TimestampedRecord;
use crate::modules::wallets::services::resolve_envelope;

const ORDER_PAYLOAD_KEYS: [&str; 2] = ["orders", "data"];

/// Build chart records from an orders payload.
///
/// A missing `status` reads as an empty string, which counts as effective.
pub fn parse_timestamped_records(payload: &Value) -> Vec<TimestampedRecord> {
    let Some(Value::Array(items)) = resolve_envelope(payload, &ORDER_PAYLOAD_KEYS) else {
        debug!("Orders payload held no list");
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| item.is_object())
        .map(|item| TimestampedRecord {
            created_at: item.get("createdAt").and_then(created_at_from_value),
            status: item
                .get("status")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}

/// Strings go through [`parse_timestamp`]; integers are epoch milliseconds
fn created_at_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => parse_timestamp(raw),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}
