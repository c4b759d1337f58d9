use serde_json::Value;
use tracing::debug;

use crate::core::numeric::{count_from_value, string_field};
use crate::modules::performance::models::{Identity, PerformanceEntry};
use crate::modules::wallets::services::resolve_envelope;

const PERFORMANCE_PAYLOAD_KEYS: [&str; 3] = ["users", "team", "data"];
const METRIC_OBJECT_KEYS: [&str; 2] = ["metrics", "stats"];
const IDENTITY_KEYS: [&str; 3] = ["firstName", "lastName", "email"];
const CONTACT_KEYS: [&str; 3] = ["phone", "phoneNumber", "mobile"];

/// Build performance entries from a team/performance payload.
///
/// The list is read from `users`, `team` or `data`, else the body itself.
/// Anything that is not a list yields no entries.
pub fn parse_performance_entries(payload: &Value) -> Vec<PerformanceEntry> {
    let Some(Value::Array(items)) = resolve_envelope(payload, &PERFORMANCE_PAYLOAD_KEYS) else {
        debug!("Performance payload held no list");
        return Vec::new();
    };

    items.iter().filter(|item| item.is_object()).map(parse_entry).collect()
}

fn parse_entry(item: &Value) -> PerformanceEntry {
    let nested_user = item.get("user").filter(|u| u.is_object());
    let identity_field = |key: &str| {
        string_field(item, key)
            .or_else(|| nested_user.and_then(|user| string_field(user, key)))
            .unwrap_or_default()
    };

    let identity = Identity {
        first_name: identity_field("firstName"),
        last_name: identity_field("lastName"),
        email: identity_field("email"),
    };

    let mut entry = PerformanceEntry::new(identity);

    let metrics_object = METRIC_OBJECT_KEYS
        .iter()
        .find_map(|key| item.get(*key).and_then(Value::as_object));

    match metrics_object {
        Some(metrics) => {
            for (key, value) in metrics {
                if let Some(count) = count_from_value(value) {
                    entry.metrics.insert(key.clone(), count);
                }
            }
        }
        None => {
            let Some(fields) = item.as_object() else {
                return entry;
            };
            // Top-level fields only count when they are real JSON numbers
            for (key, value) in fields {
                if !value.is_number() || is_descriptive_key(key) {
                    continue;
                }
                if let Some(count) = count_from_value(value) {
                    entry.metrics.insert(key.clone(), count);
                }
            }
        }
    }

    entry
}

/// Identity, contact and identifier fields are never counters
fn is_descriptive_key(key: &str) -> bool {
    IDENTITY_KEYS.contains(&key)
        || CONTACT_KEYS.contains(&key)
        || key == "id"
        || key == "_id"
        || key.ends_with("Id")
        || key.ends_with("_id")
}
