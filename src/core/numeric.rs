//! Lenient readers for loosely-typed backend payloads.
//!
//! The upstream endpoints disagree on field types, so a missing or
//! non-numeric field reads as zero instead of failing the whole view.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Reads a JSON value as a decimal amount.
///
/// Numbers keep their exact textual value. Numeric strings are accepted.
/// Returns `None` for anything else so callers can tell "absent" from zero.
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
                .or_else(|| n.as_f64().and_then(Decimal::from_f64))
        }
        Value::String(s) => {
            let trimmed = s.trim();
            Decimal::from_str(trimmed)
                .or_else(|_| Decimal::from_scientific(trimmed))
                .ok()
        }
        _ => None,
    }
}

/// Reads `object[key]` as a decimal, `None` when absent or unusable.
pub fn decimal_field(object: &Value, key: &str) -> Option<Decimal> {
    object.get(key).and_then(decimal_from_value)
}

/// Reads `object[key]` as a decimal, zero when absent or unusable.
pub fn decimal_or_zero(object: &Value, key: &str) -> Decimal {
    decimal_field(object, key).unwrap_or(Decimal::ZERO)
}

/// Reads a JSON value as a non-negative counter.
///
/// Fractions are truncated and negatives clamp to zero.
pub fn count_from_value(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let decimal = decimal_from_value(value)?;
    if decimal.is_sign_negative() {
        return Some(0);
    }
    Some(decimal.trunc().to_u64().unwrap_or(u64::MAX))
}

/// Reads `object[key]` as a string, `None` for non-strings and blanks.
pub fn string_field(object: &Value, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Reads `object[key]` as an identifier, accepting strings and integers.
pub fn id_field(object: &Value, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
