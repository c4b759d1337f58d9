use serde_json::Value;
use tracing::debug;

use crate::modules::wallets::models::{NormalizedWallets, WalletRecord};

/// Envelope keys checked in priority order before falling back to the body
pub const WALLET_PAYLOAD_KEYS: [&str; 3] = ["wallets", "wallet", "data"];

/// Resolve the first present envelope key, else the payload itself.
/// A key holding `null` counts as absent.
pub(crate) fn resolve_envelope<'a>(payload: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let resolved = keys
        .iter()
        .find_map(|key| payload.get(*key).filter(|v| !v.is_null()))
        .unwrap_or(payload);

    if resolved.is_null() {
        None
    } else {
        Some(resolved)
    }
}

/// Map any wallet response shape onto [`NormalizedWallets`].
///
/// Arrays become the multi-record case, anything else a single record.
/// A single record with `balance` but no `mainWallet` gets `mainWallet`
/// filled from `balance`; the original `balance` stays.
pub fn normalize_wallet_payload(payload: &Value) -> NormalizedWallets {
    let Some(resolved) = resolve_envelope(payload, &WALLET_PAYLOAD_KEYS) else {
        debug!("Wallet payload had no usable value");
        return NormalizedWallets::Empty;
    };

    match resolved {
        Value::Array(items) => {
            debug!(records = items.len(), "Normalized multi-record wallet payload");
            NormalizedWallets::Many(items.iter().map(WalletRecord::from_value).collect())
        }
        single => {
            let mut record = WalletRecord::from_value(single);
            if record.main_wallet.is_none() && record.balance.is_some() {
                record.main_wallet = record.balance;
            }
            NormalizedWallets::Single(record)
        }
    }
}
