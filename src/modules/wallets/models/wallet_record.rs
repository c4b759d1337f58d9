use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::core::numeric::{decimal_from_value, decimal_or_zero, id_field};

/// Commission sub-totals carried by a wallet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Commissions {
    pub sales: Decimal,
    pub delivery: Decimal,
    pub subscriptions: Decimal,
}

impl Commissions {
    pub fn new(sales: Decimal, delivery: Decimal, subscriptions: Decimal) -> Self {
        Self {
            sales,
            delivery,
            subscriptions,
        }
    }

    /// Read a `commissions` object; absent sub-fields are zero
    pub fn from_value(value: &Value) -> Self {
        Self {
            sales: decimal_or_zero(value, "sales"),
            delivery: decimal_or_zero(value, "delivery"),
            subscriptions: decimal_or_zero(value, "subscriptions"),
        }
    }

    /// Sum of the sub-totals, saturating at the decimal range bounds
    pub fn total(&self) -> Decimal {
        self.sales
            .saturating_add(self.delivery)
            .saturating_add(self.subscriptions)
    }
}

/// One team, zone or region's wallet snapshot as fetched from the backend.
///
/// Both wallet field names the backend has used are kept: `balance` and the
/// older `mainWallet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_wallet: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commissions: Option<Commissions>,
}

impl WalletRecord {
    /// Read a record from a loosely-typed payload element.
    ///
    /// Non-objects read as an empty record. A present but non-numeric amount
    /// counts as present with value zero.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }

        Self {
            entity_id: id_field(value, "entityId")
                .or_else(|| id_field(value, "id"))
                .or_else(|| id_field(value, "_id")),
            balance: present_amount(value, "balance"),
            main_wallet: present_amount(value, "mainWallet"),
            commissions: value
                .get("commissions")
                .filter(|c| c.is_object())
                .map(Commissions::from_value),
        }
    }

    /// Wallet contribution: `balance`, else `mainWallet`, else zero
    pub fn resolved_balance(&self) -> Decimal {
        self.balance
            .or(self.main_wallet)
            .unwrap_or(Decimal::ZERO)
    }

    /// Commission sub-totals, zero when the record carries none
    pub fn commissions_or_zero(&self) -> Commissions {
        self.commissions.unwrap_or_default()
    }
}

fn present_amount(object: &Value, key: &str) -> Option<Decimal> {
    match object.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(decimal_from_value(value).unwrap_or(Decimal::ZERO)),
    }
}

/// Canonical shape of a wallet payload after normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedWallets {
    /// No usable payload; render a zero state
    Empty,
    Single(WalletRecord),
    Many(Vec<WalletRecord>),
}

impl NormalizedWallets {
    /// Borrow the records as a slice (one element for the single case)
    pub fn records(&self) -> &[WalletRecord] {
        match self {
            NormalizedWallets::Empty => &[],
            NormalizedWallets::Single(record) => std::slice::from_ref(record),
            NormalizedWallets::Many(records) => records,
        }
    }

    pub fn into_records(self) -> Vec<WalletRecord> {
        match self {
            NormalizedWallets::Empty => Vec::new(),
            NormalizedWallets::Single(record) => vec![record],
            NormalizedWallets::Many(records) => records,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NormalizedWallets::Empty)
    }
}
