use serde::Serialize;
use std::collections::BTreeMap;

/// Counter names the dashboards rank by
pub mod metric_keys {
    pub const TOTAL_VENDORS: &str = "totalVendors";
    pub const TOTAL_CUSTOMERS: &str = "totalCustomers";
    pub const SALES: &str = "sales";
}

/// Who a performance entry belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Identity {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Named counters for one managed person or entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceEntry {
    pub identity: Identity,
    pub metrics: BTreeMap<String, u64>,
}

impl PerformanceEntry {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_metric(mut self, key: impl Into<String>, value: u64) -> Self {
        self.metrics.insert(key.into(), value);
        self
    }

    /// Counter value, zero when the entry does not carry it
    pub fn metric(&self, key: &str) -> u64 {
        self.metrics.get(key).copied().unwrap_or(0)
    }
}

/// A performance entry placed on a leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPerformanceEntry {
    #[serde(flatten)]
    pub entry: PerformanceEntry,
    pub rank: u32,
    pub is_top_performer: bool,
}
