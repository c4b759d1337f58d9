use chrono::{DateTime, Utc};
use serde::Serialize;

/// Status of an order that has not progressed past submission
pub const PENDING_STATUS: &str = "pending";

/// A dated, status-carrying record (typically an order) fed to the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimestampedRecord {
    /// `None` when the backend sent no usable `createdAt`
    pub created_at: Option<DateTime<Utc>>,
    pub status: String,
}

impl TimestampedRecord {
    pub fn new(created_at: DateTime<Utc>, status: impl Into<String>) -> Self {
        Self {
            created_at: Some(created_at),
            status: status.into(),
        }
    }

    /// Effective means anything but exactly `"pending"`
    pub fn is_effective(&self) -> bool {
        self.status != PENDING_STATUS
    }
}
