mod performance_entry;

pub use performance_entry::{metric_keys, Identity, PerformanceEntry, RankedPerformanceEntry};
