pub mod models;
pub mod services;

pub use models::{Identity, PerformanceEntry, RankedPerformanceEntry};
pub use services::{parse_performance_entries, rank_by_metric};
