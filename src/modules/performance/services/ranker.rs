use std::cmp::Reverse;

use crate::modules::performance::models::{PerformanceEntry, RankedPerformanceEntry};

/// Order entries by one counter, highest first, and number them from 1.
///
/// The sort is stable: entries with equal values keep their input order, and
/// ties still get distinct consecutive ranks. Only rank 1 is the top
/// performer. An empty input gives an empty leaderboard.
pub fn rank_by_metric(
    mut entries: Vec<PerformanceEntry>,
    metric_key: &str,
) -> Vec<RankedPerformanceEntry> {
    entries.sort_by_key(|entry| Reverse(entry.metric(metric_key)));

    entries
        .into_iter()
        .zip(1u32..)
        .map(|(entry, rank)| RankedPerformanceEntry {
            entry,
            rank,
            is_top_performer: rank == 1,
        })
        .collect()
}

/// Rank, then keep the first `limit` places. Ranks are not renumbered.
pub fn leaderboard(
    entries: Vec<PerformanceEntry>,
    metric_key: &str,
    limit: Option<usize>,
) -> Vec<RankedPerformanceEntry> {
    let mut ranked = rank_by_metric(entries, metric_key);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}
