// Tests for leaderboard ranking
//
// - descending by the chosen metric, missing metric reads as 0
// - stable: equal values keep input order
// - rank is the 1-based position, only rank 1 is the top performer
// - output length equals input length

use dashboard_metrics::performance::{rank_by_metric, Identity, PerformanceEntry};
use proptest::prelude::*;

fn named(name: &str) -> PerformanceEntry {
    PerformanceEntry::new(Identity {
        first_name: name.to_string(),
        last_name: String::new(),
        email: format!("{}@example.com", name.to_lowercase()),
    })
}

#[test]
fn test_ties_keep_input_order() {
    let input = vec![
        named("A").with_metric("sales", 5),
        named("B").with_metric("sales", 9),
        named("C").with_metric("sales", 9),
    ];

    let ranked = rank_by_metric(input, "sales");

    let summary: Vec<(&str, u32, bool)> = ranked
        .iter()
        .map(|r| (r.entry.identity.first_name.as_str(), r.rank, r.is_top_performer))
        .collect();
    assert_eq!(
        summary,
        vec![("B", 1, true), ("C", 2, false), ("A", 3, false)]
    );
}

#[test]
fn test_empty_collection() {
    assert!(rank_by_metric(Vec::new(), "totalVendors").is_empty());
}

#[test]
fn test_ranks_by_requested_metric_only() {
    let input = vec![
        named("A").with_metric("sales", 1).with_metric("totalVendors", 30),
        named("B").with_metric("sales", 50).with_metric("totalVendors", 2),
    ];

    let by_vendors = rank_by_metric(input.clone(), "totalVendors");
    assert_eq!(by_vendors[0].entry.identity.first_name, "A");

    let by_sales = rank_by_metric(input, "sales");
    assert_eq!(by_sales[0].entry.identity.first_name, "B");
}

#[test]
fn test_unknown_metric_keeps_input_order() {
    let input = vec![named("A"), named("B"), named("C")];
    let ranked = rank_by_metric(input, "totalCustomers");

    let order: Vec<_> = ranked.iter().map(|r| r.entry.identity.first_name.clone()).collect();
    assert_eq!(order, vec!["A", "B", "C"]);
    assert!(ranked[0].is_top_performer);
}

proptest! {
    #[test]
    fn test_ranking_properties(values in prop::collection::vec(prop::option::of(0u64..20), 0..30)) {
        let input: Vec<PerformanceEntry> = values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let entry = named(&format!("E{}", i));
                match value {
                    Some(v) => entry.with_metric("sales", *v),
                    None => entry,
                }
            })
            .collect();

        let ranked = rank_by_metric(input, "sales");

        prop_assert_eq!(ranked.len(), values.len());

        for (position, r) in ranked.iter().enumerate() {
            prop_assert_eq!(r.rank as usize, position + 1);
            prop_assert_eq!(r.is_top_performer, position == 0);
        }

        for pair in ranked.windows(2) {
            let (a, b) = (pair[0].entry.metric("sales"), pair[1].entry.metric("sales"));
            prop_assert!(a >= b, "not descending: {} then {}", a, b);
            if a == b {
                // Input index is encoded in the name; ties must keep input order
                let index = |r: &dashboard_metrics::performance::RankedPerformanceEntry| {
                    r.entry.identity.first_name[1..].parse::<usize>().unwrap()
                };
                prop_assert!(index(&pair[0]) < index(&pair[1]));
            }
        }
    }
}
