// Tests for the 7-day order chart
//
// - always 7 buckets, oldest first, ending at the reference day
// - submitted total equals the number of records matching a bucket;
//   records without a usable timestamp are excluded
// - effective never exceeds submitted
// - repeated calls give identical output

use chrono::{DateTime, Duration, TimeZone, Utc};
use dashboard_metrics::charts::{
    bucket_trailing_week, bucket_trailing_week_with_mode, parse_timestamped_records,
    BucketingMode, TimestampedRecord,
};
use proptest::prelude::*;
use serde_json::json;

fn reference_now() -> DateTime<Utc> {
    // Thursday
    Utc.with_ymd_and_hms(2025, 11, 6, 15, 30, 0).unwrap()
}

fn record_strategy() -> impl Strategy<Value = TimestampedRecord> {
    (
        prop::option::of(-30 * 24 * 60i64..60),
        prop_oneof![
            Just("pending".to_string()),
            Just("confirmed".to_string()),
            Just("delivered".to_string()),
            Just("cancelled".to_string()),
        ],
    )
        .prop_map(|(minutes_ago, status)| TimestampedRecord {
            created_at: minutes_ago.map(|m| reference_now() + Duration::minutes(m)),
            status,
        })
}

#[test]
fn test_labels_end_at_reference_day() {
    let buckets = bucket_trailing_week(&[], &reference_now());

    let labels: Vec<_> = buckets.iter().map(|b| b.day_label.clone()).collect();
    assert_eq!(labels, vec!["Fri", "Sat", "Sun", "Mon", "Tue", "Wed", "Thu"]);
    assert_eq!(buckets[0].date.to_string(), "2025-10-31");
    assert_eq!(buckets[6].date.to_string(), "2025-11-06");
}

#[test]
fn test_conservation_excludes_unmatched_records() {
    let payload = json!({
        "orders": [
            { "createdAt": "2025-11-06T09:00:00Z", "status": "pending" },
            { "createdAt": "2025-11-04T09:00:00Z", "status": "delivered" },
            { "createdAt": "2025-11-01T09:00:00Z", "status": "confirmed" },
            // No weekday can be derived from these, so no bucket matches
            { "createdAt": "not-a-date", "status": "delivered" },
            { "status": "pending" }
        ]
    });
    let records = parse_timestamped_records(&payload);
    assert_eq!(records.len(), 5);

    let buckets = bucket_trailing_week(&records, &reference_now());

    let submitted: u32 = buckets.iter().map(|b| b.submitted_count).sum();
    let effective: u32 = buckets.iter().map(|b| b.effective_count).sum();
    assert_eq!(submitted, 3);
    assert_eq!(effective, 2);
}

#[test]
fn test_calendar_mode_excludes_records_outside_window() {
    let records = vec![
        TimestampedRecord::new(reference_now() - Duration::days(7), "delivered"),
        TimestampedRecord::new(reference_now() - Duration::days(1), "delivered"),
    ];

    let by_weekday = bucket_trailing_week(&records, &reference_now());
    assert_eq!(by_weekday.iter().map(|b| b.submitted_count).sum::<u32>(), 2);
    // Last Thursday aliases into this Thursday's bucket
    assert_eq!(by_weekday[6].submitted_count, 1);

    let by_date =
        bucket_trailing_week_with_mode(&records, &reference_now(), BucketingMode::CalendarDate);
    assert_eq!(by_date.iter().map(|b| b.submitted_count).sum::<u32>(), 1);
    assert_eq!(by_date[5].submitted_count, 1);
}

proptest! {
    #[test]
    fn test_bucket_invariants(records in prop::collection::vec(record_strategy(), 0..60)) {
        let buckets = bucket_trailing_week(&records, &reference_now());

        prop_assert_eq!(buckets.len(), 7);
        prop_assert_eq!(buckets[6].date, reference_now().date_naive());
        for pair in buckets.windows(2) {
            prop_assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
        }

        for bucket in &buckets {
            prop_assert!(bucket.effective_count <= bucket.submitted_count);
        }

        // Every dated record matches some weekday in a 7-day window
        let dated = records.iter().filter(|r| r.created_at.is_some()).count() as u32;
        let submitted: u32 = buckets.iter().map(|b| b.submitted_count).sum();
        prop_assert_eq!(submitted, dated);

        let effective: u32 = buckets.iter().map(|b| b.effective_count).sum();
        let dated_effective = records
            .iter()
            .filter(|r| r.created_at.is_some() && r.status != "pending")
            .count() as u32;
        prop_assert_eq!(effective, dated_effective);
    }

    #[test]
    fn test_bucketing_is_deterministic(records in prop::collection::vec(record_strategy(), 0..60)) {
        let first = bucket_trailing_week(&records, &reference_now());
        let second = bucket_trailing_week(&records, &reference_now());
        prop_assert_eq!(&first, &second);

        let mut reversed = records.clone();
        reversed.reverse();
        prop_assert_eq!(first, bucket_trailing_week(&reversed, &reference_now()));
    }

    #[test]
    fn test_calendar_mode_never_exceeds_weekday_mode(
        records in prop::collection::vec(record_strategy(), 0..60)
    ) {
        let weekday = bucket_trailing_week(&records, &reference_now());
        let by_date =
            bucket_trailing_week_with_mode(&records, &reference_now(), BucketingMode::CalendarDate);

        for (w, d) in weekday.iter().zip(by_date.iter()) {
            prop_assert_eq!(&w.day_label, &d.day_label);
            prop_assert!(d.submitted_count <= w.submitted_count);
        }
    }
}
