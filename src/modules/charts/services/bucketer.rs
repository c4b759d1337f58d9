use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};

use crate::modules::charts::models::{BucketingMode, DailyBucket, TimestampedRecord, WINDOW_DAYS};

/// Count records into the 7 days ending at `reference_now`, oldest first.
///
/// Buckets are keyed by weekday name in `reference_now`'s timezone, so a
/// record from an earlier week counts toward the bucket with the same
/// weekday. Records without a usable `created_at` are skipped.
pub fn bucket_trailing_week<Tz: TimeZone>(
    records: &[TimestampedRecord],
    reference_now: &DateTime<Tz>,
) -> Vec<DailyBucket> {
    bucket_trailing_week_with_mode(records, reference_now, BucketingMode::Weekday)
}

/// [`bucket_trailing_week`] with an explicit [`BucketingMode`]
pub fn bucket_trailing_week_with_mode<Tz: TimeZone>(
    records: &[TimestampedRecord],
    reference_now: &DateTime<Tz>,
    mode: BucketingMode,
) -> Vec<DailyBucket> {
    let timezone = reference_now.timezone();
    let today = reference_now.date_naive();

    // Only a reference day in the first week of the calendar range can fail
    // the subtraction; the window then starts at the earliest date instead.
    let first_day = today
        .checked_sub_days(Days::new(WINDOW_DAYS - 1))
        .unwrap_or(NaiveDate::MIN);

    let mut buckets: Vec<DailyBucket> = first_day
        .iter_days()
        .take(WINDOW_DAYS as usize)
        .map(DailyBucket::empty)
        .collect();

    for record in records {
        let Some(created_at) = record.created_at else {
            continue;
        };
        let local_date = created_at.with_timezone(&timezone).date_naive();

        let slot = match mode {
            BucketingMode::Weekday => buckets
                .iter_mut()
                .find(|bucket| bucket.weekday() == local_date.weekday()),
            BucketingMode::CalendarDate => {
                buckets.iter_mut().find(|bucket| bucket.date == local_date)
            }
        };

        if let Some(bucket) = slot {
            bucket.submitted_count += 1;
            if record.is_effective() {
                bucket.effective_count += 1;
            }
        }
    }

    buckets
}
