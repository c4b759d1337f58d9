use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Number of days in the trailing chart window, reference day included
pub const WINDOW_DAYS: u64 = 7;

/// How records are matched to the 7 chart buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketingMode {
    /// Match by weekday name. Records from earlier weeks land in the bucket
    /// sharing their weekday.
    #[default]
    Weekday,
    /// Match by calendar date; records outside the window are dropped
    #[serde(rename = "date")]
    CalendarDate,
}

/// Order counts for one day of the trailing window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBucket {
    /// Weekday abbreviation, `Mon` through `Sun`
    pub day_label: String,
    pub date: NaiveDate,
    pub submitted_count: u32,
    pub effective_count: u32,
}

impl DailyBucket {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            day_label: date.format("%a").to_string(),
            date,
            submitted_count: 0,
            effective_count: 0,
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// The 7-bucket order chart, oldest day first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyChart {
    pub mode: BucketingMode,
    pub buckets: Vec<DailyBucket>,
}

impl WeeklyChart {
    pub fn new(mode: BucketingMode, buckets: Vec<DailyBucket>) -> Self {
        Self { mode, buckets }
    }

    pub fn total_submitted(&self) -> u32 {
        self.buckets.iter().map(|b| b.submitted_count).sum()
    }

    pub fn total_effective(&self) -> u32 {
        self.buckets.iter().map(|b| b.effective_count).sum()
    }
}
