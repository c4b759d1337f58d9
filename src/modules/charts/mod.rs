pub mod models;
pub mod services;

pub use models::{BucketingMode, DailyBucket, TimestampedRecord, WeeklyChart};
pub use services::{bucket_trailing_week, bucket_trailing_week_with_mode, parse_timestamped_records};
