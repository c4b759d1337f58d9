mod daily_bucket;
mod timestamped_record;

pub use daily_bucket::{BucketingMode, DailyBucket, WeeklyChart, WINDOW_DAYS};
pub use timestamped_record::{TimestampedRecord, PENDING_STATUS};
