mod bucketer;
mod parser;

pub use bucketer::{bucket_trailing_week, bucket_trailing_week_with_mode};
pub use parser::parse_timestamped_records;
