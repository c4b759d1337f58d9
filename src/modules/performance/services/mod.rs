mod parser;
mod ranker;

pub use parser::parse_performance_entries;
pub use ranker::{leaderboard, rank_by_metric};
