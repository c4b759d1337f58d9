mod overview;

pub use overview::{DashboardOverview, FinancialsDisplay, FinancialsView, LeaderboardView};
