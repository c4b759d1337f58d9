mod dashboard_controller;

pub use dashboard_controller::{LeaderboardQuery, OverviewQuery, WeeklyOrdersQuery};

// Re-export configure for main.rs
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    dashboard_controller::configure_routes(cfg);
}
