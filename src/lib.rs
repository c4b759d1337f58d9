//! Dashboard Metrics Library
//!
//! Derives the figures shown on the regional, state, sales-manager, agent,
//! BDM and BD dashboards from raw backend payloads: wallet/commission
//! totals, performance leaderboards and the 7-day order chart.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::backend;
pub use modules::charts;
pub use modules::dashboard;
pub use modules::performance;
pub use modules::wallets;

/// Mount every HTTP route the service exposes
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    modules::health::configure(cfg);
    modules::dashboard::configure(cfg);
}
