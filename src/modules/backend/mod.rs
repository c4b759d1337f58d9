pub mod models;
pub mod services;

pub use models::{DashboardResource, Role, UserContext};
pub use services::{DashboardBackend, HttpBackend};
