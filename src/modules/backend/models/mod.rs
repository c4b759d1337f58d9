mod role;
mod user_context;

pub use role::{DashboardResource, Role};
pub use user_context::UserContext;
