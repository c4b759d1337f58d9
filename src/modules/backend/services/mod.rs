pub mod backend_trait;
pub mod http_backend;

pub use backend_trait::DashboardBackend;
pub use http_backend::HttpBackend;
