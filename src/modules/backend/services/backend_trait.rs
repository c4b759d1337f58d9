use async_trait::async_trait;
use serde_json::Value;

use crate::core::Result;
use crate::modules::backend::models::{DashboardResource, Role, UserContext};

/// Source of raw dashboard payloads
#[async_trait]
pub trait DashboardBackend: Send + Sync {
    /// Fetch one resource for a role on behalf of `user`.
    /// An empty response body reads as `Value::Null`.
    async fn fetch(
        &self,
        user: &UserContext,
        role: Role,
        resource: DashboardResource,
    ) -> Result<Value>;

    /// Get backend name
    fn name(&self) -> &str;
}
