// In-memory backend
//
// Serves canned payloads per resource and records every fetch so tests can
// assert which user context was passed through.

use async_trait::async_trait;
use dashboard_metrics::backend::{DashboardBackend, DashboardResource, Role, UserContext};
use dashboard_metrics::core::{AppError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// A recorded call to the fake backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFetch {
    pub token: String,
    pub user_id: Option<String>,
    pub role: Role,
    pub resource: DashboardResource,
}

enum Canned {
    Payload(Value),
    Failure(String),
    Unauthorized,
}

#[derive(Default)]
pub struct StaticBackend {
    responses: HashMap<DashboardResource, Canned>,
    calls: Mutex<Vec<RecordedFetch>>,
}

impl StaticBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `payload` for `resource`
    pub fn with_payload(mut self, resource: DashboardResource, payload: Value) -> Self {
        self.responses.insert(resource, Canned::Payload(payload));
        self
    }

    /// Fail `resource` with an upstream error
    pub fn with_failure(mut self, resource: DashboardResource, message: &str) -> Self {
        self.responses
            .insert(resource, Canned::Failure(message.to_string()));
        self
    }

    /// Reject `resource` as if the token had expired
    pub fn with_unauthorized(mut self, resource: DashboardResource) -> Self {
        self.responses.insert(resource, Canned::Unauthorized);
        self
    }

    pub fn calls(&self) -> Vec<RecordedFetch> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DashboardBackend for StaticBackend {
    async fn fetch(
        &self,
        user: &UserContext,
        role: Role,
        resource: DashboardResource,
    ) -> Result<Value> {
        self.calls.lock().unwrap().push(RecordedFetch {
            token: user.token.clone(),
            user_id: user.user_id.clone(),
            role,
            resource,
        });

        match self.responses.get(&resource) {
            Some(Canned::Payload(payload)) => Ok(payload.clone()),
            Some(Canned::Failure(message)) => Err(AppError::upstream(message.clone())),
            Some(Canned::Unauthorized) => Err(AppError::unauthorized("token expired")),
            None => Ok(Value::Null),
        }
    }

    fn name(&self) -> &str {
        "static"
    }
}
