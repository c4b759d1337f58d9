use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde_json::Value;
use tracing::{debug, warn};

use super::backend_trait::DashboardBackend;
use crate::config::BackendConfig;
use crate::core::{AppError, Result};
use crate::modules::backend::models::{DashboardResource, Role, UserContext};

/// REST client for the upstream commerce backend.
///
/// Transient failures (connect errors, timeouts, 5xx, 429) are retried with
/// exponential backoff before the error surfaces.
pub struct HttpBackend {
    client: ClientWithMiddleware,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(inner)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `{base}/api/{role}/{resource}`
    pub fn endpoint_url(&self, role: Role, resource: DashboardResource) -> String {
        format!("{}/api/{}/{}", self.base_url, role.slug(), resource.segment())
    }
}

#[async_trait]
impl DashboardBackend for HttpBackend {
    async fn fetch(
        &self,
        user: &UserContext,
        role: Role,
        resource: DashboardResource,
    ) -> Result<Value> {
        let url = self.endpoint_url(role, resource);
        debug!(role = %role, resource = %resource, url = %url, "Fetching dashboard payload");

        let mut request = self.client.get(&url).bearer_auth(&user.token);
        if let Some(user_id) = &user.user_id {
            request = request.header("X-User-Id", user_id);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(role = %role, resource = %resource, status = %status, "Backend rejected credentials");
            return Err(AppError::unauthorized(format!(
                "Backend rejected credentials for {} {}",
                role, resource
            )));
        }

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(role = %role, resource = %resource, status = %status, "Backend request failed");
            // Body stays in the logs; it is not forwarded to dashboard clients
            debug!(role = %role, resource = %resource, body = %error_body, "Backend error body");
            return Err(AppError::upstream(format!(
                "Backend error {} for {} {}",
                status, role, resource
            )));
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&body)?)
    }

    fn name(&self) -> &str {
        "http"
    }
}
