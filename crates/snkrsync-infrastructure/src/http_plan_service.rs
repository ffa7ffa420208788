//! Plan lookup against the tracking API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use snkrsync_core::config::ApiConfig;
use snkrsync_core::error::{Result, SnkrError};
use snkrsync_core::plan::{PlanService, SubscriptionPlan};

/// `PlanService` backed by `GET {base_url}/api/update-subscription/`.
///
/// The client carries a cookie store because the API authenticates via
/// session cookies (the original fetch ran with credentials included).
pub struct HttpPlanService {
    client: Client,
    config: ApiConfig,
}

#[derive(Deserialize)]
struct SubscriptionResponse {
    subscription: String,
}

impl HttpPlanService {
    /// Creates a service for the given API endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| SnkrError::http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/update-subscription/", self.config.base_url)
    }
}

#[async_trait]
impl PlanService for HttpPlanService {
    async fn fetch_plan(&self) -> Result<SubscriptionPlan> {
        let response = self
            .client
            .get(self.endpoint())
            .send()
            .await
            .map_err(|e| SnkrError::http(format!("subscription lookup failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SnkrError::http(format!(
                "subscription lookup returned {}",
                response.status()
            )));
        }

        let body: SubscriptionResponse = response
            .json()
            .await
            .map_err(|e| SnkrError::http(format!("invalid subscription response: {e}")))?;

        debug!(subscription = %body.subscription, "plan lookup succeeded");
        Ok(SubscriptionPlan::new(body.subscription))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let service = HttpPlanService::new(ApiConfig {
            base_url: "https://tracker.example".to_string(),
        })
        .unwrap();
        assert_eq!(
            service.endpoint(),
            "https://tracker.example/api/update-subscription/"
        );
    }
}
