//! Transport to the plan-generation service.
//!
//! [`PlanService`] is the seam between the lifecycle controller and the
//! network. [`HttpPlanService`] is the production implementation; tests
//! substitute scripted services to control when and how calls settle.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::{
    error::{CoachError, RequestError, Result},
    models::{PlanRequest, PlanResult},
};

/// Address of the hosted plan-generation service.
pub const DEFAULT_ENDPOINT: &str =
    "https://ai-personal-productivity-coach.onrender.com/generate-plan";

/// Something that turns a [`PlanRequest`] into a [`PlanResult`].
#[async_trait]
pub trait PlanService: Send + Sync + 'static {
    /// Requests a plan.
    async fn generate(&self, request: &PlanRequest) -> std::result::Result<PlanResult, RequestError>;
}

/// Plan service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPlanService {
    endpoint: String,
    http: Client,
}

impl HttpPlanService {
    /// Creates a builder with the default endpoint and no timeout.
    pub fn builder() -> HttpPlanServiceBuilder {
        HttpPlanServiceBuilder::new()
    }

    /// Endpoint requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PlanService for HttpPlanService {
    async fn generate(&self, request: &PlanRequest) -> std::result::Result<PlanResult, RequestError> {
        debug!("POST {} ({} goals)", self.endpoint, request.goals.len());

        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Builder for creating and configuring [`HttpPlanService`] instances.
#[derive(Debug, Clone)]
pub struct HttpPlanServiceBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl HttpPlanServiceBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            endpoint: None,
            timeout: None,
        }
    }

    /// Sets a custom endpoint URL.
    ///
    /// If not specified, uses [`DEFAULT_ENDPOINT`].
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: Option<S>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.into());
        }
        self
    }

    /// Sets a total timeout for each request. Without one a request may wait
    /// forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the configured service.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::Configuration` if the endpoint is not an
    /// `http(s)` URL or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<HttpPlanService> {
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let url = reqwest::Url::parse(&endpoint).map_err(|e| CoachError::Configuration {
            message: format!("Invalid endpoint '{endpoint}': {e}"),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoachError::Configuration {
                message: format!("Endpoint '{endpoint}' must use http or https"),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| CoachError::Configuration {
            message: format!("Failed to build HTTP client: {e}"),
        })?;

        Ok(HttpPlanService { endpoint, http })
    }
}

impl Default for HttpPlanServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
