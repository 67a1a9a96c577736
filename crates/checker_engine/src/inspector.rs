use std::sync::Arc;
use std::time::Duration;

use checker_core::InspectionResult;
use check_logging::{check_debug, check_warn};

use crate::credentials::CredentialProvider;
use crate::types::{InspectRequest, InspectResponse};

/// Production inspection endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://searchconsole.googleapis.com/v1/urlInspection/index:inspect";

#[derive(Debug, Clone)]
pub struct InspectorSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for InspectorSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// One remote inspection per call. Implementations must never fail: every
/// outcome, including transport errors, is folded into the returned
/// [`InspectionResult`].
#[async_trait::async_trait]
pub trait Inspect: Send + Sync {
    async fn inspect(&self, url: &str, property: &str) -> InspectionResult;
}

/// Inspection client over the Search Console JSON API.
pub struct UrlInspectionClient {
    client: reqwest::Client,
    endpoint: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl UrlInspectionClient {
    pub fn new(
        settings: InspectorSettings,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: settings.endpoint,
            credentials,
        })
    }

    async fn inspect_inner(&self, url: &str, property: &str) -> InspectionResult {
        let token = match self.credentials.access_token().await {
            Ok(token) => token,
            Err(err) => return InspectionResult::failure(err.to_string()),
        };

        let body = InspectRequest {
            inspection_url: url,
            site_url: property,
        };
        let response = match self
            .client
            .post(&self.endpoint)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return InspectionResult::failure(err.to_string()),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return InspectionResult::failure(format!("HTTP {}: {}", status.as_u16(), body.trim()));
        }

        let decoded: InspectResponse = match response.json().await {
            Ok(decoded) => decoded,
            Err(err) => return InspectionResult::failure(err.to_string()),
        };

        // A well-formed response may still carry no inspection payload;
        // that is "no data", not a transport failure.
        match decoded
            .inspection_result
            .and_then(|payload| payload.index_status_result)
        {
            Some(index_status) => InspectionResult::from_payload(
                index_status.verdict.as_deref(),
                index_status.coverage_state,
                index_status.last_crawl_time,
                index_status.google_canonical,
            ),
            None => InspectionResult::no_data(),
        }
    }
}

#[async_trait::async_trait]
impl Inspect for UrlInspectionClient {
    async fn inspect(&self, url: &str, property: &str) -> InspectionResult {
        let result = self.inspect_inner(url, property).await;
        if result.is_ok() {
            check_debug!("Inspected {}: indexed={}", url, result.indexed);
        } else {
            check_warn!("Inspection of {} failed: {}", url, result.error);
        }
        result
    }
}
