use serde::{Deserialize, Serialize};

/// Request body of the URL Inspection endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectRequest<'a> {
    pub inspection_url: &'a str,
    pub site_url: &'a str,
}

/// Top-level response envelope. The payload is absent when the service
/// has nothing to report for the URL.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectResponse {
    pub inspection_result: Option<InspectionPayload>,
}

/// Nested inspection payload. Only the index-status part is consumed;
/// the remote schema carries more sections (AMP, mobile usability) that
/// this tool ignores.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionPayload {
    pub index_status_result: Option<IndexStatusResult>,
    pub inspection_result_link: Option<String>,
}

/// Index-status fields extracted per URL. All optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStatusResult {
    pub verdict: Option<String>,
    pub coverage_state: Option<String>,
    pub last_crawl_time: Option<String>,
    pub google_canonical: Option<String>,
}
