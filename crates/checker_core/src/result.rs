use std::fmt;

/// Verdict value the remote service uses for an indexed URL.
pub const PASS_VERDICT: &str = "PASS";

/// Coverage value reported when the service omits the coverage field.
pub const UNKNOWN_COVERAGE: &str = "UNKNOWN";

/// Placeholder for optional fields the service did not report.
pub const FIELD_PLACEHOLDER: &str = "—";

/// Error message recorded when the response carried no inspection payload.
pub const NO_DATA_MESSAGE: &str = "Нет данных от API";

/// Outcome of inspecting a single URL. Immutable once created.
///
/// `indexed` is true only when the remote verdict was exactly `PASS` and no
/// error occurred; any failure leaves `indexed` false and `error` non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionResult {
    pub indexed: bool,
    pub coverage_state: String,
    pub last_crawl_date: String,
    pub canonical_url: String,
    pub error: String,
}

impl InspectionResult {
    /// Build a result from a decoded inspection payload.
    ///
    /// Optional fields fall back to `UNKNOWN` / `—` placeholders.
    pub fn from_payload(
        verdict: Option<&str>,
        coverage_state: Option<String>,
        last_crawl_date: Option<String>,
        canonical_url: Option<String>,
    ) -> Self {
        Self {
            indexed: verdict == Some(PASS_VERDICT),
            coverage_state: coverage_state.unwrap_or_else(|| UNKNOWN_COVERAGE.to_string()),
            last_crawl_date: last_crawl_date.unwrap_or_else(|| FIELD_PLACEHOLDER.to_string()),
            canonical_url: canonical_url.unwrap_or_else(|| FIELD_PLACEHOLDER.to_string()),
            error: String::new(),
        }
    }

    /// Build a result for a response that lacked the inspection payload.
    pub fn no_data() -> Self {
        Self::failure(NO_DATA_MESSAGE)
    }

    /// Build a result for a failed call. `message` must be non-empty.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            indexed: false,
            coverage_state: UNKNOWN_COVERAGE.to_string(),
            last_crawl_date: FIELD_PLACEHOLDER.to_string(),
            canonical_url: FIELD_PLACEHOLDER.to_string(),
            error: message.into(),
        }
    }

    /// Whether the call completed and returned a payload.
    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }

    /// Human-readable status cell for tables and the CSV report.
    pub fn status_text(&self) -> String {
        if !self.error.is_empty() {
            format!("❌ Ошибка: {}", self.error)
        } else if self.indexed {
            "✅ Да".to_string()
        } else {
            "❌ Нет".to_string()
        }
    }
}

impl fmt::Display for InspectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.status_text(), self.coverage_state)
    }
}
