use std::path::{Path, PathBuf};

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use check_logging::check_debug;

/// Read-only scope of the Search Console inspection API.
pub const INSPECTION_SCOPE: &str = "https://www.googleapis.com/auth/webmasters.readonly";

/// Assertion lifetime requested from the token endpoint.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Refresh the cached token this many seconds before it actually expires.
const EARLY_REFRESH_SECS: i64 = 60;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("cannot read key file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse service-account key: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cannot sign token assertion: {0}")]
    Sign(#[from] jsonwebtoken::errors::Error),
    #[error("token endpoint unreachable: {0}")]
    Exchange(#[from] reqwest::Error),
    #[error("token endpoint returned HTTP {status}: {body}")]
    Denied { status: u16, body: String },
}

/// Supplies a bearer token for inspection calls.
///
/// Injected into the client so the run loop is testable without live
/// Google credentials.
#[async_trait::async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, CredentialError>;
}

/// The subset of a Google service-account JSON key this tool needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

impl ServiceAccountKey {
    /// Load and parse a key file. Missing file and malformed JSON are both
    /// startup-fatal conditions for the caller.
    pub fn from_file(path: &Path) -> Result<Self, CredentialError> {
        let content = std::fs::read_to_string(path).map_err(|source| CredentialError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, CredentialError> {
        Ok(serde_json::from_str(content)?)
    }
}

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    ASSERTION_LIFETIME_SECS
}

struct CachedToken {
    token: String,
    expires_at: i64,
}

/// Exchanges a signed service-account assertion for an access token and
/// caches it until shortly before expiry.
pub struct ServiceAccountProvider {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    client: reqwest::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountProvider {
    /// Parse the RSA private key up front so an invalid key fails at
    /// startup instead of on the first URL.
    pub fn new(key: ServiceAccountKey) -> Result<Self, CredentialError> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
        Ok(Self {
            key,
            encoding_key,
            client: reqwest::Client::new(),
            cached: Mutex::new(None),
        })
    }

    async fn exchange(&self) -> Result<CachedToken, CredentialError> {
        let now = chrono::Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: INSPECTION_SCOPE,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)?;

        let params = [("grant_type", JWT_BEARER_GRANT), ("assertion", &assertion)];
        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CredentialError::Denied {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response.json().await?;
        check_debug!(
            "Obtained access token for {} (expires in {}s)",
            self.key.client_email,
            token.expires_in
        );
        Ok(CachedToken {
            token: token.access_token,
            expires_at: now + token.expires_in - EARLY_REFRESH_SECS,
        })
    }
}

#[async_trait::async_trait]
impl CredentialProvider for ServiceAccountProvider {
    async fn access_token(&self) -> Result<String, CredentialError> {
        let mut cached = self.cached.lock().await;
        let now = chrono::Utc::now().timestamp();
        if let Some(token) = cached.as_ref() {
            if token.expires_at > now {
                return Ok(token.token.clone());
            }
        }
        let fresh = self.exchange().await?;
        let value = fresh.token.clone();
        *cached = Some(fresh);
        Ok(value)
    }
}

/// Fixed-token provider for tests and environments that inject a token
/// out-of-band.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl CredentialProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String, CredentialError> {
        Ok(self.token.clone())
    }
}
