use thiserror::Error;

/// Prefix for domain-scoped properties, e.g. `sc-domain:example.com`.
pub const DOMAIN_PROPERTY_PREFIX: &str = "sc-domain:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyError {
    #[error("URL собственности должен начинаться с 'http://' или 'sc-domain:'")]
    BadPrefix,
    #[error("URL собственности не задан")]
    Empty,
}

/// Validate a Search Console property identifier before a run starts.
///
/// Accepts URL-prefix properties (anything starting with `http`) and
/// domain properties (`sc-domain:` prefix). Returns the trimmed value.
pub fn validate_property(raw: &str) -> Result<String, PropertyError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PropertyError::Empty);
    }
    if trimmed.starts_with("http") || trimmed.starts_with(DOMAIN_PROPERTY_PREFIX) {
        Ok(trimmed.to_string())
    } else {
        Err(PropertyError::BadPrefix)
    }
}
