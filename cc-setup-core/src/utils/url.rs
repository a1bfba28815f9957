//! Base URL normalization and validation

use crate::config::constants::urls::{DEFAULT_SCHEME, INSECURE_SCHEME};
use reqwest::Url;

/// Reasons a base URL is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("URL cannot be empty")]
    Empty,
    #[error("invalid URL format: {0}")]
    Parse(String),
    #[error("URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
    #[error("URL must include a host name")]
    MissingHost,
}

/// Prepend `https://` unless the input already starts with an http(s) scheme.
/// Surrounding whitespace is trimmed and empty input stays empty.
pub fn ensure_scheme(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with(INSECURE_SCHEME) || trimmed.starts_with(DEFAULT_SCHEME) {
        return trimmed.to_string();
    }
    format!("{DEFAULT_SCHEME}{trimmed}")
}

pub fn validate_url(raw: &str) -> Result<(), UrlError> {
    if raw.is_empty() {
        return Err(UrlError::Empty);
    }

    let parsed = Url::parse(raw).map_err(|err| UrlError::Parse(err.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(UrlError::UnsupportedScheme(other.to_string())),
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlError::MissingHost),
    }
}

/// Add a default scheme if needed, then validate the result
pub fn normalize_url(raw: &str) -> Result<String, UrlError> {
    let url = ensure_scheme(raw);
    validate_url(&url)?;
    Ok(url)
}

/// Host (and explicit port) of a URL.
///
/// Unparseable input falls back to stripping a leading scheme and keeping everything
/// before the first `/`.
pub fn extract_host(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    match Url::parse(raw) {
        Ok(parsed) => match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        },
        Err(_) => {
            let stripped = raw
                .strip_prefix(DEFAULT_SCHEME)
                .or_else(|| raw.strip_prefix(INSECURE_SCHEME))
                .unwrap_or(raw);
            stripped.split('/').next().unwrap_or_default().to_string()
        }
    }
}
