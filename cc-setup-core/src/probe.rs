//! Connectivity check against an Anthropic-compatible endpoint
//!
//! The probe sends the smallest possible Messages API request (one user turn, one
//! output token) and only looks at the status code. A rate-limited answer still proves
//! the token was accepted, so it counts as success.

use crate::config::constants::probe;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Why a probe did not succeed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("authentication failed: API token is invalid")]
    Auth,
    #[error("permission denied: check the API token's permissions")]
    Permission,
    #[error("API endpoint not found: check that the base URL is correct")]
    Endpoint,
    #[error("{}", api_error_message(.status, .message))]
    Api {
        status: u16,
        message: Option<String>,
    },
}

impl ProbeError {
    /// HTTP status behind the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Connection(_) => None,
            Self::Auth => Some(StatusCode::UNAUTHORIZED.as_u16()),
            Self::Permission => Some(StatusCode::FORBIDDEN.as_u16()),
            Self::Endpoint => Some(StatusCode::NOT_FOUND.as_u16()),
            Self::Api { status, .. } => Some(*status),
        }
    }
}

fn api_error_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => format!("API error ({status}): {message}"),
        None => format!("API returned error status {status}"),
    }
}

/// Checks that a base URL and token can reach the Messages API
#[async_trait]
pub trait Prober {
    async fn probe(&self, base_url: &str, token: &str) -> Result<(), ProbeError>;
}

/// Shape of the probe request
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub path: String,
    pub anthropic_version: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            path: probe::MESSAGES_PATH.to_string(),
            anthropic_version: probe::ANTHROPIC_VERSION.to_string(),
            model: probe::PROBE_MODEL.to_string(),
            timeout: Duration::from_secs(probe::TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProbeRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [ProbeMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ProbeMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// [`Prober`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpProber {
    http_client: HttpClient,
    settings: ProbeSettings,
}

impl HttpProber {
    pub fn new() -> Self {
        Self::with_settings(ProbeSettings::default())
    }

    pub fn with_settings(settings: ProbeSettings) -> Self {
        let http_client = HttpClient::builder()
            .timeout(settings.timeout)
            .build()
            .unwrap_or_else(|error| {
                warn!(
                    ?error,
                    "Failed to build probe HTTP client; falling back to default"
                );
                HttpClient::new()
            });
        Self {
            http_client,
            settings,
        }
    }

    pub fn settings(&self) -> &ProbeSettings {
        &self.settings
    }

    fn endpoint(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.settings.path)
    }
}

impl Default for HttpProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, base_url: &str, token: &str) -> Result<(), ProbeError> {
        let url = self.endpoint(base_url);
        let body = ProbeRequest {
            model: &self.settings.model,
            max_tokens: probe::PROBE_MAX_TOKENS,
            messages: [ProbeMessage {
                role: "user",
                content: probe::PROBE_PROMPT,
            }],
        };

        debug!(%url, "sending connectivity probe");
        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", token)
            .header("anthropic-version", &self.settings.anthropic_version)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProbeError::Connection(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "probe answered");
        match status {
            StatusCode::OK | StatusCode::TOO_MANY_REQUESTS => Ok(()),
            StatusCode::UNAUTHORIZED => Err(ProbeError::Auth),
            StatusCode::FORBIDDEN => Err(ProbeError::Permission),
            StatusCode::NOT_FOUND => Err(ProbeError::Endpoint),
            other => {
                let bytes = response.bytes().await.map_err(|e| {
                    ProbeError::Connection(format!("failed to read response: {e}"))
                })?;
                Err(ProbeError::Api {
                    status: other.as_u16(),
                    message: parse_error_message(&bytes),
                })
            }
        }
    }
}

/// `error.message` from an Anthropic-style error body
fn parse_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .map(|error| error.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let prober = HttpProber::new();
        assert_eq!(
            prober.endpoint("https://api.example.com/"),
            "https://api.example.com/v1/messages"
        );
        assert_eq!(
            prober.endpoint("https://api.example.com"),
            "https://api.example.com/v1/messages"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = ProbeRequest {
            model: probe::PROBE_MODEL,
            max_tokens: probe::PROBE_MAX_TOKENS,
            messages: [ProbeMessage {
                role: "user",
                content: probe::PROBE_PROMPT,
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "claude-haiku-4-5-20251001",
                "max_tokens": 1,
                "messages": [{"role": "user", "content": "Hi"}]
            })
        );
    }

    #[test]
    fn test_parse_error_message() {
        let body = br#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        assert_eq!(parse_error_message(body).as_deref(), Some("Overloaded"));
        assert_eq!(parse_error_message(b"<html>bad gateway</html>"), None);
        assert_eq!(parse_error_message(br#"{"detail":"nope"}"#), None);
    }

    #[test]
    fn test_error_display_and_status() {
        let with_message = ProbeError::Api {
            status: 500,
            message: Some("boom".to_string()),
        };
        assert_eq!(with_message.to_string(), "API error (500): boom");
        assert_eq!(with_message.status(), Some(500));

        let bare = ProbeError::Api {
            status: 502,
            message: None,
        };
        assert_eq!(bare.to_string(), "API returned error status 502");
        assert_eq!(ProbeError::Auth.status(), Some(401));
        assert_eq!(ProbeError::Connection("refused".into()).status(), None);
    }
}
