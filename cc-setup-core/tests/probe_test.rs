//! HTTP-level tests for the connectivity probe, run against a local mock server.

use cc_setup_core::probe::{HttpProber, ProbeError, ProbeSettings, Prober};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_answering(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_success_sends_expected_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "sk-test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "model": "claude-haiku-4-5-20251001",
            "max_tokens": 1,
            "messages": [{"role": "user", "content": "Hi"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "msg_1",
            "type": "message",
            "content": [{"type": "text", "text": "Hello"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let prober = HttpProber::new();
    let result = prober.probe(&format!("{}/", server.uri()), "sk-test-key").await;
    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn test_rate_limited_counts_as_success() {
    let server = server_answering(429).await;
    let result = HttpProber::new().probe(&server.uri(), "tok").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_unauthorized_is_auth_error() {
    let server = server_answering(401).await;
    let err = HttpProber::new()
        .probe(&server.uri(), "tok")
        .await
        .unwrap_err();
    assert_eq!(err, ProbeError::Auth);
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_forbidden_and_not_found() {
    let forbidden = server_answering(403).await;
    let missing = server_answering(404).await;
    let prober = HttpProber::new();

    assert_eq!(
        prober.probe(&forbidden.uri(), "tok").await,
        Err(ProbeError::Permission)
    );
    assert_eq!(
        prober.probe(&missing.uri(), "tok").await,
        Err(ProbeError::Endpoint)
    );
}

#[tokio::test]
async fn test_other_status_surfaces_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(529).set_body_json(serde_json::json!({
            "type": "error",
            "error": {"type": "overloaded_error", "message": "Overloaded"}
        })))
        .mount(&server)
        .await;

    let err = HttpProber::new()
        .probe(&server.uri(), "tok")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ProbeError::Api {
            status: 529,
            message: Some("Overloaded".to_string()),
        }
    );
    assert_eq!(err.to_string(), "API error (529): Overloaded");
}

#[tokio::test]
async fn test_other_status_without_json_body_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = HttpProber::new()
        .probe(&server.uri(), "tok")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ProbeError::Api {
            status: 502,
            message: None,
        }
    );
}

#[tokio::test]
async fn test_unreachable_host_is_connection_error() {
    // Nothing listens on port 1 of the loopback interface
    let err = HttpProber::new()
        .probe("http://127.0.0.1:1", "tok")
        .await
        .unwrap_err();
    assert!(matches!(err, ProbeError::Connection(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_timeout_is_connection_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let prober = HttpProber::with_settings(ProbeSettings {
        timeout: Duration::from_millis(200),
        ..ProbeSettings::default()
    });
    let err = prober.probe(&server.uri(), "tok").await.unwrap_err();
    assert!(matches!(err, ProbeError::Connection(_)));
}

#[test]
fn test_default_settings() {
    let settings = ProbeSettings::default();
    assert_eq!(settings.path, "/v1/messages");
    assert_eq!(settings.anthropic_version, "2023-06-01");
    assert_eq!(settings.timeout, Duration::from_secs(30));
    assert_eq!(HttpProber::new().settings().model, "claude-haiku-4-5-20251001");
}
