//! Transport behavior against a mock server: headers, status handling,
//! retries and cancellation.

mod common;

use std::time::{Duration, Instant};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use freshservice::models::{ListOptions, ListTicketsOptions};
use freshservice::{Config, Context, Freshservice, FreshserviceError};
use pretty_assertions::assert_eq;
use reqwest::{Method, StatusCode};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, config_for, API_KEY};

fn ticket_body(id: u64) -> serde_json::Value {
    json!({"ticket": {"id": id, "subject": "Printer on fire", "status": 2, "priority": 3}})
}

#[tokio::test]
async fn test_sends_auth_and_standard_headers() {
    let server = MockServer::start().await;
    let expected_auth = format!("Basic {}", STANDARD.encode(format!("{}:X", API_KEY)));

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/42"))
        .and(header("authorization", expected_auth.as_str()))
        .and(header("accept", "application/json"))
        .and(header("strict-transport-security", "max-age=31536000; includeSubDomains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_body(42)))
        .expect(1)
        .mount(&server)
        .await;

    let ticket = client_for(&server).tickets().get(42).await.unwrap();
    assert_eq!(ticket.status, StatusCode::OK);
    assert_eq!(ticket.data.id, 42);
    assert_eq!(ticket.data.subject.as_deref(), Some("Printer on fire"));
}

#[tokio::test]
async fn test_custom_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/1"))
        .and(header("user-agent", "acme-sync/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_body(1)))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server).with_user_agent("acme-sync/2.0");
    let fs = Freshservice::new(&config).unwrap();
    fs.tickets().get(1).await.unwrap();
}

#[tokio::test]
async fn test_list_encodes_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "50"))
        .and(query_param("email", "user@example.com"))
        .and(query_param("type", "Incident"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tickets": [{"id": 1}, {"id": 2}]})))
        .expect(1)
        .mount(&server)
        .await;

    let opts = ListTicketsOptions::new()
        .with_page(2, 50)
        .with_email("user@example.com")
        .with_type("Incident");
    let tickets = client_for(&server).tickets().list(Some(&opts)).await.unwrap().into_data();
    let ids: Vec<u64> = tickets.tickets.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"code": "access_denied"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).tickets().get(404).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.to_string(), "request returned non-success status 404: Not Found");
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_server_error_exhausts_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/7"))
        .respond_with(ResponseTemplate::new(500))
        .expect(6)
        .mount(&server)
        .await;

    let err = client_for(&server).tickets().get(7).await.unwrap_err();
    match err {
        FreshserviceError::Api { status, .. } => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_retry_policy_none_sends_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/7"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server).with_retry(freshservice::RetryPolicy::none());
    let err = Freshservice::new(&config).unwrap().tickets().get(7).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
}

#[tokio::test]
async fn test_rate_limit_then_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/9"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_body(9)))
        .expect(1)
        .mount(&server)
        .await;

    let ticket = client_for(&server).tickets().get(9).await.unwrap().into_data();
    assert_eq!(ticket.id, 9);
}

#[tokio::test]
async fn test_post_after_server_error_replays_body() {
    let server = MockServer::start().await;
    let expected = json!({"body": "Rolled back", "notify_emails": ["ops@example.com"]});
    Mock::given(method("POST"))
        .and(path("/api/v2/changes/3/notes"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/changes/3/notes"))
        .and(wiremock::matchers::body_json(&expected))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"note": {"id": 77, "body": "Rolled back"}})))
        .expect(1)
        .mount(&server)
        .await;

    let note = freshservice::models::NoteModel::new("Rolled back").with_notify_email("ops@example.com");
    let created = client_for(&server).changes().create_note(3, &note).await.unwrap();
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data.id, 77);
}

#[tokio::test]
async fn test_delete_returns_true() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/tickets/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).tickets().delete(5).await.unwrap();
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.data);
}

#[tokio::test]
async fn test_undecodable_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).tickets().get(1).await.unwrap_err();
    assert!(matches!(err, FreshserviceError::Serialization(_)));
}

#[tokio::test]
async fn test_error_body_is_sanitized() {
    let server = MockServer::start().await;
    let body = format!(r#"{{"message": "invalid key {}"}}"#, API_KEY);
    Mock::given(method("GET"))
        .and(path("/api/v2/agents/1"))
        .respond_with(ResponseTemplate::new(401).set_body_string(body))
        .mount(&server)
        .await;

    let err = client_for(&server).agents().get(1).await.unwrap_err();
    match err {
        FreshserviceError::Api { status, body, .. } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert!(!body.contains(API_KEY));
            assert!(body.contains("[REDACTED]"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cancelled_context_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_body(1)))
        .expect(0)
        .mount(&server)
        .await;

    let (ctx, cancel) = Context::background().with_cancel();
    cancel.cancel();

    let err = client_for(&server).with_context(ctx).tickets().get(1).await.unwrap_err();
    assert!(matches!(err, FreshserviceError::Cancelled));
    assert!(err.is_context());
}

#[tokio::test]
async fn test_deadline_interrupts_rate_limit_wait() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/1"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "60"))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = Context::background().with_timeout(Duration::from_millis(200));
    let started = Instant::now();
    let err = client_for(&server).with_context(ctx).tickets().get(1).await.unwrap_err();

    assert!(matches!(err, FreshserviceError::DeadlineExceeded));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn test_transport_error_is_not_retried() {
    let config = Config::new("acme", API_KEY)
        .unwrap()
        .with_base_url("http://127.0.0.1:1/api/v2")
        .unwrap();
    let err = Freshservice::new(&config).unwrap().tickets().get(1).await.unwrap_err();
    assert!(matches!(err, FreshserviceError::Http(_)));
}

#[tokio::test]
async fn test_unsupported_method_fails_before_io() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let fs = client_for(&server);
    let err = fs
        .client()
        .execute(Method::PATCH, "tickets/1", None::<&ListOptions>)
        .await
        .unwrap_err();
    assert!(matches!(err, FreshserviceError::UnsupportedMethod(_)));
    assert!(err.is_config());

    let err = fs.client().get::<serde_json::Value>("tickets/%zz").await.unwrap_err();
    assert!(matches!(err, FreshserviceError::InvalidPath { .. }));
}

#[tokio::test]
async fn test_execute_returns_raw_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/1/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"activities":[]}"#))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .client()
        .execute(Method::GET, "tickets/1/activities", None::<&ListOptions>)
        .await
        .unwrap();
    assert_eq!(response.data, br#"{"activities":[]}"#.to_vec());
}
