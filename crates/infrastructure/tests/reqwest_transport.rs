//! Integration tests for the reqwest transport.
//!
//! Each test runs a one-shot HTTP responder on 127.0.0.1 and drives the
//! adapter through the `JsonApi` use case.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use fetchroute_application::{FetchError, JsonApi};
use fetchroute_infrastructure::{ClientConfig, ReqwestTransport};
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

/// The raw request as received by the responder.
struct Captured {
    head: String,
    body: String,
}

impl Captured {
    fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then_some(value.trim())
        })
    }
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Accepts one connection, records the request and answers with `status`
/// and `body`.
async fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        let captured = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let head = text[..end].to_string();
                let body = &text[end + 4..];
                if body.len() >= content_length(&head) || n == 0 {
                    break Captured {
                        head,
                        body: body.to_string(),
                    };
                }
            }
            assert!(n > 0, "connection closed before request completed");
        };

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        captured
    });

    let url = Url::parse(&format!("http://{addr}/")).unwrap();
    (url, handle)
}

fn api() -> JsonApi<ReqwestTransport> {
    JsonApi::new(Arc::new(ReqwestTransport::new().unwrap()))
}

#[tokio::test]
async fn test_post_data_round_trip() {
    let (base, server) = serve_once("201 Created", r#"{"id":12}"#).await;
    let url = base.join("poll").unwrap();
    let data = json!({"question": "Tabs or spaces?"});

    let envelope = api()
        .post_data(url.as_str(), Some(&data), Some("token-123"))
        .await
        .unwrap();

    assert!(envelope.ok);
    assert_eq!(envelope.data, json!({"id": 12}));

    let captured = server.await.unwrap();
    assert_eq!(captured.request_line(), "POST /poll HTTP/1.1");
    assert_eq!(captured.header("content-type"), Some("application/json"));
    assert_eq!(captured.header("authorization"), Some("token-123"));
    assert_eq!(captured.body, data.to_string());
}

#[tokio::test]
async fn test_get_data_without_token() {
    let (base, server) = serve_once("200 OK", "[1,2,3]").await;
    let url = base.join("polls").unwrap();

    let envelope = api().get_data(url.as_str(), None).await.unwrap();

    assert!(envelope.ok);
    assert_eq!(envelope.data, json!([1, 2, 3]));

    let captured = server.await.unwrap();
    assert_eq!(captured.request_line(), "GET /polls HTTP/1.1");
    assert_eq!(captured.header("authorization"), None);
    assert_eq!(captured.body, "");
}

#[tokio::test]
async fn test_error_status_with_json_body() {
    let (base, server) = serve_once("409 Conflict", r#"{"error":"already voted"}"#).await;

    let envelope = api().post_data(base.as_str(), None, None).await.unwrap();

    assert!(!envelope.ok);
    assert_eq!(envelope.data, json!({"error": "already voted"}));
    assert_eq!(server.await.unwrap().body, "{}");
}

#[tokio::test]
async fn test_non_json_body_is_rejected() {
    let (base, server) = serve_once("200 OK", "<h1>hello</h1>").await;

    let result = api().get_data(base.as_str(), None).await;

    assert!(matches!(result, Err(FetchError::InvalidJson(_))));
    server.await.unwrap();
}

#[tokio::test]
async fn test_relative_url_uses_configured_base() {
    let (base, server) = serve_once("200 OK", "null").await;
    let config = ClientConfig::new()
        .with_user_agent("ballot-ui/1.0")
        .with_base_url(base);
    let api = JsonApi::new(Arc::new(ReqwestTransport::from_config(&config).unwrap()));

    let envelope = api.get_data("voter/7", None).await.unwrap();

    assert_eq!(envelope.data, serde_json::Value::Null);
    let captured = server.await.unwrap();
    assert_eq!(captured.request_line(), "GET /voter/7 HTTP/1.1");
    assert_eq!(captured.header("user-agent"), Some("ballot-ui/1.0"));
}

#[tokio::test]
async fn test_connection_failure_propagates() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = api().get_data(&format!("http://{addr}/"), None).await;

    let error = result.unwrap_err();
    assert!(error.is_transport_error(), "unexpected error: {error}");
}

#[tokio::test]
async fn test_token_with_control_character_is_invalid_header() {
    let result = api()
        .get_data("http://127.0.0.1:9/polls", Some("abc\ndef"))
        .await;

    let error = result.unwrap_err();
    assert!(
        matches!(error, FetchError::InvalidHeader(_)),
        "unexpected error: {error}"
    );
    assert!(error.is_transport_error());
}

#[tokio::test]
async fn test_empty_url_fails_at_transport() {
    let result = api().post_data("", None, None).await;
    assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
}
