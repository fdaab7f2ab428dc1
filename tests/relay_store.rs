//! Relay store against a local stub endpoint

mod common;

use sheet_autofill::store::{RecordStore, RelayStore, http};
use sheet_autofill::{ErrorKind, FieldMapper, LookupError, RecordLoader};
use std::time::Duration;

fn client() -> reqwest::Client {
    http::build_client(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_relay_returns_row() {
    let server = common::serve(200, r#"{"ת.ז.":"123","שם משפחה":"כהן"}"#).await;
    let store = RelayStore::new(format!("{}/exec", server.base_url), client());

    let record = store.fetch("123").await.unwrap();
    assert_eq!(record.get("ת.ז."), Some("123"));
    assert_eq!(record.get("שם משפחה"), Some("כהן"));
    assert_eq!(server.requests(), vec!["GET /exec?id=123 HTTP/1.1"]);
}

#[tokio::test]
async fn test_relay_encodes_identifier() {
    let server = common::serve(200, r#"{"ID":"a b"}"#).await;
    let store = RelayStore::new(format!("{}/exec", server.base_url), client());

    store.fetch("a b&c").await.unwrap();
    assert_eq!(server.requests(), vec!["GET /exec?id=a%20b%26c HTTP/1.1"]);
}

#[tokio::test]
async fn test_relay_error_payload_is_not_found() {
    let server = common::serve(200, r#"{"error":"not found"}"#).await;
    let store = RelayStore::new(server.base_url.clone(), client());

    let err = store.fetch("123").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_relay_http_failure_is_transport() {
    let server = common::serve(500, r#"{"ID":"1"}"#).await;
    let store = RelayStore::new(server.base_url.clone(), client());

    let err = store.fetch("1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_relay_malformed_body_is_transport() {
    let server = common::serve(200, "<html>login</html>").await;
    let store = RelayStore::new(server.base_url.clone(), client());

    let err = store.fetch("1").await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)));
}

#[tokio::test]
async fn test_unreachable_relay_is_transport() {
    // Bind and drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = RelayStore::new(format!("http://{}", addr), client());
    let err = store.fetch("1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_loader_over_relay_normalizes() {
    let server = common::serve(200, r#"{"ת.ז.":"123","שם משפחה":"כהן"}"#).await;
    let store = RelayStore::new(server.base_url.clone(), client());
    let loader = RecordLoader::new(Box::new(store), FieldMapper::default());

    let record = loader.load("123").await.unwrap();
    assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"id":"123","lastName":"כהן"}"#);
}
