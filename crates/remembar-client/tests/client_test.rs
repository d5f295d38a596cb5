//! Integration tests for the store client against a simulated store.

use std::time::Duration;

use remembar_client::{StoreClient, TUNNEL_BYPASS_HEADER};
use remembar_core::{BridgeConfig, ErrorKind, MemoryRequest, Priority, SearchRequest, TrackItemRequest};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> StoreClient {
    StoreClient::new(BridgeConfig::new(server.uri()).unwrap()).unwrap()
}

/// URL of a port that nothing listens on.
fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_add_note_sends_schema_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/add_note"))
        .and(header("content-type", "application/json"))
        .and(header(TUNNEL_BYPASS_HEADER, "true"))
        .and(body_json(json!({
            "tenant_id": "default_user",
            "text": "Pills are in the blue box",
            "modality": "typed",
            "priority": "high",
            "tags": ["meds"],
            "linked_entity": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "note_id": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = MemoryRequest::new("default_user", "Pills are in the blue box")
        .with_priority(Priority::High)
        .with_tags(vec!["meds".to_string()]);
    let reply = client_for(&server).add_note(&request).await.unwrap();

    assert!(reply.ok);
    assert_eq!(reply.note_id_label(), "abc");
}

#[tokio::test]
async fn test_search_semantic_decodes_matches() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search_semantic"))
        .and(body_json(json!({
            "tenant_id": "default_user",
            "query_text": "keys",
            "collections": ["entities_stream_v1", "user_notes_v1"],
            "n_results": 3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "results": [
                {"document": "Keys on the counter", "distance": 0.2, "metadata": {"note_id": "n1"}},
                {"document": "Keys in the car", "distance": 0.8}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .search_semantic(&SearchRequest::new("default_user", "keys", 3))
        .await
        .unwrap();

    assert!(reply.ok);
    assert_eq!(reply.results.len(), 2);
    assert_eq!(reply.results[0].document, "Keys on the counter");
    assert!(reply.results[1].metadata.is_none());
}

#[tokio::test]
async fn test_non_200_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/add_note"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .add_note(&MemoryRequest::new("t", "x"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Remote);
    assert_eq!(err.status_code(), Some(502));
}

#[tokio::test]
async fn test_other_2xx_is_still_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/add_note"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .add_note(&MemoryRequest::new("t", "x"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(201));
}

#[tokio::test]
async fn test_invalid_body_is_unexpected_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search_semantic"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>tunnel offline</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search_semantic(&SearchRequest::new("t", "q", 5))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unexpected);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = StoreClient::new(BridgeConfig::new(refused_url()).unwrap()).unwrap();

    let err = client
        .add_note(&MemoryRequest::new("t", "x"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn test_slow_store_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search_semantic"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true, "results": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = BridgeConfig::new(server.uri())
        .unwrap()
        .with_request_timeout(Duration::from_millis(100));
    let err = StoreClient::new(config)
        .unwrap()
        .search_semantic(&SearchRequest::new("t", "q", 5))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_health_checks_status_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/healthz"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client_for(&server).health().await.is_ok());
}

#[tokio::test]
async fn test_bypass_header_not_sent_when_disabled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/healthz"))
        .and(header(TUNNEL_BYPASS_HEADER, "true"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/healthz"))
        .respond_with(ResponseTemplate::new(418))
        .mount(&server)
        .await;

    let config = BridgeConfig::new(server.uri()).unwrap().with_tunnel_bypass(false);
    let err = StoreClient::new(config).unwrap().health().await.unwrap_err();
    assert_eq!(err.status_code(), Some(418));
}

#[tokio::test]
async fn test_track_and_find_item() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/track_item"))
        .and(body_json(json!({
            "tenant_id": "default_user",
            "item_name": "glasses",
            "location": "bedside table",
            "description": "reading glasses"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/find/glasses"))
        .and(query_param("tenant_id", "default_user"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"item_name": "glasses", "location": "bedside table"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let tracked = client
        .track_item(
            &TrackItemRequest::new("default_user", "glasses", "bedside table")
                .with_description("reading glasses"),
        )
        .await
        .unwrap();
    assert_eq!(tracked["ok"], true);

    let found = client.find_item("glasses", "default_user").await.unwrap();
    assert_eq!(found["location"], "bedside table");
}
