use std::sync::Arc;

use admindash::api::{ApiClient, ApiError, HttpMethod};
use admindash::config::ApiConfig;
use admindash::storage::MemoryTokenStore;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::support::client_for;

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("Authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("secret"));
    let body: Value = client.call(HttpMethod::Get, "/ping", None).await.unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn test_missing_token_omits_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let _: Value = client.call(HttpMethod::Get, "/ping", None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/echo"))
        .and(body_json(json!({ "name": "Ada" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "u1" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("t"));
    let body: Value = client
        .call(HttpMethod::Post, "/echo", Some(&json!({ "name": "Ada" })))
        .await
        .unwrap();
    assert_eq!(body["id"], "u1");
}

#[tokio::test]
async fn test_http_error_uses_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/user/delete-user/u1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "message": "Forbidden resource" })))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("t"));
    let err = client.delete::<Value>("/user/delete-user/u1").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 403,
            message: "Forbidden resource".to_string()
        }
    );
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn test_http_error_falls_back_to_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.call::<Value>(HttpMethod::Get, "/broken", None).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 502,
            message: "upstream down".to_string()
        }
    );
}

#[tokio::test]
async fn test_unexpected_shape_is_decode_error() {
    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Expected {
        id: String,
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "other": 1 })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.call::<Expected>(HttpMethod::Get, "/shape", None).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // bind then drop a listener so the port refuses connections
    let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let config = ApiConfig {
        base_url: format!("http://127.0.0.1:{}", port),
        connect_timeout_ms: 1_000,
        request_timeout_ms: 2_000,
    };
    let client = ApiClient::new(&config, Arc::new(MemoryTokenStore::new(None))).unwrap();

    let err = client.call::<Value>(HttpMethod::Get, "/ping", None).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
