//! End-to-end: relay server in front of an in-process fake document store.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    routing::post,
};
use order_relay::config::{StoreConfig, WriteToken};
use order_relay::gateway;
use order_relay::{AppState, SanityClient};
use serde_json::{Value, json};
use tokio::net::TcpListener;

const TOKEN: &str = "sk-test-write";

#[derive(Clone, Default)]
struct FakeStore {
    received: Arc<Mutex<Vec<Value>>>,
}

impl FakeStore {
    fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn fake_mutate(
    State(fake): State<FakeStore>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(format!("Bearer {}", TOKEN).as_str());
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "description": "session not found", "type": "httpError" } })),
        );
    }

    fake.received.lock().unwrap().push(body["mutations"].clone());
    (
        StatusCode::OK,
        Json(json!({
            "transactionId": "tx-1",
            "results": [{ "id": "order-1", "operation": "create" }]
        })),
    )
}

async fn spawn_fake_store() -> (String, FakeStore) {
    let fake = FakeStore::default();
    let app = Router::new()
        .route("/v1/data/mutate/production", post(fake_mutate))
        .with_state(fake.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), fake)
}

async fn spawn_relay(store_host: &str, token: Option<&str>) -> String {
    let config = StoreConfig {
        api_host: Some(store_host.to_string()),
        timeout_secs: 5,
        write_token: token.and_then(WriteToken::new),
        ..StoreConfig::default()
    };
    let client = SanityClient::new(&config).unwrap();
    let state = Arc::new(AppState::new(Arc::new(client)));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        gateway::serve(listener, state).await.unwrap();
    });
    format!("http://{}{}", addr, gateway::SAVE_ORDER_PATH)
}

#[tokio::test]
async fn order_is_created_and_result_passed_through() {
    let (store_host, fake) = spawn_fake_store().await;
    let url = spawn_relay(&store_host, Some(TOKEN)).await;

    let response = reqwest::Client::new()
        .post(&url)
        .json(&json!({ "item": "Widget", "qty": 2 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "message": "Order saved!",
            "result": {
                "transactionId": "tx-1",
                "results": [{ "id": "order-1", "operation": "create" }],
                "documentIds": ["order-1"]
            }
        })
    );
    assert_eq!(
        fake.received(),
        vec![json!([{ "create": { "_type": "order", "item": "Widget", "qty": 2 } }])]
    );
}

#[tokio::test]
async fn caller_cannot_override_document_type() {
    let (store_host, fake) = spawn_fake_store().await;
    let url = spawn_relay(&store_host, Some(TOKEN)).await;

    let response = reqwest::Client::new()
        .post(&url)
        .json(&json!({ "_type": "override", "item": "Widget" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let received = fake.received();
    assert_eq!(received[0][0]["create"]["_type"], json!("order"));
}

#[tokio::test]
async fn non_post_methods_are_405_and_never_reach_store() {
    let (store_host, fake) = spawn_fake_store().await;
    let url = spawn_relay(&store_host, Some(TOKEN)).await;
    let client = reqwest::Client::new();

    for method in [
        reqwest::Method::GET,
        reqwest::Method::PUT,
        reqwest::Method::DELETE,
        reqwest::Method::PATCH,
    ] {
        let response = client
            .request(method.clone(), &url)
            .body(r#"{ "item": "Widget" }"#)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(response.text().await.unwrap(), "Method Not Allowed");
    }
    assert!(fake.received().is_empty());
}

#[tokio::test]
async fn missing_token_surfaces_as_generic_500() {
    let (store_host, fake) = spawn_fake_store().await;
    let url = spawn_relay(&store_host, None).await;

    let response = reqwest::Client::new()
        .post(&url)
        .json(&json!({ "item": "Widget" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let raw = response.text().await.unwrap();
    assert_eq!(
        serde_json::from_str::<Value>(&raw).unwrap(),
        json!({ "message": "Failed to save order." })
    );
    assert!(!raw.contains("session not found"));
    assert!(fake.received().is_empty());
}

#[tokio::test]
async fn unreachable_store_surfaces_as_generic_500() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_host = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let url = spawn_relay(&dead_host, Some(TOKEN)).await;

    let response = reqwest::Client::new()
        .post(&url)
        .json(&json!({ "item": "Widget" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Failed to save order." }));
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let (store_host, _fake) = spawn_fake_store().await;
    let order_url = spawn_relay(&store_host, Some(TOKEN)).await;
    let base = order_url.trim_end_matches(gateway::SAVE_ORDER_PATH);
    let client = reqwest::Client::new();

    let health: Value = client
        .get(format!("{}/api/v1/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["code"], json!(0));
    assert_eq!(health["data"]["store"], json!("sanity"));

    let spec: Value = client
        .get(format!("{}/api-docs/openapi.json", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(spec["paths"]["/api/save-order"]["post"].is_object());
}

/// Three MiB, past the relay's body read limit.
fn oversized_body() -> Vec<u8> {
    let mut body = br#"{ "note": ""#.to_vec();
    body.extend(std::iter::repeat_n(b'a', 3 * 1024 * 1024));
    body.extend(br#"" }"#);
    body
}

#[tokio::test]
async fn oversized_non_post_is_405() {
    let (store_host, fake) = spawn_fake_store().await;
    let url = spawn_relay(&store_host, Some(TOKEN)).await;

    let response = reqwest::Client::new()
        .put(&url)
        .body(oversized_body())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.text().await.unwrap(), "Method Not Allowed");
    assert!(fake.received().is_empty());
}

#[tokio::test]
async fn oversized_post_is_generic_500() {
    let (store_host, fake) = spawn_fake_store().await;
    let url = spawn_relay(&store_host, Some(TOKEN)).await;

    let response = reqwest::Client::new()
        .post(&url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(oversized_body())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Failed to save order." }));
    assert!(fake.received().is_empty());
}
