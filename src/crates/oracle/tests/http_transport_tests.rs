//! End-to-end tests of the reqwest transport against a loopback Gemini stand-in

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use oracle::{OracleClient, OracleConfig, OracleError, RetryPolicy};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

/// Judges every query as DECLARED, echoing the user text as the category
async fn generate_content(
    Path(target): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if params.get("key").map(String::as_str) != Some("test-key") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "code": 401, "message": "API key not valid.", "status": "UNAUTHENTICATED" } })),
        );
    }

    if target == "slow:generateContent" {
        tokio::time::sleep(Duration::from_secs(5)).await;
    }

    let query = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();
    let wants_json = body["generationConfig"]["responseMimeType"] == "application/json";
    let has_rulebook = body["systemInstruction"]["parts"][0]["text"]
        .as_str()
        .map(|s| s.contains("Internal Rulebook"))
        .unwrap_or(false);

    let verdict = json!({
        "category": query,
        "model": target,
        "status": if wants_json && has_rulebook { "DECLARED" } else { "REJECTED" },
    });

    (
        StatusCode::OK,
        Json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": verdict.to_string() }] },
                "finishReason": "STOP"
            }]
        })),
    )
}

async fn spawn_server() -> String {
    let app = Router::new().route("/v1beta/models/:target", post(generate_content));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/v1beta", addr)
}

fn config(base_url: &str, key: &str) -> OracleConfig {
    OracleConfig::new(Some(key.to_string()))
        .with_base_url(base_url)
        .with_retry(RetryPolicy::single_attempt())
}

#[tokio::test]
async fn test_round_trip_over_http() {
    let base_url = spawn_server().await;
    let client = OracleClient::new(config(&base_url, "test-key")).unwrap();

    let verdict = client.submit("Cast iron skillet").await.unwrap().unwrap();
    assert_eq!(verdict.category.as_deref(), Some("Cast iron skillet"));
    assert_eq!(verdict.status.as_deref(), Some("DECLARED"));
    assert_eq!(
        verdict.model.as_deref(),
        Some("gemini-2.5-flash-preview-09-2025:generateContent")
    );
}

#[tokio::test]
async fn test_bad_key_is_unauthorized() {
    let base_url = spawn_server().await;
    let client = OracleClient::new(config(&base_url, "wrong-key")).unwrap();

    let err = client.submit("Cast iron skillet").await.unwrap_err();
    assert_eq!(
        err,
        OracleError::Unauthorized {
            status: 401,
            message: "API key not valid.".into()
        }
    );
}

#[tokio::test]
async fn test_closed_port_is_connectivity_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OracleClient::new(config(&format!("http://{}/v1beta", addr), "test-key")).unwrap();
    let err = client.submit("Cast iron skillet").await.unwrap_err();

    match err {
        OracleError::ConnectivityFailure(detail) => assert!(!detail.contains("test-key")),
        other => panic!("expected ConnectivityFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_attempt_timeout_is_connectivity_failure() {
    let base_url = spawn_server().await;
    let client = OracleClient::new(
        config(&base_url, "test-key")
            .with_model("slow")
            .with_timeout(Duration::from_millis(200)),
    )
    .unwrap();

    match client.submit("Cast iron skillet").await {
        Err(OracleError::ConnectivityFailure(detail)) => assert!(detail.contains("timed out")),
        other => panic!("expected timeout, got {:?}", other),
    }
}
