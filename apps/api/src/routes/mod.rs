pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::signals::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Signals API
        .route("/api/v1/signals/keywords", post(handlers::handle_keywords))
        .route("/api/v1/signals/aggregate", post(handlers::handle_aggregate))
        .route("/api/v1/signals/highlight", post(handlers::handle_highlight))
        .route("/api/v1/signals/cards", post(handlers::handle_cards))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = match app().oneshot(request).await {
            Ok(response) => response,
            Err(err) => panic!("router request failed: {err}"),
        };
        let status = response.status();
        let bytes = match to_bytes(response.into_body(), 1024 * 1024).await {
            Ok(bytes) => bytes,
            Err(err) => panic!("failed to read response body: {err}"),
        };
        let value = match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => panic!("response body is not JSON: {err}"),
        };
        (status, value)
    }

    async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap_or_else(|err| panic!("failed to build request: {err}"));
        send(request).await
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap_or_else(|err| panic!("failed to build request: {err}"));
        let (status, value) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["status"], "ok");
        assert_eq!(value["service"], "kudos-api");
    }

    #[tokio::test]
    async fn test_keywords_endpoint() {
        let (status, value) = post_json(
            "/api/v1/signals/keywords",
            json!({"body": "Working with Maya felt calm and reliable.", "tags": ["Calm"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            value["keywords"][0],
            json!({"phrase": "calm", "tier": "theme", "frequency": 1})
        );
    }

    #[tokio::test]
    async fn test_keywords_endpoint_accepts_missing_body() {
        let (status, value) = post_json("/api/v1/signals/keywords", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["keywords"], json!([]));
    }

    #[tokio::test]
    async fn test_aggregate_endpoint() {
        let (status, value) = post_json(
            "/api/v1/signals/aggregate",
            json!({"records": [
                {"id": "1", "body": "great teamwork", "tags": ["teamwork"]},
                {"id": "2", "body": "more teamwork here", "tags": []}
            ]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["record_count"], 2);
        assert_eq!(
            value["signals"][0],
            json!({"label": "teamwork", "count": 2, "tier": "theme"})
        );
    }

    #[tokio::test]
    async fn test_highlight_endpoint() {
        let (status, value) = post_json(
            "/api/v1/signals/highlight",
            json!({
                "body": "She is calm and reliable.",
                "candidates": [
                    {"phrase": "calm", "tier": "theme"},
                    {"phrase": "reliable", "tier": "working-style"}
                ],
                "max_highlights": 5
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            value["segments"],
            json!([
                {"kind": "plain", "text": "She is "},
                {"kind": "marked", "text": "calm", "tier": "theme"},
                {"kind": "plain", "text": " and "},
                {"kind": "marked", "text": "reliable", "tier": "working-style"},
                {"kind": "plain", "text": "."}
            ])
        );
        assert!(value["html"]
            .as_str()
            .is_some_and(|html| html.contains("kudos-working-style")));
    }

    #[tokio::test]
    async fn test_highlight_rejects_zero_cap() {
        let (status, value) = post_json(
            "/api/v1/signals/highlight",
            json!({"body": "calm", "candidates": [], "max_highlights": 0}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_cards_endpoint() {
        let (status, value) = post_json(
            "/api/v1/signals/cards",
            json!({"records": [
                {"id": "a", "body": "Working with Maya felt calm and reliable.", "tags": ["Calm"]},
                {"id": "b", "body": null, "tags": ["calm"]}
            ], "max_highlights": 1}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["cards"][0]["id"], "a");
        let marked = value["cards"][0]["segments"]
            .as_array()
            .map(|s| s.iter().filter(|seg| seg["kind"] == "marked").count());
        assert_eq!(marked, Some(1));
        assert_eq!(value["cards"][1]["segments"], json!([{"kind": "plain", "text": ""}]));
        assert_eq!(
            value["signals"][0],
            json!({"label": "calm", "count": 2, "tier": "theme"})
        );
    }

    #[tokio::test]
    async fn test_too_many_records_rejected() {
        let records: Vec<Value> = (0..501).map(|i| json!({"id": i.to_string()})).collect();
        let (status, value) =
            post_json("/api/v1/signals/aggregate", json!({ "records": records })).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(value["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_too_many_tags_rejected() {
        let tags: Vec<String> = (0..11).map(|i| format!("tag{i}")).collect();
        let (status, value) = post_json(
            "/api/v1/signals/cards",
            json!({"records": [{"id": "1", "body": "calm", "tags": tags}]}),
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(value["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, value) = post_json("/api/v1/nope", json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(value["error"]["code"], "NOT_FOUND");
    }
}
