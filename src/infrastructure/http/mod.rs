//! HTTP REST API routes

mod analytics_routes;
mod catalog_routes;
mod story_routes;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use analytics_routes::*;
pub use catalog_routes::*;
pub use story_routes::*;

/// JSON error body for rejected or failed API requests
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

pub(crate) fn error_response(status: StatusCode, error: impl std::fmt::Display) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
}

/// Body rejections keep axum's status but use the JSON error shape
pub(crate) fn rejection_response(rejection: JsonRejection) -> ApiError {
    error_response(rejection.status(), rejection.body_text())
}

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/catalog", get(catalog_routes::get_catalog))
        .route("/api/prompts/compose", post(story_routes::compose_prompt))
        .route("/api/stories", post(story_routes::generate_story))
        .route("/api/analytics", post(analytics_routes::analyze_text))
}

pub async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::value_objects::GenerationSettings;
    use crate::infrastructure::config::AppConfig;

    fn app(groq_base_url: &str) -> Router {
        let config = AppConfig {
            groq_api_key: "test-key".to_string(),
            groq_base_url: groq_base_url.to_string(),
            groq_model: "gemma2-9b-it".to_string(),
            generation: GenerationSettings::default(),
            server_port: 0,
        };
        create_routes().with_state(Arc::new(AppState::new(config)))
    }

    fn story_request(creativity: f64) -> Value {
        json!({
            "concept": "A librarian discovers that every book they touch reveals the true fate of its previous readers",
            "genre": "Fantasy",
            "length": "Medium",
            "tone": "Dark",
            "point_of_view": "First Person",
            "creativity": creativity
        })
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let response = app("http://127.0.0.1:9")
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn test_catalog() {
        let (status, body) = send(app("http://127.0.0.1:9"), "GET", "/api/catalog", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["genres"].as_array().map(Vec::len), Some(8));
        assert_eq!(body["points_of_view"][0], "First Person");
    }

    #[tokio::test]
    async fn test_compose_returns_prompt_and_profile() {
        let (status, body) = send(
            app("http://127.0.0.1:9"),
            "POST",
            "/api/prompts/compose",
            Some(story_request(0.7)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let prompt = body["prompt"].as_str().unwrap();
        assert_eq!(
            prompt,
            include_str!("../../application/services/llm/testdata/fantasy_dark_first_person.txt")
        );
        assert_eq!(body["profile"]["read_time_display"], "6-7 min");
    }

    #[tokio::test]
    async fn test_compose_rejects_bad_creativity() {
        let (status, body) = send(
            app("http://127.0.0.1:9"),
            "POST",
            "/api/prompts/compose",
            Some(story_request(1.5)),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Creativity"));
    }

    #[tokio::test]
    async fn test_generate_story() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"model":"gemma2-9b-it","choices":[{"message":{"role":"assistant","content":"I touched the spine. \"Run,\" it said."}}],"usage":{"total_tokens":20}}"#,
            )
            .create_async()
            .await;

        let (status, body) = send(app(&server.url()), "POST", "/api/stories", Some(story_request(0.7))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["settings"], "Medium/Dark/First Person");
        assert_eq!(body["analytics"]["word_count"], 7);
        assert_eq!(body["analytics"]["dialogue_exchange_count"], 1);
        assert_eq!(body["model"], "gemma2-9b-it");
    }

    #[tokio::test]
    async fn test_generate_story_maps_upstream_failure_to_bad_gateway() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body(r#"{"error":{"message":"overloaded"}}"#)
            .create_async()
            .await;

        let (status, body) = send(app(&server.url()), "POST", "/api/stories", Some(story_request(0.7))).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].as_str().unwrap().contains("overloaded"));
    }

    #[tokio::test]
    async fn test_generate_story_rejects_unknown_length_without_calling_out() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .expect(0)
            .create_async()
            .await;

        let mut request = story_request(0.7);
        request["length"] = json!("Epic");
        let (status, _) = send(app(&server.url()), "POST", "/api/stories", Some(request)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_body_gets_json_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/stories")
            .header("content-type", "application/json")
            .body(Body::from("{\"concept\": "))
            .unwrap();

        let response = app("http://127.0.0.1:9").oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().is_some_and(|error| !error.is_empty()));
    }

    #[tokio::test]
    async fn test_missing_field_gets_json_error() {
        let (status, body) = send(
            app("http://127.0.0.1:9"),
            "POST",
            "/api/analytics",
            Some(json!({"keyword_limit": 3})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("text"));
    }

    #[tokio::test]
    async fn test_analytics() {
        let (status, body) = send(
            app("http://127.0.0.1:9"),
            "POST",
            "/api/analytics",
            Some(json!({"text": "\"Hello,\" she said. \"Hi!\" he replied.", "keyword_limit": 3})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analytics"]["word_count"], 6);
        assert_eq!(body["analytics"]["dialogue_exchange_count"], 2);
        assert!(body["keywords"].as_array().unwrap().len() <= 3);
    }
}
