//! Common test utilities for integration tests
//!
//! The router needs no external services, so every test builds its own app.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use nutrilog_backend::{config::AppConfig, routes, state::AppState};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config);
        let app = routes::create_router(state);

        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server: nutrilog_backend::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 5,
        },
        ..AppConfig::default()
    }
}
