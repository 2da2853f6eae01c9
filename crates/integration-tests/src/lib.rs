//! Integration tests for the RigoCompra market API.
//!
//! Tests drive the fully assembled router (middleware included) in-process
//! through `tower::ServiceExt::oneshot`, so no server or port is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p rigo-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `registration` - Register/login endpoints, CORS, method handling
//! - `catalog_api` - Product CRUD, search and analytics
//! - `favorites_api` - Favorites tracker over HTTP

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::Value;
use tower::ServiceExt;

use rigo_market::config::MarketConfig;
use rigo_market::state::AppState;
use rigo_market::store::seed;

/// Largest response body the helpers will buffer.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// A decoded response: status, headers, and the body parsed as JSON
/// (`Value::Null` when the body is empty).
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// The `message` field of a `{"message": ...}` body.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// A response header as text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// An application instance with its own empty stores.
#[derive(Clone)]
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    /// App with an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        let config = MarketConfig {
            seed_catalog: false,
            ..MarketConfig::default()
        };
        let state = AppState::new(config);
        let router = rigo_market::app(state.clone());
        Self { state, router }
    }

    /// App with the ten sample products (ids 1..=10).
    ///
    /// # Panics
    ///
    /// Panics if seeding fails.
    #[must_use]
    pub fn seeded() -> Self {
        let app = Self::new();
        seed::seed_catalog(app.state.catalog()).expect("Failed to seed catalog");
        app
    }

    /// Send a request with an optional JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the router fails or the body is not JSON.
    pub async fn send(&self, method: Method, uri: &str, body: Option<&Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send_request(request).await
    }

    /// Send a raw request.
    ///
    /// # Panics
    ///
    /// Panics if the router fails or the body is not JSON.
    pub async fn send_request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), MAX_BODY_BYTES)
            .await
            .expect("Failed to read response body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Option<&Value>) -> TestResponse {
        self.send(Method::PUT, uri, body).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
