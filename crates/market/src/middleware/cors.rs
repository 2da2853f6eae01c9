//! Permissive cross-origin headers for the JSON API.
//!
//! Browser clients of the registration form run on other origins, so every
//! response (including errors and preflights) carries the same CORS headers.

use axum::{
    extract::Request,
    http::{
        HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    middleware::Next,
    response::Response,
};

/// Origins allowed to call the API.
pub const ALLOW_ORIGIN: &str = "*";
/// Methods advertised to preflight requests.
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
/// Request headers advertised to preflight requests.
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Add CORS headers to all responses.
///
/// Headers applied:
/// - `Access-Control-Allow-Origin: *`
/// - `Access-Control-Allow-Methods: GET, POST, PUT, DELETE, OPTIONS`
/// - `Access-Control-Allow-Headers: Content-Type, Authorization`
pub async fn cors_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );

    response
}
