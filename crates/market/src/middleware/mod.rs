//! HTTP middleware stack for the market API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, transaction)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (unique ID recorded on the span)
//! 4. CORS headers (on every response, including errors and panics)
//! 5. `CatchPanicLayer` (handler panics become a JSON 500)

pub mod cors;
pub mod request_id;

pub use cors::cors_headers_middleware;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
