//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, transaction)
//! 2. Request ID (adopt or generate `x-request-id`)
//! 3. `TraceLayer` (`http_request` span with method, uri, request id, status, latency)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
