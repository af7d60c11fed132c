//! HTTP middleware shared by every service router.

pub mod metrics;
pub mod security_headers;
pub mod tracing;

use axum::{Router, middleware::from_fn};
use tower_http::trace::TraceLayer;

pub use self::tracing::REQUEST_ID_HEADER;

/// Wraps a service router with the common middleware stack.
///
/// Outermost first: request id, HTTP trace span, request metrics, security
/// headers.
pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(from_fn(security_headers::security_headers_middleware))
        .layer(from_fn(metrics::metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                ::tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(self::tracing::request_id_middleware))
}
