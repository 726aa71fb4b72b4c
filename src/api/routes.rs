use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the application router
///
/// The request id middleware runs before tracing so every request span
/// carries its id.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::form_page).post(handlers::submit))
        .route("/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}
