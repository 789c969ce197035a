use crate::handlers::{self, AppState};
use crate::middleware::cors_headers;
use axum::{middleware as axum_middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::status)
                .post(handlers::fetch_statistics)
                .options(handlers::preflight),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
                .layer(axum_middleware::from_fn(cors_headers)),
        )
}
