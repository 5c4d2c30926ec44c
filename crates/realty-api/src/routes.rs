use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use crate::handlers::{health, properties, users};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Properties
        .route("/properties", get(properties::index).post(properties::store))
        .route(
            "/properties/{id}",
            get(properties::show)
                .put(properties::update)
                .patch(properties::update)
                .delete(properties::destroy),
        )
        // Users
        .route("/users", get(users::index).post(users::store))
        .route(
            "/users/{id}",
            get(users::show)
                .put(users::update)
                .patch(users::update)
                .delete(users::destroy),
        )
        .with_state(state)
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
