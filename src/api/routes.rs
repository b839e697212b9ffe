use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{healthcheck, list_movies, not_found, show_movie, AppState};
use super::middleware::{logging_middleware, method_not_allowed, rate_limit};
use crate::metrics;

pub fn create_router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/v1/healthcheck", get(healthcheck))
        // Movie catalog
        .route("/v1/movies", get(list_movies))
        .route("/v1/movies/:id", get(show_movie))
        // Metrics endpoint (Prometheus)
        .route("/metrics", get(metrics::metrics_handler))
        // Unknown routes get the JSON not-found envelope
        .fallback(not_found)
        // Add middleware (order matters: 405 rewrite -> rate limit -> logging -> metrics -> cors -> trace)
        .layer(middleware::from_fn_with_state(state.clone(), method_not_allowed))
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics::middleware::track_metrics))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // Add shared state
        .with_state(state)
}
