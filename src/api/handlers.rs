use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use super::middleware::RateLimiter;
use crate::catalog::Catalog;
use crate::errors::{ApiError, ErrorResponder, FieldErrors, RequestContext};
use crate::query::{read_filters, validate_filters, PageMetadata, QueryValues, Validator};

/// Sort keys accepted by the movie list endpoint
pub const MOVIE_SORT_SAFE_LIST: &[&str] = &[
    "id", "title", "year", "runtime", "-id", "-title", "-year", "-runtime",
];

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub catalog: Catalog,
    pub responder: ErrorResponder,
    pub limiter: Option<RateLimiter>,
    /// Environment label reported by the healthcheck
    pub env: String,
}

/// Movie list response
#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub movies: Vec<Value>,
    pub metadata: PageMetadata,
}

/// Health check endpoint
pub async fn healthcheck(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "available",
        "system_info": {
            "environment": state.env,
            "version": env!("CARGO_PKG_VERSION"),
        },
    }))
}

/// List movies with validated pagination and sorting
pub async fn list_movies(
    State(state): State<AppState>,
    ctx: RequestContext,
    query: Result<Query<QueryValues>, QueryRejection>,
) -> Response {
    match list_movies_page(&state, query).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => state.responder.respond(&ctx, e),
    }
}

async fn list_movies_page(
    state: &AppState,
    query: Result<Query<QueryValues>, QueryRejection>,
) -> Result<MovieListResponse, ApiError> {
    let Query(qs) = query.map_err(|rejection| {
        debug!("Unparseable query string: {}", rejection);
        let mut errors = FieldErrors::new();
        errors.insert("query".to_string(), "must be a valid query string".to_string());
        ApiError::FailedValidation(errors)
    })?;

    let mut v = Validator::new();
    let filters = read_filters(&qs, MOVIE_SORT_SAFE_LIST, &mut v);
    validate_filters(&mut v, &filters);
    if !v.valid() {
        return Err(ApiError::FailedValidation(v.into_errors()));
    }

    info!(
        "List movies request: page={}, page_size={}, sort={}",
        filters.page, filters.page_size, filters.sort
    );

    let page = state.catalog.list(&filters).await?;
    let metadata = PageMetadata::calculate(page.total_records, filters.page, filters.page_size);

    Ok(MovieListResponse {
        movies: page.records,
        metadata,
    })
}

/// Get a single movie by id
pub async fn show_movie(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Response {
    match show_movie_record(&state, &id).await {
        Ok(movie) => (StatusCode::OK, Json(serde_json::json!({ "movie": movie }))).into_response(),
        Err(e) => state.responder.respond(&ctx, e),
    }
}

async fn show_movie_record(state: &AppState, id: &str) -> Result<Value, ApiError> {
    // Non-numeric and non-positive ids can never match a record
    let id: i64 = match id.parse() {
        Ok(id) if id > 0 => id,
        _ => return Err(ApiError::NotFound),
    };

    info!("Show movie request: id={}", id);
    Ok(state.catalog.get(id).await?)
}

/// Fallback for unknown routes
pub async fn not_found(State(state): State<AppState>, ctx: RequestContext) -> Response {
    state.responder.not_found(&ctx)
}
