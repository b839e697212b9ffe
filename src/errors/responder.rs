use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::api_error::ApiError;
use super::context::RequestContext;
use super::logger::{ErrorLogger, LogProperties};
use super::response::{ErrorEnvelope, ErrorMessage, FieldErrors};
use crate::metrics::registry::ERROR_RESPONSES_TOTAL;

pub const EDIT_CONFLICT_MESSAGE: &str =
    "unable to edit record due to edit conflict, please try again";
pub const NOT_FOUND_MESSAGE: &str = "The request resource couldn't be found";
pub const RATE_LIMIT_EXCEEDED_MESSAGE: &str = "rate limit exceeded";
pub const SERVER_ERROR_MESSAGE: &str =
    "The server encountered a problem & couldn't process your request";

/// Writes every error response the API produces.
///
/// Cheap to clone; the only shared piece is the injected logger.
#[derive(Clone)]
pub struct ErrorResponder {
    logger: Arc<dyn ErrorLogger>,
}

impl ErrorResponder {
    pub fn new(logger: Arc<dyn ErrorLogger>) -> Self {
        Self { logger }
    }

    /// Single dispatch point from a failure classification to its response
    pub fn respond(&self, ctx: &RequestContext, err: ApiError) -> Response {
        debug!(kind = %err.kind(), request_url = %ctx.url, "Responding with error");
        match err {
            ApiError::EditConflict => self.edit_conflict(ctx),
            ApiError::FailedValidation(errors) => self.failed_validation(ctx, errors),
            ApiError::MethodNotAllowed => self.method_not_allowed(ctx),
            ApiError::NotFound => self.not_found(ctx),
            ApiError::RateLimitExceeded => self.rate_limit_exceeded(ctx),
            ApiError::Internal(err) => self.server_error(ctx, &err),
        }
    }

    pub fn edit_conflict(&self, ctx: &RequestContext) -> Response {
        self.error_response(ctx, StatusCode::CONFLICT, EDIT_CONFLICT_MESSAGE)
    }

    pub fn failed_validation(&self, ctx: &RequestContext, errors: FieldErrors) -> Response {
        self.error_response(ctx, StatusCode::UNPROCESSABLE_ENTITY, errors)
    }

    pub fn method_not_allowed(&self, ctx: &RequestContext) -> Response {
        let message = format!(
            "The {} method is not supported for this resource",
            ctx.method
        );
        self.error_response(ctx, StatusCode::METHOD_NOT_ALLOWED, message)
    }

    pub fn not_found(&self, ctx: &RequestContext) -> Response {
        self.error_response(ctx, StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
    }

    pub fn rate_limit_exceeded(&self, ctx: &RequestContext) -> Response {
        self.error_response(ctx, StatusCode::TOO_MANY_REQUESTS, RATE_LIMIT_EXCEEDED_MESSAGE)
    }

    /// Logs the underlying error, then answers with a detail-free 500
    pub fn server_error(&self, ctx: &RequestContext, err: &anyhow::Error) -> Response {
        self.log_error(ctx, err);
        self.error_response(ctx, StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
    }

    pub fn log_error(&self, ctx: &RequestContext, err: &anyhow::Error) {
        let mut properties = LogProperties::new();
        properties.insert("request_method".to_string(), ctx.method.to_string());
        properties.insert("request_url".to_string(), ctx.url.clone());
        self.logger.print_error(err, &properties);
    }

    /// Write `{"error": message}` with the given status
    pub fn error_response(
        &self,
        ctx: &RequestContext,
        status: StatusCode,
        message: impl Into<ErrorMessage>,
    ) -> Response {
        self.write_json(ctx, status, &ErrorEnvelope::new(message.into()))
    }

    // Serialization failure degrades to a bare 500 and must not call back into
    // error_response.
    fn write_json<T: Serialize>(
        &self,
        ctx: &RequestContext,
        status: StatusCode,
        body: &T,
    ) -> Response {
        match serde_json::to_vec(body) {
            Ok(bytes) => {
                ERROR_RESPONSES_TOTAL
                    .with_label_values(&[status.as_str()])
                    .inc();
                (
                    status,
                    [(header::CONTENT_TYPE, "application/json")],
                    bytes,
                )
                    .into_response()
            }
            Err(e) => {
                let err = anyhow::Error::new(e).context("failed to serialize error response");
                self.log_error(ctx, &err);
                ERROR_RESPONSES_TOTAL
                    .with_label_values(&[StatusCode::INTERNAL_SERVER_ERROR.as_str()])
                    .inc();
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
