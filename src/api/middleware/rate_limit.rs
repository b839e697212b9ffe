use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter as GovernorRateLimiter,
};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

use crate::api::handlers::AppState;
use crate::config::LimiterConfig;
use crate::errors::{ApiError, RequestContext};

/// Process-wide limiter for inbound requests
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    requests_per_second: u32,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(requests_per_second: NonZeroU32, burst: NonZeroU32) -> Self {
        let quota = Quota::per_second(requests_per_second).allow_burst(burst);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
            requests_per_second: requests_per_second.get(),
        }
    }

    /// Limiter described by `config`, or None when limiting is switched off
    pub fn from_config(config: &LimiterConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        let rps = NonZeroU32::new(config.requests_per_second)?;
        let burst = NonZeroU32::new(config.burst)?;
        Some(Self::new(rps, burst))
    }

    /// Try to acquire without waiting
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }

    /// Get the configured requests per second
    pub fn requests_per_second(&self) -> u32 {
        self.requests_per_second
    }
}

/// Reject requests over the configured rate with a 429 envelope
pub async fn rate_limit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if let Some(limiter) = &state.limiter {
        if !limiter.try_acquire() {
            debug!(
                requests_per_second = limiter.requests_per_second(),
                "Rate limit exceeded"
            );
            let ctx = RequestContext::from_request(&request);
            return state.responder.respond(&ctx, ApiError::RateLimitExceeded);
        }
    }

    next.run(request).await
}
