pub mod logging;
pub mod method_not_allowed;
pub mod rate_limit;

pub use logging::logging_middleware;
pub use method_not_allowed::method_not_allowed;
pub use rate_limit::{rate_limit, RateLimiter};
