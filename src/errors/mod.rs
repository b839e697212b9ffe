//! Uniform JSON error responses for the HTTP API

pub mod api_error;
pub mod codes;
pub mod context;
pub mod logger;
pub mod responder;
pub mod response;

pub use api_error::ApiError;
pub use codes::ErrorKind;
pub use context::RequestContext;
pub use logger::{ErrorLogger, ErrorRecord, LogProperties, TracingErrorLogger};
pub use responder::ErrorResponder;
pub use response::{ErrorEnvelope, ErrorMessage, FieldErrors};
