use axum::{
    async_trait,
    extract::{FromRequestParts, OriginalUri, Request},
    http::{request::Parts, Extensions, Method, Uri},
};
use std::convert::Infallible;

/// The parts of an inbound request the error responder needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub method: Method,
    /// Path and query string as received, before any nesting strips a prefix
    pub url: String,
}

impl RequestContext {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }

    pub fn from_request(request: &Request) -> Self {
        Self::build(request.method(), request.uri(), request.extensions())
    }

    fn build(method: &Method, uri: &Uri, extensions: &Extensions) -> Self {
        let uri = extensions
            .get::<OriginalUri>()
            .map(|original| &original.0)
            .unwrap_or(uri);

        Self {
            method: method.clone(),
            url: uri.to_string(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::build(&parts.method, &parts.uri, &parts.extensions))
    }
}
