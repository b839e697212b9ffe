use std::collections::BTreeMap;
use tracing::error;

/// Contextual key/value pairs attached to a logged error
pub type LogProperties = BTreeMap<String, String>;

/// Sink for server-side faults. Injected into the responder so handlers never
/// reach for a global logger.
pub trait ErrorLogger: Send + Sync {
    fn print_error(&self, err: &anyhow::Error, properties: &LogProperties);
}

/// Fields of one error log record
#[derive(Debug, PartialEq, Eq)]
pub struct ErrorRecord<'a> {
    /// Full error chain
    pub error: String,
    pub request_method: &'a str,
    pub request_url: &'a str,
    /// Properties other than method and url
    pub extra: BTreeMap<&'a str, &'a str>,
}

impl<'a> ErrorRecord<'a> {
    pub fn new(err: &anyhow::Error, properties: &'a LogProperties) -> Self {
        Self {
            error: format!("{err:#}"),
            request_method: lookup(properties, "request_method"),
            request_url: lookup(properties, "request_url"),
            extra: properties
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str()))
                .filter(|(key, _)| *key != "request_method" && *key != "request_url")
                .collect(),
        }
    }
}

fn lookup<'a>(properties: &'a LogProperties, key: &str) -> &'a str {
    properties.get(key).map(String::as_str).unwrap_or("")
}

/// Production logger backed by `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorLogger;

impl ErrorLogger for TracingErrorLogger {
    fn print_error(&self, err: &anyhow::Error, properties: &LogProperties) {
        let record = ErrorRecord::new(err, properties);

        error!(
            error = %record.error,
            request_method = %record.request_method,
            request_url = %record.request_url,
            properties = ?record.extra,
            "Request error"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn properties(pairs: &[(&str, &str)]) -> LogProperties {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_record_splits_request_fields() {
        let props = properties(&[
            ("request_method", "GET"),
            ("request_url", "/v1/movies?page=2"),
            ("attempt", "1"),
        ]);
        let err = anyhow!("disk on fire").context("listing movies");

        let record = ErrorRecord::new(&err, &props);
        assert_eq!(record.error, "listing movies: disk on fire");
        assert_eq!(record.request_method, "GET");
        assert_eq!(record.request_url, "/v1/movies?page=2");
        assert_eq!(record.extra.len(), 1);
        assert_eq!(record.extra["attempt"], "1");
    }

    #[test]
    fn test_record_without_request_fields() {
        let props = LogProperties::new();
        let record = ErrorRecord::new(&anyhow!("no context"), &props);

        assert_eq!(record.error, "no context");
        assert_eq!(record.request_method, "");
        assert_eq!(record.request_url, "");
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_tracing_logger_emits_without_subscriber() {
        let props = properties(&[("request_method", "POST"), ("request_url", "/v1/movies")]);
        TracingErrorLogger.print_error(&anyhow!("boom"), &props);
    }
}
