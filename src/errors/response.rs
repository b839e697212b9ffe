use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name to validation message, one message per field
pub type FieldErrors = BTreeMap<String, String>;

/// Payload carried under the `error` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    /// Human-readable sentence
    Simple(String),
    /// Per-field validation messages
    FieldErrors(FieldErrors),
}

impl From<String> for ErrorMessage {
    fn from(message: String) -> Self {
        Self::Simple(message)
    }
}

impl From<&str> for ErrorMessage {
    fn from(message: &str) -> Self {
        Self::Simple(message.to_string())
    }
}

impl From<FieldErrors> for ErrorMessage {
    fn from(errors: FieldErrors) -> Self {
        Self::FieldErrors(errors)
    }
}

/// Structured error response body: `{"error": <message>}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope<M = ErrorMessage> {
    pub error: M,
}

impl<M> ErrorEnvelope<M> {
    pub fn new(error: M) -> Self {
        Self { error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_message_serialization() {
        let envelope = ErrorEnvelope::new(ErrorMessage::from("rate limit exceeded"));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({ "error": "rate limit exceeded" }));
    }

    #[test]
    fn test_field_errors_serialization() {
        let mut errors = FieldErrors::new();
        errors.insert("page".to_string(), "must be greater than zero".to_string());
        errors.insert("sort".to_string(), "invalid sort value".to_string());

        let value = serde_json::to_value(ErrorEnvelope::new(ErrorMessage::from(errors))).unwrap();
        assert_eq!(
            value,
            json!({
                "error": {
                    "page": "must be greater than zero",
                    "sort": "invalid sort value"
                }
            })
        );
    }

    #[test]
    fn test_envelope_has_single_key() {
        let value = serde_json::to_value(ErrorEnvelope::new(ErrorMessage::from("x"))).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_untagged_deserialization_picks_variant() {
        let simple: ErrorEnvelope = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert_eq!(simple.error, ErrorMessage::Simple("nope".to_string()));

        let fields: ErrorEnvelope = serde_json::from_str(r#"{"error":{"page":"bad"}}"#).unwrap();
        assert!(matches!(fields.error, ErrorMessage::FieldErrors(ref m) if m["page"] == "bad"));
    }
}
