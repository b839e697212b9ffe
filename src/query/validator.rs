use crate::errors::FieldErrors;

/// Collects per-field validation messages.
///
/// Checks never short-circuit; a later failing check on the same key replaces
/// the earlier message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no check has failed
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(key.into(), message.into());
    }

    /// Record `message` under `key` unless `ok` holds
    pub fn check(&mut self, ok: bool, key: &str, message: &str) {
        if !ok {
            self.add_error(key, message);
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

/// Exact membership test against an allow-list
pub fn permitted_value<T: PartialEq>(value: &T, permitted: &[T]) -> bool {
    permitted.contains(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validator_is_valid() {
        let v = Validator::new();
        assert!(v.valid());
        assert!(v.errors().is_empty());
    }

    #[test]
    fn test_check_records_only_failures() {
        let mut v = Validator::new();
        v.check(true, "title", "must be provided");
        v.check(false, "year", "must be provided");

        assert!(!v.valid());
        assert_eq!(v.errors().len(), 1);
        assert_eq!(v.errors()["year"], "must be provided");
    }

    #[test]
    fn test_last_write_wins_per_key() {
        let mut v = Validator::new();
        v.check(false, "page", "first");
        v.check(false, "page", "second");

        assert_eq!(v.into_errors()["page"], "second");
    }

    #[test]
    fn test_permitted_value() {
        let safe = ["title".to_string(), "-title".to_string()];
        assert!(permitted_value(&"-title".to_string(), &safe[..]));
        assert!(!permitted_value(&"TITLE".to_string(), &safe[..]));
        assert!(permitted_value(&3, &[1, 2, 3][..]));
    }
}
