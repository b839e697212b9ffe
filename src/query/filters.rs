use serde::Serialize;
use std::fmt;

use super::validator::{permitted_value, Validator};
use crate::errors::FieldErrors;

/// Largest page number a client may request
pub const MAX_PAGE: i64 = 10_000_000;

/// Largest page size a client may request
pub const MAX_PAGE_SIZE: i64 = 100;

/// Pagination and sorting parameters for a list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub page: i64,
    pub page_size: i64,
    pub sort: String,
    /// Permitted sort keys; `-` prefix means descending
    pub sort_safe_list: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "ASC"),
            Self::Desc => write!(f, "DESC"),
        }
    }
}

impl Filters {
    pub fn new(
        page: i64,
        page_size: i64,
        sort: impl Into<String>,
        sort_safe_list: &[&str],
    ) -> Self {
        Self {
            page,
            page_size,
            sort: sort.into(),
            sort_safe_list: sort_safe_list.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Run every filter check and return the violations (empty when valid)
    pub fn validate(&self) -> FieldErrors {
        let mut v = Validator::new();
        validate_filters(&mut v, self);
        v.into_errors()
    }

    /// Column name without the direction prefix, only for safe-listed values
    pub fn sort_column(&self) -> Option<&str> {
        if permitted_value(&self.sort, self.sort_safe_list.as_slice()) {
            Some(self.sort.trim_start_matches('-'))
        } else {
            None
        }
    }

    pub fn sort_direction(&self) -> SortDirection {
        if self.sort.starts_with('-') {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        self.page
            .saturating_sub(1)
            .max(0)
            .saturating_mul(self.page_size.max(0))
    }
}

/// Record every filter violation in `v`.
///
/// All checks run; the second `page` and `page_size` checks overwrite the first
/// when both fail.
pub fn validate_filters(v: &mut Validator, f: &Filters) {
    v.check(f.page > 0, "page", "must be greater than zero");
    v.check(f.page <= MAX_PAGE, "page", "must be a maximum of 10 million");
    v.check(f.page_size > 0, "page_size", "must be greater than 0");
    v.check(f.page_size <= MAX_PAGE_SIZE, "page_size", "must be a maximum of 100");
    v.check(
        permitted_value(&f.sort, f.sort_safe_list.as_slice()),
        "sort",
        "invalid sort value",
    );
}
