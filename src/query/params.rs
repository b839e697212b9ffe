use std::collections::HashMap;

use super::filters::Filters;
use super::validator::Validator;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const DEFAULT_SORT: &str = "id";

/// Raw query-string values as extracted by the router
pub type QueryValues = HashMap<String, String>;

/// String value for `key`, or `default` when missing or blank
pub fn read_string(qs: &QueryValues, key: &str, default: &str) -> String {
    match qs.get(key) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => default.to_string(),
    }
}

/// Integer value for `key`, or `default` when missing or blank.
///
/// A value that does not parse records "must be an integer value" under `key`
/// and yields `default`.
pub fn read_int(qs: &QueryValues, key: &str, default: i64, v: &mut Validator) -> i64 {
    match qs.get(key) {
        Some(value) if !value.is_empty() => value.parse().unwrap_or_else(|_| {
            v.add_error(key, "must be an integer value");
            default
        }),
        _ => default,
    }
}

/// Build list filters from the query string; parse problems land in `v`
pub fn read_filters(qs: &QueryValues, sort_safe_list: &[&str], v: &mut Validator) -> Filters {
    Filters::new(
        read_int(qs, "page", DEFAULT_PAGE, v),
        read_int(qs, "page_size", DEFAULT_PAGE_SIZE, v),
        read_string(qs, "sort", DEFAULT_SORT),
        sort_safe_list,
    )
}
