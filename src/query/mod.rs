pub mod filters;
pub mod metadata;
pub mod params;
pub mod validator;

pub use filters::{validate_filters, Filters, SortDirection};
pub use metadata::PageMetadata;
pub use params::{read_filters, QueryValues};
pub use validator::{permitted_value, Validator};
