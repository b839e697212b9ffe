use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::errors::ApiError;
use crate::query::Filters;

/// Failures a catalog backend can report
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("record not found")]
    RecordNotFound,

    #[error("edit conflict")]
    EditConflict,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::RecordNotFound => ApiError::NotFound,
            CatalogError::EditConflict => ApiError::EditConflict,
            CatalogError::Other(e) => ApiError::Internal(e),
        }
    }
}

/// One page of catalog records plus the unpaged total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPage {
    pub records: Vec<Value>,
    pub total_records: i64,
}

/// Read access to the movie catalog.
///
/// Records are opaque JSON; the catalog owns their shape.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Records for the page and ordering described by `filters`
    async fn list(&self, filters: &Filters) -> Result<CatalogPage, CatalogError>;

    /// A single record by id
    async fn get(&self, id: i64) -> Result<Value, CatalogError>;
}
