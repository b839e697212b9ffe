pub mod backend;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub use backend::{CatalogError, CatalogPage, CatalogReader};

use crate::query::Filters;

/// Catalog handle shared by handlers - polymorphic over backends
pub type Catalog = Arc<dyn CatalogReader>;

/// Catalog with no records, used when no storage backend is wired in
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

#[async_trait]
impl CatalogReader for EmptyCatalog {
    async fn list(&self, _filters: &Filters) -> Result<CatalogPage, CatalogError> {
        Ok(CatalogPage::default())
    }

    async fn get(&self, _id: i64) -> Result<Value, CatalogError> {
        Err(CatalogError::RecordNotFound)
    }
}
