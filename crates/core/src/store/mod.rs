//! Persistence adapters.
//!
//! A [`RecipeStore`] is the only thing in the service that touches persisted data. Each
//! service operation maps onto exactly one store call. Lookups by identifier return `Option`:
//! an unknown identifier, including one the backend cannot even parse, is an absent record
//! and not a failure.

mod files;
mod memory;
#[cfg(feature = "mongodb")]
mod mongo;

pub use files::FileStore;
pub use memory::MemoryStore;
#[cfg(feature = "mongodb")]
pub use mongo::MongoStore;

use crate::config::StoreLocation;
use crate::RecipeResult;
use async_trait::async_trait;
use recipe_types::{Recipe, RecipeFields, RecipeId};
use std::sync::Arc;

#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Every record, in the backend's native order.
    async fn list(&self) -> RecipeResult<Vec<Recipe>>;

    async fn get(&self, id: &RecipeId) -> RecipeResult<Option<Recipe>>;

    /// Writes a new record and assigns its identifier.
    async fn insert(&self, fields: RecipeFields) -> RecipeResult<Recipe>;

    /// Replaces all content fields of an existing record, keeping its identifier.
    async fn replace(&self, id: &RecipeId, fields: RecipeFields) -> RecipeResult<Option<Recipe>>;

    /// Removes a record, returning it if it existed.
    async fn remove(&self, id: &RecipeId) -> RecipeResult<Option<Recipe>>;

    /// Releases connections. Called once, after the server has stopped.
    async fn close(&self) {}
}

/// Opens the store named by `location`.
///
/// # Errors
///
/// Returns `RecipeError` if the backing directory cannot be created, the database cannot be
/// reached, or the location needs a backend this build does not include.
pub async fn connect(location: &StoreLocation) -> RecipeResult<Arc<dyn RecipeStore>> {
    match location {
        StoreLocation::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreLocation::Files(dir) => Ok(Arc::new(FileStore::open(dir.clone())?)),
        #[cfg(feature = "mongodb")]
        StoreLocation::Mongo(uri) => Ok(Arc::new(MongoStore::connect(uri).await?)),
        #[cfg(not(feature = "mongodb"))]
        StoreLocation::Mongo(_) => Err(crate::RecipeError::InvalidConfig(
            "MongoDB support is not compiled in (enable the `mongodb` feature)".into(),
        )),
    }
}
