//! Repository port for collection persistence and lookup.

use crate::collection::domain::{Collection, CollectionId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for collection repository operations.
pub type CollectionRepositoryResult<T> = Result<T, CollectionRepositoryError>;

/// Collection persistence contract.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Stores a new collection.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionRepositoryError::DuplicateCollection`] when the
    /// collection ID already exists.
    async fn store(&self, collection: &Collection) -> CollectionRepositoryResult<()>;

    /// Persists changes to an existing collection.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionRepositoryError::NotFound`] when the collection
    /// does not exist.
    async fn update(&self, collection: &Collection) -> CollectionRepositoryResult<()>;

    /// Finds a collection by identifier.
    async fn find_by_id(&self, id: CollectionId) -> CollectionRepositoryResult<Option<Collection>>;

    /// Returns active collections ordered by name.
    async fn list_active(&self) -> CollectionRepositoryResult<Vec<Collection>>;

    /// Returns every collection ordered by name.
    async fn list_all(&self) -> CollectionRepositoryResult<Vec<Collection>>;
}

/// Errors returned by collection repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CollectionRepositoryError {
    /// A collection with the same identifier already exists.
    #[error("collection {0} is already stored")]
    DuplicateCollection(CollectionId),

    /// The collection was not found.
    #[error("no collection stored under {0}")]
    NotFound(CollectionId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("stored collection row is invalid: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// The backing store failed.
    #[error("collection storage failed: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CollectionRepositoryError {
    /// Builds [`Self::InvalidPersistedData`] from a decoding failure.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Builds [`Self::Persistence`] from a backend failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
