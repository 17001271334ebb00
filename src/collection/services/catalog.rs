//! Service layer for curating the collection catalogue.

use crate::collection::{
    domain::{Collection, CollectionChanges, CollectionId},
    ports::{CollectionRepository, CollectionRepositoryError},
};
use crate::image::ImageRef;
use crate::schema::RecordError;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCollectionRequest {
    name: String,
    image: Option<ImageRef>,
    description: Option<String>,
    seo_title: Option<String>,
    seo_description: Option<String>,
    is_active: Option<bool>,
}

impl CreateCollectionRequest {
    /// Creates a request with the collection name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: None,
            description: None,
            seo_title: None,
            seo_description: None,
            is_active: None,
        }
    }

    /// Sets the image reference.
    #[must_use]
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the search-engine title and description.
    #[must_use]
    pub fn with_seo(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.seo_title = Some(title.into());
        self.seo_description = Some(description.into());
        self
    }

    /// Overrides the default visibility.
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Service-level errors for catalogue operations.
#[derive(Debug, Error)]
pub enum CollectionCatalogError {
    /// Record construction failed.
    #[error(transparent)]
    Record(#[from] RecordError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] CollectionRepositoryError),
}

/// Result type for catalogue service operations.
pub type CollectionCatalogResult<T> = Result<T, CollectionCatalogError>;

/// Collection catalogue orchestration service.
#[derive(Clone)]
pub struct CollectionCatalogService<R, C>
where
    R: CollectionRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CollectionCatalogService<R, C>
where
    R: CollectionRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new catalogue service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a new collection.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionCatalogError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        request: CreateCollectionRequest,
    ) -> CollectionCatalogResult<Collection> {
        let CreateCollectionRequest {
            name,
            image,
            description,
            seo_title,
            seo_description,
            is_active,
        } = request;

        let mut draft = Collection::draft().with_name(name);
        if let Some(value) = image {
            draft = draft.with_image(value);
        }
        if let Some(value) = description {
            draft = draft.with_description(value);
        }
        if let Some(value) = seo_title {
            draft = draft.with_seo_title(value);
        }
        if let Some(value) = seo_description {
            draft = draft.with_seo_description(value);
        }
        if is_active == Some(false) {
            draft = draft.inactive();
        }

        let collection = draft.build(&*self.clock)?;
        self.repository.store(&collection).await?;
        tracing::info!(
            collection_id = %collection.id(),
            active = collection.is_active(),
            "collection created"
        );
        Ok(collection)
    }

    /// Applies a change set to a stored collection.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionCatalogError::Repository`] when the collection is
    /// not found or persistence fails.
    pub async fn update(
        &self,
        id: CollectionId,
        changes: CollectionChanges,
    ) -> CollectionCatalogResult<Collection> {
        let mut collection = self.find_by_id_or_error(id).await?;
        if collection.apply(changes, &*self.clock) {
            self.repository.update(&collection).await?;
            tracing::debug!(collection_id = %id, "collection updated");
        }
        Ok(collection)
    }

    /// Makes a stored collection visible.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionCatalogError::Repository`] when the collection is
    /// not found or persistence fails.
    pub async fn activate(&self, id: CollectionId) -> CollectionCatalogResult<Collection> {
        let mut collection = self.find_by_id_or_error(id).await?;
        if collection.activate(&*self.clock) {
            self.repository.update(&collection).await?;
            tracing::info!(collection_id = %id, "collection activated");
        }
        Ok(collection)
    }

    /// Hides a stored collection.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionCatalogError::Repository`] when the collection is
    /// not found or persistence fails.
    pub async fn deactivate(&self, id: CollectionId) -> CollectionCatalogResult<Collection> {
        let mut collection = self.find_by_id_or_error(id).await?;
        if collection.deactivate(&*self.clock) {
            self.repository.update(&collection).await?;
            tracing::info!(collection_id = %id, "collection deactivated");
        }
        Ok(collection)
    }

    /// Finds a collection by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionCatalogError::Repository`] when lookup fails.
    pub async fn find_by_id(
        &self,
        id: CollectionId,
    ) -> CollectionCatalogResult<Option<Collection>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns visible collections ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionCatalogError::Repository`] when lookup fails.
    pub async fn list_active(&self) -> CollectionCatalogResult<Vec<Collection>> {
        Ok(self.repository.list_active().await?)
    }

    /// Returns every collection ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionCatalogError::Repository`] when lookup fails.
    pub async fn list_all(&self) -> CollectionCatalogResult<Vec<Collection>> {
        Ok(self.repository.list_all().await?)
    }

    async fn find_by_id_or_error(&self, id: CollectionId) -> CollectionCatalogResult<Collection> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CollectionRepositoryError::NotFound(id).into())
    }
}
