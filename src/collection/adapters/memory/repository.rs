//! In-memory repository for collection tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::collection::{
    domain::{Collection, CollectionId},
    ports::{CollectionRepository, CollectionRepositoryError, CollectionRepositoryResult},
};

/// Thread-safe in-memory collection repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCollectionRepository {
    collections: Arc<RwLock<HashMap<CollectionId, Collection>>>,
}

impl InMemoryCollectionRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted_matching(
        &self,
        predicate: impl Fn(&Collection) -> bool,
    ) -> CollectionRepositoryResult<Vec<Collection>> {
        let collections = self.collections.read().map_err(|err| lock_error(&err))?;
        let mut matching: Vec<Collection> = collections
            .values()
            .filter(|&collection| predicate(collection))
            .cloned()
            .collect();
        matching.sort_by(|left, right| {
            left.name()
                .cmp(right.name())
                .then_with(|| left.created_at().cmp(&right.created_at()))
        });
        Ok(matching)
    }
}

fn lock_error<T>(err: &PoisonError<T>) -> CollectionRepositoryError {
    CollectionRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl CollectionRepository for InMemoryCollectionRepository {
    async fn store(&self, collection: &Collection) -> CollectionRepositoryResult<()> {
        let mut collections = self.collections.write().map_err(|err| lock_error(&err))?;
        if collections.contains_key(&collection.id()) {
            return Err(CollectionRepositoryError::DuplicateCollection(
                collection.id(),
            ));
        }
        collections.insert(collection.id(), collection.clone());
        Ok(())
    }

    async fn update(&self, collection: &Collection) -> CollectionRepositoryResult<()> {
        let mut collections = self.collections.write().map_err(|err| lock_error(&err))?;
        let stored = collections
            .get_mut(&collection.id())
            .ok_or(CollectionRepositoryError::NotFound(collection.id()))?;
        *stored = collection.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: CollectionId) -> CollectionRepositoryResult<Option<Collection>> {
        let collections = self.collections.read().map_err(|err| lock_error(&err))?;
        Ok(collections.get(&id).cloned())
    }

    async fn list_active(&self) -> CollectionRepositoryResult<Vec<Collection>> {
        self.sorted_matching(Collection::is_active)
    }

    async fn list_all(&self) -> CollectionRepositoryResult<Vec<Collection>> {
        self.sorted_matching(|_| true)
    }
}
