//! `PostgreSQL` repository implementation for collection storage.

use super::{
    models::{CollectionChangesetRow, CollectionRow, NewCollectionRow},
    schema::collections,
};
use crate::collection::{
    domain::{Collection, CollectionId, PersistedCollectionData},
    ports::{CollectionRepository, CollectionRepositoryError, CollectionRepositoryResult},
};
use crate::config::PgPool;
use crate::image::ImageRef;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed collection repository.
#[derive(Debug, Clone)]
pub struct PostgresCollectionRepository {
    pool: PgPool,
}

impl PostgresCollectionRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CollectionRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CollectionRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CollectionRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CollectionRepositoryError::persistence)?
    }
}

#[async_trait]
impl CollectionRepository for PostgresCollectionRepository {
    async fn store(&self, collection: &Collection) -> CollectionRepositoryResult<()> {
        let collection_id = collection.id();
        let new_row = to_new_row(collection)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(collections::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        CollectionRepositoryError::DuplicateCollection(collection_id)
                    }
                    _ => CollectionRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, collection: &Collection) -> CollectionRepositoryResult<()> {
        let collection_id = collection.id();
        let changeset = to_changeset(collection)?;

        self.run_blocking(move |connection| {
            let target = collections::table.filter(collections::id.eq(collection_id.into_inner()));
            let updated_count = diesel::update(target)
                .set(&changeset)
                .execute(connection)
                .map_err(CollectionRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(CollectionRepositoryError::NotFound(collection_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: CollectionId) -> CollectionRepositoryResult<Option<Collection>> {
        self.run_blocking(move |connection| {
            let row = collections::table
                .filter(collections::id.eq(id.into_inner()))
                .select(CollectionRow::as_select())
                .first::<CollectionRow>(connection)
                .optional()
                .map_err(CollectionRepositoryError::persistence)?;
            row.map(row_to_collection).transpose()
        })
        .await
    }

    async fn list_active(&self) -> CollectionRepositoryResult<Vec<Collection>> {
        self.run_blocking(|connection| {
            let rows = collections::table
                .filter(collections::is_active.eq(true))
                .order((collections::name.asc(), collections::created_at.asc()))
                .select(CollectionRow::as_select())
                .load::<CollectionRow>(connection)
                .map_err(CollectionRepositoryError::persistence)?;
            rows.into_iter().map(row_to_collection).collect()
        })
        .await
    }

    async fn list_all(&self) -> CollectionRepositoryResult<Vec<Collection>> {
        self.run_blocking(|connection| {
            let rows = collections::table
                .order((collections::name.asc(), collections::created_at.asc()))
                .select(CollectionRow::as_select())
                .load::<CollectionRow>(connection)
                .map_err(CollectionRepositoryError::persistence)?;
            rows.into_iter().map(row_to_collection).collect()
        })
        .await
    }
}

fn to_new_row(collection: &Collection) -> CollectionRepositoryResult<NewCollectionRow> {
    let image = collection
        .image()
        .map(serde_json::to_value)
        .transpose()
        .map_err(CollectionRepositoryError::persistence)?;

    Ok(NewCollectionRow {
        id: collection.id().into_inner(),
        name: collection.name().to_owned(),
        image,
        description: collection.description().map(str::to_owned),
        seo_title: collection.seo_title().map(str::to_owned),
        seo_description: collection.seo_description().map(str::to_owned),
        is_active: collection.is_active(),
        created_at: collection.created_at(),
        updated_at: collection.updated_at(),
    })
}

fn to_changeset(collection: &Collection) -> CollectionRepositoryResult<CollectionChangesetRow> {
    let NewCollectionRow {
        name,
        image,
        description,
        seo_title,
        seo_description,
        is_active,
        updated_at,
        ..
    } = to_new_row(collection)?;

    Ok(CollectionChangesetRow {
        name,
        image,
        description,
        seo_title,
        seo_description,
        is_active,
        updated_at,
    })
}

fn row_to_collection(row: CollectionRow) -> CollectionRepositoryResult<Collection> {
    let CollectionRow {
        id,
        name,
        image,
        description,
        seo_title,
        seo_description,
        is_active,
        created_at,
        updated_at,
    } = row;

    let parsed_image = image
        .map(serde_json::from_value::<ImageRef>)
        .transpose()
        .map_err(CollectionRepositoryError::invalid_persisted_data)?;

    Ok(Collection::from_persisted(PersistedCollectionData {
        id: CollectionId::from_uuid(id),
        name,
        image: parsed_image,
        description,
        seo_title,
        seo_description,
        is_active,
        created_at,
        updated_at,
    }))
}
