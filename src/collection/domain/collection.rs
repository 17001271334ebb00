//! Collection aggregate root, construction draft, and change set.

use super::{CollectionId, declaration};
use crate::image::ImageRef;
use crate::schema::{Patch, RecordError, SchemaConstructionError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Collection aggregate root.
///
/// Catalogue fields serialize in `snake_case`; the managed timestamps keep
/// their `createdAt` and `updatedAt` names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    id: CollectionId,
    name: String,
    image: Option<ImageRef>,
    description: Option<String>,
    seo_title: Option<String>,
    seo_description: Option<String>,
    is_active: bool,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCollectionData {
    /// Persisted collection identifier.
    pub id: CollectionId,
    /// Persisted name.
    pub name: String,
    /// Persisted image reference, if any.
    pub image: Option<ImageRef>,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted search-engine title, if any.
    pub seo_title: Option<String>,
    /// Persisted search-engine description, if any.
    pub seo_description: Option<String>,
    /// Persisted visibility flag.
    pub is_active: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Collection {
    /// Entity kind name used in schema descriptors and errors.
    pub const ENTITY: &'static str = "Collection";

    /// Returns an empty draft for constructing a new collection.
    #[must_use]
    pub fn draft() -> CollectionDraft {
        CollectionDraft::default()
    }

    /// Reconstructs a collection from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCollectionData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            image: data.image,
            description: data.description,
            seo_title: data.seo_title,
            seo_description: data.seo_description,
            is_active: data.is_active,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the collection identifier.
    #[must_use]
    pub const fn id(&self) -> CollectionId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the image reference, if any.
    #[must_use]
    pub const fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the search-engine title, if any.
    #[must_use]
    pub fn seo_title(&self) -> Option<&str> {
        self.seo_title.as_deref()
    }

    /// Returns the search-engine description, if any.
    #[must_use]
    pub fn seo_description(&self) -> Option<&str> {
        self.seo_description.as_deref()
    }

    /// Returns whether the collection is visible.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Makes the collection visible.
    ///
    /// Returns `false` and leaves the record untouched when it is already
    /// active.
    pub fn activate(&mut self, clock: &impl Clock) -> bool {
        self.set_active(true, clock)
    }

    /// Hides the collection.
    ///
    /// Returns `false` and leaves the record untouched when it is already
    /// inactive.
    pub fn deactivate(&mut self, clock: &impl Clock) -> bool {
        self.set_active(false, clock)
    }

    /// Applies a change set, advancing `updated_at` unless it is empty.
    pub fn apply(&mut self, changes: CollectionChanges, clock: &impl Clock) -> bool {
        if changes.is_empty() {
            return false;
        }

        let CollectionChanges {
            name,
            image,
            description,
            seo_title,
            seo_description,
            is_active,
        } = changes;

        if let Some(value) = name {
            self.name = value;
        }
        if let Some(value) = is_active {
            self.is_active = value;
        }
        image.apply_to(&mut self.image);
        description.apply_to(&mut self.description);
        seo_title.apply_to(&mut self.seo_title);
        seo_description.apply_to(&mut self.seo_description);

        self.touch(clock);
        true
    }

    fn set_active(&mut self, active: bool, clock: &impl Clock) -> bool {
        if self.is_active == active {
            return false;
        }
        self.is_active = active;
        self.touch(clock);
        true
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Builder collecting collection fields before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDraft {
    id: Option<CollectionId>,
    name: Option<String>,
    image: Option<ImageRef>,
    description: Option<String>,
    seo_title: Option<String>,
    seo_description: Option<String>,
    is_active: bool,
}

impl Default for CollectionDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            image: None,
            description: None,
            seo_title: None,
            seo_description: None,
            is_active: true,
        }
    }
}

impl CollectionDraft {
    /// Sets a specific collection identifier.
    #[must_use]
    pub const fn with_id(mut self, id: CollectionId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
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

    /// Sets the search-engine title.
    #[must_use]
    pub fn with_seo_title(mut self, seo_title: impl Into<String>) -> Self {
        self.seo_title = Some(seo_title.into());
        self
    }

    /// Sets the search-engine description.
    #[must_use]
    pub fn with_seo_description(mut self, seo_description: impl Into<String>) -> Self {
        self.seo_description = Some(seo_description.into());
        self
    }

    /// Creates the collection hidden instead of active.
    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Builds the collection, stamping both timestamps from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Construction`] when no name was supplied.
    pub fn build(self, clock: &impl Clock) -> Result<Collection, RecordError> {
        let name =
            SchemaConstructionError::require(self.name, Collection::ENTITY, declaration::NAME)?;

        let timestamp = clock.utc();
        Ok(Collection {
            id: self.id.unwrap_or_default(),
            name,
            image: self.image,
            description: self.description,
            seo_title: self.seo_title,
            seo_description: self.seo_description,
            is_active: self.is_active,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }
}

/// Field changes applied to an existing collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionChanges {
    /// New name.
    pub name: Option<String>,
    /// Image change.
    pub image: Patch<ImageRef>,
    /// Description change.
    pub description: Patch<String>,
    /// Search-engine title change.
    pub seo_title: Patch<String>,
    /// Search-engine description change.
    pub seo_description: Patch<String>,
    /// New visibility flag.
    pub is_active: Option<bool>,
}

impl CollectionChanges {
    /// Returns whether the change set modifies nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.image.is_unchanged()
            && self.description.is_unchanged()
            && self.seo_title.is_unchanged()
            && self.seo_description.is_unchanged()
            && self.is_active.is_none()
    }
}
