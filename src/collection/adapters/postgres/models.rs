//! Diesel row models for collection persistence.

use super::schema::collections;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for collection records.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = collections)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CollectionRow {
    /// Collection identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Optional image reference document.
    pub image: Option<serde_json::Value>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional search-engine title.
    pub seo_title: Option<String>,
    /// Optional search-engine description.
    pub seo_description: Option<String>,
    /// Visibility flag.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for collection records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = collections)]
pub struct NewCollectionRow {
    /// Collection identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Optional image reference document.
    pub image: Option<serde_json::Value>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional search-engine title.
    pub seo_title: Option<String>,
    /// Optional search-engine description.
    pub seo_description: Option<String>,
    /// Visibility flag.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model writing every mutable collection column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = collections)]
#[diesel(treat_none_as_null = true)]
pub struct CollectionChangesetRow {
    /// Display name.
    pub name: String,
    /// Optional image reference document.
    pub image: Option<serde_json::Value>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional search-engine title.
    pub seo_title: Option<String>,
    /// Optional search-engine description.
    pub seo_description: Option<String>,
    /// Visibility flag.
    pub is_active: bool,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
