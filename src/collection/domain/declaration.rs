//! Declarative schema for collection records.

use super::Collection;
use crate::schema::{
    DefaultValue, EntitySchema, FieldSpec, LogicalType, SchemaConstructionError, TypeMapper,
};

pub(super) const NAME: &str = "name";

/// Storage table for collection records.
pub const COLLECTIONS_TABLE: &str = "collections";

/// Declares the collection schema against the supplied type mapper.
///
/// # Errors
///
/// Returns [`SchemaConstructionError`] when the declaration is rejected.
pub fn collection_schema(
    mapper: &dyn TypeMapper,
) -> Result<EntitySchema, SchemaConstructionError> {
    let fields = vec![
        FieldSpec::primary_key("id", "id"),
        FieldSpec::required(NAME, "name", LogicalType::Text),
        FieldSpec::optional("image", "image", LogicalType::Image),
        FieldSpec::optional("description", "description", LogicalType::Text),
        FieldSpec::optional("seo_title", "seo_title", LogicalType::Text),
        FieldSpec::optional("seo_description", "seo_description", LogicalType::Text),
        FieldSpec::required("is_active", "is_active", LogicalType::Boolean)
            .with_default(DefaultValue::Boolean(true)),
        FieldSpec::managed_timestamp("createdAt", "created_at"),
        FieldSpec::managed_timestamp("updatedAt", "updated_at"),
    ];
    EntitySchema::new(Collection::ENTITY, COLLECTIONS_TABLE, fields, mapper)
}
