//! Entity schema registry.
//!
//! Declares, for every persisted entity kind, the authoritative field list,
//! logical type, nullability, default, and validation rules independently of
//! any storage backend. A [`TypeMapper`] supplied by the persistence layer
//! maps logical types to concrete column types, producing an
//! [`EntitySchema`] descriptor per entity. The registry performs no I/O.

mod entity;
mod enumerated;
mod error;
mod field;
mod identifier;
mod mapper;
mod patch;
mod registry;

pub use entity::{ColumnDescriptor, EntitySchema};
pub use enumerated::Enumerated;
pub(crate) use enumerated::enumerated_conversions;
pub use error::{DomainError, RecordError, SchemaConstructionError, ValidationError};
pub use field::{DefaultValue, FieldRule, FieldSpec, LogicalType, check_rules};
pub(crate) use identifier::entity_id;
pub use mapper::{PostgresTypeMapper, TypeMapper};
pub use patch::Patch;
pub use registry::SchemaRegistry;

#[cfg(test)]
mod tests;
