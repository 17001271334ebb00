//! Startup registration of every entity schema.

use super::{EntitySchema, SchemaConstructionError, TypeMapper};
use crate::{
    collection::domain::collection_schema, goal::domain::goal_schema, task::domain::task_schema,
};
use std::collections::HashSet;

/// Schema descriptors for every persisted entity kind.
///
/// Built once by [`SchemaRegistry::initialize`] during process startup and
/// passed by reference to whatever needs the descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRegistry {
    task: EntitySchema,
    goal: EntitySchema,
    collection: EntitySchema,
}

impl SchemaRegistry {
    /// Declares every entity kind against the supplied type mapper.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaConstructionError`] when any declaration is invalid
    /// or two entities share a name or table. Callers should treat this as
    /// fatal.
    pub fn initialize(mapper: &dyn TypeMapper) -> Result<Self, SchemaConstructionError> {
        let registry = Self {
            task: task_schema(mapper)?,
            goal: goal_schema(mapper)?,
            collection: collection_schema(mapper)?,
        };
        registry.ensure_unique_names()?;

        tracing::info!(
            backend = mapper.backend(),
            entities = registry.iter().count(),
            "entity schemas registered"
        );
        Ok(registry)
    }

    /// Returns the task descriptor.
    #[must_use]
    pub const fn task(&self) -> &EntitySchema {
        &self.task
    }

    /// Returns the goal descriptor.
    #[must_use]
    pub const fn goal(&self) -> &EntitySchema {
        &self.goal
    }

    /// Returns the collection descriptor.
    #[must_use]
    pub const fn collection(&self) -> &EntitySchema {
        &self.collection
    }

    /// Looks up a descriptor by entity kind name.
    #[must_use]
    pub fn get(&self, entity: &str) -> Option<&EntitySchema> {
        self.iter().find(|schema| schema.entity() == entity)
    }

    /// Iterates over every descriptor in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &EntitySchema> {
        [&self.task, &self.goal, &self.collection].into_iter()
    }

    /// Renders `CREATE TABLE` statements for every entity.
    #[must_use]
    pub fn create_all_sql(&self) -> String {
        self.iter()
            .map(EntitySchema::create_table_sql)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn ensure_unique_names(&self) -> Result<(), SchemaConstructionError> {
        let mut entities = HashSet::new();
        let mut tables = HashSet::new();
        for schema in self.iter() {
            if !entities.insert(schema.entity()) {
                return Err(SchemaConstructionError::DuplicateEntity(schema.entity()));
            }
            if !tables.insert(schema.table()) {
                return Err(SchemaConstructionError::DuplicateEntity(schema.table()));
            }
        }
        Ok(())
    }
}
