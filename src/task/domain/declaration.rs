//! Declarative schema for task records.

use super::{DifficultyLevel, RecurringFrequency, Task, TaskStatus};
use crate::schema::{
    DefaultValue, EntitySchema, Enumerated, FieldSpec, LogicalType, SchemaConstructionError,
    TypeMapper,
};

pub(super) const TITLE: &str = "title";
pub(super) const COIN_REWARD: &str = "coinReward";
pub(super) const DIFFICULTY_LEVEL: &str = DifficultyLevel::FIELD;

/// Storage table for task records.
pub const TASKS_TABLE: &str = "tasks";

/// Declares the task schema against the supplied type mapper.
///
/// # Errors
///
/// Returns [`SchemaConstructionError`] when the declaration is rejected.
pub fn task_schema(mapper: &dyn TypeMapper) -> Result<EntitySchema, SchemaConstructionError> {
    let fields = vec![
        FieldSpec::primary_key("id", "id"),
        FieldSpec::required(TITLE, "title", LogicalType::Text),
        FieldSpec::optional("description", "description", LogicalType::Text),
        FieldSpec::required(COIN_REWARD, "coin_reward", LogicalType::Integer),
        FieldSpec::required(
            DIFFICULTY_LEVEL,
            "difficulty_level",
            LogicalType::enumerated::<DifficultyLevel>(),
        ),
        FieldSpec::required(
            TaskStatus::FIELD,
            "status",
            LogicalType::enumerated::<TaskStatus>(),
        )
        .with_default(DefaultValue::enumerated(TaskStatus::Assigned)),
        FieldSpec::optional("dueDate", "due_date", LogicalType::Timestamp),
        FieldSpec::optional("duration", "duration", LogicalType::Integer),
        FieldSpec::required("isRecurring", "is_recurring", LogicalType::Boolean)
            .with_default(DefaultValue::Boolean(false)),
        FieldSpec::optional(
            RecurringFrequency::FIELD,
            "recurring_frequency",
            LogicalType::enumerated::<RecurringFrequency>(),
        ),
        FieldSpec::optional("completedAt", "completed_at", LogicalType::Timestamp),
        FieldSpec::managed_timestamp("createdAt", "created_at"),
        FieldSpec::managed_timestamp("updatedAt", "updated_at"),
    ];
    EntitySchema::new(Task::ENTITY, TASKS_TABLE, fields, mapper)
}
