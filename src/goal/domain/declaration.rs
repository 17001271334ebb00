//! Declarative schema for goal records.

use super::{GOAL_TITLE_RULES, Goal, GoalStatus, GoalType};
use crate::schema::{
    DefaultValue, EntitySchema, Enumerated, FieldSpec, LogicalType, SchemaConstructionError,
    TypeMapper,
};

pub(super) const TITLE: &str = "title";
pub(super) const GOAL_TYPE: &str = GoalType::FIELD;

/// Storage table for goal records.
pub const GOALS_TABLE: &str = "goals";

/// Declares the goal schema against the supplied type mapper.
///
/// # Errors
///
/// Returns [`SchemaConstructionError`] when the declaration is rejected.
pub fn goal_schema(mapper: &dyn TypeMapper) -> Result<EntitySchema, SchemaConstructionError> {
    let fields = vec![
        FieldSpec::primary_key("id", "id"),
        FieldSpec::required(TITLE, "title", LogicalType::Text).with_rules(&GOAL_TITLE_RULES),
        FieldSpec::optional("description", "description", LogicalType::Text),
        FieldSpec::optional("image", "image", LogicalType::Image),
        FieldSpec::required(GOAL_TYPE, "type", LogicalType::enumerated::<GoalType>()),
        FieldSpec::required(
            GoalStatus::FIELD,
            "status",
            LogicalType::enumerated::<GoalStatus>(),
        )
        .with_default(DefaultValue::enumerated(GoalStatus::Pending)),
        FieldSpec::optional("completedAt", "completed_at", LogicalType::Timestamp),
        FieldSpec::optional("approvedAt", "approved_at", LogicalType::Timestamp),
        FieldSpec::optional("rejectedAt", "rejected_at", LogicalType::Timestamp),
        FieldSpec::optional("rejectionReason", "rejection_reason", LogicalType::Text),
        FieldSpec::managed_timestamp("createdAt", "created_at"),
        FieldSpec::managed_timestamp("updatedAt", "updated_at"),
    ];
    EntitySchema::new(Goal::ENTITY, GOALS_TABLE, fields, mapper)
}
