//! Diesel row models for goal persistence.

use super::schema::goals;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for goal records.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = goals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GoalRow {
    /// Goal identifier.
    pub id: uuid::Uuid,
    /// Goal title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional image reference document.
    pub image: Option<serde_json::Value>,
    /// Goal type literal.
    pub goal_type: String,
    /// Review status literal.
    pub status: String,
    /// Optional completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional approval timestamp.
    pub approved_at: Option<DateTime<Utc>>,
    /// Optional rejection timestamp.
    pub rejected_at: Option<DateTime<Utc>>,
    /// Optional rejection reason.
    pub rejection_reason: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for goal records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = goals)]
pub struct NewGoalRow {
    /// Goal identifier.
    pub id: uuid::Uuid,
    /// Goal title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional image reference document.
    pub image: Option<serde_json::Value>,
    /// Goal type literal.
    pub goal_type: String,
    /// Review status literal.
    pub status: String,
    /// Optional completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional approval timestamp.
    pub approved_at: Option<DateTime<Utc>>,
    /// Optional rejection timestamp.
    pub rejected_at: Option<DateTime<Utc>>,
    /// Optional rejection reason.
    pub rejection_reason: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model writing every mutable goal column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = goals)]
#[diesel(treat_none_as_null = true)]
pub struct GoalChangesetRow {
    /// Goal title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional image reference document.
    pub image: Option<serde_json::Value>,
    /// Goal type literal.
    pub goal_type: String,
    /// Review status literal.
    pub status: String,
    /// Optional completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional approval timestamp.
    pub approved_at: Option<DateTime<Utc>>,
    /// Optional rejection timestamp.
    pub rejected_at: Option<DateTime<Utc>>,
    /// Optional rejection reason.
    pub rejection_reason: Option<String>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
