//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Coin reward.
    pub coin_reward: i32,
    /// Difficulty literal.
    pub difficulty_level: String,
    /// Lifecycle status literal.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional duration in minutes.
    pub duration: Option<i32>,
    /// Recurrence flag.
    pub is_recurring: bool,
    /// Optional recurrence interval literal.
    pub recurring_frequency: Option<String>,
    /// Optional completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Coin reward.
    pub coin_reward: i32,
    /// Difficulty literal.
    pub difficulty_level: String,
    /// Lifecycle status literal.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional duration in minutes.
    pub duration: Option<i32>,
    /// Recurrence flag.
    pub is_recurring: bool,
    /// Optional recurrence interval literal.
    pub recurring_frequency: Option<String>,
    /// Optional completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model writing every mutable task column.
///
/// `None` values are written as `NULL` so cleared fields persist.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangesetRow {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Coin reward.
    pub coin_reward: i32,
    /// Difficulty literal.
    pub difficulty_level: String,
    /// Lifecycle status literal.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional duration in minutes.
    pub duration: Option<i32>,
    /// Recurrence flag.
    pub is_recurring: bool,
    /// Optional recurrence interval literal.
    pub recurring_frequency: Option<String>,
    /// Optional completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
