//! Closed value sets for task fields.

use crate::schema::{Enumerated, enumerated_conversions};
use serde::{Deserialize, Serialize};

/// Effort required to complete a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DifficultyLevel {
    /// Little effort.
    Easy,
    /// Moderate effort.
    Medium,
    /// Significant effort.
    Hard,
}

impl Enumerated for DifficultyLevel {
    const FIELD: &'static str = "difficultyLevel";
    const VARIANTS: &'static [Self] = &[Self::Easy, Self::Medium, Self::Hard];

    fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Task lifecycle status.
///
/// Statuses conceptually progress from `Assigned` to `Completed` and then to
/// `Approved` or `Rejected`; no transition rules are enforced here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TaskStatus {
    /// Task has been handed out.
    #[default]
    Assigned,
    /// Assignee reported the task as done.
    Completed,
    /// Completion was accepted.
    Approved,
    /// Completion was refused.
    Rejected,
}

impl Enumerated for TaskStatus {
    const FIELD: &'static str = "status";
    const VARIANTS: &'static [Self] = &[
        Self::Assigned,
        Self::Completed,
        Self::Approved,
        Self::Rejected,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Completed => "completed",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Repetition interval of a recurring task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum RecurringFrequency {
    /// Repeats every day.
    Daily,
    /// Repeats every week.
    Weekly,
    /// Repeats every month.
    Monthly,
}

impl Enumerated for RecurringFrequency {
    const FIELD: &'static str = "recurringFrequency";
    const VARIANTS: &'static [Self] = &[Self::Daily, Self::Weekly, Self::Monthly];

    fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

enumerated_conversions!(DifficultyLevel, TaskStatus, RecurringFrequency);
