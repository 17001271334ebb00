//! Closed value sets for goal fields.

use crate::schema::{Enumerated, enumerated_conversions};
use serde::{Deserialize, Serialize};

/// What a goal is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum GoalType {
    /// Reached by completing tasks.
    Task,
    /// Reached by saving coins.
    Coin,
}

impl Enumerated for GoalType {
    const FIELD: &'static str = "type";
    const VARIANTS: &'static [Self] = &[Self::Task, Self::Coin];

    fn as_str(self) -> &'static str {
        match self {
            Self::Task => "TASK",
            Self::Coin => "COIN",
        }
    }
}

/// Goal review status.
///
/// The status is recorded as given; approval and rejection timestamps are
/// set independently by callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum GoalStatus {
    /// Goal is open.
    #[default]
    Pending,
    /// Owner reported the goal as reached.
    Completed,
    /// Completion was accepted.
    Approved,
    /// Completion was refused.
    Rejected,
}

impl Enumerated for GoalStatus {
    const FIELD: &'static str = "status";
    const VARIANTS: &'static [Self] = &[
        Self::Pending,
        Self::Completed,
        Self::Approved,
        Self::Rejected,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

enumerated_conversions!(GoalType, GoalStatus);
