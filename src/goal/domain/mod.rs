//! Domain model for goals.
//!
//! A goal is something a user works toward, measured either in completed
//! tasks or in saved coins, and reviewed once reached.

mod declaration;
mod enums;
mod goal;
mod ids;
mod title;

pub use declaration::{GOALS_TABLE, goal_schema};
pub use enums::{GoalStatus, GoalType};
pub use goal::{Goal, GoalChanges, GoalDraft, PersistedGoalData};
pub use ids::GoalId;
pub use title::{GOAL_TITLE_RULES, GoalTitle};
