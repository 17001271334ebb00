//! Domain model for tasks.
//!
//! A task is an assignable unit of work carrying a coin reward, a difficulty,
//! and an optional recurrence. All infrastructure concerns live outside the
//! domain boundary.

mod declaration;
mod enums;
mod ids;
mod task;

pub use declaration::{TASKS_TABLE, task_schema};
pub use enums::{DifficultyLevel, RecurringFrequency, TaskStatus};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskChanges, TaskDraft};
