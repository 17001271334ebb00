//! Task aggregate root, construction draft, and change set.

use super::{DifficultyLevel, RecurringFrequency, TaskId, TaskStatus, declaration};
use crate::schema::{Patch, RecordError, SchemaConstructionError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    coin_reward: i32,
    difficulty_level: DifficultyLevel,
    status: TaskStatus,
    due_date: Option<DateTime<Utc>>,
    duration: Option<i32>,
    is_recurring: bool,
    recurring_frequency: Option<RecurringFrequency>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted coin reward.
    pub coin_reward: i32,
    /// Persisted difficulty.
    pub difficulty_level: DifficultyLevel,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted duration in minutes, if any.
    pub duration: Option<i32>,
    /// Persisted recurrence flag.
    pub is_recurring: bool,
    /// Persisted recurrence interval, if any.
    pub recurring_frequency: Option<RecurringFrequency>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Entity kind name used in schema descriptors and errors.
    pub const ENTITY: &'static str = "Task";

    /// Returns an empty draft for constructing a new task.
    #[must_use]
    pub fn draft() -> TaskDraft {
        TaskDraft::default()
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            coin_reward: data.coin_reward,
            difficulty_level: data.difficulty_level,
            status: data.status,
            due_date: data.due_date,
            duration: data.duration,
            is_recurring: data.is_recurring,
            recurring_frequency: data.recurring_frequency,
            completed_at: data.completed_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the coin reward.
    #[must_use]
    pub const fn coin_reward(&self) -> i32 {
        self.coin_reward
    }

    /// Returns the difficulty.
    #[must_use]
    pub const fn difficulty_level(&self) -> DifficultyLevel {
        self.difficulty_level
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the expected duration in minutes, if any.
    #[must_use]
    pub const fn duration(&self) -> Option<i32> {
        self.duration
    }

    /// Returns whether the task repeats.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.is_recurring
    }

    /// Returns the recurrence interval, if any.
    ///
    /// The value is only meaningful when [`Task::is_recurring`] is `true`.
    #[must_use]
    pub const fn recurring_frequency(&self) -> Option<RecurringFrequency> {
        self.recurring_frequency
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a change set.
    ///
    /// Returns `false` without touching the record when the change set is
    /// empty; otherwise advances `updated_at`.
    pub fn apply(&mut self, changes: TaskChanges, clock: &impl Clock) -> bool {
        if changes.is_empty() {
            return false;
        }

        let TaskChanges {
            title,
            description,
            coin_reward,
            difficulty_level,
            status,
            due_date,
            duration,
            is_recurring,
            recurring_frequency,
            completed_at,
        } = changes;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = coin_reward {
            self.coin_reward = value;
        }
        if let Some(value) = difficulty_level {
            self.difficulty_level = value;
        }
        if let Some(value) = status {
            self.status = value;
        }
        if let Some(value) = is_recurring {
            self.is_recurring = value;
        }
        description.apply_to(&mut self.description);
        due_date.apply_to(&mut self.due_date);
        duration.apply_to(&mut self.duration);
        recurring_frequency.apply_to(&mut self.recurring_frequency);
        completed_at.apply_to(&mut self.completed_at);

        self.touch(clock);
        true
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Builder collecting task fields before construction.
///
/// `title`, `coin_reward`, and `difficulty_level` are required; everything
/// else falls back to its declared default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    id: Option<TaskId>,
    title: Option<String>,
    description: Option<String>,
    coin_reward: Option<i32>,
    difficulty_level: Option<DifficultyLevel>,
    status: Option<TaskStatus>,
    due_date: Option<DateTime<Utc>>,
    duration: Option<i32>,
    is_recurring: bool,
    recurring_frequency: Option<RecurringFrequency>,
    completed_at: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Sets a specific task identifier.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the coin reward.
    #[must_use]
    pub const fn with_coin_reward(mut self, coin_reward: i32) -> Self {
        self.coin_reward = Some(coin_reward);
        self
    }

    /// Sets the difficulty.
    #[must_use]
    pub const fn with_difficulty_level(mut self, difficulty_level: DifficultyLevel) -> Self {
        self.difficulty_level = Some(difficulty_level);
        self
    }

    /// Overrides the default `assigned` status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the expected duration in minutes.
    #[must_use]
    pub const fn with_duration(mut self, minutes: i32) -> Self {
        self.duration = Some(minutes);
        self
    }

    /// Marks the task as recurring at the given interval.
    #[must_use]
    pub const fn recurring(mut self, frequency: RecurringFrequency) -> Self {
        self.is_recurring = true;
        self.recurring_frequency = Some(frequency);
        self
    }

    /// Sets the completion timestamp.
    #[must_use]
    pub const fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Builds the task, stamping both timestamps from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Construction`] when the title, coin reward, or
    /// difficulty was never supplied.
    pub fn build(self, clock: &impl Clock) -> Result<Task, RecordError> {
        let title = SchemaConstructionError::require(self.title, Task::ENTITY, declaration::TITLE)?;
        let coin_reward = SchemaConstructionError::require(
            self.coin_reward,
            Task::ENTITY,
            declaration::COIN_REWARD,
        )?;
        let difficulty_level = SchemaConstructionError::require(
            self.difficulty_level,
            Task::ENTITY,
            declaration::DIFFICULTY_LEVEL,
        )?;

        let timestamp = clock.utc();
        Ok(Task {
            id: self.id.unwrap_or_default(),
            title,
            description: self.description,
            coin_reward,
            difficulty_level,
            status: self.status.unwrap_or_default(),
            due_date: self.due_date,
            duration: self.duration,
            is_recurring: self.is_recurring,
            recurring_frequency: self.recurring_frequency,
            completed_at: self.completed_at,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }
}

/// Field changes applied to an existing task.
///
/// `None` and [`Patch::Unchanged`] leave a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// New title.
    pub title: Option<String>,
    /// Description change.
    pub description: Patch<String>,
    /// New coin reward.
    pub coin_reward: Option<i32>,
    /// New difficulty.
    pub difficulty_level: Option<DifficultyLevel>,
    /// New lifecycle status.
    pub status: Option<TaskStatus>,
    /// Due date change.
    pub due_date: Patch<DateTime<Utc>>,
    /// Duration change.
    pub duration: Patch<i32>,
    /// New recurrence flag.
    pub is_recurring: Option<bool>,
    /// Recurrence interval change.
    pub recurring_frequency: Patch<RecurringFrequency>,
    /// Completion timestamp change.
    pub completed_at: Patch<DateTime<Utc>>,
}

impl TaskChanges {
    /// Returns whether the change set modifies nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_unchanged()
            && self.coin_reward.is_none()
            && self.difficulty_level.is_none()
            && self.status.is_none()
            && self.due_date.is_unchanged()
            && self.duration.is_unchanged()
            && self.is_recurring.is_none()
            && self.recurring_frequency.is_unchanged()
            && self.completed_at.is_unchanged()
    }
}
