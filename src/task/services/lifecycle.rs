//! Service layer for task creation, mutation, and retrieval.

use crate::schema::{DomainError, RecordError};
use crate::task::{
    domain::{DifficultyLevel, RecurringFrequency, Task, TaskChanges, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task from raw input.
///
/// Enumerated values arrive as text and are parsed at the service boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    coin_reward: i32,
    difficulty_level: String,
    description: Option<String>,
    status: Option<String>,
    due_date: Option<DateTime<Utc>>,
    duration: Option<i32>,
    recurring_frequency: Option<String>,
    completed_at: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        coin_reward: i32,
        difficulty_level: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            coin_reward,
            difficulty_level: difficulty_level.into(),
            description: None,
            status: None,
            due_date: None,
            duration: None,
            recurring_frequency: None,
            completed_at: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the initial status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
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
    pub fn recurring(mut self, frequency: impl Into<String>) -> Self {
        self.recurring_frequency = Some(frequency.into());
        self
    }

    /// Sets the completion timestamp.
    #[must_use]
    pub const fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Record construction or validation failed.
    #[error(transparent)]
    Record(#[from] RecordError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Record`] when an enumerated value is
    /// outside its domain, or [`TaskLifecycleError::Repository`] when the
    /// repository rejects persistence.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            title,
            coin_reward,
            difficulty_level,
            description,
            status,
            due_date,
            duration,
            recurring_frequency,
            completed_at,
        } = request;

        let difficulty = parse(DifficultyLevel::try_from(difficulty_level.as_str()))?;
        let mut draft = Task::draft()
            .with_title(title)
            .with_coin_reward(coin_reward)
            .with_difficulty_level(difficulty);
        if let Some(raw) = status {
            draft = draft.with_status(parse(TaskStatus::try_from(raw.as_str()))?);
        }
        if let Some(raw) = recurring_frequency {
            draft = draft.recurring(parse(RecurringFrequency::try_from(raw.as_str()))?);
        }
        if let Some(value) = description {
            draft = draft.with_description(value);
        }
        if let Some(value) = due_date {
            draft = draft.with_due_date(value);
        }
        if let Some(value) = duration {
            draft = draft.with_duration(value);
        }
        if let Some(value) = completed_at {
            draft = draft.with_completed_at(value);
        }

        let task = draft.build(&*self.clock)?;
        self.repository.store(&task).await?;
        tracing::info!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Applies a change set to a stored task.
    ///
    /// An empty change set returns the stored task without writing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task is not found
    /// or persistence fails.
    pub async fn update(&self, id: TaskId, changes: TaskChanges) -> TaskLifecycleResult<Task> {
        let mut task = self.find_by_id_or_error(id).await?;
        if task.apply(changes, &*self.clock) {
            self.repository.update(&task).await?;
            tracing::debug!(task_id = %id, "task updated");
        }
        Ok(task)
    }

    /// Sets the status of a stored task from its text literal.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Record`] when the literal is not a task
    /// status, or [`TaskLifecycleError::Repository`] when the task is not
    /// found or persistence fails.
    pub async fn update_status(&self, id: TaskId, status: &str) -> TaskLifecycleResult<Task> {
        let parsed = parse(TaskStatus::try_from(status))?;
        let changes = TaskChanges {
            status: Some(parsed),
            ..TaskChanges::default()
        };
        self.update(id, changes).await
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns every task whose status matches the given literal.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Record`] when the literal is not a task
    /// status, or [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn list_by_status(&self, status: &str) -> TaskLifecycleResult<Vec<Task>> {
        let parsed = parse(TaskStatus::try_from(status))?;
        Ok(self.repository.list_by_status(parsed).await?)
    }

    async fn find_by_id_or_error(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }
}

/// Lifts a domain parse failure into the service error, logging the
/// rejected literal.
fn parse<T>(result: Result<T, DomainError>) -> TaskLifecycleResult<T> {
    result.map_err(|err| {
        tracing::debug!(field = err.field, value = %err.value, "rejected enumerated value");
        TaskLifecycleError::Record(err.into())
    })
}
