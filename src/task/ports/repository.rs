//! Storage contract for reward tasks.

use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result alias used by every [`TaskRepository`] operation.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Durable home for [`Task`] records.
///
/// Implementations hold whole tasks keyed by [`TaskId`]; the lifecycle
/// service decides when timestamps move, so adapters store what they are
/// given verbatim.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a task that has never been stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] if a record with the
    /// same id is already present.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Overwrites the stored copy of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] if no record has this id.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Loads one task, or `None` when the id is unknown.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Loads the tasks currently in `status`, ordered by `createdAt`.
    async fn list_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;
}

/// Failure reported by a [`TaskRepository`].
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// `store` was called for an id that is already taken.
    #[error("task {0} is already stored")]
    DuplicateTask(TaskId),

    /// No record exists for the id.
    #[error("no task stored under {0}")]
    NotFound(TaskId),

    /// A stored row holds values the task schema does not allow.
    #[error("stored task row is invalid: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// The backing store failed.
    #[error("task storage failed: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Builds [`Self::InvalidPersistedData`] from a decoding failure.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Builds [`Self::Persistence`] from a backend failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
