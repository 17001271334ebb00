//! Repository port for goal persistence and lookup.

use crate::goal::domain::{Goal, GoalId, GoalStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for goal repository operations.
pub type GoalRepositoryResult<T> = Result<T, GoalRepositoryError>;

/// Goal persistence contract.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Stores a new goal.
    ///
    /// # Errors
    ///
    /// Returns [`GoalRepositoryError::DuplicateGoal`] when the goal ID already
    /// exists.
    async fn store(&self, goal: &Goal) -> GoalRepositoryResult<()>;

    /// Persists changes to an existing goal.
    ///
    /// # Errors
    ///
    /// Returns [`GoalRepositoryError::NotFound`] when the goal does not exist.
    async fn update(&self, goal: &Goal) -> GoalRepositoryResult<()>;

    /// Finds a goal by identifier.
    ///
    /// Returns `None` when the goal does not exist.
    async fn find_by_id(&self, id: GoalId) -> GoalRepositoryResult<Option<Goal>>;

    /// Returns every goal in the given status, oldest first.
    async fn list_by_status(&self, status: GoalStatus) -> GoalRepositoryResult<Vec<Goal>>;
}

/// Errors returned by goal repository implementations.
#[derive(Debug, Clone, Error)]
pub enum GoalRepositoryError {
    /// A goal with the same identifier already exists.
    #[error("goal {0} is already stored")]
    DuplicateGoal(GoalId),

    /// The goal was not found.
    #[error("no goal stored under {0}")]
    NotFound(GoalId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("stored goal row is invalid: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// The backing store failed.
    #[error("goal storage failed: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl GoalRepositoryError {
    /// Builds [`Self::InvalidPersistedData`] from a decoding failure.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Builds [`Self::Persistence`] from a backend failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
