//! Service layer for goal creation, review status, and retrieval.

use crate::goal::{
    domain::{Goal, GoalChanges, GoalId, GoalStatus, GoalType},
    ports::{GoalRepository, GoalRepositoryError},
};
use crate::image::ImageRef;
use crate::schema::{DomainError, RecordError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a goal from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGoalRequest {
    title: String,
    goal_type: String,
    description: Option<String>,
    image: Option<ImageRef>,
    status: Option<String>,
}

impl CreateGoalRequest {
    /// Creates a request with the required goal fields.
    #[must_use]
    pub fn new(title: impl Into<String>, goal_type: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            goal_type: goal_type.into(),
            description: None,
            image: None,
            status: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the image reference.
    #[must_use]
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    /// Overrides the initial status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Service-level errors for goal lifecycle operations.
#[derive(Debug, Error)]
pub enum GoalLifecycleError {
    /// Record construction or validation failed.
    #[error(transparent)]
    Record(#[from] RecordError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] GoalRepositoryError),
}

/// Result type for goal lifecycle service operations.
pub type GoalLifecycleResult<T> = Result<T, GoalLifecycleError>;

/// Goal lifecycle orchestration service.
#[derive(Clone)]
pub struct GoalLifecycleService<R, C>
where
    R: GoalRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> GoalLifecycleService<R, C>
where
    R: GoalRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new goal lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a new goal.
    ///
    /// # Errors
    ///
    /// Returns [`GoalLifecycleError::Record`] when the title breaks its
    /// rules or an enumerated value is outside its domain, or
    /// [`GoalLifecycleError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateGoalRequest) -> GoalLifecycleResult<Goal> {
        let CreateGoalRequest {
            title,
            goal_type,
            description,
            image,
            status,
        } = request;

        let parsed_type = parse(GoalType::try_from(goal_type.as_str()))?;
        let mut draft = Goal::draft().with_title(title).with_goal_type(parsed_type);
        if let Some(raw) = status {
            draft = draft.with_status(parse(GoalStatus::try_from(raw.as_str()))?);
        }
        if let Some(value) = description {
            draft = draft.with_description(value);
        }
        if let Some(value) = image {
            draft = draft.with_image(value);
        }

        let goal = draft.build(&*self.clock)?;
        self.repository.store(&goal).await?;
        tracing::info!(goal_id = %goal.id(), goal_type = %goal.goal_type(), "goal created");
        Ok(goal)
    }

    /// Applies a change set to a stored goal.
    ///
    /// # Errors
    ///
    /// Returns [`GoalLifecycleError::Repository`] when the goal is not found
    /// or persistence fails.
    pub async fn update(&self, id: GoalId, changes: GoalChanges) -> GoalLifecycleResult<Goal> {
        let mut goal = self.find_by_id_or_error(id).await?;
        if goal.apply(changes, &*self.clock) {
            self.repository.update(&goal).await?;
            tracing::debug!(goal_id = %id, "goal updated");
        }
        Ok(goal)
    }

    /// Sets the status of a stored goal from its text literal.
    ///
    /// Review timestamps and the rejection reason are left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`GoalLifecycleError::Record`] when the literal is not a goal
    /// status, or [`GoalLifecycleError::Repository`] when the goal is not
    /// found or persistence fails.
    pub async fn update_status(&self, id: GoalId, status: &str) -> GoalLifecycleResult<Goal> {
        let parsed = parse(GoalStatus::try_from(status))?;
        let changes = GoalChanges {
            status: Some(parsed),
            ..GoalChanges::default()
        };
        self.update(id, changes).await
    }

    /// Finds a goal by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GoalLifecycleError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, id: GoalId) -> GoalLifecycleResult<Option<Goal>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns every goal whose status matches the given literal.
    ///
    /// # Errors
    ///
    /// Returns [`GoalLifecycleError::Record`] when the literal is not a goal
    /// status, or [`GoalLifecycleError::Repository`] when lookup fails.
    pub async fn list_by_status(&self, status: &str) -> GoalLifecycleResult<Vec<Goal>> {
        let parsed = parse(GoalStatus::try_from(status))?;
        Ok(self.repository.list_by_status(parsed).await?)
    }

    async fn find_by_id_or_error(&self, id: GoalId) -> GoalLifecycleResult<Goal> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| GoalRepositoryError::NotFound(id).into())
    }
}

fn parse<T>(result: Result<T, DomainError>) -> GoalLifecycleResult<T> {
    result.map_err(|err| {
        tracing::debug!(field = err.field, value = %err.value, "rejected enumerated value");
        GoalLifecycleError::Record(err.into())
    })
}
