//! In-memory repository for goal tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::goal::{
    domain::{Goal, GoalId, GoalStatus},
    ports::{GoalRepository, GoalRepositoryError, GoalRepositoryResult},
};

/// Thread-safe in-memory goal repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGoalRepository {
    goals: Arc<RwLock<HashMap<GoalId, Goal>>>,
}

impl InMemoryGoalRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error<T>(err: &PoisonError<T>) -> GoalRepositoryError {
    GoalRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl GoalRepository for InMemoryGoalRepository {
    async fn store(&self, goal: &Goal) -> GoalRepositoryResult<()> {
        let mut goals = self.goals.write().map_err(|err| lock_error(&err))?;
        if goals.contains_key(&goal.id()) {
            return Err(GoalRepositoryError::DuplicateGoal(goal.id()));
        }
        goals.insert(goal.id(), goal.clone());
        Ok(())
    }

    async fn update(&self, goal: &Goal) -> GoalRepositoryResult<()> {
        let mut goals = self.goals.write().map_err(|err| lock_error(&err))?;
        let stored = goals
            .get_mut(&goal.id())
            .ok_or(GoalRepositoryError::NotFound(goal.id()))?;
        *stored = goal.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: GoalId) -> GoalRepositoryResult<Option<Goal>> {
        let goals = self.goals.read().map_err(|err| lock_error(&err))?;
        Ok(goals.get(&id).cloned())
    }

    async fn list_by_status(&self, status: GoalStatus) -> GoalRepositoryResult<Vec<Goal>> {
        let goals = self.goals.read().map_err(|err| lock_error(&err))?;
        let mut matching: Vec<Goal> = goals
            .values()
            .filter(|goal| goal.status() == status)
            .cloned()
            .collect();
        matching.sort_by_key(Goal::created_at);
        Ok(matching)
    }
}
