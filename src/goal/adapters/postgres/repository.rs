//! `PostgreSQL` repository implementation for goal storage.

use super::{
    models::{GoalChangesetRow, GoalRow, NewGoalRow},
    schema::goals,
};
use crate::config::PgPool;
use crate::goal::{
    domain::{Goal, GoalId, GoalStatus, GoalTitle, GoalType, PersistedGoalData},
    ports::{GoalRepository, GoalRepositoryError, GoalRepositoryResult},
};
use crate::image::ImageRef;
use crate::schema::Enumerated;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed goal repository.
#[derive(Debug, Clone)]
pub struct PostgresGoalRepository {
    pool: PgPool,
}

impl PostgresGoalRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> GoalRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> GoalRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(GoalRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(GoalRepositoryError::persistence)?
    }
}

#[async_trait]
impl GoalRepository for PostgresGoalRepository {
    async fn store(&self, goal: &Goal) -> GoalRepositoryResult<()> {
        let goal_id = goal.id();
        let new_row = to_new_row(goal)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(goals::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        GoalRepositoryError::DuplicateGoal(goal_id)
                    }
                    _ => GoalRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, goal: &Goal) -> GoalRepositoryResult<()> {
        let goal_id = goal.id();
        let changeset = to_changeset(goal)?;

        self.run_blocking(move |connection| {
            let updated_count =
                diesel::update(goals::table.filter(goals::id.eq(goal_id.into_inner())))
                    .set(&changeset)
                    .execute(connection)
                    .map_err(GoalRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(GoalRepositoryError::NotFound(goal_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: GoalId) -> GoalRepositoryResult<Option<Goal>> {
        self.run_blocking(move |connection| {
            let row = goals::table
                .filter(goals::id.eq(id.into_inner()))
                .select(GoalRow::as_select())
                .first::<GoalRow>(connection)
                .optional()
                .map_err(GoalRepositoryError::persistence)?;
            row.map(row_to_goal).transpose()
        })
        .await
    }

    async fn list_by_status(&self, status: GoalStatus) -> GoalRepositoryResult<Vec<Goal>> {
        self.run_blocking(move |connection| {
            let rows = goals::table
                .filter(goals::status.eq(status.as_str()))
                .order(goals::created_at.asc())
                .select(GoalRow::as_select())
                .load::<GoalRow>(connection)
                .map_err(GoalRepositoryError::persistence)?;
            rows.into_iter().map(row_to_goal).collect()
        })
        .await
    }
}

fn to_new_row(goal: &Goal) -> GoalRepositoryResult<NewGoalRow> {
    let image = goal
        .image()
        .map(serde_json::to_value)
        .transpose()
        .map_err(GoalRepositoryError::persistence)?;

    Ok(NewGoalRow {
        id: goal.id().into_inner(),
        title: goal.title().as_str().to_owned(),
        description: goal.description().map(str::to_owned),
        image,
        goal_type: goal.goal_type().as_str().to_owned(),
        status: goal.status().as_str().to_owned(),
        completed_at: goal.completed_at(),
        approved_at: goal.approved_at(),
        rejected_at: goal.rejected_at(),
        rejection_reason: goal.rejection_reason().map(str::to_owned),
        created_at: goal.created_at(),
        updated_at: goal.updated_at(),
    })
}

fn to_changeset(goal: &Goal) -> GoalRepositoryResult<GoalChangesetRow> {
    let NewGoalRow {
        title,
        description,
        image,
        goal_type,
        status,
        completed_at,
        approved_at,
        rejected_at,
        rejection_reason,
        updated_at,
        ..
    } = to_new_row(goal)?;

    Ok(GoalChangesetRow {
        title,
        description,
        image,
        goal_type,
        status,
        completed_at,
        approved_at,
        rejected_at,
        rejection_reason,
        updated_at,
    })
}

fn row_to_goal(row: GoalRow) -> GoalRepositoryResult<Goal> {
    let GoalRow {
        id,
        title,
        description,
        image,
        goal_type,
        status,
        completed_at,
        approved_at,
        rejected_at,
        rejection_reason,
        created_at,
        updated_at,
    } = row;

    let parsed_title = GoalTitle::new(title).map_err(GoalRepositoryError::invalid_persisted_data)?;
    let parsed_image = image
        .map(serde_json::from_value::<ImageRef>)
        .transpose()
        .map_err(GoalRepositoryError::invalid_persisted_data)?;
    let parsed_type = GoalType::try_from(goal_type.as_str())
        .map_err(GoalRepositoryError::invalid_persisted_data)?;
    let parsed_status = GoalStatus::try_from(status.as_str())
        .map_err(GoalRepositoryError::invalid_persisted_data)?;

    let data = PersistedGoalData {
        id: GoalId::from_uuid(id),
        title: parsed_title,
        description,
        image: parsed_image,
        goal_type: parsed_type,
        status: parsed_status,
        completed_at,
        approved_at,
        rejected_at,
        rejection_reason,
        created_at,
        updated_at,
    };
    Ok(Goal::from_persisted(data))
}
