//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangesetRow, TaskRow},
    schema::tasks,
};
use crate::config::PgPool;
use crate::schema::Enumerated;
use crate::task::{
    domain::{DifficultyLevel, PersistedTaskData, RecurringFrequency, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task);

        self.run_blocking(move |connection| {
            let updated_count =
                diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                    .set(&changeset)
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::status.eq(status.as_str()))
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        coin_reward: task.coin_reward(),
        difficulty_level: task.difficulty_level().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        due_date: task.due_date(),
        duration: task.duration(),
        is_recurring: task.is_recurring(),
        recurring_frequency: task
            .recurring_frequency()
            .map(|frequency| frequency.as_str().to_owned()),
        completed_at: task.completed_at(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangesetRow {
    let NewTaskRow {
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
        updated_at,
        ..
    } = to_new_row(task);

    TaskChangesetRow {
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
        updated_at,
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
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
        created_at,
        updated_at,
    } = row;

    let parsed_difficulty = DifficultyLevel::try_from(difficulty_level.as_str())
        .map_err(TaskRepositoryError::invalid_persisted_data)?;
    let parsed_status =
        TaskStatus::try_from(status.as_str()).map_err(TaskRepositoryError::invalid_persisted_data)?;
    let parsed_frequency = recurring_frequency
        .as_deref()
        .map(RecurringFrequency::try_from)
        .transpose()
        .map_err(TaskRepositoryError::invalid_persisted_data)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description,
        coin_reward,
        difficulty_level: parsed_difficulty,
        status: parsed_status,
        due_date,
        duration,
        is_recurring,
        recurring_frequency: parsed_frequency,
        completed_at,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}

#[cfg(test)]
mod tests {
    use super::{TaskRow, row_to_task, to_new_row};
    use crate::task::{
        domain::{DifficultyLevel, RecurringFrequency, Task},
        ports::TaskRepositoryError,
    };
    use mockable::DefaultClock;

    fn stored_row(task: &Task) -> TaskRow {
        let row = to_new_row(task);
        TaskRow {
            id: row.id,
            title: row.title,
            description: row.description,
            coin_reward: row.coin_reward,
            difficulty_level: row.difficulty_level,
            status: row.status,
            due_date: row.due_date,
            duration: row.duration,
            is_recurring: row.is_recurring,
            recurring_frequency: row.recurring_frequency,
            completed_at: row.completed_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    #[test]
    fn stored_row_reconstructs_the_same_task() {
        let task = Task::draft()
            .with_title("Feed the cat")
            .with_coin_reward(5)
            .with_difficulty_level(DifficultyLevel::Easy)
            .recurring(RecurringFrequency::Daily)
            .build(&DefaultClock)
            .expect("valid task");

        let row = stored_row(&task);
        assert_eq!(row.difficulty_level, "easy");
        assert_eq!(row.status, "assigned");
        assert_eq!(row.recurring_frequency.as_deref(), Some("daily"));

        let restored = row_to_task(row).expect("row should decode");
        assert_eq!(restored, task);
    }

    #[test]
    fn unknown_persisted_difficulty_is_reported_as_invalid_data() {
        let task = Task::draft()
            .with_title("Mow the lawn")
            .with_coin_reward(20)
            .with_difficulty_level(DifficultyLevel::Hard)
            .build(&DefaultClock)
            .expect("valid task");
        let mut row = stored_row(&task);
        row.difficulty_level = "extreme".to_owned();

        let result = row_to_task(row);

        assert!(matches!(
            result,
            Err(TaskRepositoryError::InvalidPersistedData(_))
        ));
    }
}
