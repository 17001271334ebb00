//! Service orchestration tests for task creation and mutation.

use std::sync::Arc;

use crate::schema::{DomainError, RecordError};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{DifficultyLevel, RecurringFrequency, TaskChanges, TaskId, TaskStatus},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService},
};
use crate::test_support::SteppingClock;
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<InMemoryTaskRepository, SteppingClock>;

#[fixture]
fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(SteppingClock::new()),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_and_is_retrievable(service: TestService) {
    let request = CreateTaskRequest::new("Water the plants", 15, "easy")
        .with_description("Front and back garden")
        .with_duration(20)
        .recurring("weekly");

    let created = service
        .create(request)
        .await
        .expect("task creation should succeed");
    let fetched = service
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(created.difficulty_level(), DifficultyLevel::Easy);
    assert_eq!(created.status(), TaskStatus::Assigned);
    assert!(created.is_recurring());
    assert_eq!(created.recurring_frequency(), Some(RecurringFrequency::Weekly));
    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_unknown_difficulty(service: TestService) {
    let result = service
        .create(CreateTaskRequest::new("Climb Everest", 1000, "extreme"))
        .await;

    let Err(TaskLifecycleError::Record(RecordError::Domain(DomainError { field, value, .. }))) =
        &result
    else {
        panic!("expected a domain error, got {result:?}");
    };
    assert_eq!(*field, "difficultyLevel");
    assert_eq!(value, "extreme");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_unknown_initial_status(service: TestService) {
    let result = service
        .create(CreateTaskRequest::new("Sweep", 3, "easy").with_status("archived"))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Record(RecordError::Domain(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_status_moves_updated_at_only(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Read a chapter", 5, "medium"))
        .await
        .expect("task creation should succeed");

    let updated = service
        .update_status(created.id(), "completed")
        .await
        .expect("status update should succeed");

    assert_eq!(updated.status(), TaskStatus::Completed);
    assert_eq!(updated.created_at(), created.created_at());
    assert!(updated.updated_at() > created.updated_at());

    let stored = service
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored, Some(updated));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_update_returns_stored_task_unchanged(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Practise piano", 8, "hard"))
        .await
        .expect("task creation should succeed");

    let unchanged = service
        .update(created.id(), TaskChanges::default())
        .await
        .expect("empty update should succeed");

    assert_eq!(unchanged, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_task_is_not_found(service: TestService) {
    let missing = TaskId::new();

    let result = service.update_status(missing, "approved").await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(TaskRepositoryError::NotFound(id))) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_by_status_returns_matching_tasks_oldest_first(service: TestService) {
    let first = service
        .create(CreateTaskRequest::new("Fold laundry", 4, "easy"))
        .await
        .expect("first task");
    let second = service
        .create(CreateTaskRequest::new("Empty bins", 2, "easy"))
        .await
        .expect("second task");
    let approved = service
        .create(CreateTaskRequest::new("Wash car", 12, "medium").with_status("approved"))
        .await
        .expect("approved task");

    let assigned = service
        .list_by_status("assigned")
        .await
        .expect("listing should succeed");
    let ids: Vec<TaskId> = assigned.iter().map(|task| task.id()).collect();

    assert_eq!(ids, vec![first.id(), second.id()]);
    assert!(!ids.contains(&approved.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_by_status_rejects_unknown_literal(service: TestService) {
    let result = service.list_by_status("pending").await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Record(RecordError::Domain(_)))
    ));
}
