//! In-memory integration tests for task records.

use super::helpers::{TaskService, task_service};
use rewardly::schema::Patch;
use rewardly::task::{
    domain::{TaskChanges, TaskStatus},
    services::{CreateTaskRequest, TaskLifecycleError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_tasks_receive_defaults_and_distinct_ids(task_service: TaskService) {
    let first = task_service
        .create(CreateTaskRequest::new("Feed the fish", 0, "easy"))
        .await
        .expect("zero reward should be accepted");
    let second = task_service
        .create(CreateTaskRequest::new("Feed the fish", 0, "easy"))
        .await
        .expect("second task");

    assert_ne!(first.id(), second.id());
    assert_eq!(first.status(), TaskStatus::Assigned);
    assert!(!first.is_recurring());
    assert_eq!(first.coin_reward(), 0);
    assert_eq!(first.created_at(), first.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_a_task_keeps_created_at(task_service: TaskService) {
    let created = task_service
        .create(CreateTaskRequest::new("Hoover the stairs", 6, "medium"))
        .await
        .expect("task creation should succeed");
    let completed_at = created.created_at();

    let completed = task_service
        .update(
            created.id(),
            TaskChanges {
                status: Some(TaskStatus::Completed),
                completed_at: Patch::Set(completed_at),
                ..TaskChanges::default()
            },
        )
        .await
        .expect("update should succeed");

    assert_eq!(completed.created_at(), created.created_at());
    assert!(completed.updated_at() > created.updated_at());
    assert_eq!(completed.completed_at(), Some(completed_at));

    let listed = task_service
        .list_by_status("completed")
        .await
        .expect("listing should succeed");
    assert_eq!(listed, vec![completed]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn extreme_difficulty_is_rejected_before_storage(task_service: TaskService) {
    let result = task_service
        .create(CreateTaskRequest::new("Run a marathon", 500, "extreme"))
        .await;

    assert!(matches!(result, Err(TaskLifecycleError::Record(_))));
    let assigned = task_service
        .list_by_status("assigned")
        .await
        .expect("listing should succeed");
    assert!(assigned.is_empty());
}
