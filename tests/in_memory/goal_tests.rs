//! In-memory integration tests for goal records.

use super::helpers::{GoalService, goal_service};
use rewardly::goal::{
    domain::{GoalChanges, GoalStatus, GoalTitle},
    services::{CreateGoalRequest, GoalLifecycleError},
};
use rewardly::schema::{Patch, RecordError, ValidationError};
use rstest::rstest;

#[rstest]
#[case(1, false)]
#[case(2, true)]
#[case(100, true)]
#[case(101, false)]
#[tokio::test(flavor = "multi_thread")]
async fn goal_title_length_is_bounded(
    goal_service: GoalService,
    #[case] length: usize,
    #[case] accepted: bool,
) {
    let result = goal_service
        .create(CreateGoalRequest::new("a".repeat(length), "COIN"))
        .await;

    assert_eq!(result.is_ok(), accepted);
    if !accepted {
        assert!(matches!(
            result,
            Err(GoalLifecycleError::Record(RecordError::Validation(
                ValidationError::Length { .. }
            )))
        ));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejection_is_recorded_without_implied_transitions(goal_service: GoalService) {
    let created = goal_service
        .create(CreateGoalRequest::new("Tidy room daily", "TASK"))
        .await
        .expect("goal creation should succeed");
    let reviewed_at = created.created_at();

    let rejected = goal_service
        .update(
            created.id(),
            GoalChanges {
                status: Some(GoalStatus::Rejected),
                rejected_at: Patch::Set(reviewed_at),
                rejection_reason: Patch::Set("Room still messy".to_owned()),
                ..GoalChanges::default()
            },
        )
        .await
        .expect("update should succeed");

    assert_eq!(rejected.status(), GoalStatus::Rejected);
    assert_eq!(rejected.rejection_reason(), Some("Room still messy"));
    assert_eq!(rejected.approved_at(), None);
    assert_eq!(rejected.completed_at(), None);

    let renamed = goal_service
        .update(
            created.id(),
            GoalChanges {
                title: Some(GoalTitle::new("Tidy room weekly").expect("valid title")),
                ..GoalChanges::default()
            },
        )
        .await
        .expect("rename should succeed");
    assert_eq!(renamed.title().as_str(), "Tidy room weekly");
    assert_eq!(renamed.status(), GoalStatus::Rejected);
}
