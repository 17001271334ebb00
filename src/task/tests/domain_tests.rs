//! Domain-focused tests for task construction and mutation.

use crate::schema::{
    DomainError, Enumerated, Patch, PostgresTypeMapper, RecordError, SchemaConstructionError,
};
use crate::task::domain::{
    DifficultyLevel, RecurringFrequency, Task, TaskChanges, TaskDraft, TaskId, TaskStatus,
    task_schema,
};
use crate::test_support::SteppingClock;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn clock() -> SteppingClock {
    SteppingClock::new()
}

fn valid_draft() -> TaskDraft {
    Task::draft()
        .with_title("Tidy the bedroom")
        .with_coin_reward(10)
        .with_difficulty_level(DifficultyLevel::Medium)
}

#[rstest]
fn build_applies_declared_defaults(clock: SteppingClock) {
    let task = valid_draft().build(&clock).expect("valid task");

    assert_eq!(task.status(), TaskStatus::Assigned);
    assert!(!task.is_recurring());
    assert_eq!(task.description(), None);
    assert_eq!(task.recurring_frequency(), None);
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
fn zero_coin_reward_is_accepted(clock: SteppingClock) {
    let task = valid_draft()
        .with_coin_reward(0)
        .build(&clock)
        .expect("zero is a valid reward");
    assert_eq!(task.coin_reward(), 0);
}

#[rstest]
fn missing_coin_reward_fails_construction(clock: SteppingClock) {
    let result = Task::draft()
        .with_title("Tidy the bedroom")
        .with_difficulty_level(DifficultyLevel::Easy)
        .build(&clock);

    assert_eq!(
        result,
        Err(RecordError::Construction(
            SchemaConstructionError::MissingRequiredField {
                entity: "Task",
                field: "coinReward",
            }
        ))
    );
}

#[rstest]
#[case(Task::draft().with_coin_reward(1).with_difficulty_level(DifficultyLevel::Easy), "title")]
#[case(Task::draft().with_title("Walk the dog").with_coin_reward(1), "difficultyLevel")]
fn missing_required_field_is_named(
    clock: SteppingClock,
    #[case] draft: TaskDraft,
    #[case] field: &str,
) {
    let result = draft.build(&clock);
    assert!(matches!(
        result,
        Err(RecordError::Construction(SchemaConstructionError::MissingRequiredField {
            field: missing,
            ..
        })) if missing == field
    ));
}

#[rstest]
fn independently_built_tasks_get_distinct_ids() {
    let first = valid_draft().build(&DefaultClock).expect("first task");
    let second = valid_draft().build(&DefaultClock).expect("second task");
    assert_ne!(first.id(), second.id());
}

#[rstest]
fn unknown_difficulty_is_a_domain_error() {
    let result = DifficultyLevel::try_from("extreme");
    assert_eq!(
        result,
        Err(DomainError {
            field: "difficultyLevel",
            value: "extreme".to_owned(),
            allowed: vec!["easy", "medium", "hard"],
        })
    );
}

#[rstest]
fn deserializing_an_unknown_difficulty_reports_the_domain_error() {
    let expected = DifficultyLevel::try_from("extreme")
        .expect_err("extreme is not a difficulty")
        .to_string();

    let err = serde_json::from_value::<DifficultyLevel>(json!("extreme"))
        .expect_err("extreme must not deserialize");

    assert_eq!(err.to_string(), expected);
    assert_eq!(
        expected,
        "invalid value 'extreme' for difficultyLevel, expected one of: easy, medium, hard"
    );
}

#[rstest]
fn deserializing_a_task_routes_enum_literals_through_the_domain_check() {
    let task = valid_draft().build(&DefaultClock).expect("valid task");
    let mut stored = serde_json::to_value(&task).expect("serializable task");
    if let Some(object) = stored.as_object_mut() {
        object.insert("status".to_owned(), json!("Assigned"));
    }

    let err = serde_json::from_value::<Task>(stored).expect_err("capitalized status");

    assert!(
        err.to_string()
            .contains("invalid value 'Assigned' for status, expected one of: assigned"),
        "unexpected error: {err}"
    );
}

#[rstest]
fn serialized_literals_deserialize_back() {
    let stored = serde_json::to_value(RecurringFrequency::Weekly).expect("serializable");

    assert_eq!(stored, json!("weekly"));
    assert_eq!(
        serde_json::from_value::<RecurringFrequency>(stored).expect("known literal"),
        RecurringFrequency::Weekly
    );
}

#[rstest]
#[case("assigned", TaskStatus::Assigned)]
#[case("completed", TaskStatus::Completed)]
#[case("approved", TaskStatus::Approved)]
#[case("rejected", TaskStatus::Rejected)]
fn status_literals_parse(#[case] literal: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(literal), Ok(expected));
    assert_eq!(expected.as_str(), literal);
}

#[rstest]
fn status_literals_are_case_sensitive() {
    assert!(TaskStatus::try_from("Assigned").is_err());
}

#[rstest]
fn applying_changes_advances_only_updated_at(clock: SteppingClock) {
    let mut task = valid_draft().build(&clock).expect("valid task");
    let created_at = task.created_at();

    let changed = task.apply(
        TaskChanges {
            status: Some(TaskStatus::Completed),
            completed_at: Patch::Set(created_at),
            ..TaskChanges::default()
        },
        &clock,
    );

    assert!(changed);
    assert_eq!(task.status(), TaskStatus::Completed);
    assert_eq!(task.completed_at(), Some(created_at));
    assert_eq!(task.created_at(), created_at);
    assert!(task.updated_at() > created_at);
}

#[rstest]
fn empty_changes_leave_task_untouched(clock: SteppingClock) {
    let mut task = valid_draft().build(&clock).expect("valid task");
    let before = task.clone();

    assert!(!task.apply(TaskChanges::default(), &clock));
    assert_eq!(task, before);
}

#[rstest]
fn cleared_patch_removes_optional_value(clock: SteppingClock) {
    let mut task = valid_draft()
        .with_description("Make the bed too")
        .recurring(RecurringFrequency::Weekly)
        .build(&clock)
        .expect("valid task");

    task.apply(
        TaskChanges {
            description: Patch::Cleared,
            is_recurring: Some(false),
            recurring_frequency: Patch::Cleared,
            ..TaskChanges::default()
        },
        &clock,
    );

    assert_eq!(task.description(), None);
    assert!(!task.is_recurring());
    assert_eq!(task.recurring_frequency(), None);
}

#[rstest]
fn serialized_task_satisfies_its_schema(clock: SteppingClock) {
    let schema = task_schema(&PostgresTypeMapper).expect("task schema");
    let task = valid_draft()
        .with_duration(30)
        .recurring(RecurringFrequency::Daily)
        .build(&clock)
        .expect("valid task");

    let record = serde_json::to_value(&task).expect("serializable task");

    assert_eq!(record.get("difficultyLevel"), Some(&json!("medium")));
    assert_eq!(record.get("status"), Some(&json!("assigned")));
    schema.check_record(&record).expect("record should satisfy schema");
}

#[rstest]
fn schema_declares_enumerated_domains_from_types() {
    let schema = task_schema(&PostgresTypeMapper).expect("task schema");
    let column = schema.field("recurringFrequency").expect("declared field");

    assert!(column.spec().is_nullable());
    assert_eq!(
        column.checks(),
        [format!(
            "recurring_frequency IN ({})",
            RecurringFrequency::literals()
                .iter()
                .map(|literal| format!("'{literal}'"))
                .collect::<Vec<_>>()
                .join(", ")
        )]
    );
}

#[rstest]
fn task_ids_serialize_as_bare_uuids() {
    let uuid = uuid::Uuid::new_v4();
    let id = TaskId::from_uuid(uuid);

    assert_eq!(serde_json::to_value(id).expect("serializable"), json!(uuid.to_string()));
    assert_eq!(id.to_string(), uuid.to_string());
    assert_eq!(id.into_inner(), uuid);
}
