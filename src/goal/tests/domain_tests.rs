//! Domain-focused tests for goal titles, construction, and mutation.

use crate::goal::domain::{
    Goal, GoalChanges, GoalDraft, GoalStatus, GoalTitle, GoalType, goal_schema,
};
use crate::image::ImageRef;
use crate::schema::{
    DomainError, Patch, PostgresTypeMapper, RecordError, SchemaConstructionError, ValidationError,
};
use crate::test_support::SteppingClock;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn clock() -> SteppingClock {
    SteppingClock::new()
}

fn draft_titled(title: &str) -> GoalDraft {
    Goal::draft()
        .with_title(title)
        .with_goal_type(GoalType::Task)
}

#[rstest]
#[case(2)]
#[case(50)]
#[case(100)]
fn titles_within_bounds_are_accepted(clock: SteppingClock, #[case] length: usize) {
    let title = "g".repeat(length);

    let goal = draft_titled(&title).build(&clock).expect("valid goal");

    assert_eq!(goal.title().as_str(), title);
}

#[rstest]
#[case(1)]
#[case(101)]
fn titles_outside_bounds_are_rejected(clock: SteppingClock, #[case] length: usize) {
    let result = draft_titled(&"g".repeat(length)).build(&clock);

    assert_eq!(
        result,
        Err(RecordError::Validation(ValidationError::Length {
            field: "title",
            min: 2,
            max: 100,
            actual: length,
        }))
    );
}

#[rstest]
fn empty_title_reports_cannot_be_empty() {
    let err = GoalTitle::new("").expect_err("empty title must fail");

    assert_eq!(err, ValidationError::Empty { field: "title" });
    assert_eq!(err.to_string(), "Title cannot be empty");
}

#[rstest]
fn title_length_counts_characters_not_bytes() {
    let title = "é".repeat(100);
    assert!(GoalTitle::new(title).is_ok());
}

#[rstest]
fn title_deserialization_enforces_rules() {
    assert!(serde_json::from_value::<GoalTitle>(json!("x")).is_err());
    assert!(serde_json::from_value::<GoalTitle>(json!("ok")).is_ok());
}

#[rstest]
fn build_applies_pending_default(clock: SteppingClock) {
    let goal = draft_titled("Finish homework streak")
        .build(&clock)
        .expect("valid goal");

    assert_eq!(goal.status(), GoalStatus::Pending);
    assert_eq!(goal.image(), None);
    assert_eq!(goal.rejection_reason(), None);
    assert_eq!(goal.created_at(), goal.updated_at());
}

#[rstest]
fn missing_goal_type_fails_construction(clock: SteppingClock) {
    let result = Goal::draft().with_title("Buy a book").build(&clock);

    assert_eq!(
        result,
        Err(RecordError::Construction(
            SchemaConstructionError::MissingRequiredField {
                entity: "Goal",
                field: "type",
            }
        ))
    );
}

#[rstest]
fn unknown_goal_type_is_a_domain_error() {
    assert_eq!(
        GoalType::try_from("STARS"),
        Err(DomainError {
            field: "type",
            value: "STARS".to_owned(),
            allowed: vec!["TASK", "COIN"],
        })
    );
}

#[rstest]
#[case(json!("task"), "task")]
#[case(json!("STARS"), "STARS")]
fn deserializing_an_unknown_goal_type_reports_the_domain_error(
    #[case] literal: serde_json::Value,
    #[case] shown: &str,
) {
    let err = serde_json::from_value::<GoalType>(literal).expect_err("unknown goal type");

    assert_eq!(
        err.to_string(),
        format!("invalid value '{shown}' for type, expected one of: TASK, COIN")
    );
}

#[rstest]
fn goal_status_deserializes_from_its_storage_literal() {
    assert_eq!(
        serde_json::from_value::<GoalStatus>(json!("APPROVED")).expect("known literal"),
        GoalStatus::Approved
    );
}

#[rstest]
fn independently_built_goals_get_distinct_ids(clock: SteppingClock) {
    let first = draft_titled("Read ten books").build(&clock).expect("first goal");
    let second = draft_titled("Read ten books").build(&clock).expect("second goal");

    assert_ne!(first.id(), second.id());
}

#[rstest]
fn rejection_fields_are_set_independently_of_status(clock: SteppingClock) {
    let mut goal = draft_titled("Learn to swim")
        .build(&clock)
        .expect("valid goal");
    let created_at = goal.created_at();

    goal.apply(
        GoalChanges {
            rejection_reason: Patch::Set("Not yet".to_owned()),
            ..GoalChanges::default()
        },
        &clock,
    );

    assert_eq!(goal.status(), GoalStatus::Pending);
    assert_eq!(goal.rejection_reason(), Some("Not yet"));
    assert_eq!(goal.rejected_at(), None);
    assert_eq!(goal.created_at(), created_at);
    assert!(goal.updated_at() > created_at);
}

#[rstest]
fn image_can_be_set_and_cleared(clock: SteppingClock) {
    let mut goal = draft_titled("Visit the zoo")
        .build(&clock)
        .expect("valid goal");
    let image = ImageRef::new("https://cdn.example.com/zoo.png").expect("valid image");

    goal.apply(
        GoalChanges {
            image: Patch::Set(image.clone()),
            ..GoalChanges::default()
        },
        &clock,
    );
    assert_eq!(goal.image(), Some(&image));

    goal.apply(
        GoalChanges {
            image: Patch::Cleared,
            ..GoalChanges::default()
        },
        &clock,
    );
    assert_eq!(goal.image(), None);
}

#[rstest]
fn serialized_goal_satisfies_its_schema(clock: SteppingClock) {
    let schema = goal_schema(&PostgresTypeMapper).expect("goal schema");
    let goal = Goal::draft()
        .with_title("Save 500 coins")
        .with_goal_type(GoalType::Coin)
        .with_image(ImageRef::new("https://cdn.example.com/piggy.png").expect("valid image"))
        .build(&clock)
        .expect("valid goal");

    let record = serde_json::to_value(&goal).expect("serializable goal");

    assert_eq!(record.get("type"), Some(&json!("COIN")));
    assert_eq!(record.get("status"), Some(&json!("PENDING")));
    schema.check_record(&record).expect("record should satisfy schema");
}
