//! Application services for goals.

mod lifecycle;

pub use lifecycle::{
    CreateGoalRequest, GoalLifecycleError, GoalLifecycleResult, GoalLifecycleService,
};
