//! Port contracts for goal persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by goal services.

pub mod repository;

pub use repository::{GoalRepository, GoalRepositoryError, GoalRepositoryResult};
