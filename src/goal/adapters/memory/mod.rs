//! In-memory adapters for goal persistence.

mod repository;

pub use repository::InMemoryGoalRepository;
