//! `PostgreSQL` adapters for goal persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresGoalRepository;
