//! `PostgreSQL` adapters for collection persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresCollectionRepository;
