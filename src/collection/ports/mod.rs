//! Port contracts for collection persistence.

pub mod repository;

pub use repository::{
    CollectionRepository, CollectionRepositoryError, CollectionRepositoryResult,
};
