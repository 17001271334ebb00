//! In-memory adapters for collection persistence.

mod repository;

pub use repository::InMemoryCollectionRepository;
