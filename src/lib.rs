//! Rewardly: task, goal, and reward-collection records.
//!
//! This crate declares the persisted entities of the Rewardly reward system
//! and the schema registry that describes them to storage backends.
//!
//! # Architecture
//!
//! Each entity context follows hexagonal architecture principles:
//!
//! - **Domain**: Records, closed enumerations, and their declarative schemas
//! - **Ports**: Repository traits
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//!
//! # Modules
//!
//! - [`schema`]: Entity schema registry and record validation
//! - [`task`]: Assignable tasks with coin rewards
//! - [`goal`]: Goals and their review status
//! - [`collection`]: Catalogue collections
//! - [`image`]: Typed image references stored as JSON
//! - [`config`]: Layered configuration and the database pool

pub mod collection;
pub mod config;
pub mod goal;
pub mod image;
pub mod schema;
pub mod task;

#[cfg(test)]
mod test_support;
