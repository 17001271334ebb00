//! Task records for Rewardly.
//!
//! Tasks are assignable units of work carrying a coin reward. The module
//! follows hexagonal architecture:
//!
//! - Domain types and the declarative task schema in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
