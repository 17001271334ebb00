//! Catalogue collections for Rewardly.
//!
//! Collections group rewards for display and carry their own search-engine
//! metadata. Visibility is controlled with the `is_active` flag.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
