//! Goal records for Rewardly.
//!
//! Goals track what a user is working toward and its review status. Layout
//! mirrors the task module: [`domain`], [`ports`], [`adapters`] and
//! [`services`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
