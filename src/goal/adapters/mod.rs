//! Adapter implementations for goal persistence.

pub mod memory;
pub mod postgres;
