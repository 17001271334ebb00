//! Adapter implementations for collection persistence.

pub mod memory;
pub mod postgres;
