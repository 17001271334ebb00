//! Unit tests for the collection module.
