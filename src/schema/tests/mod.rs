//! Unit tests for the schema registry.
