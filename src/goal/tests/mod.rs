//! Unit tests for the goal module.

mod domain_tests;
