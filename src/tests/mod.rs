//! Test modules for the Makai table generator.
//!
//! This module contains the cross-component test infrastructure:
//! - Unit tests for configuration, errors, and the trie core
//! - Property-based tests using proptest
//! - Test fixtures and utilities
//!
//! Module-local suites (such as the trie's flat-format property tests)
//! live next to the code they exercise.

pub mod config_tests;
pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{code_strategy, create_test_dir, entity_name_strategy, sequence_strategy};
