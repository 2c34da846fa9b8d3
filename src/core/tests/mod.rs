//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Row lifecycle tests (add, edit, commit, cancel)
//! - Selection and deletion tests
//! - Reordering tests
//! - Key generation property tests
//! - Header navigation tests

#[cfg(test)]
mod header_tests;
#[cfg(test)]
mod lifecycle_tests;
#[cfg(test)]
mod ordering_tests;
