//! Integration tests for the galleon_events crate.
//!
//! Tests for the hook tables:
//! - Building the three tables from declared lists, with collision reports
//! - Query semantics (order-sensitive pairs, reversal hints)

mod build_tests;
mod query_tests;
