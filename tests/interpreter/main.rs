//! Integration tests for the galleon_interpreter crate.
//!
//! Tests for the full command pipeline:
//! - The literal end-to-end play-through scenarios
//! - The disambiguation protocol and its cancellation rules
//! - The two-stage `use … with …` flow
//! - Suggestion consistency with live world state

mod fixtures;
mod suggestion_tests;
