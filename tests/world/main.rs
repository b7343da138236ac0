//! Integration tests for the galleon_world crate.
//!
//! Tests for world construction and mutation:
//! - Content validation (duplicate ids, dangling exits, reserved names)
//! - Player movement and exit statuses

mod content_tests;
mod movement_tests;
