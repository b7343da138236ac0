//! Core types for the Galleon text-adventure engine.
//!
//! This crate provides:
//! - [`RoomId`] / [`ObjectId`] - World-unique identifiers
//! - [`Direction`] - The fixed four-direction exit vocabulary
//! - [`Response`] - Tagged interpreter output handed to the presentation layer
//! - [`CommandHistory`] - Bounded FIFO record of submitted input lines
//! - [`Error`] / [`ContentIssue`] - Runtime errors and content-integrity reports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod error;
pub mod history;
pub mod ids;
pub mod response;

pub use direction::Direction;
pub use error::{ContentIssue, Error, ErrorKind, HookKind, Result};
pub use history::{CommandHistory, HISTORY_CAPACITY};
pub use ids::{ObjectId, RoomId};
pub use response::Response;
