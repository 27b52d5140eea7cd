//! Coordinator results for replicated state machines
//!
//! An operation handler answers each operation with a `CoordinatorResult`:
//! the records to append to the log and an optional response for the caller.

pub mod error;
pub mod state_machine;

pub use error::ResultError;
pub use state_machine::{CoordinatorResult, OperationHandler};
