//! Operation handler abstraction
//!
//! The handler is the application logic the runtime coordinates. Given an
//! operation it decides the outcome: which records to append and what to
//! answer. It does not touch the log itself.

use crate::error::ResultError;

use super::CoordinatorResult;

/// Result of handling one operation
pub type HandlerResult<H> = Result<
    CoordinatorResult<<H as OperationHandler>::Response, <H as OperationHandler>::Record>,
    <H as OperationHandler>::Error,
>;

/// Operation handler trait - produces one `CoordinatorResult` per operation
///
/// Implementations must be deterministic: handling the same operations in
/// the same order must produce the same results on every replica.
pub trait OperationHandler: Sized + Send {
    /// Operation submitted by a caller
    type Operation;
    /// Value returned to the caller once the records are appended
    type Response;
    /// Mutation appended to the log
    type Record;
    /// Handler failure; a rejected result construction converts into it
    type Error: std::error::Error + From<ResultError>;

    /// Handle an operation and describe its outcome
    fn handle(&mut self, operation: Self::Operation) -> HandlerResult<Self>;
}
