//! State machine layer
//!
//! - `CoordinatorResult`: records plus optional response for one operation
//! - `OperationHandler`: application logic producing those results

pub mod result;
pub mod traits;

pub use result::CoordinatorResult;
pub use traits::{HandlerResult, OperationHandler};
