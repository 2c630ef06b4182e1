//! Validation driving and result aggregation.
//!
//! Input: target files, resolved sources, a namespace, and an injected
//! validator. Output: the full ordered report, or one combined failure.

#![forbid(unsafe_code)]

mod aggregate;
mod failure;
mod invoker;

pub use aggregate::{aggregate, AggregatedReport};
pub use failure::{RunFailure, ValidationFailure};
pub use invoker::Validator;
