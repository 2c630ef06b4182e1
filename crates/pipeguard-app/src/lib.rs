//! Thin use cases on top of the core crates. Keeps the CLI trivially small.

#![forbid(unsafe_code)]

mod validate;

pub use validate::{
    error_exit_code, run_validate, ValidateError, ValidateInput, ValidateOutput,
};
