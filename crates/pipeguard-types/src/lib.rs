//! Stable DTOs and shared ports used across the pipeguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted validation report
//! - typed policy/data source descriptors
//! - the filesystem port threaded through validation and rendering
//! - the cancellation token handed to validators

#![forbid(unsafe_code)]

pub mod cancel;
pub mod check;
pub mod fs;
pub mod source;

pub use cancel::CancelToken;
pub use check::{CheckResult, Violation, SCHEMA_REPORT_V1};
pub use fs::{Fs, MemFs, OsFs};
pub use source::{PolicySource, SourceKind};
