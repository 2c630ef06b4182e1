//! Report rendering: output formats, output specs, and delivery.

#![forbid(unsafe_code)]

mod deliver;
mod encode;
mod spec;

pub use deliver::{deliver, DeliverError};
pub use encode::{encode, render_json, render_yaml, EncodeError};
pub use spec::{OutputFormat, OutputSpec, ParseOutputSpecError};
