//! Fuzz target for output spec parsing.
//!
//! Goal: `--output` value parsing should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_output_spec
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use pipeguard_render::{OutputFormat, OutputSpec};

fuzz_target!(|data: &[u8]| {
    // Only test valid UTF-8 strings (flag values arrive as UTF-8)
    if let Ok(text) = std::str::from_utf8(data) {
        // Full spec parsing - should never panic
        let _ = text.parse::<OutputSpec>();

        // Bare format parsing - should never panic
        let _ = text.parse::<OutputFormat>();
    }
});
