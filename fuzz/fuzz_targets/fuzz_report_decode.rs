//! Fuzz target for report decoding.
//!
//! Goal: decoding untrusted report bytes should **never panic**.
//! Decoders may return errors; anything that decodes must re-encode cleanly.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_report_decode
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use pipeguard_render::{render_json, render_yaml};
use pipeguard_types::CheckResult;

fuzz_target!(|data: &[u8]| {
    // JSON decode - should never panic
    if let Ok(report) = serde_json::from_slice::<Vec<CheckResult>>(data) {
        let _ = render_json(&report);
        let _ = render_yaml(&report);
    }

    // YAML decode - should never panic
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(report) = serde_yaml::from_str::<Vec<CheckResult>>(text) {
            let _ = render_yaml(&report);
        }
    }
});
