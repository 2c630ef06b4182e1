//! Fuzz target for config parsing and resolution.
//!
//! Goal: arbitrary config text plus arbitrary CLI overrides should
//! **never panic** the parser or the resolver. Errors are fine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_resolve
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pipeguard_settings::{parse_config_toml, resolve_config, Overrides};

/// Structured input for resolution fuzzing.
/// Using Arbitrary allows libFuzzer to generate more meaningful test cases.
#[derive(Arbitrary, Debug)]
struct ResolveInput {
    /// Raw pipeguard.toml text
    config: String,
    /// CLI namespace override
    namespace: Option<String>,
    /// CLI policy sources
    policy: Vec<String>,
    /// CLI data sources
    data: Vec<String>,
}

fuzz_target!(|input: ResolveInput| {
    // Limit input size to avoid OOM and keep fuzzing fast
    if input.config.len() > 4096 || input.policy.len() > 20 || input.data.len() > 20 {
        return;
    }

    let Ok(cfg) = parse_config_toml(&input.config) else {
        return;
    };

    let overrides = Overrides {
        namespace: input.namespace,
        policy: input.policy,
        data: input.data,
        output: Vec::new(),
    };

    // Should never panic - errors are fine
    let _ = resolve_config(cfg, overrides);
});
