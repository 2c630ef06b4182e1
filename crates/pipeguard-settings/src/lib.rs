//! Config parsing and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::PipeguardConfigV1;
pub use resolve::{EffectiveValidate, Overrides, ResolvedConfig, DEFAULT_NAMESPACE};

/// Parse `pipeguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PipeguardConfigV1> {
    let cfg: PipeguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective validation settings (config defaults + CLI overrides).
pub fn resolve_config(
    cfg: PipeguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
