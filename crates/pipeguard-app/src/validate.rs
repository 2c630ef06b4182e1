//! The `validate` use case: config, sources, aggregation, delivery.

use anyhow::Context;
use camino::Utf8PathBuf;
use pipeguard_render::{deliver, DeliverError};
use pipeguard_report::{aggregate, AggregatedReport, RunFailure, Validator};
use pipeguard_settings::{EffectiveValidate, Overrides, PipeguardConfigV1};
use pipeguard_sources::resolve_sources;
use pipeguard_types::{CancelToken, Fs};
use std::io::Write;
use thiserror::Error;
use tracing::debug;

/// Input for the validate use case.
#[derive(Clone, Debug)]
pub struct ValidateInput<'a> {
    /// Target files, in validation order.
    pub files: &'a [Utf8PathBuf],
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the validate use case.
#[derive(Clone, Debug)]
pub struct ValidateOutput {
    /// The aggregated report that was delivered.
    pub report: AggregatedReport,
    /// The resolved settings the run used.
    pub effective: EffectiveValidate,
}

/// Run the validate use case end to end.
///
/// Resolution order: config defaults, then CLI overrides. The report is
/// delivered only when every file validated; any per-file failure turns
/// the whole run into a `RunFailure` and nothing is written anywhere.
pub fn run_validate<V>(
    input: ValidateInput<'_>,
    cancel: &CancelToken,
    fs: &dyn Fs,
    validator: &V,
    stdout: &mut dyn Write,
) -> Result<ValidateOutput, ValidateError>
where
    V: Validator + ?Sized,
{
    let cfg = if input.config_text.trim().is_empty() {
        PipeguardConfigV1::default()
    } else {
        parse_config(input.config_text)?
    };
    let resolved = pipeguard_settings::resolve_config(cfg, input.overrides.clone())
        .map_err(ValidateError::Config)?;
    let effective = resolved.effective;

    let sources = resolve_sources(&effective.policy, &effective.data);
    debug!(
        files = input.files.len(),
        sources = sources.len(),
        namespace = %effective.namespace,
        "starting validation"
    );

    let report = aggregate(
        cancel,
        fs,
        input.files,
        &sources,
        &effective.namespace,
        validator,
    )?;

    deliver(&report, &effective.output, fs, stdout)?;

    Ok(ValidateOutput { report, effective })
}

fn parse_config(text: &str) -> Result<PipeguardConfigV1, ValidateError> {
    pipeguard_settings::parse_config_toml(text)
        .context("parse config")
        .map_err(ValidateError::Config)
}

#[derive(Debug, Error)]
pub enum ValidateError {
    /// Config could not be parsed or resolved.
    #[error("{0:#}")]
    Config(anyhow::Error),

    /// At least one file failed validation; carries the combined failure.
    #[error(transparent)]
    Validation(#[from] RunFailure),

    /// The report could not be delivered to a destination.
    #[error(transparent)]
    Delivery(#[from] DeliverError),
}

/// Exit code for a failed run: 2 = validation failure, 1 = runtime error.
pub fn error_exit_code(err: &ValidateError) -> i32 {
    match err {
        ValidateError::Validation(_) => 2,
        ValidateError::Config(_) | ValidateError::Delivery(_) => 1,
    }
}
