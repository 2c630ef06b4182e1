use crate::spec::OutputFormat;
use pipeguard_types::CheckResult;
use thiserror::Error;

/// Compact JSON array, no trailing newline. The byte-for-byte shape
/// automation diffs against.
pub fn render_json(report: &[CheckResult]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(report)
}

/// YAML block sequence of the same records, trailing newline included.
pub fn render_yaml(report: &[CheckResult]) -> Result<Vec<u8>, serde_yaml::Error> {
    serde_yaml::to_string(report).map(String::into_bytes)
}

/// Encode one report in one format.
pub fn encode(report: &[CheckResult], format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Json => Ok(render_json(report)?),
        OutputFormat::Yaml => Ok(render_yaml(report)?),
    }
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
