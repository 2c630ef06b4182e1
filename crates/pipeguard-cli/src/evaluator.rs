//! Built-in pipeline definition validator.
//!
//! Reads each target through the threaded filesystem and accepts any
//! well-formed mapping-rooted YAML document. Policy engine evaluation plugs
//! in through the same `Validator` seam; this keeps the binary usable
//! end-to-end without one.

use anyhow::Context;
use camino::Utf8Path;
use pipeguard_report::Validator;
use pipeguard_types::{CancelToken, CheckResult, Fs, PolicySource};
use tracing::debug;

pub struct DefinitionValidator;

impl Validator for DefinitionValidator {
    fn validate(
        &self,
        cancel: &CancelToken,
        fs: &dyn Fs,
        target: &Utf8Path,
        _sources: &[PolicySource],
        namespace: &str,
    ) -> anyhow::Result<CheckResult> {
        if cancel.is_cancelled() {
            anyhow::bail!("{target}: validation cancelled");
        }

        let text = fs
            .read_to_string(target)
            .with_context(|| format!("read {target}"))?;

        let doc: serde_yaml::Value =
            serde_yaml::from_str(&text).with_context(|| format!("parse {target} as YAML"))?;

        if !doc.is_mapping() {
            anyhow::bail!("{target}: definition is not a YAML mapping");
        }

        debug!(file = %target, "definition is well-formed");
        Ok(CheckResult::passing(target.as_str(), namespace))
    }
}
