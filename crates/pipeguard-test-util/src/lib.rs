//! Shared test utilities for the pipeguard workspace.
//!
//! This crate exists because several member crates' test suites need the
//! same validator doubles and fixtures; `#[cfg(test)]` modules inside one
//! crate would not be visible to the others.

use camino::Utf8Path;
use pipeguard_report::Validator;
use pipeguard_types::{CancelToken, CheckResult, Fs, MemFs, PolicySource};
use std::collections::BTreeSet;

/// A small well-formed pipeline definition for filesystem-backed tests.
pub const SAMPLE_PIPELINE_YAML: &str = "\
apiVersion: tekton.dev/v1beta1
kind: Pipeline
metadata:
  name: sample
spec:
  tasks:
    - name: build
      taskRef:
        name: build-image
";

/// An in-memory filesystem seeded with the given (path, contents) pairs.
pub fn mem_fs_with(files: &[(&str, &str)]) -> MemFs {
    let fs = MemFs::new();
    for (path, contents) in files {
        fs.write_all(Utf8Path::new(path), contents.as_bytes())
            .unwrap_or_else(|_| unreachable!("MemFs writes are infallible"));
    }
    fs
}

/// A validator that passes every file, echoing the path and namespace.
pub fn passing_validator() -> impl Validator {
    |_: &CancelToken,
     _: &dyn Fs,
     target: &Utf8Path,
     _: &[PolicySource],
     namespace: &str|
     -> anyhow::Result<CheckResult> { Ok(CheckResult::passing(target.as_str(), namespace)) }
}

/// A validator double driven by a script of failing paths.
///
/// Listed paths fail with an error whose text is exactly the path, which
/// keeps combined-failure assertions readable; everything else passes.
#[derive(Clone, Debug, Default)]
pub struct ScriptedValidator {
    failing: BTreeSet<String>,
}

impl ScriptedValidator {
    pub fn failing_paths(paths: &[&str]) -> Self {
        Self {
            failing: paths.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Validator for ScriptedValidator {
    fn validate(
        &self,
        _cancel: &CancelToken,
        _fs: &dyn Fs,
        target: &Utf8Path,
        _sources: &[PolicySource],
        namespace: &str,
    ) -> anyhow::Result<CheckResult> {
        if self.failing.contains(target.as_str()) {
            anyhow::bail!("{target}");
        }
        Ok(CheckResult::passing(target.as_str(), namespace))
    }
}

/// The exact compact-JSON report for files that all pass validation.
pub fn passing_report_json(files: &[&str], namespace: &str) -> String {
    let report: Vec<CheckResult> = files
        .iter()
        .map(|file| CheckResult::passing(*file, namespace))
        .collect();
    serde_json::to_string(&report)
        .unwrap_or_else(|_| unreachable!("passing reports always serialize"))
}
