use camino::Utf8Path;
use pipeguard_types::{CancelToken, CheckResult, Fs, PolicySource};

/// Per-file validation capability, supplied by the caller.
///
/// The aggregation loop calls this exactly once per target file and never
/// retries. Returned errors are opaque: their text is carried verbatim
/// into the combined failure, never parsed or classified.
pub trait Validator {
    fn validate(
        &self,
        cancel: &CancelToken,
        fs: &dyn Fs,
        target: &Utf8Path,
        sources: &[PolicySource],
        namespace: &str,
    ) -> anyhow::Result<CheckResult>;
}

/// Closures with the validation signature are validators, so production
/// evaluation and test doubles share one contract.
impl<F> Validator for F
where
    F: Fn(
        &CancelToken,
        &dyn Fs,
        &Utf8Path,
        &[PolicySource],
        &str,
    ) -> anyhow::Result<CheckResult>,
{
    fn validate(
        &self,
        cancel: &CancelToken,
        fs: &dyn Fs,
        target: &Utf8Path,
        sources: &[PolicySource],
        namespace: &str,
    ) -> anyhow::Result<CheckResult> {
        self(cancel, fs, target, sources, namespace)
    }
}
