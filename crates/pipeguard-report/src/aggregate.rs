use crate::failure::{RunFailure, ValidationFailure};
use crate::invoker::Validator;
use camino::Utf8PathBuf;
use pipeguard_types::{CancelToken, CheckResult, Fs, PolicySource};
use tracing::{debug, warn};

/// The full ordered report for one run: one entry per validated file, in
/// input order. Transient; rendering owns persistence.
pub type AggregatedReport = Vec<CheckResult>;

/// Validate every target file and aggregate the outcomes.
///
/// The validator runs once per file, in input order, with no
/// short-circuit: a failing file must not hide problems in the files
/// after it. Results and failures each keep input order. The two are
/// mutually exclusive outcomes; when any file fails, no report exists.
pub fn aggregate<V>(
    cancel: &CancelToken,
    fs: &dyn Fs,
    targets: &[Utf8PathBuf],
    sources: &[PolicySource],
    namespace: &str,
    validator: &V,
) -> Result<AggregatedReport, RunFailure>
where
    V: Validator + ?Sized,
{
    let mut results: Vec<CheckResult> = Vec::with_capacity(targets.len());
    let mut failures: Vec<ValidationFailure> = Vec::new();

    for target in targets {
        debug!(file = %target, namespace, "validating");
        match validator.validate(cancel, fs, target, sources, namespace) {
            Ok(result) => results.push(result),
            Err(cause) => {
                warn!(file = %target, "validation failed: {cause:#}");
                failures.push(ValidationFailure {
                    subject: target.to_string(),
                    cause,
                });
            }
        }
    }

    if failures.is_empty() {
        Ok(results)
    } else {
        Err(RunFailure::new(failures))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;
    use pipeguard_types::MemFs;
    use proptest::prelude::*;
    use std::cell::Cell;

    fn paths(values: &[&str]) -> Vec<Utf8PathBuf> {
        values.iter().map(|s| Utf8PathBuf::from(*s)).collect()
    }

    fn passing_validator() -> impl Validator {
        |_: &CancelToken,
         _: &dyn Fs,
         target: &Utf8Path,
         _: &[PolicySource],
         namespace: &str|
         -> anyhow::Result<CheckResult> {
            Ok(CheckResult::passing(target.as_str(), namespace))
        }
    }

    #[test]
    fn results_keep_input_order_and_carry_namespace() {
        let fs = MemFs::new();
        let targets = paths(&["b.yaml", "a.yaml", "c.yaml"]);

        let report = aggregate(
            &CancelToken::new(),
            &fs,
            &targets,
            &[],
            "pipeline.main",
            &passing_validator(),
        )
        .unwrap();

        let names: Vec<&str> = report.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["b.yaml", "a.yaml", "c.yaml"]);
        assert!(report.iter().all(|r| r.namespace == "pipeline.main"));
    }

    #[test]
    fn empty_target_list_yields_empty_report() {
        let fs = MemFs::new();
        let report = aggregate(
            &CancelToken::new(),
            &fs,
            &[],
            &[],
            "pipeline.main",
            &passing_validator(),
        )
        .unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn one_bad_file_does_not_stop_the_loop() {
        let fs = MemFs::new();
        let calls = Cell::new(0usize);
        let validator = |_: &CancelToken,
                         _: &dyn Fs,
                         target: &Utf8Path,
                         _: &[PolicySource],
                         namespace: &str|
         -> anyhow::Result<CheckResult> {
            calls.set(calls.get() + 1);
            if target.as_str() == "broken.yaml" {
                anyhow::bail!("{target}");
            }
            Ok(CheckResult::passing(target.as_str(), namespace))
        };

        let targets = paths(&["ok1.yaml", "broken.yaml", "ok2.yaml"]);
        let err = aggregate(
            &CancelToken::new(),
            &fs,
            &targets,
            &[],
            "pipeline.main",
            &validator,
        )
        .unwrap_err();

        assert_eq!(calls.get(), 3);
        assert_eq!(err.count(), 1);
        assert_eq!(err.failures()[0].subject, "broken.yaml");
    }

    #[test]
    fn all_failing_files_render_the_combined_text() {
        let fs = MemFs::new();
        let validator = |_: &CancelToken,
                         _: &dyn Fs,
                         target: &Utf8Path,
                         _: &[PolicySource],
                         _: &str|
         -> anyhow::Result<CheckResult> { anyhow::bail!("{target}") };

        let targets = paths(&["/path/file1.yaml", "/path/file2.yaml"]);
        let err = aggregate(
            &CancelToken::new(),
            &fs,
            &targets,
            &[],
            "pipeline.main",
            &validator,
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "2 errors occurred:\n\t* /path/file1.yaml\n\t* /path/file2.yaml\n"
        );
    }

    #[test]
    fn sources_and_cancel_state_reach_the_validator() {
        let fs = MemFs::new();
        let cancel = CancelToken::new();
        cancel.cancel();

        let validator = |cancel: &CancelToken,
                         _: &dyn Fs,
                         target: &Utf8Path,
                         sources: &[PolicySource],
                         namespace: &str|
         -> anyhow::Result<CheckResult> {
            assert!(cancel.is_cancelled());
            assert_eq!(sources.len(), 2);
            assert_eq!(sources[0].location, "rules");
            Ok(CheckResult::passing(target.as_str(), namespace))
        };

        let sources = vec![PolicySource::policy("rules"), PolicySource::data("inputs")];
        let report = aggregate(
            &cancel,
            &fs,
            &paths(&["p.yaml"]),
            &sources,
            "pipeline.main",
            &validator,
        )
        .unwrap();
        assert_eq!(report.len(), 1);
    }

    proptest! {
        /// Whatever subset of files fails, results and failures partition
        /// the input and each keeps input order.
        #[test]
        fn outcome_partitions_input_in_order(fail_mask in proptest::collection::vec(any::<bool>(), 1..12)) {
            let fs = MemFs::new();
            let targets: Vec<Utf8PathBuf> = (0..fail_mask.len())
                .map(|i| Utf8PathBuf::from(format!("file-{i}.yaml")))
                .collect();

            let mask = fail_mask.clone();
            let validator = move |_: &CancelToken,
                                  _: &dyn Fs,
                                  target: &Utf8Path,
                                  _: &[PolicySource],
                                  namespace: &str|
             -> anyhow::Result<CheckResult> {
                let index: usize = target
                    .as_str()
                    .trim_start_matches("file-")
                    .trim_end_matches(".yaml")
                    .parse()
                    .unwrap();
                if mask[index] {
                    anyhow::bail!("{target}");
                }
                Ok(CheckResult::passing(target.as_str(), namespace))
            };

            let outcome = aggregate(
                &CancelToken::new(),
                &fs,
                &targets,
                &[],
                "pipeline.main",
                &validator,
            );

            let expect_failures: Vec<String> = targets
                .iter()
                .zip(&fail_mask)
                .filter(|(_, failed)| **failed)
                .map(|(t, _)| t.to_string())
                .collect();

            if expect_failures.is_empty() {
                let report = outcome.unwrap();
                let names: Vec<String> = report.into_iter().map(|r| r.file_name).collect();
                let expected: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
                prop_assert_eq!(names, expected);
            } else {
                let err = outcome.unwrap_err();
                let subjects: Vec<String> =
                    err.failures().iter().map(|f| f.subject.clone()).collect();
                prop_assert_eq!(subjects, expect_failures);
            }
        }
    }
}
