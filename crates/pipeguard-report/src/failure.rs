use std::fmt;

/// One file's validation error, held for the combined failure.
#[derive(Debug)]
pub struct ValidationFailure {
    /// The file path the validator was asked about.
    pub subject: String,
    /// The validator's error, opaque to this crate.
    pub cause: anyhow::Error,
}

/// The combined failure of a run in which at least one file failed.
///
/// Display output is part of the CLI contract and compared verbatim by
/// consumers: a pluralized count header, one tab-indented bullet per
/// failure in collection order, and a single trailing newline.
#[derive(Debug)]
pub struct RunFailure {
    failures: Vec<ValidationFailure>,
}

impl RunFailure {
    pub(crate) fn new(failures: Vec<ValidationFailure>) -> Self {
        debug_assert!(!failures.is_empty(), "a run failure holds at least one failure");
        Self { failures }
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn count(&self) -> usize {
        self.failures.len()
    }
}

impl fmt::Display for RunFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.failures.len() == 1 { "error" } else { "errors" };
        writeln!(f, "{} {noun} occurred:", self.failures.len())?;
        for failure in &self.failures {
            // {:#} keeps any context chain the validator attached.
            writeln!(f, "\t* {:#}", failure.cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for RunFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(text: &str) -> ValidationFailure {
        ValidationFailure {
            subject: text.to_string(),
            cause: anyhow::anyhow!(text.to_string()),
        }
    }

    #[test]
    fn two_failures_render_the_exact_combined_text() {
        let combined = RunFailure::new(vec![
            failure("/path/file1.yaml"),
            failure("/path/file2.yaml"),
        ]);
        assert_eq!(
            combined.to_string(),
            "2 errors occurred:\n\t* /path/file1.yaml\n\t* /path/file2.yaml\n"
        );
    }

    #[test]
    fn one_failure_uses_the_singular_header() {
        let combined = RunFailure::new(vec![failure("/path/file1.yaml")]);
        assert_eq!(
            combined.to_string(),
            "1 error occurred:\n\t* /path/file1.yaml\n"
        );
    }

    #[test]
    fn context_chains_stay_on_one_bullet() {
        let cause = anyhow::anyhow!("underlying parse error")
            .context("/path/file1.yaml");
        let combined = RunFailure::new(vec![ValidationFailure {
            subject: "/path/file1.yaml".into(),
            cause,
        }]);
        assert_eq!(
            combined.to_string(),
            "1 error occurred:\n\t* /path/file1.yaml: underlying parse error\n"
        );
    }
}
