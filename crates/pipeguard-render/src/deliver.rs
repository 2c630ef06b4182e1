use crate::encode::{encode, EncodeError};
use crate::spec::{OutputFormat, OutputSpec};
use camino::Utf8PathBuf;
use pipeguard_types::{CheckResult, Fs};
use std::io::Write;
use thiserror::Error;
use tracing::debug;

/// Render the report once per requested output and deliver each one.
///
/// No specs means one default: JSON to stdout. File destinations are
/// replaced wholesale, with parent directories created as needed. Every
/// spec without a destination writes to stdout, in declaration order, so
/// repeated bare formats concatenate deterministically. Delivery stops at
/// the first failure; outputs are not retried.
pub fn deliver(
    report: &[CheckResult],
    specs: &[OutputSpec],
    fs: &dyn Fs,
    stdout: &mut dyn Write,
) -> Result<(), DeliverError> {
    if specs.is_empty() {
        return deliver_one(report, &OutputSpec::default_stdout(), fs, stdout);
    }
    for spec in specs {
        deliver_one(report, spec, fs, stdout)?;
    }
    Ok(())
}

fn deliver_one(
    report: &[CheckResult],
    spec: &OutputSpec,
    fs: &dyn Fs,
    stdout: &mut dyn Write,
) -> Result<(), DeliverError> {
    let bytes = encode(report, spec.format).map_err(|source| DeliverError::Encode {
        format: spec.format,
        source,
    })?;

    match &spec.destination {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_str().is_empty() {
                    fs.create_dir_all(parent).map_err(|source| DeliverError::Write {
                        format: spec.format,
                        destination: path.clone(),
                        source,
                    })?;
                }
            }
            fs.write_all(path, &bytes).map_err(|source| DeliverError::Write {
                format: spec.format,
                destination: path.clone(),
                source,
            })?;
            debug!(destination = %path, format = %spec.format, "report written");
        }
        None => {
            stdout
                .write_all(&bytes)
                .map_err(|source| DeliverError::Stdout {
                    format: spec.format,
                    source,
                })?;
            debug!(format = %spec.format, "report written to stdout");
        }
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum DeliverError {
    #[error("encode {format} report")]
    Encode {
        format: OutputFormat,
        #[source]
        source: EncodeError,
    },

    #[error("write {format} report to {destination}")]
    Write {
        format: OutputFormat,
        destination: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write {format} report to stdout")]
    Stdout {
        format: OutputFormat,
        #[source]
        source: std::io::Error,
    },
}
