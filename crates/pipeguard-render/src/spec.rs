use camino::Utf8PathBuf;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of supported report encodings.
///
/// Adding a format means adding one variant here and one encoder in
/// `encode`; aggregation never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Yaml => f.write_str("yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ParseOutputSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(ParseOutputSpecError::UnknownFormat(other.to_string())),
        }
    }
}

/// One requested rendering: a format, and optionally where to put it.
///
/// Parsed from `format` or `format=path`; no destination means the
/// command's stdout stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputSpec {
    pub format: OutputFormat,
    pub destination: Option<Utf8PathBuf>,
}

impl OutputSpec {
    /// The output assumed when the caller requests none at all.
    pub fn default_stdout() -> Self {
        Self {
            format: OutputFormat::Json,
            destination: None,
        }
    }
}

impl FromStr for OutputSpec {
    type Err = ParseOutputSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            None => Ok(Self {
                format: s.parse()?,
                destination: None,
            }),
            Some((format, path)) => {
                if path.is_empty() {
                    return Err(ParseOutputSpecError::EmptyDestination(s.to_string()));
                }
                Ok(Self {
                    format: format.parse()?,
                    destination: Some(Utf8PathBuf::from(path)),
                })
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseOutputSpecError {
    #[error("unknown output format: {0} (expected json or yaml)")]
    UnknownFormat(String),

    #[error("output spec {0} names no destination after '='")]
    EmptyDestination(String),
}
