use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a source supplies policy rules or auxiliary data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Policy,
    Data,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Policy => f.write_str("policy"),
            SourceKind::Data => f.write_str("data"),
        }
    }
}

/// A typed reference to a policy or data source.
///
/// The location string is opaque at this layer: it is handed to the
/// validator untouched, with no existence or syntax checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicySource {
    pub location: String,
    pub kind: SourceKind,
}

impl PolicySource {
    pub fn policy(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            kind: SourceKind::Policy,
        }
    }

    pub fn data(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            kind: SourceKind::Data,
        }
    }
}
