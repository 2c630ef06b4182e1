use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Stable schema identifier for the emitted report.
pub const SCHEMA_REPORT_V1: &str = "pipeguard.report.v1";

/// One target file's validation outcome.
///
/// Field declaration order is the wire order for every output format;
/// consumers compare rendered reports byte-for-byte, so reordering fields
/// is a breaking change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckResult {
    /// Path of the validated file, exactly as supplied by the caller.
    #[serde(rename = "filename")]
    pub file_name: String,

    /// Namespace the file was evaluated under.
    pub namespace: String,

    #[serde(default)]
    pub violations: Vec<Violation>,

    #[serde(default)]
    pub warnings: Vec<Violation>,

    pub success: bool,
}

impl CheckResult {
    /// A passing result with empty violation and warning lists.
    pub fn passing(file_name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            namespace: namespace.into(),
            violations: Vec::new(),
            warnings: Vec::new(),
            success: true,
        }
    }
}

/// A single violation or warning raised against a target file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    #[serde(rename = "msg")]
    pub message: String,

    /// Rule-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, JsonValue>,

    /// Free-form rule output lines, when the evaluator captures them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
}

impl Violation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            metadata: BTreeMap::new(),
            outputs: Vec::new(),
        }
    }
}
