use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `pipeguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PipeguardConfigV1 {
    /// Optional schema string for tooling (`pipeguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Default evaluation namespace when the CLI does not supply one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Default policy-kind source locations, in evaluation order.
    #[serde(default)]
    pub policy: Vec<String>,

    /// Default data-kind source locations, in evaluation order.
    #[serde(default)]
    pub data: Vec<String>,

    /// Default output requests (`format` or `format=path`).
    #[serde(default)]
    pub output: Vec<String>,
}
