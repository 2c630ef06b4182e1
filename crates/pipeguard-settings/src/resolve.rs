use crate::model::PipeguardConfigV1;
use anyhow::Context;
use pipeguard_render::OutputSpec;

/// Namespace used when neither config nor CLI provides one.
pub const DEFAULT_NAMESPACE: &str = "pipeline.main";

/// CLI-supplied values that win over config defaults.
///
/// Output specs arrive already parsed: the CLI validates `--output` syntax
/// at the flag boundary so malformed values get usage guidance there.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub namespace: Option<String>,
    pub policy: Vec<String>,
    pub data: Vec<String>,
    pub output: Vec<OutputSpec>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveValidate,
}

/// Fully-resolved validation settings.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveValidate {
    pub namespace: String,
    pub policy: Vec<String>,
    pub data: Vec<String>,
    pub output: Vec<OutputSpec>,
}

pub fn resolve_config(
    cfg: PipeguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let namespace = overrides
        .namespace
        .or(cfg.namespace)
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
    if namespace.is_empty() {
        anyhow::bail!("namespace must not be empty");
    }

    // Non-empty CLI lists replace config lists wholesale; appending would
    // make the evaluation order depend on where a source was declared.
    let policy = pick_list(overrides.policy, cfg.policy);
    let data = pick_list(overrides.data, cfg.data);

    let output = if overrides.output.is_empty() {
        cfg.output
            .iter()
            .map(|raw| {
                raw.parse::<OutputSpec>()
                    .with_context(|| format!("invalid output spec in config: {raw}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    } else {
        overrides.output
    };

    Ok(ResolvedConfig {
        effective: EffectiveValidate {
            namespace,
            policy,
            data,
            output,
        },
    })
}

fn pick_list(from_cli: Vec<String>, from_config: Vec<String>) -> Vec<String> {
    if from_cli.is_empty() { from_config } else { from_cli }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;
    use pipeguard_render::OutputFormat;

    #[test]
    fn defaults_apply_when_everything_is_absent() {
        let resolved =
            resolve_config(PipeguardConfigV1::default(), Overrides::default()).unwrap();

        assert_eq!(resolved.effective.namespace, DEFAULT_NAMESPACE);
        assert!(resolved.effective.policy.is_empty());
        assert!(resolved.effective.data.is_empty());
        assert!(resolved.effective.output.is_empty());
    }

    #[test]
    fn config_supplies_defaults() {
        let cfg = parse_config_toml(
            r#"
            schema = "pipeguard.config.v1"
            namespace = "release.main"
            policy = ["git::https://example.com/policy//pipeline"]
            output = ["yaml", "json=out.json"]
            "#,
        )
        .unwrap();

        let resolved = resolve_config(cfg, Overrides::default()).unwrap();
        assert_eq!(resolved.effective.namespace, "release.main");
        assert_eq!(
            resolved.effective.policy,
            vec!["git::https://example.com/policy//pipeline".to_string()]
        );
        assert_eq!(
            resolved.effective.output,
            vec![
                OutputSpec {
                    format: OutputFormat::Yaml,
                    destination: None,
                },
                OutputSpec {
                    format: OutputFormat::Json,
                    destination: Some("out.json".into()),
                },
            ]
        );
    }

    #[test]
    fn cli_overrides_win() {
        let cfg = parse_config_toml(
            r#"
            namespace = "release.main"
            policy = ["config-policy"]
            data = ["config-data"]
            output = ["yaml"]
            "#,
        )
        .unwrap();

        let overrides = Overrides {
            namespace: Some("pipeline.main".into()),
            policy: vec!["cli-policy".into()],
            data: Vec::new(),
            output: vec!["json=out.json".parse().unwrap()],
        };

        let resolved = resolve_config(cfg, overrides).unwrap();
        assert_eq!(resolved.effective.namespace, "pipeline.main");
        assert_eq!(resolved.effective.policy, vec!["cli-policy".to_string()]);
        // Empty CLI list leaves the config default in place.
        assert_eq!(resolved.effective.data, vec!["config-data".to_string()]);
        assert_eq!(
            resolved.effective.output,
            vec!["json=out.json".parse().unwrap()]
        );
    }

    #[test]
    fn invalid_config_output_spec_is_an_error() {
        let cfg = parse_config_toml(r#"output = ["csv"]"#).unwrap();
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid output spec in config: csv"));
    }

    #[test]
    fn empty_namespace_is_rejected() {
        let overrides = Overrides {
            namespace: Some(String::new()),
            ..Overrides::default()
        };
        let err = resolve_config(PipeguardConfigV1::default(), overrides).unwrap_err();
        assert!(err.to_string().contains("namespace"));
    }

    #[test]
    fn unknown_config_keys_are_tolerated() {
        let cfg = parse_config_toml("future_knob = true\n").unwrap();
        assert_eq!(cfg, PipeguardConfigV1::default());
    }
}
