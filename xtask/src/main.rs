//! Developer tasks (schema generation, conformance checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Workspace root (parent of the xtask crate).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().expect("no current directory"));

    // Invoked via `cargo xtask`, the manifest dir is the xtask crate itself.
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .expect("xtask has no parent")
            .to_path_buf()
    } else {
        manifest_dir
    }
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

/// Generate the report entry schema (one element of the rendered array).
fn generate_report_schema() -> schemars::Schema {
    schema_for!(pipeguard_types::CheckResult)
}

/// Generate the PipeguardConfigV1 schema.
fn generate_config_schema() -> schemars::Schema {
    schema_for!(pipeguard_settings::PipeguardConfigV1)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "pipeguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "pipeguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir).context("create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("write schema to {}", path.display()))?;

        println!("wrote {}", path.display());
    }

    println!("\nschemas emitted.");
    Ok(())
}

/// Check that schemas/ matches what the current types generate.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let schema = (spec.generate)();
        let expected = serialize_schema(&schema)?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("schemas are up to date.");
        Ok(())
    } else {
        if !missing.is_empty() {
            eprintln!("missing schemas:");
            for name in &missing {
                eprintln!("  - {}", name);
            }
        }
        if !mismatched.is_empty() {
            eprintln!("schemas out of date:");
            for name in &mismatched {
                eprintln!("  - {}", name);
            }
        }
        eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
        bail!("schema validation failed")
    }
}

/// Validate live binary output against the report entry schema.
///
/// This checks:
/// 1. The generated pipeguard.report.v1 schema compiles
/// 2. A `pipeguard validate` run over a sample definition produces entries
///    that validate against it
fn conform() -> anyhow::Result<()> {
    let schema = generate_report_schema();
    let schema_value = serde_json::to_value(&schema).context("Failed to serialize schema")?;
    let compiled = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    println!("✓ pipeguard.report.v1 schema compiles");

    // Find the pipeguard binary
    let pipeguard_bin = project_root()
        .join("target")
        .join("debug")
        .join("pipeguard");

    #[cfg(target_os = "windows")]
    let pipeguard_bin = pipeguard_bin.with_extension("exe");

    if !pipeguard_bin.exists() {
        bail!(
            "pipeguard binary not found at {}.\n\
            Run `cargo build -p pipeguard-cli` first.",
            pipeguard_bin.display()
        );
    }

    let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
    let pipeline = temp_dir.path().join("pipeline.yaml");
    fs::write(&pipeline, pipeguard_test_util::SAMPLE_PIPELINE_YAML)
        .context("Failed to write sample pipeline")?;

    let output = std::process::Command::new(&pipeguard_bin)
        .current_dir(temp_dir.path())
        .args([
            "validate",
            "--pipeline-file",
            pipeline.to_str().unwrap_or_default(),
        ])
        .output()
        .context("Failed to run pipeguard")?;

    if !output.status.success() {
        bail!(
            "pipeguard exited with {:?}: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).context("Failed to parse report as JSON")?;
    let entries = report
        .as_array()
        .context("report output is not a JSON array")?;

    let mut errors = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        for err in compiled.iter_errors(entry) {
            errors.push(format!("entry[{}]: schema validation: {}", i, err));
        }
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!(
        "\n✓ All {} report entries pass conformance checks!",
        entries.len()
    );
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate pipeguard output against the report schema");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                let name = spec.filename.trim_end_matches(".json");
                println!("{}", name);
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
