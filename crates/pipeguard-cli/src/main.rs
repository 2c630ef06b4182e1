//! CLI entry point for pipeguard.
//!
//! This module is intentionally thin: it handles argument parsing, config
//! loading, logging, and exit codes. All orchestration lives in the
//! `pipeguard-app` crate.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use pipeguard_app::{error_exit_code, run_validate, ValidateError, ValidateInput};
use pipeguard_render::OutputSpec;
use pipeguard_settings::Overrides;
use pipeguard_types::{CancelToken, OsFs};
use tracing::debug;

mod evaluator;

use evaluator::DefinitionValidator;

#[derive(Parser, Debug)]
#[command(
    name = "pipeguard",
    version,
    about = "Policy validation for pipeline definitions with multi-format reporting"
)]
struct Cli {
    /// Path to pipeguard config TOML.
    #[arg(long, default_value = "pipeguard.toml")]
    config: Utf8PathBuf,

    /// Log at info level (default is warn).
    #[arg(long, global = true)]
    verbose: bool,

    /// Log at debug level.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate pipeline definition files against configured policies.
    Validate {
        /// Pipeline definition file to validate (repeatable, evaluated in order).
        #[arg(long = "pipeline-file", value_name = "PATH")]
        pipeline_file: Vec<Utf8PathBuf>,

        /// Policy source (repeatable, evaluated in order).
        #[arg(long, value_name = "SOURCE")]
        policy: Vec<String>,

        /// Data source (repeatable, evaluated after all policy sources).
        #[arg(long, value_name = "SOURCE")]
        data: Vec<String>,

        /// Evaluation namespace passed to every validator call.
        #[arg(long, value_name = "NS")]
        namespace: Option<String>,

        /// Output as format or format=path (repeatable; default json to stdout).
        #[arg(long, value_name = "FORMAT[=PATH]")]
        output: Vec<OutputSpec>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let code = match cli.cmd {
        Commands::Validate {
            ref pipeline_file,
            ref policy,
            ref data,
            ref namespace,
            ref output,
        } => cmd_validate(
            &cli,
            pipeline_file.clone(),
            policy.clone(),
            data.clone(),
            namespace.clone(),
            output.clone(),
        ),
    };

    std::process::exit(code);
}

fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("logging initialized at level: {}", level);
}

fn cmd_validate(
    cli: &Cli,
    pipeline_file: Vec<Utf8PathBuf>,
    policy: Vec<String>,
    data: Vec<String>,
    namespace: Option<String>,
    output: Vec<OutputSpec>,
) -> i32 {
    // Missing config file is allowed (defaults apply).
    let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

    let overrides = Overrides {
        namespace,
        policy,
        data,
        output,
    };

    let input = ValidateInput {
        files: &pipeline_file,
        config_text: &cfg_text,
        overrides,
    };

    let cancel = CancelToken::new();
    let fs = OsFs;
    let validator = DefinitionValidator;
    let mut stdout = std::io::stdout();

    match run_validate(input, &cancel, &fs, &validator, &mut stdout) {
        Ok(_) => 0,
        Err(err) => {
            let code = error_exit_code(&err);
            match err {
                // The combined failure text already ends with a newline.
                ValidateError::Validation(failure) => {
                    eprint!("pipeguard error: {failure}");
                }
                other => {
                    eprintln!("pipeguard error: {:#}", anyhow::Error::from(other));
                }
            }
            code
        }
    }
}
