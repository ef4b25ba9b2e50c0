//! enumgen - derive generated enum member names from schema documents
//!
//! ## Usage
//!
//! ```bash
//! # Report every enum in an OpenAPI document
//! enumgen openapi.yaml
//!
//! # Imports relative to a module two levels below the client root
//! enumgen --prefix ... openapi.json
//!
//! # Keep going past enums whose member names collide
//! enumgen --skip-invalid --format yaml openapi.yaml
//! ```

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueHint};
use enumgen_lib::{GeneratorConfig, SchemaDocument};
use thiserror::Error;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use report::{OutputFormat, Report, ReportError};

/// Derive enum member names and type metadata from OpenAPI schemas
#[derive(Parser, Debug)]
#[command(name = "enumgen", version, about, long_about = None)]
struct Cli {
    /// Schema document (.json, .yaml or .yml)
    #[arg(value_name = "SCHEMA", value_hint = ValueHint::FilePath)]
    schema: PathBuf,

    /// Generator configuration file (YAML or JSON)
    #[arg(short, long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Relative import prefix from the using module to the client root
    #[arg(short, long, default_value = "..")]
    prefix: String,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// List rejected enums in the report instead of failing
    #[arg(long)]
    skip_invalid: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] enumgen_lib::ConfigError),

    #[error(transparent)]
    Schema(#[from] enumgen_lib::SchemaError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,enumgen=info,enumgen_lib=info".to_string(),
            2 => "info,enumgen=debug,enumgen_lib=debug".to_string(),
            _ => "debug,enumgen=trace,enumgen_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    let doc = SchemaDocument::load(&cli.schema)?;
    tracing::debug!(schemas = doc.schemas().len(), "Loaded schema document");

    let report = Report::build(&doc, &config, &cli.prefix, cli.skip_invalid)?;
    Ok(report.render(cli.format)?)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json_logs);

    tracing::info!(schema = %cli.schema.display(), "enumgen starting");

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "enumgen failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
