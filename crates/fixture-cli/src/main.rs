//! `fixture` CLI — build, reshape and export JSON test fixtures from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Print a blank document from the built-in health score template
//! fixture template
//!
//! # Blank document from your own template, numbers as 0 and booleans as false
//! fixture template -t request.json --scalars zero
//!
//! # Strip null / empty values from one document
//! fixture prune -i case1.json --policy strict
//!
//! # Dotted-key view for form editing, and back again
//! fixture flatten -i case1.json > case1.flat.json
//! fixture unflatten -i case1.flat.json
//!
//! # Prune a batch of documents into one array
//! fixture export cases/*.json -o health_score_test_cases.json
//!
//! # Count documents that survive pruning
//! fixture stats cases/*.json
//! ```
//!
//! Settings can also come from a TOML file passed with `--config`; flags on
//! the command line win over the file. Set `RUST_LOG` or pass `-v` for logs
//! on stderr.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use fixture_core::{
    empty_like, flatten, health_score_template, parse_document, prune_empty, to_pretty,
    unflatten_value, EmptyScalars, FixtureSet, PrunePolicy, ShapeConfig,
};
use serde_json::Value;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fixture",
    version,
    about = "Build, flatten, prune and export JSON test fixtures"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML file with separator, empty_scalars and [prune] settings
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a blank document built from a template
    Template {
        /// Template file (the built-in health score template if omitted)
        #[arg(short, long)]
        template: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// What numbers and booleans become: "null" or "zero"
        #[arg(long)]
        scalars: Option<EmptyScalars>,
    },
    /// Remove null, empty and null-like values from a document
    Prune {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pruning preset: "lenient" or "strict"
        #[arg(long)]
        policy: Option<String>,
    },
    /// Flatten a document into dotted-key fields
    Flatten {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Key separator (default ".")
        #[arg(long)]
        separator: Option<String>,
    },
    /// Rebuild a nested document from dotted-key fields
    Unflatten {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Key separator (default ".")
        #[arg(long)]
        separator: Option<String>,
    },
    /// Prune every document and collect the non-empty ones into one array
    Export {
        /// Input files, each holding one document or an array of documents
        #[arg(required = true)]
        files: Vec<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pruning preset: "lenient" or "strict"
        #[arg(long)]
        policy: Option<String>,
    },
    /// Count documents and how many survive pruning
    Stats {
        /// Input files, each holding one document or an array of documents
        #[arg(required = true)]
        files: Vec<String>,
        /// Pruning preset: "lenient" or "strict"
        #[arg(long)]
        policy: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "resolved configuration");

    match cli.command {
        Commands::Template {
            template,
            output,
            scalars,
        } => {
            let template = match template.as_deref() {
                Some(path) => read_document(Some(path))?,
                None => health_score_template(),
            };
            let scalars = scalars.unwrap_or(config.empty_scalars);
            let blank = empty_like(&template, scalars);
            write_output(output.as_deref(), &to_pretty(&blank)?)?;
        }
        Commands::Prune {
            input,
            output,
            policy,
        } => {
            let policy = resolve_policy(policy.as_deref(), &config)?;
            let document = read_document(input.as_deref())?;
            let cleaned = prune_empty(&document, &policy);
            write_output(output.as_deref(), &to_pretty(&cleaned)?)?;
        }
        Commands::Flatten {
            input,
            output,
            separator,
        } => {
            let separator = separator.unwrap_or_else(|| config.separator.clone());
            let document = read_document(input.as_deref())?;
            let flat = flatten(&document, &separator).context("Failed to flatten document")?;
            write_output(output.as_deref(), &to_pretty(&Value::Object(flat))?)?;
        }
        Commands::Unflatten {
            input,
            output,
            separator,
        } => {
            let separator = separator.unwrap_or_else(|| config.separator.clone());
            let flat = read_document(input.as_deref())?;
            let document =
                unflatten_value(&flat, &separator).context("Failed to unflatten fields")?;
            write_output(output.as_deref(), &to_pretty(&document)?)?;
        }
        Commands::Export {
            files,
            output,
            policy,
        } => {
            let policy = resolve_policy(policy.as_deref(), &config)?;
            let set = load_fixtures(&files)?;
            let exported = set.export_json(&policy)?;
            info!(
                documents = set.len(),
                exported = set.valid_count(&policy),
                "export complete"
            );
            write_output(output.as_deref(), &exported)?;
        }
        Commands::Stats { files, policy } => {
            let policy = resolve_policy(policy.as_deref(), &config)?;
            let set = load_fixtures(&files)?;
            println!("Total documents: {}", set.len());
            println!("Valid documents: {}", set.valid_count(&policy));
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins; otherwise `-v` picks the level.
fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Read settings from a TOML file, or fall back to the defaults.
///
/// Missing keys in the file keep their default values.
fn load_config(path: Option<&str>) -> Result<ShapeConfig> {
    let Some(path) = path else {
        return Ok(ShapeConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path))?;
    let config: ShapeConfig =
        toml::from_str(&text).with_context(|| format!("Invalid config file: {}", path))?;
    Ok(config)
}

/// Pick the pruning policy from `--policy`, else from the config file.
fn resolve_policy(name: Option<&str>, config: &ShapeConfig) -> Result<PrunePolicy> {
    match name {
        Some(name) => PrunePolicy::preset(name).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown prune policy: '{}'. Available policies: lenient, strict",
                name
            )
        }),
        None => Ok(config.prune.clone()),
    }
}

/// Parse every file into one [`FixtureSet`]. A top-level array contributes
/// each of its elements as a separate document.
fn load_fixtures(files: &[String]) -> Result<FixtureSet> {
    let mut set = FixtureSet::default();
    for path in files {
        match read_document(Some(path))? {
            Value::Array(items) => {
                debug!(path = %path, count = items.len(), "loaded document array");
                for item in items {
                    set.insert(item);
                }
            }
            document => {
                set.insert(document);
            }
        }
    }
    Ok(set)
}

fn read_document(path: Option<&str>) -> Result<Value> {
    let text = read_input(path)?;
    let source = path.unwrap_or("<stdin>");
    parse_document(&text).with_context(|| format!("Invalid JSON in {}", source))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            let path = Path::new(path);
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
