//! CMIS vocabulary tool.
//!
//! Run with: `cmis-vocab check message.xml --config bindings.yaml`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cmis_ws_binding::{MessageScanner, ScannerConfig, SchemaVersion, VocabularyRegistry};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Inspect CMIS wire vocabularies and check captured CMIS messages against them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List vocabularies and their wire values
    List {
        /// Only this schema version (200901 or 200908)
        #[arg(short, long)]
        schema: Option<SchemaVersion>,

        /// Glob over schema type names, e.g. "enumCapability*"
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Decode one token against a vocabulary
    Decode {
        /// Schema type name, e.g. enumACLPropagation
        vocabulary: String,

        /// Wire token, matched exactly
        token: String,

        #[arg(short, long, default_value = "200908")]
        schema: SchemaVersion,
    },

    /// Check the bound fields of an XML message
    Check {
        /// Message file
        file: PathBuf,

        /// Path to configuration file (YAML)
        #[arg(short, long, default_value = "cmis-vocab.yaml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = args.log_level.parse().unwrap_or(Level::WARN);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let registry = VocabularyRegistry::cmis();

    match args.command {
        Command::List { schema, filter } => {
            let vocabularies = match filter {
                Some(pattern) => registry.matching(&pattern)?,
                None => registry.iter().collect(),
            };
            for vocabulary in vocabularies
                .into_iter()
                .filter(|v| schema.map_or(true, |s| v.schema() == s))
            {
                println!(
                    "{} {}: {}",
                    vocabulary.schema(),
                    vocabulary.type_name(),
                    vocabulary.wire_values().join(", ")
                );
            }
        }

        Command::Decode {
            vocabulary,
            token,
            schema,
        } => {
            let canonical = registry
                .decode(schema, &vocabulary, &token)
                .with_context(|| format!("Failed to decode '{}'", token))?;
            println!("{}", canonical);
        }

        Command::Check { file, config } => {
            let config = load_config(&config).await?;
            let scanner = MessageScanner::new(config).context("Invalid field bindings")?;

            let data = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let report = scanner
                .scan(&data)
                .map_err(|violation| anyhow::anyhow!("{}", violation))?;

            info!(
                schema = ?report.schema,
                fields_checked = report.fields_checked,
                "Message checked"
            );

            for violation in &report.violations {
                println!("{}", violation);
            }

            if report.has_violations() {
                anyhow::bail!(
                    "{}: {} violation(s)",
                    file.display(),
                    report.violations.len()
                );
            }
            println!("{}: ok ({} fields checked)", file.display(), report.fields_checked);
        }
    }

    Ok(())
}

async fn load_config(path: &Path) -> Result<ScannerConfig> {
    if tokio::fs::try_exists(path).await.unwrap_or(false) {
        info!("Config file: {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .context("Failed to read config file")?;
        ScannerConfig::from_yaml(&content).context("Failed to parse config file")
    } else {
        info!("Config file not found, using defaults");
        Ok(ScannerConfig::default())
    }
}
