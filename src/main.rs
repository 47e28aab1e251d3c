//! Makai Table Generator - Main entrypoint.
//!
//! This is the main entry point for the Makai table generator. It
//! initializes the logging system, loads configuration, and runs the
//! requested generation step.

use clap::{Parser, Subcommand};
use makai_tablegen_lib::codegen;
use makai_tablegen_lib::config::{self, MakaiConfig};
use makai_tablegen_lib::data_structures::CELLS_PER_NODE;
use makai_tablegen_lib::entities::EntitySet;
use makai_tablegen_lib::error::{set_error_reporter, MakaiError, MakaiResult, TracingErrorReporter};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;

/// Command line arguments for the Makai table generator.
#[derive(Parser, Debug)]
#[clap(name = "Makai Table Generator", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the table declaration
    Generate {
        /// Path to write the declaration to (stdout if omitted)
        #[clap(short, long, value_parser)]
        output: Option<PathBuf>,
    },

    /// Print the generated table one record per line
    Dump {
        /// Emit the records as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging() -> MakaiResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| MakaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Load the configuration or exit with a diagnostic.
fn load_config_or_exit(loader: &config::ConfigLoader) -> MakaiConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> MakaiResult<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // Load configuration
    let env_prefix = "MAKAI";
    let config_loader = config::ConfigLoader::new(args.config.as_deref(), env_prefix);

    match args
        .command
        .unwrap_or(Command::Generate { output: None })
    {
        Command::Generate { output } => {
            info!("Generating entity match table");

            let config = load_config_or_exit(&config_loader);
            config::init_global_config(config);

            let global = config::get_global_config();
            let config = global.get();
            info!(
                "Generator configured with symbol: {}, style: {:?}, max depth: {}",
                config.output.symbol, config.output.style, config.table.max_depth
            );

            let entity_set = EntitySet::from_config(&config.entities);
            let cells = codegen::build_match_table(&entity_set, &config.table)?;
            let declaration = codegen::render_declaration(&cells, &config.output);

            match output {
                Some(path) => {
                    std::fs::write(&path, format!("{declaration}\n")).map_err(MakaiError::Io)?;
                    info!("Table declaration written to {:?}", path);
                }
                None => println!("{declaration}"),
            }

            info!(
                entries = entity_set.len(),
                cells = cells.len(),
                "Table generated successfully"
            );

            Ok(())
        }
        Command::Dump { json } => {
            let config = load_config_or_exit(&config_loader);

            let entity_set = EntitySet::from_config(&config.entities);
            let cells = codegen::build_match_table(&entity_set, &config.table)?;
            let records = codegen::records(&cells);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&records).map_err(MakaiError::Serialization)?
                );
            } else {
                for (index, record) in records.iter().enumerate() {
                    println!("{:>4}  {record}", index * CELLS_PER_NODE);
                }
            }

            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            match config_loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = MakaiConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(MakaiError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| MakaiError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(MakaiError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
