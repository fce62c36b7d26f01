//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::EditorConfig;
use crate::constants::MAX_UNDO_LIMIT;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Number of undo steps kept per layout (0 = unlimited)
    #[arg(long, value_name = "N")]
    undo_limit: Option<usize>,

    /// Directory holding user courses and keyboard layouts
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    history: HistoryOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    data_dir: String,
}

#[derive(Serialize, Debug)]
struct HistoryOutput {
    undo_limit: usize,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = EditorConfig::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {:#}", e)))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config)?;
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.undo_limit.is_none() && self.data_dir.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --undo-limit or --data-dir",
            ));
        }

        let mut config = EditorConfig::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {:#}", e)))?;

        if let Some(limit) = self.undo_limit {
            if limit > MAX_UNDO_LIMIT {
                return Err(CliError::validation(format!(
                    "Undo limit {} exceeds maximum of {}",
                    limit, MAX_UNDO_LIMIT
                )));
            }
            config.history.undo_limit = limit;
        }

        if let Some(path) = &self.data_dir {
            if path.is_file() {
                return Err(CliError::validation(format!(
                    "Data directory path points to a file: {}",
                    path.display()
                )));
            }

            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create data directory {}: {}",
                    path.display(),
                    e
                ))
            })?;

            config.paths.data_dir = Some(path.clone());
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {:#}", e)))?;

        tracing::info!("configuration updated");
        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn resolved_data_dir(config: &EditorConfig) -> CliResult<String> {
    config
        .data_dir()
        .map(|dir| dir.to_string_lossy().to_string())
        .map_err(|e| CliError::io(format!("Failed to resolve data directory: {:#}", e)))
}

/// Output configuration in JSON format
fn output_json(config: &EditorConfig) -> CliResult<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            data_dir: resolved_data_dir(config)?,
        },
        history: HistoryOutput {
            undo_limit: config.history.undo_limit,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &EditorConfig) -> CliResult<()> {
    let limit = match config.history.undo_limit {
        0 => "unlimited".to_string(),
        n => n.to_string(),
    };

    println!("Configuration:");
    println!("  Data directory: {}", resolved_data_dir(config)?);
    println!("  Undo limit:     {}", limit);
    Ok(())
}
