use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use std::path::PathBuf;

use eco_core::{EcoError, Profile};
use eco_store::ConnectionStore;

use crate::table;

mod add;
mod connect;

/// A simple CLI tool that simplifies connection of aws ec2 instances
#[derive(Parser)]
#[command(name = "eco", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding connection.json (default: ~/.eco, or $ECO_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    store_dir: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new ec2 connection data
    Add {
        /// Use this key file instead of opening the file picker
        #[arg(long, value_name = "PATH")]
        key_file: Option<PathBuf>,
    },
    /// List all connections
    Ls {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Remove a connection by ID
    Remove {
        /// ID shown by `eco ls`
        id: u32,
    },
    /// Connect to a connection by ID
    Con {
        /// ID shown by `eco ls`
        id: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    /// Run the selected command. `Ok(Some(code))` carries a child exit
    /// code that the process should exit with.
    pub fn run(self) -> eco_core::Result<Option<i32>> {
        // Resolve log level: --verbose > --quiet > --log-level > default
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level.as_deref().unwrap_or("warn")
        };

        // Logs go to stderr so `ls --format json` stdout stays parseable
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();

        let store = ConnectionStore::open(self.store_dir.as_deref());

        match self.command {
            Commands::Add { key_file } => {
                add::cmd_add(&store, key_file)?;
                Ok(None)
            }
            Commands::Ls { format } => {
                Self::cmd_ls(&store, format)?;
                Ok(None)
            }
            Commands::Remove { id } => {
                Self::cmd_remove(&store, id)?;
                Ok(None)
            }
            Commands::Con { id } => connect::cmd_con(&store, id),
        }
    }

    fn cmd_ls(store: &ConnectionStore, format: OutputFormat) -> eco_core::Result<()> {
        let Some(profiles) = load_or_notice(store)? else {
            return Ok(());
        };
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profiles)?),
            OutputFormat::Table => print!("{}", table::render(&profiles)),
        }
        Ok(())
    }

    fn cmd_remove(store: &ConnectionStore, id: u32) -> eco_core::Result<()> {
        if load_or_notice(store)?.is_none() {
            return Ok(());
        }
        match store.remove(id) {
            Ok((removed, remaining)) => {
                println!(
                    "{}",
                    style(format!(
                        "Connection \"{}\" (ID: {id}) removed successfully.",
                        removed.name
                    ))
                    .green()
                );
                if remaining.is_empty() {
                    println!("{}", style("No connections remaining.").yellow());
                } else {
                    print!("{}", table::render(&remaining));
                }
                Ok(())
            }
            Err(EcoError::ProfileNotFound(_)) => {
                tracing::warn!(id, "remove target not found");
                println!(
                    "{}",
                    style(format!("Connection with ID {id} not found.")).red()
                );
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// Load the store, printing the shared notice and yielding `None` when
/// there is nothing to work with (no file and an empty list read the
/// same).
fn load_or_notice(store: &ConnectionStore) -> eco_core::Result<Option<Vec<Profile>>> {
    let profiles = store.load()?;
    if profiles.is_empty() {
        println!(
            "{}",
            style("No connections found. Use \"eco add\" to add your first connection.").yellow()
        );
        return Ok(None);
    }
    Ok(Some(profiles))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store(dir: &std::path::Path) -> ConnectionStore {
        let store = ConnectionStore::open(Some(dir));
        store
            .save(&[Profile {
                id: 0,
                name: "web".into(),
                description: String::new(),
                pem_file_path: "/keys/web.pem".into(),
                ip: "10.0.0.1".into(),
            }])
            .unwrap();
        store
    }

    #[test]
    fn test_cmd_remove_unknown_id_reports_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(dir.path());
        let before = std::fs::read_to_string(store.file_path()).unwrap();

        Cli::cmd_remove(&store, 99).unwrap();
        let after = std::fs::read_to_string(store.file_path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_cmd_con_unknown_id_skips_launch() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(dir.path());

        assert!(connect::cmd_con(&store, 9).unwrap().is_none());
    }

    #[test]
    fn test_cmd_con_empty_store_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConnectionStore::open(Some(dir.path()));

        assert!(connect::cmd_con(&store, 0).unwrap().is_none());
    }
}
