//! CLI for the UAT test-file harness.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use uat_harness::config;

use commands::{run_checksum, run_completions, run_create, run_scenario};

/// Top-level CLI for the UAT test-file harness.
#[derive(Debug, Parser)]
#[command(name = "uat")]
#[command(about = "UAT: disposable test files with known checksums", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/uat/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute SHA-256 of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },

    /// Create a test file and keep it; prints its checksum and path.
    Create {
        /// Directory for the file (default: configured test_dir or system temp dir).
        #[arg(long)]
        dir: Option<PathBuf>,
        /// File name prefix.
        #[arg(long, default_value = "uat-")]
        prefix: String,
        /// Fill with a repeating byte pattern of N bytes instead of the configured source.
        #[arg(long, value_name = "N")]
        pattern_len: Option<usize>,
    },

    /// Create one test file per key in a scenario, verify them, then run cleanup.
    Scenario {
        /// Directory for the files (default: configured test_dir or system temp dir).
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Fill with a repeating byte pattern of N bytes instead of the configured source.
        #[arg(long, value_name = "N")]
        pattern_len: Option<usize>,
        /// Scenario keys; each names one test file.
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Checksum { path } => run_checksum(&path)?,
            CliCommand::Create {
                dir,
                prefix,
                pattern_len,
            } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_create(&cfg, dir.as_deref(), &prefix, pattern_len)?;
            }
            CliCommand::Scenario {
                dir,
                pattern_len,
                keys,
            } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_scenario(&cfg, dir.as_deref(), pattern_len, &keys)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<config::HarnessConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}
