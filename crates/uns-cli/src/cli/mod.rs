//! CLI for UNS identifiers and search-path lookup.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uns_core::config::{self, UnsConfig};

use commands::{run_concise, run_file_name, run_locate, run_resolve, run_uri};

/// Top-level CLI for UNS.
#[derive(Debug, Parser)]
#[command(name = "uns")]
#[command(about = "UNS: canonical HTTPS identifiers and search-path resource lookup", long_about = None)]
pub struct Cli {
    /// Extra search root, consulted before UNS_PATH and configured roots (repeatable).
    #[arg(long = "path", value_name = "DIR", global = true)]
    pub paths: Vec<PathBuf>,

    /// Resource file extension (overrides the configured one).
    #[arg(long, value_name = "EXT", global = true)]
    pub ext: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the canonical https URI of an identifier.
    Uri {
        /// Identifier: URL, or host/path text (`~` may stand for `/`).
        identifier: String,
    },

    /// Print the concise form (host + path).
    Concise {
        /// Identifier: URL, or host/path text (`~` may stand for `/`).
        identifier: String,
    },

    /// Print the file-name form (concise form with `/` as `~`).
    FileName {
        /// Identifier: URL, or host/path text (`~` may stand for `/`).
        identifier: String,
    },

    /// Print the path of the resource file an identifier resolves to.
    Locate {
        /// Identifier to look up.
        identifier: String,
    },

    /// Load the resource for an identifier and print it.
    Resolve {
        /// Identifier to look up.
        identifier: String,

        /// Parse the resource as a TOML document and print it normalized.
        #[arg(long)]
        toml: bool,
    },
}

/// Loaded config with the `--ext` override applied.
fn lookup_config(ext: Option<String>) -> Result<UnsConfig> {
    let mut cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    if let Some(ext) = ext {
        cfg.resource_extension = ext;
    }
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Uri { identifier } => run_uri(&identifier)?,
            CliCommand::Concise { identifier } => run_concise(&identifier)?,
            CliCommand::FileName { identifier } => run_file_name(&identifier)?,
            CliCommand::Locate { identifier } => {
                let cfg = lookup_config(cli.ext)?;
                run_locate(&identifier, &cfg, &cli.paths)?;
            }
            CliCommand::Resolve { identifier, toml } => {
                let cfg = lookup_config(cli.ext)?;
                run_resolve(&identifier, &cfg, &cli.paths, toml)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
