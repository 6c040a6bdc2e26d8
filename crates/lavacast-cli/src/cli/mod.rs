//! CLI for pushing local images to a lava-vtt server.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lavacast_core::settings;
use std::path::{Path, PathBuf};

use commands::{run_config, run_display, run_hash};

/// Top-level CLI for lavacast.
#[derive(Debug, Parser)]
#[command(name = "lavacast")]
#[command(about = "lavacast: push local images to a lava-vtt server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Upload an image to the server (if not already stored) and display it.
    Display {
        /// Path to the image, or an image reference when --vault is given.
        reference: String,

        /// Treat the reference as displayed inside this vault directory and
        /// resolve it the way the host would; non-image references are ignored.
        #[arg(long, value_name = "DIR")]
        vault: Option<PathBuf>,

        /// Override the configured server address for this invocation only.
        #[arg(long, value_name = "URL")]
        server: Option<String>,
    },

    /// Compute the SHA-1 identity key of a file.
    Hash {
        /// Path to the file.
        path: String,
    },

    /// Show or change the configured server address.
    Config {
        /// New server address to persist, e.g. http://localhost:3000.
        #[arg(long, value_name = "URL")]
        server: Option<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let settings = settings::load_or_init()?;
        tracing::debug!("loaded settings: {:?}", settings);

        match cli.command {
            CliCommand::Display {
                reference,
                vault,
                server,
            } => {
                let address = server.unwrap_or(settings.server_address);
                run_display(&address, &reference, vault.as_deref()).await?;
            }
            CliCommand::Hash { path } => run_hash(Path::new(&path)).await?,
            CliCommand::Config { server } => run_config(server.as_deref()).await?,
        }

        Ok(())
    }
}
