//! CLI command definitions and dispatch.

pub mod inspect;
pub mod list;
mod metadata;
mod version;

use clap::{Parser, Subcommand};

/// Docker CLI plugin for displaying Config SHA and Manifest Digest.
///
/// Docker Engine v29 switched the image ID from the config SHA to the
/// manifest digest. This plugin shows both identifiers so automation scripts
/// and monitoring tools that rely on the old ID keep working.
#[derive(Parser)]
#[command(name = "docker-imgsha", version = imgsha_core::config::PLUGIN_VERSION)]
pub struct Cli {
    /// Docker daemon to connect to (unix://, npipe://, tcp:// or http://)
    #[arg(long, global = true, value_name = "URL")]
    pub host: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Command {
    /// List all local images with Config SHA and Manifest Digest
    List(list::ListArgs),
    /// Display detailed information about a specific image
    Inspect(inspect::InspectArgs),
    /// Display plugin version and compatibility information
    Version(version::VersionArgs),
    /// Print Docker CLI plugin metadata
    #[command(name = "docker-cli-plugin-metadata", hide = true)]
    Metadata,
}

/// Dispatch a parsed CLI to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let host = cli.host.as_deref();
    match cli.command {
        Command::List(args) => list::execute(args, host).await,
        Command::Inspect(args) => inspect::execute(args, host).await,
        Command::Version(args) => version::execute(args).await,
        Command::Metadata => metadata::execute().await,
    }
}
