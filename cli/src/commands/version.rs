//! `docker-imgsha version` command.

use std::io::Write;

use clap::Args;

use imgsha_core::config::{PLUGIN_VERSION, SUPPORTED_API_VERSION, SUPPORTED_ENGINE_VERSION};

#[derive(Args)]
pub struct VersionArgs;

pub async fn execute(_args: VersionArgs) -> Result<(), Box<dyn std::error::Error>> {
    run(&mut std::io::stdout())
}

pub fn run(out: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "Plugin Version: {PLUGIN_VERSION}")?;
    writeln!(out, "Docker API Version: {SUPPORTED_API_VERSION}+")?;
    writeln!(out, "Supported Engine Versions: {SUPPORTED_ENGINE_VERSION}")?;
    Ok(())
}
