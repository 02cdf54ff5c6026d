//! `docker-imgsha docker-cli-plugin-metadata`: plugin discovery handshake.

use std::io::Write;

use crate::plugin;

pub async fn execute() -> Result<(), Box<dyn std::error::Error>> {
    run(&mut std::io::stdout())
}

pub fn run(out: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "{}", plugin::metadata_json()?)?;
    Ok(())
}
