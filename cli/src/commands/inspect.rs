//! `docker-imgsha inspect` command: show both identifiers plus platform and
//! labels for one image as JSON.

use std::io::Write;

use clap::{Args, ValueEnum};

use imgsha_core::{normalize_detail, ImageGateway};

use crate::docker::DockerGateway;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Image ID, short ID or reference to inspect
    pub image: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = InspectFormat::Json)]
    pub format: InspectFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectFormat {
    Json,
}

pub async fn execute(
    args: InspectArgs,
    host: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let gateway = DockerGateway::connect(host).await?;
    run(&gateway, &args, &mut std::io::stdout()).await
}

/// Inspect `args.image` through `gateway` and write the record to `out`.
pub async fn run(
    gateway: &dyn ImageGateway,
    args: &InspectArgs,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let detail = gateway.inspect_image(&args.image).await?;
    let record = normalize_detail(&detail);

    match args.format {
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&record)?;
            writeln!(out, "{json}")?;
        }
    }
    out.flush()?;
    Ok(())
}
