//! `docker-imgsha list` command.

use std::io::Write;

use clap::Args;
use tracing::debug;

use imgsha_core::{normalize_summary, Filter, ImageGateway, ImageRecord};

use crate::docker::DockerGateway;
use crate::render::{self, OutputFormat};

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Output format: table, json, or a template using placeholders
    /// {{.Repository}}, {{.Tag}}, {{.ConfigSHA}}, {{.ManifestDigest}},
    /// {{.Size}}, {{.Created}}, {{.Architecture}}, {{.OS}}, {{.Labels}}
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Filter images (e.g., repository=nginx, tag=latest, repository=ng*)
    #[arg(long)]
    pub filter: Option<String>,

    /// Show all images (including intermediates)
    #[arg(short, long)]
    pub all: bool,

    /// Don't truncate digests
    #[arg(long)]
    pub no_trunc: bool,

    /// Only show config SHAs (one per line)
    #[arg(short, long)]
    pub quiet: bool,

    /// Only show images built for this architecture
    #[arg(long = "arch")]
    pub arch: Option<String>,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            format: "table".to_string(),
            filter: None,
            all: false,
            no_trunc: false,
            quiet: false,
            arch: None,
        }
    }
}

pub async fn execute(
    args: ListArgs,
    host: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let gateway = DockerGateway::connect(host).await?;
    run(&gateway, &args, &mut std::io::stdout()).await
}

/// List, normalize, filter and render images from `gateway` into `out`.
pub async fn run(
    gateway: &dyn ImageGateway,
    args: &ListArgs,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let summaries = gateway.list_images(args.all).await?;

    let records: Vec<ImageRecord> = summaries.iter().flat_map(normalize_summary).collect();
    debug!(
        images = summaries.len(),
        records = records.len(),
        "Normalized image summaries"
    );

    let filter = Filter::parse(args.filter.as_deref(), args.arch.as_deref());
    let records = filter.apply(records);

    // --quiet: print only config SHAs
    if args.quiet {
        for record in &records {
            writeln!(out, "{}", record.config_hash)?;
        }
        return Ok(());
    }

    let format = OutputFormat::parse(&args.format);
    let rendered = render::render(&records, &format, args.no_trunc)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
