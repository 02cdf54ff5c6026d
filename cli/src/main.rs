//! docker-imgsha entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use imgsha_cli::commands::{dispatch, Cli};
use imgsha_cli::plugin::plugin_args;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing (stderr keeps stdout machine-readable)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_from(plugin_args(std::env::args()));

    if let Err(e) = dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
