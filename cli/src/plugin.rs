//! Docker CLI plugin conventions.
//!
//! The docker CLI runs `docker-imgsha docker-cli-plugin-metadata` during
//! discovery and `docker-imgsha imgsha <args>` for `docker imgsha <args>`.

use imgsha_core::PluginMetadata;

/// Hidden subcommand the docker CLI uses for discovery.
pub const METADATA_SUBCOMMAND: &str = "docker-cli-plugin-metadata";

/// Names under which the docker CLI may pass the plugin as first argument.
pub const PLUGIN_NAMES: [&str; 4] = ["imgsha", "img-sha", "docker-imgsha", "docker-img-sha"];

/// Drop the plugin name the docker CLI inserts after the program name.
pub fn plugin_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args: Vec<String> = args.into_iter().collect();
    if args.len() > 1 && PLUGIN_NAMES.contains(&args[1].as_str()) {
        args.remove(1);
    }
    args
}

/// Single-line JSON metadata document.
pub fn metadata_json() -> serde_json::Result<String> {
    serde_json::to_string(&PluginMetadata::current())
}
