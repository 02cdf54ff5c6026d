//! Static plugin configuration.
//!
//! Everything here is fixed at build time; the docker CLI reads the plugin
//! metadata during discovery and `version` prints the compatibility strings.

use serde::{Deserialize, Serialize};

/// Plugin version reported to the docker CLI and by `version`.
pub const PLUGIN_VERSION: &str = "1.0.0";

/// Minimum Docker Engine API version the plugin relies on.
pub const SUPPORTED_API_VERSION: &str = "1.44";

/// Docker Engine releases known to work.
pub const SUPPORTED_ENGINE_VERSION: &str = "25.0+";

/// Docker CLI plugin metadata schema version.
pub const METADATA_SCHEMA_VERSION: &str = "0.1.0";

/// Plugin vendor name.
pub const VENDOR: &str = "dockplugin";

/// One-line description shown by `docker --help`.
pub const SHORT_DESCRIPTION: &str = "Display Docker images with Config SHA and Manifest Digest";

/// Project homepage.
pub const PROJECT_URL: &str = "https://github.com/bsalunke/dockplugin";

/// Metadata document answered to `docker-cli-plugin-metadata`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PluginMetadata {
    pub schema_version: String,
    pub vendor: String,
    pub version: String,
    pub short_description: String,
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PluginMetadata {
    /// Metadata for this build.
    pub fn current() -> Self {
        Self {
            schema_version: METADATA_SCHEMA_VERSION.to_string(),
            vendor: VENDOR.to_string(),
            version: PLUGIN_VERSION.to_string(),
            short_description: SHORT_DESCRIPTION.to_string(),
            url: Some(PROJECT_URL.to_string()),
        }
    }
}
