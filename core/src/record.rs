//! Normalized per-image record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository/tag placeholder for untagged images.
pub const NONE_SENTINEL: &str = "<none>";

/// Manifest digest placeholder when the daemon reports no repository digest.
pub const NOT_AVAILABLE: &str = "N/A";

/// Tag assumed when a reference carries no usable tag.
pub const DEFAULT_TAG: &str = "latest";

/// One displayable image row.
///
/// A tagged image yields one record per tag; all of them share the config
/// hash, manifest digest, size and creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub repository: String,
    pub tag: String,
    /// Legacy image ID (config blob digest)
    #[serde(alias = "configSHA")]
    pub config_hash: String,
    /// Repository digest of the manifest, or `N/A`
    pub manifest_digest: String,
    #[serde(alias = "size")]
    pub size_bytes: u64,
    #[serde(alias = "created", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub architecture: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub is_multi_arch: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl ImageRecord {
    /// Whether the record stands for an untagged image.
    pub fn is_untagged(&self) -> bool {
        self.repository == NONE_SENTINEL && self.tag == NONE_SENTINEL
    }
}
