//! Conversion of raw daemon image data into [`ImageRecord`]s.
//!
//! Two entry points mirror the two daemon calls: [`normalize_summary`] for
//! list entries (one record per tag) and [`normalize_detail`] for a single
//! inspected image.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{ImageRecord, DEFAULT_TAG, NONE_SENTINEL, NOT_AVAILABLE};

/// Lightweight list entry as reported by the daemon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSummary {
    /// Config hash (`sha256:...`)
    pub id: String,
    pub size: i64,
    /// Creation time, seconds since the Unix epoch
    pub created: i64,
    /// `repository:tag` strings
    pub repo_tags: Vec<String>,
    /// `repository@algorithm:hex` strings
    pub repo_digests: Vec<String>,
}

/// Full single-image record as reported by the daemon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDetail {
    pub id: String,
    pub size: i64,
    /// RFC3339 timestamp with nanoseconds
    pub created: String,
    pub repo_tags: Vec<String>,
    pub repo_digests: Vec<String>,
    pub architecture: String,
    pub os: String,
    pub labels: BTreeMap<String, String>,
}

/// Expand a list entry into one record per tag.
///
/// Untagged images produce a single `<none>:<none>` record.
pub fn normalize_summary(summary: &ImageSummary) -> Vec<ImageRecord> {
    let manifest_digest = extract_manifest_digest(&summary.repo_digests);
    let created_at = DateTime::<Utc>::from_timestamp(summary.created, 0);
    let size_bytes = clamp_size(summary.size);

    let make = |repository: String, tag: String| ImageRecord {
        repository,
        tag,
        config_hash: summary.id.clone(),
        manifest_digest: manifest_digest.clone(),
        size_bytes,
        created_at,
        architecture: String::new(),
        os: String::new(),
        is_multi_arch: false,
        labels: BTreeMap::new(),
    };

    if summary.repo_tags.is_empty() {
        return vec![make(NONE_SENTINEL.to_string(), NONE_SENTINEL.to_string())];
    }

    summary
        .repo_tags
        .iter()
        .map(|repo_tag| {
            let (repository, tag) = split_repo_tag(repo_tag);
            make(repository, tag)
        })
        .collect()
}

/// Convert an inspected image into a single record.
///
/// Only the first tag is used. An unparsable creation time leaves
/// `created_at` unset instead of failing.
pub fn normalize_detail(detail: &ImageDetail) -> ImageRecord {
    let (repository, tag) = match detail.repo_tags.first() {
        Some(repo_tag) => split_repo_tag(repo_tag),
        None => (NONE_SENTINEL.to_string(), NONE_SENTINEL.to_string()),
    };

    let created_at = match DateTime::parse_from_rfc3339(&detail.created) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            tracing::debug!(
                image = %detail.id,
                created = %detail.created,
                error = %e,
                "Unparsable creation time"
            );
            None
        }
    };

    ImageRecord {
        repository,
        tag,
        config_hash: detail.id.clone(),
        manifest_digest: extract_manifest_digest(&detail.repo_digests),
        size_bytes: clamp_size(detail.size),
        created_at,
        architecture: detail.architecture.clone(),
        os: detail.os.clone(),
        is_multi_arch: false,
        labels: detail.labels.clone(),
    }
}

/// Split `repository:tag` into its parts.
///
/// Anything that does not split into exactly two parts on `:` (no colon, or a
/// registry port such as `localhost:5000/app:v1`) is returned whole with the
/// `latest` tag.
pub fn split_repo_tag(repo_tag: &str) -> (String, String) {
    let parts: Vec<&str> = repo_tag.split(':').collect();
    match parts.as_slice() {
        [repository, tag] => (repository.to_string(), tag.to_string()),
        _ => (repo_tag.to_string(), DEFAULT_TAG.to_string()),
    }
}

/// Manifest digest from the first `repository@digest` entry.
///
/// Additional entries (other registries) are not consulted.
pub fn extract_manifest_digest(repo_digests: &[String]) -> String {
    let Some(first) = repo_digests.first() else {
        return NOT_AVAILABLE.to_string();
    };
    let parts: Vec<&str> = first.split('@').collect();
    match parts.as_slice() {
        [_, digest] => digest.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn clamp_size(size: i64) -> u64 {
    u64::try_from(size).unwrap_or(0)
}
