//! Table formatting helpers for CLI output.

use chrono::{DateTime, Utc};
use comfy_table::{ContentArrangement, Table};

use imgsha_core::record::NOT_AVAILABLE;

/// Digest prefix kept intact when truncating.
const SHA256_PREFIX: &str = "sha256:";

/// Hex characters shown after the prefix in truncated digests.
const TRUNCATED_HEX_LEN: usize = 12;

/// Create a borderless table with the given headers.
///
/// Cells never wrap, so long digests stay on one line for scripts that
/// parse the output.
pub fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Disabled);
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_header(headers);
    table
}

/// Format a byte count using 1024 steps: `512B`, `1.5KB`, `135.4MB`.
pub fn format_bytes(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

    if bytes < UNIT {
        return format!("{bytes}B");
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1}{}B", bytes as f64 / div as f64, PREFIXES[exp])
}

/// Shorten a `sha256:` digest to the prefix plus 12 hex characters.
///
/// `N/A` and empty values render as `N/A`; other values pass through.
pub fn format_digest(digest: &str, no_trunc: bool) -> String {
    if digest.is_empty() || digest == NOT_AVAILABLE {
        return NOT_AVAILABLE.to_string();
    }
    if no_trunc {
        return digest.to_string();
    }

    let keep = SHA256_PREFIX.len() + TRUNCATED_HEX_LEN;
    if digest.starts_with(SHA256_PREFIX) && digest.len() > keep {
        if let Some(head) = digest.get(..keep) {
            return format!("{head}...");
        }
    }
    digest.to_string()
}

/// Format a timestamp as a relative "ago" string.
pub fn format_ago(dt: &DateTime<Utc>) -> String {
    format_ago_at(dt, &Utc::now())
}

/// Format `dt` relative to `now`.
///
/// Buckets: minutes, hours, days (under a week), weeks (under 30 days),
/// 30-day months (under a year), 365-day years. Exactly one unit uses the
/// singular form.
pub fn format_ago_at(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*dt);

    if duration.num_seconds() < 60 {
        return "Less than a minute ago".to_string();
    }

    let mins = duration.num_minutes();
    if mins < 60 {
        return plural_ago(mins, "minute");
    }

    let hours = duration.num_hours();
    if hours < 24 {
        return plural_ago(hours, "hour");
    }

    let days = duration.num_days();
    if days < 7 {
        return plural_ago(days, "day");
    }
    if days < 30 {
        return plural_ago(days / 7, "week");
    }
    if days < 365 {
        return plural_ago(days / 30, "month");
    }

    plural_ago(days / 365, "year")
}

/// Format an optional creation time; unknown times render as `N/A`.
pub fn format_created(dt: Option<&DateTime<Utc>>) -> String {
    match dt {
        Some(dt) => format_ago(dt),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn plural_ago(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
