//! Record renderers: table, JSON and user template.
//!
//! Each renderer turns the full record sequence into one string so nothing
//! reaches stdout until rendering has succeeded.

use imgsha_core::{ImageRecord, Result};

use crate::output;
use crate::template::Template;

/// Column headers of the default table view.
pub const TABLE_HEADERS: [&str; 6] = [
    "REPOSITORY",
    "TAG",
    "CONFIG SHA",
    "MANIFEST DIGEST",
    "SIZE",
    "CREATED",
];

/// Output format selected with `--format`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Template(String),
}

impl OutputFormat {
    /// `table` and `json` are matched case-insensitively; anything else is a
    /// template.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "table" => OutputFormat::Table,
            "json" => OutputFormat::Json,
            _ => OutputFormat::Template(value.to_string()),
        }
    }
}

/// Render records in the requested format.
pub fn render(records: &[ImageRecord], format: &OutputFormat, no_trunc: bool) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(records, no_trunc)),
        OutputFormat::Json => render_json(records),
        OutputFormat::Template(source) => render_template(records, source),
    }
}

/// Aligned table with truncated digests unless `no_trunc` is set.
pub fn render_table(records: &[ImageRecord], no_trunc: bool) -> String {
    let mut table = output::new_table(&TABLE_HEADERS);
    for record in records {
        table.add_row([
            record.repository.clone(),
            record.tag.clone(),
            output::format_digest(&record.config_hash, no_trunc),
            output::format_digest(&record.manifest_digest, no_trunc),
            output::format_bytes(record.size_bytes),
            output::format_created(record.created_at.as_ref()),
        ]);
    }
    format!("{table}\n")
}

/// Pretty-printed JSON array (2-space indent) with a trailing newline.
pub fn render_json(records: &[ImageRecord]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

/// Apply a template to every record, one line per record.
pub fn render_template(records: &[ImageRecord], source: &str) -> Result<String> {
    let template = Template::parse(source)?;
    let mut out = String::new();
    for record in records {
        out.push_str(&template.apply(record));
        out.push('\n');
    }
    Ok(out)
}
