//! `{{.Field}}` placeholder templates for `list --format`.
//!
//! A template is parsed once and then applied to every record. Unknown fields
//! and unterminated placeholders are rejected at parse time, so a bad
//! template never produces partial output.

use imgsha_core::{ImageRecord, ImgShaError, Result};

/// Record field addressable from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Repository,
    Tag,
    ConfigSha,
    ManifestDigest,
    Size,
    Created,
    Architecture,
    Os,
    IsMultiArch,
    Labels,
}

impl Field {
    /// Resolve a placeholder name (without the leading dot).
    pub fn from_name(name: &str) -> Option<Self> {
        let field = match name {
            "Repository" => Field::Repository,
            "Tag" => Field::Tag,
            "ConfigSHA" | "ConfigHash" => Field::ConfigSha,
            "ManifestDigest" => Field::ManifestDigest,
            "Size" | "SizeBytes" => Field::Size,
            "Created" | "CreatedAt" => Field::Created,
            "Architecture" => Field::Architecture,
            "OS" | "Os" => Field::Os,
            "IsMultiArch" => Field::IsMultiArch,
            "Labels" => Field::Labels,
            _ => return None,
        };
        Some(field)
    }

    fn value(self, record: &ImageRecord) -> String {
        match self {
            Field::Repository => record.repository.clone(),
            Field::Tag => record.tag.clone(),
            Field::ConfigSha => record.config_hash.clone(),
            Field::ManifestDigest => record.manifest_digest.clone(),
            Field::Size => record.size_bytes.to_string(),
            Field::Created => record
                .created_at
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_default(),
            Field::Architecture => record.architecture.clone(),
            Field::Os => record.os.clone(),
            Field::IsMultiArch => record.is_multi_arch.to_string(),
            Field::Labels => record
                .labels
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed output template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template string.
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let after_open = &rest[start + 2..];
            let end = after_open.find("}}").ok_or_else(|| {
                ImgShaError::Template(format!(
                    "unclosed action at offset {}",
                    source.len() - rest.len() + start
                ))
            })?;

            let action = after_open[..end].trim();
            let name = action.strip_prefix('.').ok_or_else(|| {
                ImgShaError::Template(format!("unsupported action \"{action}\""))
            })?;
            let field = Field::from_name(name).ok_or_else(|| {
                ImgShaError::Template(format!("unknown field \"{name}\""))
            })?;
            segments.push(Segment::Field(field));

            rest = &after_open[end + 2..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Render one record (without a trailing newline).
    pub fn apply(&self, record: &ImageRecord) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(&field.value(record)),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record() -> ImageRecord {
        ImageRecord {
            repository: "nginx".to_string(),
            tag: "latest".to_string(),
            config_hash: "sha256:abcdef1234567890".to_string(),
            manifest_digest: "sha256:1234567890abcdef".to_string(),
            size_bytes: 142000000,
            created_at: chrono::DateTime::from_timestamp(0, 0),
            architecture: "amd64".to_string(),
            os: "linux".to_string(),
            is_multi_arch: false,
            labels: BTreeMap::from([
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string()),
            ]),
        }
    }

    fn render(source: &str) -> String {
        Template::parse(source).unwrap().apply(&record())
    }

    #[test]
    fn test_simple_template() {
        assert_eq!(render("{{.Repository}}:{{.Tag}}"), "nginx:latest");
    }

    #[test]
    fn test_config_sha_and_alias() {
        assert_eq!(render("{{.ConfigSHA}}"), "sha256:abcdef1234567890");
        assert_eq!(render("{{.ConfigHash}}"), "sha256:abcdef1234567890");
    }

    #[test]
    fn test_complex_template() {
        assert_eq!(
            render("{{.Repository}}:{{.Tag}} -> {{.ConfigSHA}}"),
            "nginx:latest -> sha256:abcdef1234567890"
        );
    }

    #[test]
    fn test_whitespace_inside_braces() {
        assert_eq!(render("{{ .Tag }}"), "latest");
    }

    #[test]
    fn test_scalar_fields() {
        assert_eq!(render("{{.Size}}"), "142000000");
        assert_eq!(render("{{.Created}}"), "1970-01-01T00:00:00+00:00");
        assert_eq!(render("{{.OS}}/{{.Architecture}}"), "linux/amd64");
        assert_eq!(render("{{.IsMultiArch}}"), "false");
        assert_eq!(render("{{.Labels}}"), "a=1,b=2");
    }

    #[test]
    fn test_literal_only() {
        assert_eq!(render("plain text"), "plain text");
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Template::parse("{{.InvalidField}}").unwrap_err();
        assert!(err.to_string().contains("InvalidField"));
    }

    #[test]
    fn test_unclosed_action_rejected() {
        assert!(Template::parse("{{.Repository").is_err());
    }

    #[test]
    fn test_non_field_action_rejected() {
        assert!(Template::parse("{{json .}}").is_err());
    }
}
