//! Record filtering.

use crate::record::ImageRecord;

/// Optional match criteria; unset fields always pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Wildcard pattern for the repository
    pub repository: Option<String>,
    /// Wildcard pattern for the tag
    pub tag: Option<String>,
    /// Exact architecture name
    pub architecture: Option<String>,
}

impl Filter {
    /// Build a filter from a `key=value` expression and an architecture.
    ///
    /// Recognised keys are `repository` and `tag`; anything else (including
    /// an expression without `=`) contributes nothing.
    pub fn parse(expr: Option<&str>, architecture: Option<&str>) -> Self {
        let mut filter = Filter {
            architecture: architecture
                .filter(|a| !a.is_empty())
                .map(str::to_string),
            ..Default::default()
        };

        let Some((key, value)) = expr.and_then(|e| e.split_once('=')) else {
            return filter;
        };
        let value = value.trim();
        if value.is_empty() {
            return filter;
        }

        match key.trim() {
            "repository" => filter.repository = Some(value.to_string()),
            "tag" => filter.tag = Some(value.to_string()),
            other => tracing::debug!(key = other, "Ignoring unsupported filter key"),
        }
        filter
    }

    /// Whether no criteria are set.
    pub fn is_empty(&self) -> bool {
        self.repository.is_none() && self.tag.is_none() && self.architecture.is_none()
    }

    /// Check a record against every set criterion.
    pub fn matches(&self, record: &ImageRecord) -> bool {
        if let Some(ref pattern) = self.repository {
            if !matches_pattern(&record.repository, pattern) {
                return false;
            }
        }

        if let Some(ref pattern) = self.tag {
            if !matches_pattern(&record.tag, pattern) {
                return false;
            }
        }

        if let Some(ref arch) = self.architecture {
            if record.architecture != *arch {
                return false;
            }
        }

        true
    }

    /// Keep only matching records, preserving order.
    pub fn apply(&self, records: Vec<ImageRecord>) -> Vec<ImageRecord> {
        if self.is_empty() {
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Simple `*` wildcard matching.
///
/// A single `*` splits the pattern into a prefix and suffix which are checked
/// independently (they may overlap on short values). Patterns with several
/// `*` degrade to a substring test of the pattern with outer stars trimmed.
pub fn matches_pattern(value: &str, pattern: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    if !pattern.contains('*') {
        return value == pattern;
    }

    let parts: Vec<&str> = pattern.split('*').collect();
    if let [prefix, suffix] = parts.as_slice() {
        return value.starts_with(prefix) && value.ends_with(suffix);
    }

    value.contains(pattern.trim_matches('*'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(repository: &str, tag: &str, arch: &str) -> ImageRecord {
        ImageRecord {
            repository: repository.to_string(),
            tag: tag.to_string(),
            config_hash: "sha256:abc".to_string(),
            manifest_digest: "N/A".to_string(),
            size_bytes: 0,
            created_at: None,
            architecture: arch.to_string(),
            os: String::new(),
            is_multi_arch: false,
            labels: BTreeMap::new(),
        }
    }

    // --- matches_pattern ---

    #[test]
    fn test_pattern_star_matches_everything() {
        assert!(matches_pattern("nginx", "*"));
        assert!(matches_pattern("", "*"));
    }

    #[test]
    fn test_pattern_exact() {
        assert!(matches_pattern("nginx", "nginx"));
        assert!(!matches_pattern("nginx-alpine", "nginx"));
    }

    #[test]
    fn test_pattern_prefix() {
        assert!(matches_pattern("nginx-alpine", "nginx*"));
        assert!(!matches_pattern("my-nginx", "nginx*"));
    }

    #[test]
    fn test_pattern_suffix() {
        assert!(matches_pattern("my-nginx", "*nginx"));
        assert!(!matches_pattern("nginx-alpine", "*nginx"));
    }

    #[test]
    fn test_pattern_prefix_and_suffix() {
        assert!(matches_pattern("library/nginx", "library*nginx"));
        assert!(!matches_pattern("library/redis", "library*nginx"));
    }

    #[test]
    fn test_pattern_overlapping_prefix_suffix_is_permissive() {
        // "ab" starts with "ab" and ends with "b" even though "ab*b" needs 3 chars.
        assert!(matches_pattern("ab", "ab*b"));
    }

    #[test]
    fn test_pattern_multi_star_substring_fallback() {
        assert!(matches_pattern("my-nginx-app", "*nginx*"));
        assert!(!matches_pattern("my-redis-app", "*nginx*"));
    }

    #[test]
    fn test_pattern_inner_stars_are_literal_in_fallback() {
        // "a*b*c" trims to itself, so only a literal "a*b*c" substring matches.
        assert!(!matches_pattern("aXbXc", "a*b*c"));
        assert!(matches_pattern("xa*b*cx", "a*b*c"));
    }

    // --- Filter::matches ---

    #[test]
    fn test_empty_filter_matches_anything() {
        let filter = Filter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&record("nginx", "latest", "amd64")));
        assert!(filter.matches(&record("<none>", "<none>", "")));
    }

    #[test]
    fn test_repository_wildcard() {
        let filter = Filter {
            repository: Some("ng*".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&record("nginx", "latest", "")));
        assert!(!filter.matches(&record("postgres", "16", "")));
    }

    #[test]
    fn test_tag_wildcard() {
        let filter = Filter {
            tag: Some("1.*".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&record("nginx", "1.25", "")));
        assert!(!filter.matches(&record("nginx", "latest", "")));
    }

    #[test]
    fn test_architecture_is_exact() {
        let filter = Filter {
            architecture: Some("amd64".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&record("nginx", "latest", "amd64")));
        assert!(!filter.matches(&record("nginx", "latest", "arm64")));

        let wildcard = Filter {
            architecture: Some("amd*".to_string()),
            ..Default::default()
        };
        assert!(!wildcard.matches(&record("nginx", "latest", "amd64")));
    }

    #[test]
    fn test_all_criteria_must_pass() {
        let filter = Filter {
            repository: Some("nginx".to_string()),
            tag: Some("latest".to_string()),
            architecture: None,
        };
        assert!(filter.matches(&record("nginx", "latest", "")));
        assert!(!filter.matches(&record("nginx", "1.25", "")));
        assert!(!filter.matches(&record("redis", "latest", "")));
    }

    // --- Filter::parse ---

    #[test]
    fn test_parse_repository() {
        let filter = Filter::parse(Some("repository=nginx"), None);
        assert_eq!(filter.repository.as_deref(), Some("nginx"));
        assert!(filter.tag.is_none());
    }

    #[test]
    fn test_parse_trims_key_and_value() {
        let filter = Filter::parse(Some(" tag = latest "), None);
        assert_eq!(filter.tag.as_deref(), Some("latest"));
    }

    #[test]
    fn test_parse_value_may_contain_equals() {
        let filter = Filter::parse(Some("tag=a=b"), None);
        assert_eq!(filter.tag.as_deref(), Some("a=b"));
    }

    #[test]
    fn test_parse_unknown_key_ignored() {
        let filter = Filter::parse(Some("label=env"), None);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_parse_malformed_ignored() {
        assert!(Filter::parse(Some("nginx"), None).is_empty());
        assert!(Filter::parse(Some(""), None).is_empty());
        assert!(Filter::parse(None, Some("")).is_empty());
    }

    #[test]
    fn test_parse_architecture() {
        let filter = Filter::parse(None, Some("arm64"));
        assert_eq!(filter.architecture.as_deref(), Some("arm64"));
    }

    // --- Filter::apply ---

    #[test]
    fn test_apply_preserves_order() {
        let filter = Filter::parse(Some("repository=*a*"), None);
        let kept = filter.apply(vec![
            record("alpine", "3", ""),
            record("nginx", "latest", ""),
            record("redis", "7", ""),
            record("mariadb", "11", ""),
        ]);
        let names: Vec<&str> = kept.iter().map(|r| r.repository.as_str()).collect();
        assert_eq!(names, vec!["alpine", "mariadb"]);
    }
}
