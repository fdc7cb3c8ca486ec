//! Per-page documentation metadata: name, versions and the three base URIs.
//!
//! Built once from the page URL and the documentation-set configuration, then
//! handed by reference to whatever needs it (page id, version links, output).

mod locate;

use serde::{Deserialize, Serialize};

use crate::config::DocSetConfig;
use crate::error::MetadataError;
use locate::NameMatch;

/// Immutable metadata record for one page.
///
/// Serializes with the camelCase field names page scripts read (`docMeta`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub name: String,
    pub version: String,
    pub available_doc_versions: Vec<String>,
    pub this_pub_base_uri: String,
    pub unversioned_doc_base_uri: String,
    pub common_docs_base_uri: String,
}

impl PageMetadata {
    /// Derive metadata for `current_url`.
    ///
    /// If `name` is absent from the URL the base URIs degenerate to a short
    /// URL prefix and an empty common base; no error is raised.
    pub fn build(
        current_url: &str,
        name: &str,
        version: &str,
        available_versions: &[String],
    ) -> Self {
        let m = NameMatch::locate(current_url, name);
        if m == NameMatch::NotFound {
            tracing::debug!(name, url = current_url, "name not in URL; base URIs degenerate");
        }

        let through = locate::through_name(current_url, name, m);
        Self {
            name: name.to_string(),
            version: version.to_string(),
            available_doc_versions: available_versions.to_vec(),
            this_pub_base_uri: format!("{through}/{version}"),
            unversioned_doc_base_uri: format!("{through}/"),
            common_docs_base_uri: locate::before_name(current_url, m).to_string(),
        }
    }

    /// Like [`PageMetadata::build`], but refuses URLs that do not contain `name`.
    pub fn try_build(
        current_url: &str,
        name: &str,
        version: &str,
        available_versions: &[String],
    ) -> Result<Self, MetadataError> {
        if name.is_empty() {
            return Err(MetadataError::EmptyName);
        }
        if NameMatch::locate(current_url, name) == NameMatch::NotFound {
            return Err(MetadataError::NameNotInUrl {
                name: name.to_string(),
                url: current_url.to_string(),
            });
        }
        Ok(Self::build(current_url, name, version, available_versions))
    }

    /// Build from a loaded documentation-set configuration.
    pub fn from_config(current_url: &str, cfg: &DocSetConfig) -> Self {
        Self::build(current_url, &cfg.name, &cfg.version, &cfg.available_versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &str = "graph-algorithms";

    fn versions() -> Vec<String> {
        ["3.2", "3.3", "3.4", "3.5-preview"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn base_uris_for_versioned_page() {
        let url = "https://neo4j.com/docs/graph-algorithms/3.2/some/page.html";
        let meta = PageMetadata::build(url, NAME, "3.2", &versions());
        assert_eq!(meta.this_pub_base_uri, "https://neo4j.com/docs/graph-algorithms/3.2");
        assert_eq!(meta.unversioned_doc_base_uri, "https://neo4j.com/docs/graph-algorithms/");
        assert_eq!(meta.common_docs_base_uri, "https://neo4j.com/docs");
        assert!(url.starts_with(&meta.this_pub_base_uri));
        assert!(url.starts_with(&meta.unversioned_doc_base_uri));
        assert!(url.starts_with(&meta.common_docs_base_uri));
    }

    #[test]
    fn available_versions_kept_in_order() {
        let url = "https://neo4j.com/docs/graph-algorithms/3.2/";
        let meta = PageMetadata::build(url, NAME, "3.2", &versions());
        assert_eq!(meta.available_doc_versions, vec!["3.2", "3.3", "3.4", "3.5-preview"]);
        assert_eq!(meta.name, NAME);
        assert_eq!(meta.version, "3.2");
    }

    #[test]
    fn build_is_idempotent() {
        let url = "https://neo4j.com/docs/graph-algorithms/3.4/a.html?x=1#y";
        let a = PageMetadata::build(url, NAME, "3.2", &versions());
        let b = PageMetadata::build(url, NAME, "3.2", &versions());
        assert_eq!(a, b);
    }

    #[test]
    fn configured_version_used_for_this_pub_base() {
        // The URL says 3.4, the configured constant says 3.2.
        let url = "https://neo4j.com/docs/graph-algorithms/3.4/a.html";
        let meta = PageMetadata::build(url, NAME, "3.2", &versions());
        assert_eq!(meta.this_pub_base_uri, "https://neo4j.com/docs/graph-algorithms/3.2");
    }

    #[test]
    fn missing_name_degenerates_silently() {
        let url = "https://example.com/manual/1.0/index.html";
        let meta = PageMetadata::build(url, NAME, "3.2", &versions());
        // 16-char name -> first 15 chars of the URL.
        assert_eq!(meta.this_pub_base_uri, "https://example/3.2");
        assert_eq!(meta.unversioned_doc_base_uri, "https://example/");
        assert_eq!(meta.common_docs_base_uri, "");
    }

    #[test]
    fn try_build_rejects_missing_name() {
        let err = PageMetadata::try_build("https://example.com/x", NAME, "3.2", &versions())
            .unwrap_err();
        assert!(matches!(err, MetadataError::NameNotInUrl { .. }));
    }

    #[test]
    fn try_build_rejects_empty_name() {
        let err = PageMetadata::try_build("https://example.com/x", "", "3.2", &versions())
            .unwrap_err();
        assert_eq!(err, MetadataError::EmptyName);
    }

    #[test]
    fn try_build_matches_build_when_found() {
        let url = "https://neo4j.com/docs/graph-algorithms/3.3/";
        let strict = PageMetadata::try_build(url, NAME, "3.2", &versions()).unwrap();
        assert_eq!(strict, PageMetadata::build(url, NAME, "3.2", &versions()));
    }

    #[test]
    fn serializes_camel_case() {
        let url = "https://neo4j.com/docs/graph-algorithms/3.2/";
        let meta = PageMetadata::build(url, NAME, "3.2", &versions());
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["thisPubBaseUri"], "https://neo4j.com/docs/graph-algorithms/3.2");
        assert_eq!(json["availableDocVersions"][3], "3.5-preview");
        assert!(json.get("commonDocsBaseUri").is_some());
    }
}
