//! Resolve a page URL into its metadata record and page id.
//!
//! The result is an immutable [`ResolvedPage`] passed by reference to
//! downstream consumers (version switcher, renderers) instead of being
//! published into shared global state.

use crate::config::DocSetConfig;
use crate::error::MetadataError;
use crate::meta::PageMetadata;
use crate::page_id;

/// Everything derived for one page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPage {
    /// Href the page was resolved from (normalized when parsed by [`resolve`]).
    pub href: String,
    pub meta: PageMetadata,
    pub page_id: String,
    /// Version segment actually present in the URL path (may differ from `meta.version`).
    pub url_version: Option<String>,
}

impl ResolvedPage {
    /// Version the page is shown under: the URL segment if present and non-empty,
    /// otherwise the configured version.
    pub fn effective_version(&self) -> &str {
        match self.url_version.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => &self.meta.version,
        }
    }
}

fn parse(current_url: &str) -> Result<url::Url, MetadataError> {
    url::Url::parse(current_url).map_err(|e| MetadataError::InvalidUrl {
        url: current_url.to_string(),
        reason: e.to_string(),
    })
}

/// Path component of `current_url`, percent-encoded as a browser reports it.
pub fn pathname(current_url: &str) -> Result<String, MetadataError> {
    Ok(parse(current_url)?.path().to_string())
}

/// Resolve `current_url` against `cfg`.
///
/// The URL is parsed once and its serialized form is used both as the href and
/// as the source of the path, so the two agree on percent-encoding.
pub fn resolve(current_url: &str, cfg: &DocSetConfig) -> Result<ResolvedPage, MetadataError> {
    let parsed = parse(current_url)?;
    resolve_with_path(parsed.as_str(), parsed.path(), cfg)
}

/// Resolve with an explicitly supplied path component.
///
/// With `cfg.strict` unset, a URL or path lacking the name degenerates
/// silently; with it set, those cases are errors.
pub fn resolve_with_path(
    current_url: &str,
    current_pathname: &str,
    cfg: &DocSetConfig,
) -> Result<ResolvedPage, MetadataError> {
    let meta = if cfg.strict {
        PageMetadata::try_build(current_url, &cfg.name, &cfg.version, &cfg.available_versions)?
    } else {
        PageMetadata::from_config(current_url, cfg)
    };

    let page_id = if cfg.strict {
        page_id::try_compute_page_id(
            current_url,
            &meta.unversioned_doc_base_uri,
            current_pathname,
            &meta.name,
        )?
    } else {
        page_id::compute_page_id(
            current_url,
            &meta.unversioned_doc_base_uri,
            current_pathname,
            &meta.name,
        )
    };

    let url_version = page_id::version_segment(current_pathname, &meta.name).map(str::to_string);
    tracing::debug!(
        url = current_url,
        page_id = %page_id,
        url_version = ?url_version,
        "resolved page"
    );

    Ok(ResolvedPage {
        href: current_url.to_string(),
        meta,
        page_id,
        url_version,
    })
}
