//! Version switcher: links to the current page in every available version.

use serde::Serialize;

use crate::resolver::ResolvedPage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionLink {
    pub version: String,
    pub url: String,
    /// True for the version the page is currently shown under.
    pub current: bool,
}

/// One link per available version, in configured order.
///
/// Each link points at the same page under another version. When the page id
/// could not be made relative (empty version segment, or a base URI that does
/// not prefix the href) each link points at its version root instead. A page
/// outside the documentation set (no `<name>/` in the path) gets no links.
pub fn version_links(page: &ResolvedPage) -> Vec<VersionLink> {
    let page_path = match page.url_version.as_deref() {
        None => return Vec::new(),
        Some("") => "",
        Some(_) if page.page_id == page.href => "",
        Some(_) => page.page_id.as_str(),
    };
    let current = page.effective_version();
    page.meta
        .available_doc_versions
        .iter()
        .map(|v| VersionLink {
            version: v.clone(),
            url: format!("{}{}/{}", page.meta.unversioned_doc_base_uri, v, page_path),
            current: v == current,
        })
        .collect()
}
