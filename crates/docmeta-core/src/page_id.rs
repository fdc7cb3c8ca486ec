//! Page id: the current page's location relative to its version base URI.
//!
//! The version segment is read from the URL path rather than taken from the
//! configured version, so pages of older versions get ids relative to their
//! own `<name>/<version>/` prefix.

use crate::error::MetadataError;

/// Version segment following the first `<name>/` in `pathname`, if any.
///
/// `/graph-algorithms/3.3/intro/index.html` with name `graph-algorithms`
/// gives `3.3`. A path ending right after `<name>/` gives an empty segment.
pub fn version_segment<'a>(pathname: &'a str, name: &str) -> Option<&'a str> {
    let marker = format!("{name}/");
    let (_, rest) = pathname.split_once(marker.as_str())?;
    Some(rest.split('/').next().unwrap_or(rest))
}

/// Compute the page id for `current_url`.
///
/// Removes the first occurrence of `unversioned_doc_base_uri + segment + "/"`
/// from the URL. When the path carries no `<name>/` segment the URL is
/// returned unchanged.
pub fn compute_page_id(
    current_url: &str,
    unversioned_doc_base_uri: &str,
    current_pathname: &str,
    name: &str,
) -> String {
    match version_segment(current_pathname, name) {
        Some(segment) => {
            let base_uri = format!("{unversioned_doc_base_uri}{segment}/");
            current_url.replacen(&base_uri, "", 1)
        }
        None => {
            tracing::debug!(
                name,
                path = current_pathname,
                "no name segment in path; page id is the full URL"
            );
            current_url.to_string()
        }
    }
}

/// Like [`compute_page_id`], but fails when the path has no `<name>/` segment.
pub fn try_compute_page_id(
    current_url: &str,
    unversioned_doc_base_uri: &str,
    current_pathname: &str,
    name: &str,
) -> Result<String, MetadataError> {
    if version_segment(current_pathname, name).is_none() {
        return Err(MetadataError::NameSegmentNotInPath {
            name: name.to_string(),
            path: current_pathname.to_string(),
        });
    }
    Ok(compute_page_id(
        current_url,
        unversioned_doc_base_uri,
        current_pathname,
        name,
    ))
}
