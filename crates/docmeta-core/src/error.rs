//! Error type for strict metadata derivation.
//!
//! The faithful path never returns these; it degenerates silently. Only
//! `try_*` builders and URL parsing in the resolver surface them.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// The documentation-set name does not occur anywhere in the page URL.
    #[error("documentation set name `{name}` not found in URL: {url}")]
    NameNotInUrl { name: String, url: String },

    /// The page path has no `<name>/` segment, so no version segment can be read.
    #[error("path `{path}` has no `{name}/` segment")]
    NameSegmentNotInPath { name: String, path: String },

    /// An empty name matches every URL at offset 0 and yields meaningless base URIs.
    #[error("documentation set name is empty")]
    EmptyName,

    /// The page URL could not be parsed to extract its path component.
    #[error("invalid page URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
}
