//! CLI command handlers, one file per command.

mod config;
mod page_id;
mod resolve;
mod versions;

pub use config::run_config;
pub use page_id::run_page_id;
pub use resolve::run_resolve;
pub use versions::run_versions;

use anyhow::{Context, Result};
use docmeta_core::config::DocSetConfig;
use docmeta_core::resolver::{self, ResolvedPage};

/// Resolve `url`, using `path` as the path component when given.
fn resolve_page(cfg: &DocSetConfig, url: &str, path: Option<&str>) -> Result<ResolvedPage> {
    let page = match path {
        Some(p) => resolver::resolve_with_path(url, p, cfg),
        None => resolver::resolve(url, cfg),
    };
    page.with_context(|| format!("resolve page metadata for {url}"))
}
