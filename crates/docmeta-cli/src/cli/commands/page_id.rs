//! `docmeta page-id` – print only the page id.

use anyhow::Result;
use docmeta_core::config::DocSetConfig;

use super::resolve_page;

pub fn run_page_id(cfg: &DocSetConfig, url: &str, path: Option<&str>) -> Result<()> {
    let page = resolve_page(cfg, url, path)?;
    println!("{}", page.page_id);
    Ok(())
}
