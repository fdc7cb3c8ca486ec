//! `docmeta versions` – links to the current page in every available version.

use anyhow::Result;
use docmeta_core::config::DocSetConfig;
use docmeta_core::switcher;

use super::resolve_page;

pub fn run_versions(cfg: &DocSetConfig, url: &str, path: Option<&str>) -> Result<()> {
    let page = resolve_page(cfg, url, path)?;
    let links = switcher::version_links(&page);
    if links.is_empty() {
        println!("No version links for this page.");
        return Ok(());
    }
    println!("{:<2} {:<14} {}", "", "VERSION", "URL");
    for link in links {
        let marker = if link.current { "*" } else { "" };
        println!("{:<2} {:<14} {}", marker, link.version, link.url);
    }
    Ok(())
}
