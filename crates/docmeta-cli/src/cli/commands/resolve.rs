//! `docmeta resolve` – print the metadata record and page id.

use anyhow::Result;
use docmeta_core::config::DocSetConfig;
use docmeta_core::render;

use super::resolve_page;
use crate::cli::OutputFormat;

pub fn run_resolve(
    cfg: &DocSetConfig,
    url: &str,
    path: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let page = resolve_page(cfg, url, path)?;
    let out = match format {
        OutputFormat::Json => render::to_json(&page)?,
        OutputFormat::Js => render::to_script(&page, &cfg.page_id_variable)?,
    };
    println!("{}", out.trim_end());
    Ok(())
}
