//! `docmeta config` – show where configuration lives and what is in effect.

use anyhow::Result;
use docmeta_core::config::{self, DocSetConfig};
use std::path::Path;

pub fn run_config(cfg: &DocSetConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
