//! CLI for resolving documentation page metadata.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use docmeta_core::config::{self, DocSetConfig};
use std::path::PathBuf;

use commands::{run_config, run_page_id, run_resolve, run_versions};

/// Top-level CLI for docmeta.
#[derive(Debug, Parser)]
#[command(name = "docmeta")]
#[command(about = "Derive base URIs, page id and version links for documentation pages", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/docmeta/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the documentation-set name.
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Override the configured documentation version.
    #[arg(long, global = true, value_name = "VERSION")]
    pub doc_version: Option<String>,

    /// Fail when the URL does not contain the documentation-set name.
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output format for `resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    /// Script assigning `window.docMeta` and the page-id global.
    Js,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the metadata record and page id for a page URL.
    Resolve {
        /// Absolute URL of the documentation page.
        url: String,
        /// Path component to use instead of the one parsed from the URL.
        #[arg(long)]
        path: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Print only the page id.
    PageId {
        /// Absolute URL of the documentation page.
        url: String,
        /// Path component to use instead of the one parsed from the URL.
        #[arg(long)]
        path: Option<String>,
    },

    /// List links to this page in every available version.
    Versions {
        /// Absolute URL of the documentation page.
        url: String,
        /// Path component to use instead of the one parsed from the URL.
        #[arg(long)]
        path: Option<String>,
    },

    /// Show the config path and effective configuration.
    Config,
}

impl Cli {
    /// Load configuration and apply command-line overrides.
    fn effective_config(&self) -> Result<DocSetConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        if let Some(name) = &self.name {
            cfg.name = name.clone();
        }
        if let Some(version) = &self.doc_version {
            cfg.version = version.clone();
        }
        if self.strict {
            cfg.strict = true;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.effective_config()?;
        tracing::debug!("effective config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { url, path, format } => {
                run_resolve(&cfg, &url, path.as_deref(), format)?
            }
            CliCommand::PageId { url, path } => run_page_id(&cfg, &url, path.as_deref())?,
            CliCommand::Versions { url, path } => run_versions(&cfg, &url, path.as_deref())?,
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
