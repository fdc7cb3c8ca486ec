use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Documentation-set configuration loaded from `~/.config/docmeta/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSetConfig {
    /// Documentation-set name; must appear as a path segment in page URLs.
    pub name: String,
    /// Version this build of the documentation publishes.
    pub version: String,
    /// Versions offered in the version switcher, in display order.
    pub available_versions: Vec<String>,
    /// Global the page-id is assigned to in script output.
    #[serde(default = "default_page_id_variable")]
    pub page_id_variable: String,
    /// Fail instead of degenerating when the URL does not contain the name.
    #[serde(default)]
    pub strict: bool,
}

fn default_page_id_variable() -> String {
    "neo4jPageId".to_string()
}

impl Default for DocSetConfig {
    fn default() -> Self {
        Self {
            name: "graph-algorithms".to_string(),
            version: "3.2".to_string(),
            available_versions: ["3.2", "3.3", "3.4", "3.5-preview"]
                .iter()
                .map(|v| v.to_string())
                .collect(),
            page_id_variable: default_page_id_variable(),
            strict: false,
        }
    }
}

impl DocSetConfig {
    /// Reject configurations that cannot describe a documentation set.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            bail!("config: `name` must not be empty");
        }
        if self.version.is_empty() {
            bail!("config: `version` must not be empty");
        }
        if !crate::render::is_js_identifier(&self.page_id_variable) {
            bail!(
                "config: `page_id_variable` = `{}` is not a JavaScript identifier",
                self.page_id_variable
            );
        }
        let mut seen = HashSet::new();
        for v in &self.available_versions {
            if !seen.insert(v.as_str()) {
                bail!("config: duplicate entry `{v}` in `available_versions`");
            }
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docmeta")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DocSetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DocSetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<DocSetConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: DocSetConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let cfg = DocSetConfig::default();
        assert_eq!(cfg.name, "graph-algorithms");
        assert_eq!(cfg.version, "3.2");
        assert_eq!(cfg.available_versions, vec!["3.2", "3.3", "3.4", "3.5-preview"]);
        assert_eq!(cfg.page_id_variable, "neo4jPageId");
        assert!(!cfg.strict);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            name = "cypher-manual"
            version = "4.0"
            available_versions = ["4.0", "3.5"]
        "#;
        let cfg: DocSetConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.name, "cypher-manual");
        assert_eq!(cfg.version, "4.0");
        assert_eq!(cfg.available_versions, vec!["4.0", "3.5"]);
        assert_eq!(cfg.page_id_variable, "neo4jPageId");
        assert!(!cfg.strict);
    }

    #[test]
    fn config_toml_strict_and_variable() {
        let toml = r#"
            name = "ogm-manual"
            version = "3.1"
            available_versions = []
            page_id_variable = "docPageId"
            strict = true
        "#;
        let cfg: DocSetConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.page_id_variable, "docPageId");
        assert!(cfg.strict);
        assert!(cfg.available_versions.is_empty());
    }

    #[test]
    fn validate_rejects_empty_name_and_duplicates() {
        let mut cfg = DocSetConfig::default();
        cfg.name.clear();
        assert!(cfg.validate().is_err());

        let mut cfg = DocSetConfig::default();
        cfg.available_versions.push("3.3".to_string());
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("3.3"));

        let mut cfg = DocSetConfig::default();
        cfg.page_id_variable = "page-id".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "name = \"graph-data-science\"").unwrap();
        writeln!(f, "version = \"1.0\"").unwrap();
        writeln!(f, "available_versions = [\"1.0\", \"1.1-preview\"]").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.name, "graph-data-science");
        assert_eq!(cfg.available_versions.len(), 2);
    }

    #[test]
    fn load_from_rejects_invalid_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "name = \"\"\nversion = \"1.0\"\navailable_versions = []").unwrap();
        f.flush().unwrap();
        assert!(load_from(f.path()).is_err());
    }
}
