//! Application configuration for modcatalog.
//!
//! User config lives at `~/.modcatalog/modcatalog.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ModCatalogError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "modcatalog.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".modcatalog";

// ---------------------------------------------------------------------------
// Config structs (matching modcatalog.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Lookup-table input files.
    #[serde(default)]
    pub inputs: InputsConfig,

    /// Report output settings.
    #[serde(default)]
    pub report: ReportConfig,

    /// Content repositories to scan for modules.
    #[serde(default)]
    pub repos: Vec<RepoEntry>,
}

/// `[inputs]` section — paths to the three lookup tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputsConfig {
    /// Product taxonomy snapshot (JSON array).
    #[serde(default = "default_taxonomy_file")]
    pub taxonomy_file: String,

    /// Product-to-owner mapping (CSV export of the workbook's mapping sheet).
    #[serde(default = "default_ownership_file")]
    pub ownership_file: String,

    /// Group-to-approver table (markdown document with a single table).
    #[serde(default = "default_approver_file")]
    pub approver_file: String,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            taxonomy_file: default_taxonomy_file(),
            ownership_file: default_ownership_file(),
            approver_file: default_approver_file(),
        }
    }
}

fn default_taxonomy_file() -> String {
    "product-taxonomy.json".into()
}
fn default_ownership_file() -> String {
    "product-owners.csv".into()
}
fn default_approver_file() -> String {
    "approvers.md".into()
}

/// `[report]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory the report sheets are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Emit a warning for product slugs with no taxonomy entry.
    #[serde(default = "default_true")]
    pub warn_unknown_slugs: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            warn_unknown_slugs: true,
        }
    }
}

fn default_output_dir() -> String {
    "catalog-report".into()
}
fn default_true() -> bool {
    true
}

/// `[[repos]]` entry — a content repository to scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoEntry {
    /// Short name used in report rows (defaults to the last path segment
    /// when empty).
    #[serde(default)]
    pub name: String,
    /// Path to the repository checkout on disk.
    pub path: String,
}

impl RepoEntry {
    /// The name to report this repository under.
    pub fn display_name(&self) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        Path::new(&self.path)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.clone())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.modcatalog/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ModCatalogError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.modcatalog/modcatalog.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ModCatalogError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| ModCatalogError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| ModCatalogError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| ModCatalogError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ModCatalogError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
