//! Module catalog builder: directory scan + YAML metadata extraction.
//!
//! Each content repository stores one `index.yml` per module. Field lookup
//! is best-effort — the YAML schema varies across repositories, so anything
//! missing becomes an empty string rather than an error. A module file that
//! cannot be read or parsed at all is warned about and skipped; the batch
//! always continues.

use std::path::Path;

use modcatalog_shared::{
    ModCatalogError, ModuleCatalog, ModuleRecord, RepoEntry, RepoModules, Result,
};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File name that marks a module root.
const MODULE_FILE_NAME: &str = "index.yml";

/// Directory name holding learning-path definitions, which are not modules.
const LEARNING_PATHS_DIR: &str = "paths";

/// Build the full catalog across all configured repositories.
///
/// An unreadable repository root is fatal; per-module failures are not.
pub fn build_catalog(repos: &[RepoEntry]) -> Result<ModuleCatalog> {
    let mut catalog = ModuleCatalog::default();
    for repo in repos {
        let name = repo.display_name();
        let modules = collect_repo_modules(&name, Path::new(&repo.path))?;
        catalog.repos.push(RepoModules { name, modules });
    }
    Ok(catalog)
}

/// Scan one repository for module metadata files.
pub fn collect_repo_modules(repo_name: &str, root: &Path) -> Result<Vec<ModuleRecord>> {
    if !root.is_dir() {
        return Err(ModCatalogError::io(
            root,
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "repository root is not a directory",
            ),
        ));
    }

    let mut modules = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(repo = repo_name, error = %e, "unreadable directory entry, skipping");
                continue;
            }
        };
        if !entry.file_type().is_file() || entry.file_name() != MODULE_FILE_NAME {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if relative
            .components()
            .any(|c| c.as_os_str() == LEARNING_PATHS_DIR)
        {
            // Learning-path files share the index.yml name but are not modules.
            continue;
        }

        match load_module(repo_name, entry.path(), relative) {
            Ok(module) => modules.push(module),
            Err(e) => {
                warn!(repo = repo_name, path = %relative.display(), error = %e,
                    "module metadata unreadable, skipping");
            }
        }
    }

    debug!(repo = repo_name, count = modules.len(), "repository scanned");
    Ok(modules)
}

/// Parse one module metadata file, best-effort.
fn load_module(repo_name: &str, path: &Path, relative: &Path) -> Result<ModuleRecord> {
    let content = std::fs::read_to_string(path).map_err(|e| ModCatalogError::io(path, e))?;
    let doc: serde_yaml::Value = serde_yaml::from_str(&content)
        .map_err(|e| ModCatalogError::parse(format!("{}: {e}", path.display())))?;

    let metadata = doc.get("metadata");

    Ok(ModuleRecord {
        uid: string_field(&doc, "uid"),
        title: string_field(&doc, "title"),
        author_handle: metadata.map(|m| string_field(m, "ms.author")).unwrap_or_default(),
        author_display_name: metadata.map(|m| string_field(m, "author")).unwrap_or_default(),
        date: metadata.map(|m| string_field(m, "ms.date")).unwrap_or_default(),
        product_slugs: string_list(&doc, "products"),
        source_repo: repo_name.to_string(),
        relative_path: relative.to_string_lossy().to_string(),
    })
}

fn string_field(value: &serde_yaml::Value, key: &str) -> String {
    match value.get(key) {
        Some(serde_yaml::Value::String(s)) => s.clone(),
        Some(serde_yaml::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn string_list(value: &serde_yaml::Value, key: &str) -> Vec<String> {
    let Some(serde_yaml::Value::Sequence(items)) = value.get(key) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            serde_yaml::Value::String(s) => Some(s.clone()),
            _ => None,
        })
        .collect()
}
