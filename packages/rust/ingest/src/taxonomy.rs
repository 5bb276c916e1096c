//! Taxonomy snapshot loader.
//!
//! The product taxonomy arrives as a JSON array snapshot of the taxonomy
//! service (one object per node, extra fields ignored).

use std::path::Path;

use modcatalog_shared::{ModCatalogError, Result, TaxonomyEntry};
use tracing::debug;

/// Read a taxonomy snapshot file into flat entries.
///
/// Unreadable or malformed JSON is fatal — the taxonomy is a required table.
pub fn load_taxonomy(path: &Path) -> Result<Vec<TaxonomyEntry>> {
    let content = std::fs::read_to_string(path).map_err(|e| ModCatalogError::io(path, e))?;

    let entries: Vec<TaxonomyEntry> = serde_json::from_str(&content).map_err(|e| {
        ModCatalogError::parse(format!("taxonomy snapshot {}: {e}", path.display()))
    })?;

    debug!(path = %path.display(), count = entries.len(), "taxonomy snapshot read");
    Ok(entries)
}
