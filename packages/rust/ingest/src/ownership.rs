//! Product-to-owner mapping loader.
//!
//! The ownership table is maintained in a workbook; its "mapping" sheet is
//! consumed here as a CSV export with columns slug, group, secondary owner.
//! The header row is skipped.

use std::path::Path;

use modcatalog_shared::{ModCatalogError, OwnershipRecord, Result};
use tracing::{debug, warn};

/// Read the ownership mapping CSV into records, in file order.
///
/// An unreadable file is fatal; a row with fewer than three columns is
/// warned about and skipped.
pub fn load_ownership(path: &Path) -> Result<Vec<OwnershipRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ModCatalogError::Table(format!("ownership mapping {}: {e}", path.display())))?;

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row.map_err(|e| {
            ModCatalogError::parse(format!("ownership mapping {}: {e}", path.display()))
        })?;

        let (Some(slug), Some(group_id), Some(secondary_owner)) =
            (row.get(0), row.get(1), row.get(2))
        else {
            warn!(line = line + 2, "ownership row has fewer than 3 columns, skipping");
            continue;
        };

        records.push(OwnershipRecord {
            slug: slug.trim().to_string(),
            group_id: group_id.trim().to_string(),
            secondary_owner: secondary_owner.trim().to_string(),
        });
    }

    debug!(path = %path.display(), count = records.len(), "ownership mapping read");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_rows_and_skips_header() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "Slug,CSA,M2").expect("write");
        writeln!(file, "azure-app-service,G1,Owner A").expect("write");
        writeln!(file, "azure, G2 ,Owner B").expect("write");

        let records = load_ownership(file.path()).expect("load");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].slug, "azure-app-service");
        assert_eq!(records[1].group_id, "G2");
    }

    #[test]
    fn short_rows_are_skipped() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "Slug,CSA,M2").expect("write");
        writeln!(file, "only-a-slug").expect("write");
        writeln!(file, "azure,G1,Owner A").expect("write");

        let records = load_ownership(file.path()).expect("load");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug, "azure");
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_ownership(Path::new("/nonexistent/mapping.csv")).unwrap_err();
        assert!(matches!(err, ModCatalogError::Table(_)));
    }
}
