//! CSV rendering of report sheets.

use std::path::{Path, PathBuf};

use modcatalog_shared::{ModCatalogError, Result};
use tracing::info;

use crate::sheets::Sheet;

/// Write each sheet to `<out_dir>/<stem>.csv`, creating the directory as
/// needed. Returns the written paths in sheet order.
pub fn render_sheets(sheets: &[Sheet], out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).map_err(|e| ModCatalogError::io(out_dir, e))?;

    let mut paths = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let path = out_dir.join(format!("{}.csv", sheet.file_stem()));
        write_sheet(sheet, &path)?;
        info!(sheet = sheet.name, path = %path.display(), rows = sheet.rows.len(),
            "sheet written");
        paths.push(path);
    }
    Ok(paths)
}

fn write_sheet(sheet: &Sheet, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| ModCatalogError::Render(format!("{}: {e}", path.display())))?;

    writer
        .write_record(&sheet.header)
        .map_err(|e| ModCatalogError::Render(format!("{}: {e}", path.display())))?;
    for row in &sheet.rows {
        writer
            .write_record(row)
            .map_err(|e| ModCatalogError::Render(format!("{}: {e}", path.display())))?;
    }

    writer
        .flush()
        .map_err(|e| ModCatalogError::io(path, e))?;
    Ok(())
}
