//! Group-to-approver table loader.
//!
//! The approver list is maintained as a markdown document containing a
//! single table with columns group, approver name, approver alias. The
//! table body is interspersed with alphabetical section markers — rows
//! whose first cell is a short bold label (`**A**`, `**B**`, …) with the
//! remaining cells empty — which are discarded here, not stored.

use std::path::Path;

use modcatalog_shared::{ApproverRecord, ModCatalogError, Result};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use tracing::debug;

/// Read the approver markdown document into records, in table order.
///
/// The document must contain exactly one table block; zero or several is a
/// structural error. The table's header row is skipped.
pub fn load_approvers(path: &Path) -> Result<Vec<ApproverRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| ModCatalogError::io(path, e))?;

    let rows = extract_single_table(&content).map_err(|e| match e {
        TableError::None => {
            ModCatalogError::Table(format!("approver document {} has no table", path.display()))
        }
        TableError::Multiple(n) => ModCatalogError::parse(format!(
            "approver document {} has {n} tables, expected exactly one",
            path.display()
        )),
    })?;

    let mut records = Vec::new();
    for row in rows {
        let c0 = cell(&row, 0);
        let c1 = cell(&row, 1);
        let c2 = cell(&row, 2);

        if is_section_marker(&c0, &c1, &c2) {
            continue;
        }

        records.push(ApproverRecord {
            group_id: c0,
            approver_name: c1,
            approver_alias: c2,
        });
    }

    debug!(path = %path.display(), count = records.len(), "approver table read");
    Ok(records)
}

fn cell(row: &[String], index: usize) -> String {
    row.get(index).map(|c| c.trim().to_string()).unwrap_or_default()
}

/// A categorization header: a short `**X**` label with nothing after it.
fn is_section_marker(c0: &str, c1: &str, c2: &str) -> bool {
    if !c1.is_empty() || !c2.is_empty() {
        return false;
    }
    let Some(inner) = c0.strip_prefix("**").and_then(|s| s.strip_suffix("**")) else {
        return false;
    };
    !inner.is_empty() && inner.chars().count() <= 2
}

enum TableError {
    None,
    Multiple(usize),
}

/// Walk the markdown event stream and collect the body rows of the single
/// table. Bold spans are re-wrapped in `**` so marker rows keep their
/// source form. Header rows (inside the table head) are not collected.
fn extract_single_table(content: &str) -> std::result::Result<Vec<Vec<String>>, TableError> {
    let parser = Parser::new_ext(content, Options::ENABLE_TABLES);

    let mut table_count = 0usize;
    let mut in_head = false;
    let mut in_cell = false;
    let mut cell_text = String::new();
    let mut row: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();

    for event in parser {
        match event {
            Event::Start(Tag::Table(_)) => table_count += 1,
            Event::Start(Tag::TableHead) => in_head = true,
            Event::End(TagEnd::TableHead) => {
                in_head = false;
                // Header cells are not wrapped in a TableRow; drop them.
                row.clear();
            }
            Event::Start(Tag::TableRow) => row.clear(),
            Event::End(TagEnd::TableRow) => {
                if !in_head {
                    rows.push(std::mem::take(&mut row));
                }
            }
            Event::Start(Tag::TableCell) => {
                in_cell = true;
                cell_text.clear();
            }
            Event::End(TagEnd::TableCell) => {
                in_cell = false;
                row.push(std::mem::take(&mut cell_text));
            }
            Event::Start(Tag::Strong) | Event::End(TagEnd::Strong) if in_cell => {
                cell_text.push_str("**");
            }
            Event::Text(text) | Event::Code(text) if in_cell => {
                cell_text.push_str(&text);
            }
            _ => {}
        }
    }

    match table_count {
        0 => Err(TableError::None),
        1 => Ok(rows),
        n => Err(TableError::Multiple(n)),
    }
}
