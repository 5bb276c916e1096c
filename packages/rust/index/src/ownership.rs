//! Product slug → ownership record store.

use std::collections::HashMap;

use modcatalog_shared::OwnershipRecord;
use tracing::debug;

/// Maps product slugs to their owning CSA group and secondary owner.
///
/// Duplicate slugs overwrite silently (last-write-wins). Enumeration for
/// dump/debug follows first-insertion order.
#[derive(Debug, Default)]
pub struct OwnershipIndex {
    records: HashMap<String, OwnershipRecord>,
    order: Vec<String>,
}

impl OwnershipIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load rows into the index. A slug seen before keeps its position in
    /// the enumeration order but takes the new record's values.
    pub fn load(&mut self, rows: Vec<OwnershipRecord>) {
        for row in rows {
            if !self.records.contains_key(&row.slug) {
                self.order.push(row.slug.clone());
            }
            self.records.insert(row.slug.clone(), row);
        }
        debug!(count = self.records.len(), "ownership table loaded");
    }

    /// Look up the record for `slug`, if any.
    pub fn lookup(&self, slug: &str) -> Option<&OwnershipRecord> {
        self.records.get(slug)
    }

    /// Map product slugs to their owning group ids, in input order.
    /// Slugs with no ownership record are skipped.
    pub fn map_to_groups<I, S>(&self, slugs: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        slugs
            .into_iter()
            .filter_map(|slug| self.lookup(slug.as_ref()).map(|r| r.group_id.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Quoted-CSV lines in insertion order, for debugging.
    pub fn dump(&self) -> Vec<String> {
        self.order
            .iter()
            .filter_map(|slug| self.records.get(slug))
            .map(|r| format!("\"{}\",\"{}\",\"{}\"", r.slug, r.group_id, r.secondary_owner))
            .collect()
    }
}
