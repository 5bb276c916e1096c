//! CSA group → approver record store.

use std::collections::HashMap;

use modcatalog_shared::ApproverRecord;
use tracing::debug;

/// Maps CSA group identifiers to their approver.
///
/// Same keyed-overwrite semantics as [`OwnershipIndex`](crate::OwnershipIndex):
/// duplicate group ids are last-write-wins, enumeration follows insertion
/// order. Section-marker rows are filtered out by the loader and never
/// reach this index.
#[derive(Debug, Default)]
pub struct ApproverIndex {
    records: HashMap<String, ApproverRecord>,
    order: Vec<String>,
}

impl ApproverIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, rows: Vec<ApproverRecord>) {
        for row in rows {
            if !self.records.contains_key(&row.group_id) {
                self.order.push(row.group_id.clone());
            }
            self.records.insert(row.group_id.clone(), row);
        }
        debug!(count = self.records.len(), "approver table loaded");
    }

    /// Look up the approver for `group_id`, if any.
    pub fn lookup(&self, group_id: &str) -> Option<&ApproverRecord> {
        self.records.get(group_id)
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
            .filter_map(|group| self.records.get(group))
            .map(|r| {
                format!(
                    "\"{}\",\"{}\",\"{}\"",
                    r.group_id, r.approver_name, r.approver_alias
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(group: &str, name: &str, alias: &str) -> ApproverRecord {
        ApproverRecord {
            group_id: group.into(),
            approver_name: name.into(),
            approver_alias: alias.into(),
        }
    }

    #[test]
    fn lookup_after_load() {
        let mut index = ApproverIndex::new();
        index.load(vec![record("G1", "Alice", "alice")]);
        assert_eq!(index.lookup("G1").unwrap().approver_name, "Alice");
        assert!(index.lookup("G9").is_none());
    }

    #[test]
    fn duplicate_group_is_last_write_wins() {
        let mut index = ApproverIndex::new();
        index.load(vec![record("G1", "Alice", "alice"), record("G1", "Bob", "bob")]);
        assert_eq!(index.lookup("G1").unwrap().approver_name, "Bob");
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn reload_same_data_is_idempotent() {
        let rows = vec![record("G1", "Alice", "alice"), record("G2", "Bob", "bob")];
        let mut index = ApproverIndex::new();
        index.load(rows.clone());
        let before = index.dump();
        index.load(rows);
        assert_eq!(index.dump(), before);
    }
}
