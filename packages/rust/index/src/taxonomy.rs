//! Flat store of product-taxonomy entries with level-aware iteration.

use modcatalog_shared::TaxonomyEntry;
use tracing::debug;

/// Holds the product taxonomy as a flat list of entries.
///
/// Slugs are unique within a level but global uniqueness is not enforced;
/// [`lookup_by_slug`](Self::lookup_by_slug) returns the first match.
#[derive(Debug, Default)]
pub struct TaxonomyIndex {
    entries: Vec<TaxonomyEntry>,
}

impl TaxonomyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole table with `entries`. Re-loading the same data is
    /// idempotent; there is no partial-update API.
    pub fn load(&mut self, entries: Vec<TaxonomyEntry>) {
        debug!(count = entries.len(), "taxonomy table loaded");
        self.entries = entries;
    }

    /// Look up the entry for `slug`, if any.
    pub fn lookup_by_slug(&self, slug: &str) -> Option<&TaxonomyEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    /// Level-2 entries whose parent is `parent_slug`, ordered by slug
    /// ascending. Restartable: each call yields a fresh iterator.
    pub fn children_of<'a>(
        &'a self,
        parent_slug: &str,
    ) -> impl Iterator<Item = &'a TaxonomyEntry> {
        let mut children: Vec<&TaxonomyEntry> = self
            .entries
            .iter()
            .filter(|e| e.level == 2 && e.parent_slug.as_deref() == Some(parent_slug))
            .collect();
        children.sort_by(|a, b| a.slug.cmp(&b.slug));
        children.into_iter()
    }

    /// Level-1 entries, ordered by slug ascending.
    pub fn top_level_entries(&self) -> impl Iterator<Item = &TaxonomyEntry> {
        let mut top: Vec<&TaxonomyEntry> = self.entries.iter().filter(|e| e.level == 1).collect();
        top.sort_by(|a, b| a.slug.cmp(&b.slug));
        top.into_iter()
    }

    /// All entries in load order.
    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the hierarchy as indented `"slug": "label"` lines, level-1
    /// entries sorted by slug with their children nested under them.
    pub fn dump(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for top in self.top_level_entries() {
            lines.push(format!("\"{}\": \"{}\"", top.slug, top.label));
            for child in self.children_of(&top.slug) {
                lines.push(format!("\t\"{}\": \"{}\"", child.slug, child.label));
            }
        }
        lines
    }
}
