//! Core domain records for the module catalog and its lookup tables.
//!
//! All of these are plain data: constructed once by the ingest collaborators
//! at startup, then read-only for the rest of the run.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TaxonomyEntry
// ---------------------------------------------------------------------------

/// A flat product-taxonomy node from the taxonomy service snapshot.
///
/// The taxonomy is two levels deep: level-1 entries are product families,
/// level-2 entries carry a `parent_slug` that should resolve to a level-1
/// slug. A dangling parent is tolerated — it just yields no parent-based
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyEntry {
    /// Hierarchy level (1 or 2).
    pub level: u32,
    /// Human-readable label (e.g., "App Service").
    pub label: String,
    /// Stable product identifier (e.g., "azure-app-service").
    pub slug: String,
    /// Slug of the level-1 parent, for level-2 entries.
    #[serde(default)]
    pub parent_slug: Option<String>,
}

// ---------------------------------------------------------------------------
// OwnershipRecord
// ---------------------------------------------------------------------------

/// One row of the product-to-owner mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipRecord {
    /// Product slug this record applies to.
    pub slug: String,
    /// Owning CSA group identifier.
    pub group_id: String,
    /// Secondary owner display name.
    pub secondary_owner: String,
}

// ---------------------------------------------------------------------------
// ApproverRecord
// ---------------------------------------------------------------------------

/// One row of the group-to-approver mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproverRecord {
    /// CSA group identifier.
    pub group_id: String,
    /// Approver display name.
    pub approver_name: String,
    /// Approver account alias.
    pub approver_alias: String,
}

// ---------------------------------------------------------------------------
// ModuleRecord
// ---------------------------------------------------------------------------

/// Metadata for one content module, collected from its `index.yml`.
///
/// Fields are best-effort: anything the source file does not provide is an
/// empty string (or an empty list for `product_slugs`). `date` stays a raw
/// string — freshness bucketing parses it leniently and simply excludes
/// modules whose date does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Unique module identifier from the metadata.
    pub uid: String,
    /// Module title.
    pub title: String,
    /// Author account handle (`metadata.ms.author`).
    pub author_handle: String,
    /// Author display name (`metadata.author`), when present.
    pub author_display_name: String,
    /// Last-updated date as written in the source (may be empty).
    pub date: String,
    /// Product slugs the module is tagged with, in source order.
    /// May reference slugs absent from the taxonomy.
    pub product_slugs: Vec<String>,
    /// Name of the repository the module came from.
    pub source_repo: String,
    /// Path of the module file relative to the repository root.
    pub relative_path: String,
}

// ---------------------------------------------------------------------------
// ModuleCatalog
// ---------------------------------------------------------------------------

/// The modules collected from one repository, in scan order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepoModules {
    /// Repository display name.
    pub name: String,
    /// The repository's module records.
    pub modules: Vec<ModuleRecord>,
}

/// The full set of collected modules, grouped by source repository.
///
/// Materialized once by the catalog collaborator and read-only afterwards;
/// the resolver and recommender only ever borrow from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleCatalog {
    /// Per-repository module lists, in configuration order.
    pub repos: Vec<RepoModules>,
}

impl ModuleCatalog {
    /// Iterate all modules across every repository.
    pub fn all_modules(&self) -> impl Iterator<Item = &ModuleRecord> {
        self.repos.iter().flat_map(|r| r.modules.iter())
    }

    /// Total module count across repositories.
    pub fn len(&self) -> usize {
        self.repos.iter().map(|r| r.modules.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// RecommendationEntry
// ---------------------------------------------------------------------------

/// A suggested product tag for a module whose title mentions a taxonomy
/// label the module is not already tagged with.
///
/// Borrows the module from the catalog; recommendations never outlive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationEntry<'a> {
    /// The module the suggestion applies to.
    pub module: &'a ModuleRecord,
    /// Slug of the suggested taxonomy entry.
    pub suggested_slug: String,
    /// Label of the suggested taxonomy entry.
    pub suggested_label: String,
}
