//! Ownership-resolution join: product slugs → responsible approvers.

use modcatalog_index::{ApproverIndex, OwnershipIndex, TaxonomyIndex};
use tracing::warn;

/// Resolves product slugs to the deduplicated set of responsible approvers.
///
/// Borrows the three lookup indices for the duration of the run; the indices
/// are fully loaded before the resolver is constructed.
#[derive(Debug)]
pub struct ApprovalResolver<'a> {
    taxonomy: &'a TaxonomyIndex,
    ownership: &'a OwnershipIndex,
    approvers: &'a ApproverIndex,
    warn_unknown_slugs: bool,
}

impl<'a> ApprovalResolver<'a> {
    pub fn new(
        taxonomy: &'a TaxonomyIndex,
        ownership: &'a OwnershipIndex,
        approvers: &'a ApproverIndex,
        warn_unknown_slugs: bool,
    ) -> Self {
        Self {
            taxonomy,
            ownership,
            approvers,
            warn_unknown_slugs,
        }
    }

    /// Resolve the approvers responsible for a set of product slugs.
    ///
    /// For each slug, a best-effort two-hop resolution: the slug's own
    /// ownership record contributes its secondary owner and (via the
    /// approver table) its group's approver; if the slug's taxonomy entry
    /// has a parent, the parent's ownership record contributes likewise.
    /// Exactly one parent level is consulted, never a full ancestor walk.
    ///
    /// A slug with no taxonomy entry contributes nothing (warned about when
    /// configured); so does a slug with no ownership record. The result is
    /// blank-free, deduplicated, and sorted with ordinal ordering, so it is
    /// independent of input order and duplicates.
    pub fn resolve_approvers<I, S>(&self, product_slugs: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = Vec::new();

        for slug in product_slugs {
            let slug = slug.as_ref();
            let Some(entry) = self.taxonomy.lookup_by_slug(slug) else {
                if self.warn_unknown_slugs {
                    warn!(slug, "product slug has no taxonomy entry, skipping");
                }
                continue;
            };

            self.collect_owner(slug, &mut names);
            if let Some(parent_slug) = entry.parent_slug.as_deref() {
                self.collect_owner(parent_slug, &mut names);
            }
        }

        names.retain(|name| !name.trim().is_empty());
        names.sort();
        names.dedup();
        names
    }

    /// Add the secondary owner and group approver for `slug`, if owned.
    fn collect_owner(&self, slug: &str, names: &mut Vec<String>) {
        let Some(owner) = self.ownership.lookup(slug) else {
            return;
        };
        names.push(owner.secondary_owner.clone());
        if let Some(approver) = self.approvers.lookup(&owner.group_id) {
            names.push(approver.approver_name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modcatalog_shared::{ApproverRecord, OwnershipRecord, TaxonomyEntry};

    fn taxonomy() -> TaxonomyIndex {
        let mut index = TaxonomyIndex::new();
        index.load(vec![
            TaxonomyEntry {
                level: 1,
                label: "Parent".into(),
                slug: "parent".into(),
                parent_slug: None,
            },
            TaxonomyEntry {
                level: 2,
                label: "Child".into(),
                slug: "child".into(),
                parent_slug: Some("parent".into()),
            },
            TaxonomyEntry {
                level: 2,
                label: "Dangling".into(),
                slug: "dangling".into(),
                parent_slug: Some("no-such-parent".into()),
            },
        ]);
        index
    }

    fn ownership() -> OwnershipIndex {
        let mut index = OwnershipIndex::new();
        index.load(vec![
            OwnershipRecord {
                slug: "child".into(),
                group_id: "G1".into(),
                secondary_owner: "OwnerChild".into(),
            },
            OwnershipRecord {
                slug: "parent".into(),
                group_id: "G2".into(),
                secondary_owner: "OwnerParent".into(),
            },
        ]);
        index
    }

    fn approvers() -> ApproverIndex {
        let mut index = ApproverIndex::new();
        index.load(vec![
            ApproverRecord {
                group_id: "G1".into(),
                approver_name: "Alice".into(),
                approver_alias: "alice".into(),
            },
            ApproverRecord {
                group_id: "G2".into(),
                approver_name: "Bob".into(),
                approver_alias: "bob".into(),
            },
        ]);
        index
    }

    #[test]
    fn two_hop_resolution_collects_both_levels() {
        let taxonomy = taxonomy();
        let ownership = ownership();
        let approvers = approvers();
        let resolver = ApprovalResolver::new(&taxonomy, &ownership, &approvers, false);

        let result = resolver.resolve_approvers(["child"]);
        assert_eq!(result, ["Alice", "Bob", "OwnerChild", "OwnerParent"]);
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let taxonomy = taxonomy();
        let ownership = ownership();
        let approvers = approvers();
        let resolver = ApprovalResolver::new(&taxonomy, &ownership, &approvers, false);

        let result = resolver.resolve_approvers(std::iter::empty::<&str>());
        assert!(result.is_empty());
    }

    #[test]
    fn result_is_order_independent() {
        let taxonomy = taxonomy();
        let ownership = ownership();
        let approvers = approvers();
        let resolver = ApprovalResolver::new(&taxonomy, &ownership, &approvers, false);

        let forward = resolver.resolve_approvers(["child", "parent"]);
        let reverse = resolver.resolve_approvers(["parent", "child"]);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn duplicate_slugs_do_not_duplicate_output() {
        let taxonomy = taxonomy();
        let ownership = ownership();
        let approvers = approvers();
        let resolver = ApprovalResolver::new(&taxonomy, &ownership, &approvers, false);

        let once = resolver.resolve_approvers(["parent"]);
        let twice = resolver.resolve_approvers(["parent", "parent"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_slug_contributes_nothing() {
        let taxonomy = taxonomy();
        let ownership = ownership();
        let approvers = approvers();
        let resolver = ApprovalResolver::new(&taxonomy, &ownership, &approvers, false);

        let result = resolver.resolve_approvers(["no-such-slug", "parent"]);
        assert_eq!(result, ["Bob", "OwnerParent"]);
    }

    #[test]
    fn unowned_slug_with_dangling_parent_is_not_an_error() {
        let taxonomy = taxonomy();
        let ownership = ownership();
        let approvers = approvers();
        let resolver = ApprovalResolver::new(&taxonomy, &ownership, &approvers, false);

        let result = resolver.resolve_approvers(["dangling"]);
        assert!(result.is_empty());
    }

    #[test]
    fn blank_owner_names_are_dropped() {
        let taxonomy = taxonomy();
        let mut ownership = OwnershipIndex::new();
        ownership.load(vec![OwnershipRecord {
            slug: "parent".into(),
            group_id: "G9".into(),
            secondary_owner: "   ".into(),
        }]);
        let approvers = approvers();
        let resolver = ApprovalResolver::new(&taxonomy, &ownership, &approvers, false);

        let result = resolver.resolve_approvers(["parent"]);
        assert!(result.is_empty());
    }
}
