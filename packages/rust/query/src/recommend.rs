//! Missing-product-tag recommendations from title/label matching.

use modcatalog_index::TaxonomyIndex;
use modcatalog_shared::{ModuleCatalog, RecommendationEntry};
use tracing::debug;

/// Suggest product tags for modules whose title mentions a taxonomy label
/// the module is not already tagged with.
///
/// The match is a deliberately coarse substring heuristic: the label must
/// appear in the title preceded by a space, and either followed by a space
/// or at the end of the string. The asymmetry is intentional — it catches
/// suffix matches like "Deploy to Azure App Service". False positives and
/// negatives are accepted; this is a recommendation signal, not a
/// correctness requirement.
///
/// Output is sorted ascending by (repository, title); the sort is stable,
/// so a module's multiple suggestions keep taxonomy-table order.
pub fn recommend<'a>(
    catalog: &'a ModuleCatalog,
    taxonomy: &TaxonomyIndex,
) -> Vec<RecommendationEntry<'a>> {
    let mut recommendations: Vec<RecommendationEntry<'a>> = Vec::new();

    for repo in &catalog.repos {
        for module in &repo.modules {
            for entry in taxonomy.entries() {
                if title_mentions_label(&module.title, &entry.label)
                    && !module.product_slugs.contains(&entry.slug)
                {
                    recommendations.push(RecommendationEntry {
                        module,
                        suggested_slug: entry.slug.clone(),
                        suggested_label: entry.label.clone(),
                    });
                }
            }
        }
    }

    recommendations.sort_by(|a, b| {
        a.module
            .source_repo
            .cmp(&b.module.source_repo)
            .then_with(|| a.module.title.cmp(&b.module.title))
    });

    debug!(count = recommendations.len(), "tag recommendations computed");
    recommendations
}

/// The two explicit boundary checks: space-bounded interior match, or
/// space-preceded suffix match.
fn title_mentions_label(title: &str, label: &str) -> bool {
    if label.is_empty() {
        return false;
    }
    title.contains(&format!(" {label} ")) || title.ends_with(&format!(" {label}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use modcatalog_shared::{ModuleRecord, RepoModules, TaxonomyEntry};

    fn module(repo: &str, title: &str, slugs: &[&str]) -> ModuleRecord {
        ModuleRecord {
            uid: format!("learn.{}", title.to_lowercase().replace(' ', "-")),
            title: title.into(),
            author_handle: "someone".into(),
            author_display_name: String::new(),
            date: String::new(),
            product_slugs: slugs.iter().map(|s| s.to_string()).collect(),
            source_repo: repo.into(),
            relative_path: "index.yml".into(),
        }
    }

    fn catalog(modules: Vec<(&str, Vec<ModuleRecord>)>) -> ModuleCatalog {
        ModuleCatalog {
            repos: modules
                .into_iter()
                .map(|(name, modules)| RepoModules {
                    name: name.into(),
                    modules,
                })
                .collect(),
        }
    }

    fn taxonomy() -> TaxonomyIndex {
        let mut index = TaxonomyIndex::new();
        index.load(vec![
            TaxonomyEntry {
                level: 1,
                label: "Azure".into(),
                slug: "azure".into(),
                parent_slug: None,
            },
            TaxonomyEntry {
                level: 2,
                label: "App Service".into(),
                slug: "azure-app-service".into(),
                parent_slug: Some("azure".into()),
            },
        ]);
        index
    }

    #[test]
    fn suffix_match_emits_recommendation() {
        let taxonomy = taxonomy();
        let cat = catalog(vec![(
            "learn-pr",
            vec![module("learn-pr", "Deploy to Azure App Service", &["azure"])],
        )]);

        let recs = recommend(&cat, &taxonomy);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].suggested_slug, "azure-app-service");
        assert_eq!(recs[0].suggested_label, "App Service");
    }

    #[test]
    fn already_tagged_module_gets_no_recommendation() {
        let taxonomy = taxonomy();
        let cat = catalog(vec![(
            "learn-pr",
            vec![module(
                "learn-pr",
                "Deploy to Azure App Service",
                &["azure", "azure-app-service"],
            )],
        )]);

        let recs = recommend(&cat, &taxonomy);
        assert!(recs.is_empty());
    }

    #[test]
    fn label_at_title_start_does_not_match() {
        // No preceding space boundary at the start of the string.
        let taxonomy = taxonomy();
        let cat = catalog(vec![(
            "learn-pr",
            vec![module("learn-pr", "App Service fundamentals", &[])],
        )]);

        let recs = recommend(&cat, &taxonomy);
        assert!(recs.is_empty());
    }

    #[test]
    fn embedded_label_without_boundaries_does_not_match() {
        let taxonomy = taxonomy();
        let cat = catalog(vec![(
            "learn-pr",
            vec![module("learn-pr", "Understanding App Services", &[])],
        )]);

        let recs = recommend(&cat, &taxonomy);
        assert!(recs.is_empty());
    }

    #[test]
    fn one_module_may_get_multiple_recommendations() {
        let taxonomy = taxonomy();
        let cat = catalog(vec![(
            "learn-pr",
            vec![module("learn-pr", "Scale an Azure App Service", &[])],
        )]);

        // " Azure " matches level 1, " App Service" matches level 2.
        let recs = recommend(&cat, &taxonomy);
        let slugs: Vec<&str> = recs.iter().map(|r| r.suggested_slug.as_str()).collect();
        assert_eq!(slugs, ["azure", "azure-app-service"]);
    }

    #[test]
    fn output_sorted_by_repo_then_title() {
        let taxonomy = taxonomy();
        let cat = catalog(vec![
            (
                "z-repo",
                vec![module("z-repo", "Use Azure widgets", &[])],
            ),
            (
                "a-repo",
                vec![
                    module("a-repo", "Zonal Azure topics", &[]),
                    module("a-repo", "About Azure basics", &[]),
                ],
            ),
        ]);

        let recs = recommend(&cat, &taxonomy);
        let keys: Vec<(&str, &str)> = recs
            .iter()
            .map(|r| (r.module.source_repo.as_str(), r.module.title.as_str()))
            .collect();
        assert_eq!(
            keys,
            [
                ("a-repo", "About Azure basics"),
                ("a-repo", "Zonal Azure topics"),
                ("z-repo", "Use Azure widgets"),
            ]
        );
    }
}
