//! The five report views, built as plain header+rows tables.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use modcatalog_index::OwnershipIndex;
use modcatalog_query::{ApprovalResolver, FreshnessBucket, bucket_for, parse_module_date};
use modcatalog_shared::{ModuleCatalog, RecommendationEntry};

/// Separator used when several values share one cell.
const LIST_SEPARATOR: &str = "; ";

/// One tabular view, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Display name of the view.
    pub name: &'static str,
    /// Column headings.
    pub header: Vec<String>,
    /// Data rows.
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// File stem for the rendered sheet (lowercase, dash-separated).
    pub fn file_stem(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }
}

/// Build all five sheets in report order.
pub fn build_sheets(
    catalog: &ModuleCatalog,
    resolver: &ApprovalResolver<'_>,
    ownership: &OwnershipIndex,
    recommendations: &[RecommendationEntry<'_>],
    today: NaiveDate,
) -> Vec<Sheet> {
    vec![
        overview_sheet(catalog, resolver, ownership),
        by_product_sheet(catalog),
        by_product_count_sheet(catalog),
        freshness_sheet(catalog, today),
        recommendations_sheet(recommendations),
    ]
}

/// Overview: one row per module, with computed groups and approvers.
fn overview_sheet(
    catalog: &ModuleCatalog,
    resolver: &ApprovalResolver<'_>,
    ownership: &OwnershipIndex,
) -> Sheet {
    let header = ["Repo", "Uid", "Title", "Author", "Date", "Products", "CSA Groups", "Approvers"];

    let mut rows = Vec::new();
    for repo in &catalog.repos {
        for module in &repo.modules {
            let groups = ownership.map_to_groups(&module.product_slugs);
            let approvers = resolver.resolve_approvers(&module.product_slugs);
            rows.push(vec![
                repo.name.clone(),
                module.uid.clone(),
                module.title.clone(),
                module.author_handle.clone(),
                module.date.clone(),
                module.product_slugs.join(LIST_SEPARATOR),
                groups.join(LIST_SEPARATOR),
                approvers.join(LIST_SEPARATOR),
            ]);
        }
    }

    sheet("Overview", &header, rows)
}

/// By Product: one row per module×product pairing.
fn by_product_sheet(catalog: &ModuleCatalog) -> Sheet {
    let header = ["Repo", "Title", "Author", "Product"];

    let mut rows = Vec::new();
    for repo in &catalog.repos {
        for module in &repo.modules {
            for product in &module.product_slugs {
                rows.push(vec![
                    repo.name.clone(),
                    module.title.clone(),
                    module.author_handle.clone(),
                    product.clone(),
                ]);
            }
        }
    }

    sheet("By Product", &header, rows)
}

/// By Product Count: module counts grouped by product then repository,
/// with a per-product subtotal row.
fn by_product_count_sheet(catalog: &ModuleCatalog) -> Sheet {
    let header = ["Product", "Repo", "Modules"];

    let mut counts: BTreeMap<&str, BTreeMap<&str, usize>> = BTreeMap::new();
    for repo in &catalog.repos {
        for module in &repo.modules {
            for product in &module.product_slugs {
                *counts
                    .entry(product)
                    .or_default()
                    .entry(repo.name.as_str())
                    .or_default() += 1;
            }
        }
    }

    let mut rows = Vec::new();
    for (product, per_repo) in &counts {
        let mut subtotal = 0usize;
        for (repo, count) in per_repo {
            subtotal += count;
            rows.push(vec![product.to_string(), repo.to_string(), count.to_string()]);
        }
        rows.push(vec![product.to_string(), "Total".into(), subtotal.to_string()]);
    }

    sheet("By Product Count", &header, rows)
}

/// Freshness: per-repository bucket counts with a per-repository subtotal.
/// Modules whose date does not parse are excluded from this sheet only.
fn freshness_sheet(catalog: &ModuleCatalog, today: NaiveDate) -> Sheet {
    let mut header: Vec<String> = vec!["Repo".into()];
    header.extend(FreshnessBucket::ALL.iter().map(|b| b.label().to_string()));
    header.push("Total".into());

    let mut rows = Vec::new();
    for repo in &catalog.repos {
        let mut counts: BTreeMap<FreshnessBucket, usize> = BTreeMap::new();
        let mut total = 0usize;
        for module in &repo.modules {
            let Some(date) = parse_module_date(&module.date) else {
                continue;
            };
            *counts.entry(bucket_for(date, today)).or_default() += 1;
            total += 1;
        }

        let mut row = vec![repo.name.clone()];
        for bucket in FreshnessBucket::ALL {
            row.push(counts.get(&bucket).copied().unwrap_or(0).to_string());
        }
        row.push(total.to_string());
        rows.push(row);
    }

    Sheet {
        name: "Freshness",
        header,
        rows,
    }
}

/// Recommendations: one row per suggested missing product tag.
fn recommendations_sheet(recommendations: &[RecommendationEntry<'_>]) -> Sheet {
    let header = ["Repo", "Title", "Author", "Path", "Uid", "Suggested Slug", "Suggested Label"];

    let rows = recommendations
        .iter()
        .map(|rec| {
            vec![
                rec.module.source_repo.clone(),
                rec.module.title.clone(),
                rec.module.author_handle.clone(),
                rec.module.relative_path.clone(),
                rec.module.uid.clone(),
                rec.suggested_slug.clone(),
                rec.suggested_label.clone(),
            ]
        })
        .collect();

    sheet("Recommendations", &header, rows)
}

fn sheet(name: &'static str, header: &[&str], rows: Vec<Vec<String>>) -> Sheet {
    Sheet {
        name,
        header: header.iter().map(|h| h.to_string()).collect(),
        rows,
    }
}
