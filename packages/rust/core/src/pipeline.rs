//! End-to-end `report` pipeline: load tables → scan repos → query → render.
//!
//! The whole run is single-threaded and synchronous: the three lookup
//! tables are loaded wholesale before any query executes, so no query ever
//! observes a partially loaded index. A run either completes or fails
//! before writing anything — there is no partial report.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use tracing::info;

use modcatalog_index::{ApproverIndex, OwnershipIndex, TaxonomyIndex};
use modcatalog_ingest::{collect_repo_modules, load_approvers, load_ownership, load_taxonomy};
use modcatalog_query::{ApprovalResolver, recommend};
use modcatalog_report::{build_sheets, render_sheets};
use modcatalog_shared::{
    AppConfig, InputsConfig, ModCatalogError, ModuleCatalog, RepoModules, Result,
};

/// Result of a full report run.
#[derive(Debug)]
pub struct ReportRunResult {
    /// Modules collected across all repositories.
    pub module_count: usize,
    /// Missing-tag recommendations emitted.
    pub recommendation_count: usize,
    /// Paths of the rendered sheets, in report order.
    pub sheet_paths: Vec<PathBuf>,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called after each repository scan.
    fn repo_scanned(&self, repo: &str, module_count: usize);
    /// Called when the pipeline completes.
    fn done(&self, result: &ReportRunResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn repo_scanned(&self, _repo: &str, _module_count: usize) {}
    fn done(&self, _result: &ReportRunResult) {}
}

/// The three lookup indices, fully loaded.
#[derive(Debug, Default)]
pub struct LoadedTables {
    pub taxonomy: TaxonomyIndex,
    pub ownership: OwnershipIndex,
    pub approvers: ApproverIndex,
}

/// Load all three lookup tables. Any failure here is fatal to the run.
pub fn load_tables(inputs: &InputsConfig) -> Result<LoadedTables> {
    let mut tables = LoadedTables::default();
    tables.taxonomy.load(load_taxonomy(Path::new(&inputs.taxonomy_file))?);
    tables.ownership.load(load_ownership(Path::new(&inputs.ownership_file))?);
    tables.approvers.load(load_approvers(Path::new(&inputs.approver_file))?);
    Ok(tables)
}

/// Run the full report pipeline.
///
/// 1. Load the taxonomy, ownership, and approver tables
/// 2. Scan the configured repositories into the module catalog
/// 3. Resolve approvals and compute tag recommendations
/// 4. Build and render the five report sheets
pub fn run_report(
    config: &AppConfig,
    progress: &dyn ProgressReporter,
) -> Result<ReportRunResult> {
    let start = Instant::now();

    if config.repos.is_empty() {
        return Err(ModCatalogError::config(
            "no repositories configured — add [[repos]] entries or pass --repo",
        ));
    }

    // --- Phase 1: Lookup tables ---
    progress.phase("Loading lookup tables");
    let tables = load_tables(&config.inputs)?;
    info!(
        taxonomy = tables.taxonomy.len(),
        ownership = tables.ownership.len(),
        approvers = tables.approvers.len(),
        "lookup tables loaded"
    );

    // --- Phase 2: Module catalog ---
    progress.phase("Scanning repositories");
    let mut catalog = ModuleCatalog::default();
    for repo in &config.repos {
        let name = repo.display_name();
        let modules = collect_repo_modules(&name, Path::new(&repo.path))?;
        progress.repo_scanned(&name, modules.len());
        catalog.repos.push(RepoModules { name, modules });
    }
    let module_count = catalog.len();
    info!(modules = module_count, repos = catalog.repos.len(), "catalog built");

    // --- Phase 3: Queries ---
    progress.phase("Resolving approvals and recommendations");
    let resolver = ApprovalResolver::new(
        &tables.taxonomy,
        &tables.ownership,
        &tables.approvers,
        config.report.warn_unknown_slugs,
    );
    let recommendations = recommend(&catalog, &tables.taxonomy);

    // --- Phase 4: Report ---
    progress.phase("Writing report sheets");
    let today = Local::now().date_naive();
    let sheets = build_sheets(&catalog, &resolver, &tables.ownership, &recommendations, today);
    let sheet_paths = render_sheets(&sheets, Path::new(&config.report.output_dir))?;

    let result = ReportRunResult {
        module_count,
        recommendation_count: recommendations.len(),
        sheet_paths,
        elapsed: start.elapsed(),
    };
    info!(
        modules = result.module_count,
        recommendations = result.recommendation_count,
        elapsed_ms = result.elapsed.as_millis() as u64,
        "report complete"
    );
    progress.done(&result);
    Ok(result)
}
