//! Pipeline orchestration for modcatalog.
//!
//! Ties the ingest collaborators, the lookup indices, the query logic, and
//! the report renderer together into the end-to-end `report` run.

pub mod pipeline;

pub use pipeline::{
    LoadedTables, ProgressReporter, ReportRunResult, SilentProgress, load_tables, run_report,
};
