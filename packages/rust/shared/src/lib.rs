//! Shared types, error model, and configuration for modcatalog.
//!
//! This crate is the foundation depended on by all other modcatalog crates.
//! It provides:
//! - [`ModCatalogError`] — the unified error type
//! - Domain records ([`TaxonomyEntry`], [`OwnershipRecord`], [`ApproverRecord`],
//!   [`ModuleRecord`], [`RecommendationEntry`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, InputsConfig, RepoEntry, ReportConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{ModCatalogError, Result};
pub use types::{
    ApproverRecord, ModuleCatalog, ModuleRecord, OwnershipRecord, RecommendationEntry,
    RepoModules, TaxonomyEntry,
};
