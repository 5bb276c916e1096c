//! Input collaborators: file formats in, flat records out.
//!
//! Each loader reads one input source and hands back the plain record types
//! from `modcatalog-shared`, keeping format concerns out of the query core:
//! - [`load_taxonomy`] — taxonomy service JSON snapshot
//! - [`load_ownership`] — product-to-owner mapping CSV (header skipped)
//! - [`load_approvers`] — the single table block of a markdown document
//! - [`collect_repo_modules`] / [`build_catalog`] — directory scan + module
//!   YAML metadata
//!
//! Failure policy: an unreadable or structurally broken input file is fatal
//! (the caller aborts before writing any report); a single malformed row or
//! module file is warned about and skipped.

mod approvers;
mod catalog;
mod ownership;
mod taxonomy;

pub use approvers::load_approvers;
pub use catalog::{build_catalog, collect_repo_modules};
pub use ownership::load_ownership;
pub use taxonomy::load_taxonomy;
