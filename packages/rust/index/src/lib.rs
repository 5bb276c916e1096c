//! In-memory lookup tables for ownership resolution.
//!
//! Three leaf indices, each loaded whole-table at startup and read-only
//! afterwards:
//! - [`TaxonomyIndex`] — the two-level product taxonomy
//! - [`OwnershipIndex`] — product slug → owning group / secondary owner
//! - [`ApproverIndex`] — group → approver
//!
//! The keyed indices deliberately use last-write-wins on duplicate keys:
//! the source tables are maintained by hand and a later row is taken as a
//! correction of an earlier one.

mod approvers;
mod ownership;
mod taxonomy;

pub use approvers::ApproverIndex;
pub use ownership::OwnershipIndex;
pub use taxonomy::TaxonomyIndex;
