//! Query logic over the module catalog and lookup indices.
//!
//! This is the heart of the tool:
//! - [`ApprovalResolver`] — walks product slugs through the taxonomy and
//!   ownership tables to the deduplicated set of responsible approvers
//! - [`recommend`] — scans module titles against taxonomy labels to suggest
//!   missing product tags
//! - [`freshness`] — lenient date parsing and staleness bucketing

pub mod freshness;
mod recommend;
mod resolver;

pub use freshness::{FreshnessBucket, bucket_for, parse_module_date};
pub use recommend::recommend;
pub use resolver::ApprovalResolver;
