//! Report sheet construction and rendering.
//!
//! Consumes the catalog, the approval resolver, and the recommendation list
//! and produces five tabular views, each rendered to a CSV file in the
//! output directory.

mod render;
mod sheets;

pub use render::render_sheets;
pub use sheets::{Sheet, build_sheets};
