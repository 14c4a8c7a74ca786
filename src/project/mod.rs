//! Project snapshot types consumed by the export pipelines.
//!
//! Everything in this module is a read-only input: the snapshot of
//! annotation state (images, boxes, class names) and the dimension-lookup
//! seam the editor fulfills in production. The pipelines in
//! [`export`](crate::export) never mutate any of it.

mod dimensions;
mod ids;
pub mod io_json;
mod model;

// Re-export core types for convenient access
pub use dimensions::{DimensionLookup, DimensionTable, ImageDimensions};
pub use ids::ImageId;
pub use model::{ImageRecord, LabelBox, ProjectSnapshot, Rect};
