//! Pixel-dimension lookup for project images.
//!
//! The annotation editor owns the actual image data; the export pipelines
//! only need each image's pixel size. This seam is a trait so that the
//! pipelines can run against the editor's repository in production and a
//! plain table in tests and the CLI.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::ImageId;

/// Pixel dimensions of one image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    /// Creates a new dimensions value.
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Maps an image ID to its pixel dimensions.
///
/// Implementations must return `Some` with positive dimensions for every
/// image whose `loaded` flag is true. The pipelines never query unloaded
/// images; for a loaded image, `None` is a contract violation and surfaces
/// as [`ExportError::MissingDimensions`](crate::error::ExportError).
pub trait DimensionLookup {
    /// Returns the dimensions for `id`, if known.
    fn get_by_id(&self, id: ImageId) -> Option<ImageDimensions>;
}

/// An in-memory dimension lookup backed by a map.
///
/// Used by the CLI (populated from the project document) and by tests.
#[derive(Clone, Debug, Default)]
pub struct DimensionTable {
    entries: BTreeMap<ImageId, ImageDimensions>,
}

impl DimensionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the dimensions for an image.
    pub fn insert(&mut self, id: impl Into<ImageId>, dimensions: ImageDimensions) {
        self.entries.insert(id.into(), dimensions);
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DimensionLookup for DimensionTable {
    fn get_by_id(&self, id: ImageId) -> Option<ImageDimensions> {
        self.entries.get(&id).copied()
    }
}

impl FromIterator<(ImageId, ImageDimensions)> for DimensionTable {
    fn from_iter<I: IntoIterator<Item = (ImageId, ImageDimensions)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
