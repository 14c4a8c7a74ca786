//! Core project snapshot model.
//!
//! This module defines the read-only view of annotation state that every
//! export call consumes: the project name, the ordered class-name list, and
//! one record per image with its bounding boxes. Exports never mutate the
//! snapshot; they only derive artifacts from it.

use serde::{Deserialize, Serialize};

use super::ids::ImageId;

/// A frozen view of the annotation project at export time.
///
/// The original tool read this state out of a global store; here it is a
/// plain struct passed by reference, so the pipelines can be driven with
/// synthetic fixtures in tests.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// Display name of the project; the artifact file-name slug derives
    /// from it.
    pub project_name: String,

    /// Ordered class names, index-aligned with [`LabelBox::label_index`].
    pub label_names: Vec<String>,

    /// All images in the project, in project order.
    pub images: Vec<ImageRecord>,
}

impl ProjectSnapshot {
    /// Creates an empty snapshot with the given project name.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            label_names: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Returns the class name for a label index.
    ///
    /// The lookup is total: an out-of-range index yields an empty name, the
    /// permissive behavior the name-bearing formats rely on. Callers are
    /// expected to keep indices valid.
    pub fn label_name(&self, index: usize) -> &str {
        self.label_names.get(index).map(String::as_str).unwrap_or("")
    }
}

/// One image in the project.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Unique identifier, used to look up pixel dimensions.
    pub id: ImageId,

    /// Original file name; output entry names replace its extension.
    pub file_name: String,

    /// True once the image's pixel dimensions are known.
    ///
    /// Serializers treat an unloaded image exactly like one with no boxes:
    /// it contributes nothing to any output.
    pub loaded: bool,

    /// Annotated rectangles, in annotation order.
    pub boxes: Vec<LabelBox>,
}

impl ImageRecord {
    /// Creates a loaded image record with no boxes.
    pub fn new(id: impl Into<ImageId>, file_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_name: file_name.into(),
            loaded: true,
            boxes: Vec::new(),
        }
    }

    /// Marks the record as not yet loaded.
    pub fn unloaded(mut self) -> Self {
        self.loaded = false;
        self
    }

    /// Appends a box to the record.
    pub fn with_box(mut self, label_index: usize, rect: Rect) -> Self {
        self.boxes.push(LabelBox { label_index, rect });
        self
    }
}

/// One annotated rectangle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LabelBox {
    /// Index into the project's class-name list.
    pub label_index: usize,

    /// Box geometry in pixel units.
    pub rect: Rect,
}

/// An axis-aligned rectangle in pixel units, top-left origin.
///
/// `x`/`y` locate the top-left corner. Geometry is kept as `f64` because
/// annotation editors produce fractional pixel positions; the formats decide
/// how to round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the center point of the rectangle.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_creation() {
        let snapshot = ProjectSnapshot {
            project_name: "Test Project".into(),
            label_names: vec!["cat".into(), "dog".into()],
            images: vec![
                ImageRecord::new(1u64, "img1.jpg").with_box(0, Rect::new(10.0, 20.0, 30.0, 40.0)),
            ],
        };

        assert_eq!(snapshot.images.len(), 1);
        assert_eq!(snapshot.images[0].boxes.len(), 1);
        assert_eq!(snapshot.images[0].boxes[0].label_index, 0);
    }

    #[test]
    fn test_label_name_lookup_is_total() {
        let snapshot = ProjectSnapshot {
            project_name: "p".into(),
            label_names: vec!["cat".into()],
            images: vec![],
        };

        assert_eq!(snapshot.label_name(0), "cat");
        assert_eq!(snapshot.label_name(7), "");
    }

    #[test]
    fn test_record_builder() {
        let record = ImageRecord::new(3u64, "img.png")
            .with_box(1, Rect::new(0.0, 0.0, 5.0, 5.0))
            .unloaded();

        assert_eq!(record.id.as_u64(), 3);
        assert!(!record.loaded);
        assert_eq!(record.boxes.len(), 1);
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.center(), (25.0, 40.0));
    }
}
