//! YOLO per-image label serializer.
//!
//! One output line per box: `<label_index> <cx> <cy> <w> <h>`, with the
//! center and size normalized by the image dimensions and rendered to six
//! decimal places. One label file per image; packaging happens in
//! [`export`](crate::export).

use crate::error::ExportError;
use crate::project::{DimensionLookup, ImageRecord};

/// Serializes one image's boxes into YOLO label lines.
///
/// Returns `Ok(None)` when the image has no boxes or is not loaded; such
/// images contribute no file to the archive.
pub fn image_labels<D: DimensionLookup>(
    image: &ImageRecord,
    dimensions: &D,
) -> Result<Option<String>, ExportError> {
    if image.boxes.is_empty() || !image.loaded {
        return Ok(None);
    }

    let dims = dimensions
        .get_by_id(image.id)
        .ok_or_else(|| ExportError::MissingDimensions {
            image_id: image.id,
            file_name: image.file_name.clone(),
        })?;
    let width = f64::from(dims.width);
    let height = f64::from(dims.height);

    let lines: Vec<String> = image
        .boxes
        .iter()
        .map(|label_box| {
            let (cx, cy) = label_box.rect.center();
            format!(
                "{} {:.6} {:.6} {:.6} {:.6}",
                label_box.label_index,
                cx / width,
                cy / height,
                label_box.rect.width / width,
                label_box.rect.height / height
            )
        })
        .collect();

    Ok(Some(lines.join("\n")))
}
