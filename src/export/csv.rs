//! CSV per-image row serializer.
//!
//! One header-less row per box, eight fields:
//! `name,x,y,w,h,file,imgWidth,imgHeight` with pixel values rounded to
//! integers. The per-image blocks are concatenated into a single blob by
//! [`export`](crate::export); there is no per-image file and no archive.

use serde::Serialize;

use crate::error::ExportError;
use crate::project::{DimensionLookup, ImageRecord, ProjectSnapshot};

/// A single row in the CSV output.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    label_name: &'a str,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    file_name: &'a str,
    image_width: u32,
    image_height: u32,
}

/// Serializes one image's boxes into a block of CSV rows.
///
/// Returns `Ok(None)` when the image has no boxes or is not loaded; such
/// images contribute no rows to the blob. The block carries no trailing
/// newline — blocks are newline-joined by the caller.
pub fn image_rows<D: DimensionLookup>(
    snapshot: &ProjectSnapshot,
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

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    for label_box in &image.boxes {
        let rect = &label_box.rect;
        writer
            .serialize(CsvRow {
                label_name: snapshot.label_name(label_box.label_index),
                x: rect.x.round() as i64,
                y: rect.y.round() as i64,
                width: rect.width.round() as i64,
                height: rect.height.round() as i64,
                file_name: &image.file_name,
                image_width: dims.width,
                image_height: dims.height,
            })
            .map_err(|source| ExportError::CsvWrite {
                file_name: image.file_name.clone(),
                source,
            })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    let mut block = String::from_utf8(bytes).map_err(|e| ExportError::CsvInvalid {
        file_name: image.file_name.clone(),
        message: format!("invalid UTF-8 in output: {}", e),
    })?;

    // Rows are newline-terminated by the writer; the block itself is not.
    if block.ends_with('\n') {
        block.pop();
    }

    Ok(Some(block))
}
