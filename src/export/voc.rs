//! Pascal VOC per-image XML serializer.
//!
//! One `<annotation>` document per image, tab-indented, with absolute
//! pixel corners rounded to integers. The document shape follows the
//! annotation tool's export: no XML declaration, `<folder>`/`<path>`
//! derived from the project slug, fixed `Unspecified` metadata fields and
//! a `<depth>3</depth>` size entry.

use std::fmt::Write as _;

use crate::error::ExportError;
use crate::project::{DimensionLookup, ImageRecord, ProjectSnapshot};

/// Serializes one image's boxes into a VOC annotation document.
///
/// Returns `Ok(None)` when the image has no boxes or is not loaded; such
/// images contribute no file to the archive.
pub fn image_annotation<D: DimensionLookup>(
    snapshot: &ProjectSnapshot,
    image: &ImageRecord,
    slug: &str,
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

    let mut xml = String::new();

    writeln!(xml, "<annotation>").expect("write to string");
    writeln!(xml, "\t<folder>{}</folder>", xml_escape(slug)).expect("write to string");
    writeln!(xml, "\t<filename>{}</filename>", xml_escape(&image.file_name))
        .expect("write to string");
    writeln!(
        xml,
        "\t<path>/{}/{}</path>",
        xml_escape(slug),
        xml_escape(&image.file_name)
    )
    .expect("write to string");
    writeln!(xml, "\t<source>").expect("write to string");
    writeln!(xml, "\t\t<database>Unspecified</database>").expect("write to string");
    writeln!(xml, "\t</source>").expect("write to string");
    writeln!(xml, "\t<size>").expect("write to string");
    writeln!(xml, "\t\t<width>{}</width>", dims.width).expect("write to string");
    writeln!(xml, "\t\t<height>{}</height>", dims.height).expect("write to string");
    writeln!(xml, "\t\t<depth>3</depth>").expect("write to string");
    writeln!(xml, "\t</size>").expect("write to string");

    for label_box in &image.boxes {
        let rect = &label_box.rect;
        writeln!(xml, "\t<object>").expect("write to string");
        writeln!(
            xml,
            "\t\t<name>{}</name>",
            xml_escape(snapshot.label_name(label_box.label_index))
        )
        .expect("write to string");
        writeln!(xml, "\t\t<pose>Unspecified</pose>").expect("write to string");
        writeln!(xml, "\t\t<truncated>Unspecified</truncated>").expect("write to string");
        writeln!(xml, "\t\t<difficult>Unspecified</difficult>").expect("write to string");
        writeln!(xml, "\t\t<bndbox>").expect("write to string");
        writeln!(xml, "\t\t\t<xmin>{}</xmin>", rect.x.round() as i64).expect("write to string");
        writeln!(xml, "\t\t\t<ymin>{}</ymin>", rect.y.round() as i64).expect("write to string");
        writeln!(
            xml,
            "\t\t\t<xmax>{}</xmax>",
            (rect.x + rect.width).round() as i64
        )
        .expect("write to string");
        writeln!(
            xml,
            "\t\t\t<ymax>{}</ymax>",
            (rect.y + rect.height).round() as i64
        )
        .expect("write to string");
        writeln!(xml, "\t\t</bndbox>").expect("write to string");
        writeln!(xml, "\t</object>").expect("write to string");
    }

    write!(xml, "</annotation>").expect("write to string");

    Ok(Some(xml))
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
