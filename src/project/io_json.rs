//! JSON project-document reader.
//!
//! The CLI feeds the export pipelines from a JSON document that carries the
//! snapshot plus, per image, the pixel dimensions the editor would normally
//! serve from its image repository. Reading splits the document into a
//! [`ProjectSnapshot`] and a [`DimensionTable`] so the pipelines keep seeing
//! the same two collaborators they see in-process.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::dimensions::{DimensionTable, ImageDimensions};
use super::ids::ImageId;
use super::model::{ImageRecord, LabelBox, ProjectSnapshot};
use crate::error::ExportError;

/// On-disk shape of a project document.
#[derive(Debug, Serialize, Deserialize)]
struct ProjectDocument {
    project_name: String,
    #[serde(default)]
    label_names: Vec<String>,
    #[serde(default)]
    images: Vec<ImageDocument>,
}

/// One image entry in a project document.
///
/// Dimensions are optional: an entry without them describes an image the
/// editor never finished loading, and its `loaded` flag should be false.
#[derive(Debug, Serialize, Deserialize)]
struct ImageDocument {
    id: ImageId,
    file_name: String,
    #[serde(default = "default_loaded")]
    loaded: bool,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    boxes: Vec<LabelBox>,
}

fn default_loaded() -> bool {
    true
}

/// Reads a project document from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_project_json(path: &Path) -> Result<(ProjectSnapshot, DimensionTable), ExportError> {
    let file = File::open(path).map_err(ExportError::Io)?;
    let reader = BufReader::new(file);

    let document: ProjectDocument =
        serde_json::from_reader(reader).map_err(|source| ExportError::ProjectJsonParse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(split_document(document))
}

/// Reads a project document from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_project_json_str(
    json: &str,
) -> Result<(ProjectSnapshot, DimensionTable), serde_json::Error> {
    let document: ProjectDocument = serde_json::from_str(json)?;
    Ok(split_document(document))
}

fn split_document(document: ProjectDocument) -> (ProjectSnapshot, DimensionTable) {
    let mut dimensions = DimensionTable::new();
    let mut images = Vec::with_capacity(document.images.len());

    for entry in document.images {
        if let (Some(width), Some(height)) = (entry.width, entry.height) {
            dimensions.insert(entry.id, ImageDimensions::new(width, height));
        }

        images.push(ImageRecord {
            id: entry.id,
            file_name: entry.file_name,
            loaded: entry.loaded,
            boxes: entry.boxes,
        });
    }

    let snapshot = ProjectSnapshot {
        project_name: document.project_name,
        label_names: document.label_names,
        images,
    };

    (snapshot, dimensions)
}
