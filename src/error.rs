use std::path::PathBuf;
use thiserror::Error;

use crate::project::ImageId;

/// The main error type for rectlabel operations.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse project JSON from {path}: {source}")]
    ProjectJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No dimensions available for loaded image {image_id} ('{file_name}')")]
    MissingDimensions {
        image_id: ImageId,
        file_name: String,
    },

    #[error("Failed to serialize CSV rows for '{file_name}': {source}")]
    CsvWrite {
        file_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid CSV output for '{file_name}': {message}")]
    CsvInvalid { file_name: String, message: String },

    #[error("Failed to assemble label archive '{file_name}': {source}")]
    Archive {
        file_name: String,
        #[source]
        source: zip::result::ZipError,
    },
}
