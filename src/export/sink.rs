//! Delivery seam for finished export artifacts.
//!
//! The original tool handed its blobs to the browser's save dialog; this
//! trait is that collaborator made explicit. The dispatcher produces at
//! most one artifact per export call and never touches the sink when a
//! pipeline produces nothing to save.

use std::fs;
use std::path::PathBuf;

use crate::error::ExportError;

/// A finished export artifact, ready to be placed somewhere.
#[derive(Clone, Debug)]
pub struct Artifact {
    /// Suggested file name, including extension.
    pub file_name: String,

    /// MIME type the original tool attached to the download.
    pub mime_type: &'static str,

    /// Raw artifact bytes.
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Creates a zip-archive artifact.
    pub fn zip(file_name: String, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            mime_type: "application/zip",
            bytes,
        }
    }

    /// Creates a plain-text CSV artifact.
    pub fn csv_text(file_name: String, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            mime_type: "text/plain;charset=utf-8",
            bytes,
        }
    }
}

/// Receives finished artifacts from the export dispatcher.
pub trait ExportSink {
    /// Takes ownership of one artifact.
    fn save(&mut self, artifact: Artifact) -> Result<(), ExportError>;
}

/// Writes artifacts into a directory, creating it if needed.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportSink for DirectorySink {
    fn save(&mut self, artifact: Artifact) -> Result<(), ExportError> {
        fs::create_dir_all(&self.dir).map_err(ExportError::Io)?;
        fs::write(self.dir.join(&artifact.file_name), &artifact.bytes).map_err(ExportError::Io)
    }
}

/// Collects artifacts in memory instead of writing them anywhere.
///
/// Useful for tests and for embedding callers that deliver blobs
/// themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Artifacts in the order they were saved.
    pub artifacts: Vec<Artifact>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExportSink for MemorySink {
    fn save(&mut self, artifact: Artifact) -> Result<(), ExportError> {
        self.artifacts.push(artifact);
        Ok(())
    }
}
