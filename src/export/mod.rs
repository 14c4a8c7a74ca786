//! Export pipelines and dispatcher.
//!
//! Each export call is a fresh, single-threaded pass over the project's
//! image list: per-image serialization, batch assembly, artifact packaging,
//! then one hand-off to the sink. YOLO and VOC collect per-image files into
//! a zip archive; CSV concatenates rows into a single text blob.
//!
//! The dispatcher makes the two "nothing happened" paths visible in its
//! types: images with no output are `None` at the serializer level, and an
//! unrecognized format name is [`ExportOutcome::Unsupported`] rather than a
//! silent return.

mod archive;
pub mod csv;
pub mod naming;
mod sink;
pub mod voc;
pub mod yolo;

pub use sink::{Artifact, DirectorySink, ExportSink, MemorySink};

use chrono::{DateTime, Local};

use crate::error::ExportError;
use crate::project::{DimensionLookup, ProjectSnapshot};

/// A supported export format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Yolo,
    Voc,
    Csv,
}

impl ExportFormat {
    /// Resolves a format from its lowercase name.
    ///
    /// Returns `None` for anything unrecognized; the dispatcher treats that
    /// as a no-op, not an error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "yolo" => Some(ExportFormat::Yolo),
            "voc" => Some(ExportFormat::Voc),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }

    /// Human-readable name for the format.
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Yolo => "yolo",
            ExportFormat::Voc => "voc",
            ExportFormat::Csv => "csv",
        }
    }
}

/// What an export call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// An artifact was produced and handed to the sink.
    Saved {
        /// File name of the saved artifact.
        file_name: String,
        /// Number of images that contributed output.
        images: usize,
    },
    /// The requested format is not recognized; the sink was not touched.
    Unsupported,
}

/// Exports the snapshot in the format named by `format_name`.
///
/// An unrecognized name returns `Ok(ExportOutcome::Unsupported)` without
/// producing anything.
pub fn export_named<D: DimensionLookup, S: ExportSink>(
    snapshot: &ProjectSnapshot,
    dimensions: &D,
    sink: &mut S,
    format_name: &str,
) -> Result<ExportOutcome, ExportError> {
    match ExportFormat::from_name(format_name) {
        Some(format) => export(snapshot, dimensions, sink, format),
        None => Ok(ExportOutcome::Unsupported),
    }
}

/// Exports the snapshot in the given format, stamped with the current
/// local time.
pub fn export<D: DimensionLookup, S: ExportSink>(
    snapshot: &ProjectSnapshot,
    dimensions: &D,
    sink: &mut S,
    format: ExportFormat,
) -> Result<ExportOutcome, ExportError> {
    export_at(snapshot, dimensions, sink, format, Local::now())
}

/// Exports the snapshot in the given format, stamped with `now`.
///
/// The timestamp is computed once here and shared by the whole call; pass a
/// fixed time for reproducible artifact names.
pub fn export_at<D: DimensionLookup, S: ExportSink>(
    snapshot: &ProjectSnapshot,
    dimensions: &D,
    sink: &mut S,
    format: ExportFormat,
    now: DateTime<Local>,
) -> Result<ExportOutcome, ExportError> {
    let slug = naming::project_slug(&snapshot.project_name);
    let timestamp = naming::export_timestamp(now);

    match format {
        ExportFormat::Yolo => export_yolo(snapshot, dimensions, sink, &slug, &timestamp),
        ExportFormat::Voc => export_voc(snapshot, dimensions, sink, &slug, &timestamp),
        ExportFormat::Csv => export_csv(snapshot, dimensions, sink, &slug, &timestamp),
    }
}

fn export_yolo<D: DimensionLookup, S: ExportSink>(
    snapshot: &ProjectSnapshot,
    dimensions: &D,
    sink: &mut S,
    slug: &str,
    timestamp: &str,
) -> Result<ExportOutcome, ExportError> {
    let mut entries = Vec::new();
    for image in &snapshot.images {
        if let Some(content) = yolo::image_labels(image, dimensions)? {
            entries.push((naming::replace_extension(&image.file_name, "txt"), content));
        }
    }

    save_archive(sink, slug, timestamp, entries)
}

fn export_voc<D: DimensionLookup, S: ExportSink>(
    snapshot: &ProjectSnapshot,
    dimensions: &D,
    sink: &mut S,
    slug: &str,
    timestamp: &str,
) -> Result<ExportOutcome, ExportError> {
    let mut entries = Vec::new();
    for image in &snapshot.images {
        if let Some(content) = voc::image_annotation(snapshot, image, slug, dimensions)? {
            entries.push((naming::replace_extension(&image.file_name, "xml"), content));
        }
    }

    save_archive(sink, slug, timestamp, entries)
}

fn export_csv<D: DimensionLookup, S: ExportSink>(
    snapshot: &ProjectSnapshot,
    dimensions: &D,
    sink: &mut S,
    slug: &str,
    timestamp: &str,
) -> Result<ExportOutcome, ExportError> {
    let mut blocks = Vec::new();
    for image in &snapshot.images {
        if let Some(block) = csv::image_rows(snapshot, image, dimensions)? {
            blocks.push(block);
        }
    }

    let images = blocks.len();
    let content = blocks.join("\n");
    let file_name = naming::artifact_file_name(slug, timestamp, "csv");

    sink.save(Artifact::csv_text(file_name.clone(), content.into_bytes()))?;

    Ok(ExportOutcome::Saved { file_name, images })
}

/// Packs per-image entries into a zip artifact and hands it to the sink.
///
/// An empty entry list still saves a (contentless) archive, matching the
/// original tool.
fn save_archive<S: ExportSink>(
    sink: &mut S,
    slug: &str,
    timestamp: &str,
    entries: Vec<(String, String)>,
) -> Result<ExportOutcome, ExportError> {
    let file_name = naming::artifact_file_name(slug, timestamp, "zip");
    let images = entries.len();
    let bytes = archive::build_zip(&entries, &file_name)?;

    sink.save(Artifact::zip(file_name.clone(), bytes))?;

    Ok(ExportOutcome::Saved { file_name, images })
}
