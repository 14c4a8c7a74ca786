//! In-memory zip assembly for the per-image label formats.
//!
//! YOLO and VOC produce one file per image; the batch assembler collects
//! `(entry name, content)` pairs and this module packs them into a single
//! deflate-compressed archive blob, in the order given.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::ExportError;

/// Builds a zip archive from named text entries.
///
/// `archive_name` is only used for error reporting; the archive itself is
/// returned as bytes for the sink to place.
pub fn build_zip(entries: &[(String, String)], archive_name: &str) -> Result<Vec<u8>, ExportError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for (entry_name, content) in entries {
        writer
            .start_file(entry_name.as_str(), options)
            .map_err(|source| ExportError::Archive {
                file_name: archive_name.to_string(),
                source,
            })?;
        writer.write_all(content.as_bytes()).map_err(ExportError::Io)?;
    }

    let cursor = writer.finish().map_err(|source| ExportError::Archive {
        file_name: archive_name.to_string(),
        source,
    })?;

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn packs_entries_in_given_order() {
        let entries = vec![
            ("b.txt".to_string(), "beta".to_string()),
            ("a.txt".to_string(), "alpha".to_string()),
        ];

        let bytes = build_zip(&entries, "labels.zip").expect("build archive");
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("open archive");

        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).expect("entry 0").name(), "b.txt");

        let mut content = String::new();
        archive
            .by_name("a.txt")
            .expect("entry by name")
            .read_to_string(&mut content)
            .expect("read entry");
        assert_eq!(content, "alpha");
    }

    #[test]
    fn empty_entry_list_yields_empty_archive() {
        let bytes = build_zip(&[], "labels.zip").expect("build archive");
        let archive = ZipArchive::new(Cursor::new(bytes)).expect("open archive");
        assert_eq!(archive.len(), 0);
    }
}
