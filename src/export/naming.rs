//! File-name derivation shared by the export pipelines.
//!
//! The slug and timestamp rules here reproduce the annotation tool's
//! historical artifact names byte-for-byte; downstream tooling keys off
//! that exact shape. See DESIGN.md for the two quirks kept on purpose.

use chrono::{DateTime, Local};

/// Hour field is 12-hour (`%I`), matching the tool's historical `hh` token.
const TIMESTAMP_FORMAT: &str = "%Y%m%d%I%M%S";

/// Derives the file-name slug from a project's display name.
///
/// Lowercases the name and replaces the first space only with a hyphen:
/// `"My Project"` becomes `my-project`, while `"My  Big Project"` becomes
/// `my--big project`. The first-space-only rule is preserved from the
/// original tool; artifact names produced here must keep matching the ones
/// it shipped.
pub fn project_slug(project_name: &str) -> String {
    project_name.to_lowercase().replacen(' ', "-", 1)
}

/// Formats the export timestamp, e.g. `20260807014505`.
///
/// Computed once per export call and shared by every pipeline that needs it.
pub fn export_timestamp(now: DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Builds an artifact file name: `labels_<slug>_<timestamp>.<extension>`.
pub fn artifact_file_name(slug: &str, timestamp: &str, extension: &str) -> String {
    format!("labels_{}_{}.{}", slug, timestamp, extension)
}

/// Replaces the trailing `.<ext>` suffix of a file name.
///
/// A name without an extension is returned unmodified; "without an
/// extension" means no dot, a trailing dot, or a last dot that sits before
/// a path separator (`"dir.v1/file"`).
pub fn replace_extension(file_name: &str, extension: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) => {
            let suffix = &file_name[idx + 1..];
            if suffix.is_empty() || suffix.contains('/') {
                file_name.to_string()
            } else {
                format!("{}.{}", &file_name[..idx], extension)
            }
        }
        None => file_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn slug_replaces_first_space_only() {
        assert_eq!(project_slug("My Project"), "my-project");
        assert_eq!(project_slug("My  Big Project"), "my--big project");
        assert_eq!(project_slug("single"), "single");
        assert_eq!(project_slug("UPPER CASE NAME"), "upper-case name");
    }

    #[test]
    fn timestamp_uses_twelve_hour_field() {
        let afternoon = Local.with_ymd_and_hms(2024, 3, 5, 13, 4, 5).unwrap();
        assert_eq!(export_timestamp(afternoon), "20240305010405");

        let midnight = Local.with_ymd_and_hms(2024, 3, 5, 0, 30, 0).unwrap();
        assert_eq!(export_timestamp(midnight), "20240305123000");
    }

    #[test]
    fn artifact_name_shape() {
        assert_eq!(
            artifact_file_name("my-project", "20240305010405", "zip"),
            "labels_my-project_20240305010405.zip"
        );
    }

    #[test]
    fn replace_extension_swaps_trailing_suffix() {
        assert_eq!(replace_extension("img1.jpg", "txt"), "img1.txt");
        assert_eq!(replace_extension("a.tar.gz", "xml"), "a.tar.xml");
        assert_eq!(replace_extension(".hidden", "txt"), ".txt");
    }

    #[test]
    fn replace_extension_leaves_extensionless_names() {
        assert_eq!(replace_extension("img", "txt"), "img");
        assert_eq!(replace_extension("img.", "txt"), "img.");
        assert_eq!(replace_extension("dir.v1/file", "txt"), "dir.v1/file");
    }
}
