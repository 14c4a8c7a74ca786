//! Integration tests for the export dispatcher and artifact naming.

use rectlabel::export::{export_at, export_named, ExportFormat, ExportOutcome, MemorySink};

mod common;
use common::{fixed_now, sample_project, FIXED_STAMP};

#[test]
fn unrecognized_format_touches_nothing() {
    let (snapshot, dimensions) = sample_project();
    let mut sink = MemorySink::new();

    for bogus in ["coco", "tfrecord", "YOLO", ""] {
        let outcome = export_named(&snapshot, &dimensions, &mut sink, bogus)
            .expect("dispatch never errors on unknown names");
        assert_eq!(outcome, ExportOutcome::Unsupported, "format: {bogus:?}");
    }

    assert!(sink.artifacts.is_empty());
}

#[test]
fn recognized_names_dispatch_to_their_pipeline() {
    let (snapshot, dimensions) = sample_project();

    for (name, extension) in [("yolo", "zip"), ("voc", "zip"), ("csv", "csv")] {
        let mut sink = MemorySink::new();
        let outcome = export_named(&snapshot, &dimensions, &mut sink, name)
            .expect("export succeeds");

        match outcome {
            ExportOutcome::Saved { file_name, .. } => {
                assert!(
                    file_name.starts_with("labels_my-project_") && file_name.ends_with(extension),
                    "format {name}: {file_name}"
                );
            }
            other => panic!("format {name}: expected Saved, got {other:?}"),
        }
        assert_eq!(sink.artifacts.len(), 1);
    }
}

#[test]
fn slug_replaces_only_the_first_space_in_artifact_names() {
    let mut snapshot = rectlabel::project::ProjectSnapshot::new("My  Big Project");
    snapshot.label_names = vec!["cat".into()];
    let dimensions = rectlabel::project::DimensionTable::new();
    let mut sink = MemorySink::new();

    let outcome = export_at(
        &snapshot,
        &dimensions,
        &mut sink,
        ExportFormat::Csv,
        fixed_now(),
    )
    .expect("export succeeds");

    // Remaining spaces survive into the artifact name.
    assert_eq!(
        outcome,
        ExportOutcome::Saved {
            file_name: format!("labels_my--big project_{FIXED_STAMP}.csv"),
            images: 0,
        }
    );
}

#[test]
fn timestamp_is_shared_across_formats_for_one_instant() {
    let (snapshot, dimensions) = sample_project();

    let mut yolo_sink = MemorySink::new();
    let mut csv_sink = MemorySink::new();
    export_at(
        &snapshot,
        &dimensions,
        &mut yolo_sink,
        ExportFormat::Yolo,
        fixed_now(),
    )
    .expect("yolo export succeeds");
    export_at(
        &snapshot,
        &dimensions,
        &mut csv_sink,
        ExportFormat::Csv,
        fixed_now(),
    )
    .expect("csv export succeeds");

    assert_eq!(
        yolo_sink.artifacts[0].file_name,
        format!("labels_my-project_{FIXED_STAMP}.zip")
    );
    assert_eq!(
        csv_sink.artifacts[0].file_name,
        format!("labels_my-project_{FIXED_STAMP}.csv")
    );
}
