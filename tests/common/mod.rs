use chrono::{DateTime, Local, TimeZone};

use rectlabel::project::{DimensionTable, ImageDimensions, ImageRecord, ProjectSnapshot, Rect};

/// A project with one annotated image, one multi-box image, one image
/// without boxes and one image that never finished loading.
pub fn sample_project() -> (ProjectSnapshot, DimensionTable) {
    let snapshot = ProjectSnapshot {
        project_name: "My Project".into(),
        label_names: vec!["cat".into(), "dog".into()],
        images: vec![
            ImageRecord::new(1u64, "img1.jpg").with_box(0, Rect::new(10.0, 20.0, 30.0, 40.0)),
            ImageRecord::new(2u64, "img2.png")
                .with_box(1, Rect::new(0.0, 0.0, 32.0, 24.0))
                .with_box(0, Rect::new(16.0, 12.0, 16.0, 12.0)),
            ImageRecord::new(3u64, "empty.jpg"),
            ImageRecord::new(4u64, "pending.jpg")
                .with_box(0, Rect::new(1.0, 1.0, 2.0, 2.0))
                .unloaded(),
        ],
    };

    let mut dimensions = DimensionTable::new();
    dimensions.insert(1u64, ImageDimensions::new(100, 200));
    dimensions.insert(2u64, ImageDimensions::new(64, 48));
    dimensions.insert(3u64, ImageDimensions::new(10, 10));

    (snapshot, dimensions)
}

/// Fixed export time: 2024-03-05 13:04:05, stamped as `20240305010405`.
pub fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 5, 13, 4, 5).unwrap()
}

pub const FIXED_STAMP: &str = "20240305010405";
