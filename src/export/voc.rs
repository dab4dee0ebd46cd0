// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pascal VOC summary rendering.
//!
//! Deliberately NOT the standard's XML schema: the output is a plain-text
//! summary with one line per annotation, carried over as-is from the tool
//! this format was inherited from. Coordinates stay in raw pixel values.

use crate::models::record::AnnotationRecord;
use std::fmt::Write;

/// Render all annotations in the record as a text summary.
pub(crate) fn render(record: &AnnotationRecord) -> String {
    let mut out = String::from("Pascal VOC annotation summary:\n");
    for ann in &record.annotations {
        let _ = writeln!(
            out,
            "Label: {}, Coordinates: (x: {}, y: {}, width: {}, height: {})",
            ann.label, ann.bbox.x, ann.bbox.y, ann.bbox.width, ann.bbox.height
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;
    use crate::models::annotation::{Annotation, BoundingBox};
    use crate::models::labels::LabelSet;

    #[test]
    fn test_single_annotation_summary() {
        let record = AnnotationRecord::new(
            "photo.png",
            ExportFormat::PascalVoc,
            LabelSet::from_lines(["cat"]),
            vec![Annotation::new("cat", BoundingBox::new(5.0, 5.0, 20.0, 30.0))],
        );

        assert_eq!(
            render(&record),
            "Pascal VOC annotation summary:\n\
             Label: cat, Coordinates: (x: 5, y: 5, width: 20, height: 30)\n"
        );
    }

    #[test]
    fn test_fractional_coordinates_keep_their_fraction() {
        let record = AnnotationRecord::new(
            "photo.png",
            ExportFormat::PascalVoc,
            LabelSet::from_lines(["dog"]),
            vec![Annotation::new(
                "dog",
                BoundingBox::new(1.5, 2.25, 10.0, 20.5),
            )],
        );

        assert_eq!(
            render(&record),
            "Pascal VOC annotation summary:\n\
             Label: dog, Coordinates: (x: 1.5, y: 2.25, width: 10, height: 20.5)\n"
        );
    }

    #[test]
    fn test_empty_record_is_header_only() {
        let record = AnnotationRecord::new(
            "photo.png",
            ExportFormat::PascalVoc,
            LabelSet::new(),
            Vec::new(),
        );

        assert_eq!(render(&record), "Pascal VOC annotation summary:\n");
    }
}
