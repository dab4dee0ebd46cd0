// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! YOLO TXT rendering.
//!
//! One line per annotation: `<class_index> <cx> <cy> <width> <height>`,
//! all spatial values normalized to [0, 1] by the image dimensions and
//! formatted to six decimal places. The class index is the label's
//! position in the custom label list; a label that is not in the list
//! falls back to index 0 rather than failing.

use crate::models::record::{AnnotationRecord, ImageRef};
use crate::util::geometry::normalize_box;
use std::fmt::Write;

/// Render all annotations in the record as YOLO lines.
///
/// Caller has already validated that `image` has non-zero dimensions.
pub(crate) fn render(record: &AnnotationRecord, image: &ImageRef) -> String {
    let mut out = String::new();
    for ann in &record.annotations {
        let class_index = record.custom_labels.class_index(&ann.label).unwrap_or(0);
        let (cx, cy, nw, nh) = normalize_box(&ann.bbox, image.width, image.height);
        let _ = writeln!(
            out,
            "{} {:.6} {:.6} {:.6} {:.6}",
            class_index, cx, cy, nw, nh
        );
    }
    out
}
