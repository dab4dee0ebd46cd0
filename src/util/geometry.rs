// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for converting boxes from pixel
//! coordinates to the normalized center format used by YOLO export.

use crate::models::annotation::BoundingBox;

/// Convert a pixel-space box to normalized center format.
///
/// Returns `(center_x, center_y, width, height)`, each divided by the
/// image dimension on its axis. Callers must ensure `width` and `height`
/// are non-zero.
pub fn normalize_box(bbox: &BoundingBox, width: u32, height: u32) -> (f64, f64, f64, f64) {
    let img_w = width as f64;
    let img_h = height as f64;
    let (cx, cy) = bbox.center();
    (cx / img_w, cy / img_h, bbox.width / img_w, bbox.height / img_h)
}
