// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation data structures.
//!
//! This module defines the core data structures for representing
//! drawn rectangles, bounding boxes, and labeled annotations.

use serde::{Deserialize, Serialize};

/// A raw rectangle descriptor as supplied by the drawing surface.
///
/// Field names follow the drawing surface's JSON payload; any field the
/// payload omits defaults to 0, so a partially described rectangle is
/// still accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawnRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// An axis-aligned bounding box in image pixel coordinates.
///
/// Coordinates are relative to the image's top-left origin and are never
/// canvas-scaled (image and canvas share dimensions). Zero-area boxes are
/// representable and accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge X coordinate
    pub x: f64,
    /// Top edge Y coordinate
    pub y: f64,
    /// Width of the box
    pub width: f64,
    /// Height of the box
    pub height: f64,
}

impl BoundingBox {
    /// Create a new bounding box from pixel coordinates.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a bounding box from a drawing surface rectangle.
    pub fn from_rect(rect: &DrawnRect) -> Self {
        Self {
            x: rect.left,
            y: rect.top,
            width: rect.width,
            height: rect.height,
        }
    }

    /// Center point of the box in pixel coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A bounding box paired with its assigned class label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub label: String,
    #[serde(flatten)]
    pub bbox: BoundingBox,
}

impl Annotation {
    /// Create a new annotation with the given label and box.
    pub fn new(label: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            label: label.into(),
            bbox,
        }
    }
}
