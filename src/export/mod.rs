// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Export encoders for annotation records.
//!
//! Encoding is a pure transform from an assembled record (plus the image
//! dimensions) to the text written next to the structured JSON. It either
//! succeeds for every annotation in the record or fails before emitting
//! anything, so a partially encoded file is never produced.

mod voc;
mod yolo;

use crate::error::{Error, Result};
use crate::models::record::{AnnotationRecord, ImageRef};
use serde::{Deserialize, Serialize};

/// Supported text export formats.
///
/// Serialized values match the strings stored in the `annotation_format`
/// field of the JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    #[serde(rename = "Pascal VOC")]
    PascalVoc,
    #[serde(rename = "YOLO")]
    Yolo,
}

impl ExportFormat {
    /// Human-readable name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::PascalVoc => "Pascal VOC",
            ExportFormat::Yolo => "YOLO",
        }
    }

    /// File extension of the text output.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::PascalVoc => "txt",
            ExportFormat::Yolo => "txt",
        }
    }
}

/// Render the text export for a record.
///
/// `image` supplies the pixel dimensions used for YOLO normalization;
/// zero width or height fails with
/// [`Error::InvalidImageDimensions`](crate::Error::InvalidImageDimensions)
/// before any output is produced, for either format.
pub fn render_export_text(record: &AnnotationRecord, image: &ImageRef) -> Result<String> {
    if !image.has_valid_dimensions() {
        return Err(Error::invalid_dimensions(
            &image.name,
            image.width,
            image.height,
        ));
    }

    let text = match record.annotation_format {
        ExportFormat::Yolo => yolo::render(record, image),
        ExportFormat::PascalVoc => voc::render(record),
    };
    Ok(text)
}
