// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation record assembly.
//!
//! This module defines the aggregate written out for each annotated
//! image: the image identity, the chosen export format, the label set
//! snapshot, and the ordered annotations.

use super::annotation::Annotation;
use super::labels::LabelSet;
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Identity and dimensions of the image being annotated.
///
/// Dimensions are whatever the image loader reported; they are validated
/// when a record is assembled, not here, so a broken loader surfaces as a
/// checked error instead of a division by zero during export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Original filename, used to derive output base filenames
    pub name: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageRef {
    /// Create a new image reference.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// Whether both dimensions are usable for coordinate normalization.
    pub fn has_valid_dimensions(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Filename without its final extension, used as the base for the
    /// `.json` and `.txt` output files.
    pub fn base_name(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.name)
    }
}

/// Complete annotation data persisted for one image.
///
/// Holds exactly the fields that appear in the structured JSON output,
/// so serialization is lossless and round-trips. A record is assembled
/// once and never mutated; re-saving an image replaces its record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub image_name: String,
    pub annotation_format: ExportFormat,
    pub custom_labels: LabelSet,
    pub annotations: Vec<Annotation>,
}

impl AnnotationRecord {
    /// Create a new record for the given image and format.
    pub fn new(
        image_name: impl Into<String>,
        annotation_format: ExportFormat,
        custom_labels: LabelSet,
        annotations: Vec<Annotation>,
    ) -> Self {
        Self {
            image_name: image_name.into(),
            annotation_format,
            custom_labels,
            annotations,
        }
    }
}
