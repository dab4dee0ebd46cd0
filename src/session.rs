// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation session state.
//!
//! A session holds the custom label set and the currently selected image,
//! and turns raw drawn rectangles into labeled annotations and assembled
//! records. Annotations themselves are transient: they are built as the
//! user labels boxes, handed to [`assemble_record`](AnnotationSession::assemble_record),
//! and not retained afterwards. Selecting a different image discards all
//! per-image state, so nothing leaks between images.

use crate::error::{Error, Result};
use crate::export::ExportFormat;
use crate::models::annotation::{Annotation, BoundingBox, DrawnRect};
use crate::models::labels::LabelSet;
use crate::models::record::{AnnotationRecord, ImageRef};

/// State for one annotation pass over one image.
#[derive(Debug, Default)]
pub struct AnnotationSession {
    /// Custom class labels, in the order the user entered them
    labels: LabelSet,

    /// Currently selected image, if any
    image: Option<ImageRef>,
}

impl AnnotationSession {
    /// Create a new session with no labels and no image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the label set with the given lines, trimmed and with empty
    /// entries dropped. An empty result is accepted; annotations then fall
    /// back to the default label.
    pub fn set_labels<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.labels = LabelSet::from_lines(lines);
    }

    /// The current label set.
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Select the image to annotate, discarding the previous selection.
    pub fn select_image(&mut self, image: ImageRef) {
        log::info!(
            "Selected image '{}' ({}x{})",
            image.name,
            image.width,
            image.height
        );
        self.image = Some(image);
    }

    /// The currently selected image, if any.
    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Build an annotation from a drawn rectangle and a chosen label.
    ///
    /// `None` resolves to the first label, or `"object"` when no labels
    /// are defined. Degenerate (zero-area) rectangles are accepted.
    pub fn build_annotation(&self, rect: &DrawnRect, label_choice: Option<&str>) -> Annotation {
        let label = label_choice.unwrap_or_else(|| self.labels.default_label());
        Annotation::new(label, BoundingBox::from_rect(rect))
    }

    /// Assemble a record from the current image, label set, and the given
    /// annotations.
    ///
    /// Fails when no image is selected, or when the selected image has a
    /// zero dimension (normalized export would divide by it).
    pub fn assemble_record(
        &self,
        format: ExportFormat,
        annotations: Vec<Annotation>,
    ) -> Result<AnnotationRecord> {
        let image = self.image.as_ref().ok_or(Error::NoImageSelected)?;
        if !image.has_valid_dimensions() {
            return Err(Error::invalid_dimensions(
                &image.name,
                image.width,
                image.height,
            ));
        }

        Ok(AnnotationRecord::new(
            &image.name,
            format,
            self.labels.clone(),
            annotations,
        ))
    }
}
