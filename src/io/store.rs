// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation save pipeline.
//!
//! Persists the artifacts produced for an annotated image: the shared
//! `labels.txt`, the per-image structured JSON, a copy of the image, and
//! the per-image export text. Writes happen in that order and stop at the
//! first failure, so the text export is never written when the structured
//! JSON write failed.
//!
//! Concurrent writers targeting the same image base name are a
//! last-writer-wins race; the tool is single-user by design and no
//! locking is attempted.

use crate::error::Result;
use crate::export::render_export_text;
use crate::io::serialization;
use crate::io::storage::Storage;
use crate::models::labels::LabelSet;
use crate::models::record::{AnnotationRecord, ImageRef};
use std::path::{Path, PathBuf};

/// Filename of the shared label list.
const LABELS_FILE: &str = "labels.txt";

/// Default directory for annotation files.
const ANNOTATIONS_DIR: &str = "annotations";

/// Default directory for annotated image copies.
const IMAGES_DIR: &str = "annotated_images";

/// Paths created by a successful record save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedRecord {
    /// Structured JSON file
    pub json_path: PathBuf,
    /// Image copy
    pub image_path: PathBuf,
    /// Format-specific text export
    pub text_path: PathBuf,
}

/// Save pipeline for annotation artifacts.
pub struct AnnotationStore<S> {
    storage: S,
    annotations_dir: PathBuf,
    images_dir: PathBuf,
}

impl<S: Storage> AnnotationStore<S> {
    /// Create a store using the default output directories.
    pub fn new(storage: S) -> Self {
        Self::with_dirs(storage, ANNOTATIONS_DIR, IMAGES_DIR)
    }

    /// Create a store with explicit output directories.
    pub fn with_dirs(
        storage: S,
        annotations_dir: impl Into<PathBuf>,
        images_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            storage,
            annotations_dir: annotations_dir.into(),
            images_dir: images_dir.into(),
        }
    }

    /// Directory the annotation files are written to.
    pub fn annotations_dir(&self) -> &Path {
        &self.annotations_dir
    }

    /// Directory the image copies are written to.
    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Write the label list to `labels.txt`, one label per line,
    /// overwriting any previous content. Returns the written path.
    pub fn save_labels(&self, labels: &LabelSet) -> Result<PathBuf> {
        let path = self.annotations_dir.join(LABELS_FILE);
        let mut content = String::new();
        for label in labels.iter() {
            content.push_str(label);
            content.push('\n');
        }
        self.storage.write(&path, content.as_bytes())?;
        log::info!("Saved {} labels to {}", labels.len(), path.display());
        Ok(path)
    }

    /// Persist a record: `<base>.json`, the image copy, then `<base>.txt`.
    ///
    /// Encoding runs before any write, so an invalid record produces no
    /// files at all. A failed write aborts the remaining steps.
    pub fn save_record(
        &self,
        record: &AnnotationRecord,
        image: &ImageRef,
        image_bytes: &[u8],
    ) -> Result<SavedRecord> {
        let text = render_export_text(record, image)?;
        let json = serialization::to_json(record)?;

        let base = image.base_name();
        let json_path = self.annotations_dir.join(format!("{}.json", base));
        let image_path = self.images_dir.join(&image.name);
        let text_path = self
            .annotations_dir
            .join(format!("{}.{}", base, record.annotation_format.extension()));

        self.storage.write(&json_path, json.as_bytes())?;
        self.storage.write(&image_path, image_bytes)?;
        self.storage.write(&text_path, text.as_bytes())?;

        log::info!(
            "Saved {} annotations for '{}' as {}",
            record.annotations.len(),
            image.name,
            record.annotation_format.display_name()
        );

        Ok(SavedRecord {
            json_path,
            image_path,
            text_path,
        })
    }
}
