// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! BOXMARK - Bounding box annotation model and export
//!
//! A library for assembling image bounding box annotations drawn on a
//! canvas into records with custom class labels, and persisting them as
//! structured JSON plus YOLO normalized text or a Pascal-VOC-style
//! plain-text summary.

pub mod error;
pub mod export;
pub mod io;
pub mod models;
pub mod session;
pub mod util;

// Re-export commonly used types and functions
pub use error::{Error, Result};
pub use export::{render_export_text, ExportFormat};
pub use io::storage::{FsStorage, Storage};
pub use io::store::AnnotationStore;
pub use models::annotation::{Annotation, BoundingBox, DrawnRect};
pub use models::labels::LabelSet;
pub use models::record::{AnnotationRecord, ImageRef};
pub use session::AnnotationSession;
