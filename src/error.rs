// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for annotation assembly, export, and persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while assembling, encoding, or persisting
/// annotation records.
#[derive(Error, Debug)]
pub enum Error {
    /// Image width or height is zero, which would make normalized
    /// coordinates undefined
    #[error("invalid image dimensions {width}x{height} for '{name}'")]
    InvalidImageDimensions {
        /// Image filename the dimensions belong to
        name: String,
        /// Reported width in pixels
        width: u32,
        /// Reported height in pixels
        height: u32,
    },

    /// A record was requested before any image was selected
    #[error("no image selected")]
    NoImageSelected,

    /// A write through the storage interface failed
    #[error("failed to write {path:?}: {source}")]
    Storage {
        /// Destination path of the failed write
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON serialization or parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization or parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Image decoding or encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    /// Create an invalid-dimensions error for the given image.
    pub fn invalid_dimensions(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self::InvalidImageDimensions {
            name: name.into(),
            width,
            height,
        }
    }

    /// Create a storage error for the given path.
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for annotation operations.
pub type Result<T> = std::result::Result<T, Error>;
