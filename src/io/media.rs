// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media loading and normalization.
//!
//! This module decodes uploaded images, normalizes them to RGB channel
//! order, and re-encodes them for the saved copy. Coordinate
//! normalization downstream relies on the dimensions reported here.

use crate::error::Result;
use crate::models::record::ImageRef;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// An uploaded image after RGB normalization.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    /// Identity and dimensions for annotation assembly
    pub image: ImageRef,
    /// Re-encoded RGB image bytes for the saved copy
    pub bytes: Vec<u8>,
}

/// Decode `data`, convert to RGB8, and re-encode it.
///
/// The output encoding follows the filename extension, falling back to
/// PNG when the extension is missing or unrecognized. Alpha channels are
/// dropped, not blended.
pub fn normalize_rgb(data: &[u8], filename: &str) -> Result<PreparedImage> {
    let decoded = image::load_from_memory(data)?;
    let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());

    let format = ImageFormat::from_path(filename).unwrap_or(ImageFormat::Png);
    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, format)?;

    log::info!(
        "Normalized '{}' to RGB ({}x{})",
        filename,
        rgb.width(),
        rgb.height()
    );

    Ok(PreparedImage {
        image: ImageRef::new(filename, rgb.width(), rgb.height()),
        bytes: buffer.into_inner(),
    })
}
