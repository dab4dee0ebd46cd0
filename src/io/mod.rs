// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for canvas payloads, media, and annotation files.

pub mod canvas;
pub mod media;
pub mod serialization;
pub mod storage;
pub mod store;
