// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation record serialization and deserialization.
//!
//! This module handles converting annotation records to and from their
//! structured YAML and JSON representations. Both directions are lossless:
//! a record serialized and parsed back compares equal to the original.

use crate::error::Result;
use crate::models::record::AnnotationRecord;

/// Serialize a record to pretty-printed JSON.
pub fn to_json(record: &AnnotationRecord) -> Result<String> {
    let json = serde_json::to_string_pretty(record)?;
    Ok(json)
}

/// Parse a record from JSON.
pub fn from_json(json: &str) -> Result<AnnotationRecord> {
    let record = serde_json::from_str(json)?;
    Ok(record)
}

/// Serialize a record to YAML.
pub fn to_yaml(record: &AnnotationRecord) -> Result<String> {
    let yaml = serde_yaml::to_string(record)?;
    Ok(yaml)
}

/// Parse a record from YAML.
pub fn from_yaml(yaml: &str) -> Result<AnnotationRecord> {
    let record = serde_yaml::from_str(yaml)?;
    Ok(record)
}
