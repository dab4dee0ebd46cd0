// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Custom class label management.
//!
//! Labels form an ordered list whose positions double as the numeric
//! class indices used by YOLO export. The list is not deduplicated:
//! entering the same label twice keeps both entries, and index lookups
//! resolve to the first occurrence.

use serde::{Deserialize, Serialize};

/// Label assigned when the user has not defined any labels of their own.
pub const DEFAULT_LABEL: &str = "object";

/// An ordered list of class labels, insertion order preserved.
///
/// Serializes as a plain array of strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Create an empty label set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a label set from raw lines, trimming whitespace and dropping
    /// empty entries. An empty result is not an error; annotations fall
    /// back to [`DEFAULT_LABEL`].
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|label| !label.is_empty())
            .collect();
        Self { labels }
    }

    /// Build a label set from a multi-line text block, one label per line.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Position of the first occurrence of `label`, or `None` if absent.
    pub fn class_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// The label assigned when no explicit choice is made: the first entry,
    /// or [`DEFAULT_LABEL`] when the set is empty.
    pub fn default_label(&self) -> &str {
        self.labels
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_LABEL)
    }

    /// Number of labels in the set.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set contains no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over the labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
