//! Validation reports
//!
//! A validator walks a whole form record and accumulates one entry per
//! failing field. There is a single error kind: required-missing,
//! malformed, and cross-field inconsistencies all surface as a
//! `{path, message}` pair. Completeness is always derived from emptiness
//! of the report, never from a second rule set.

use crate::path::FieldPath;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single failing field: where, and what to tell the user.
///
/// The path is the programmatic key; the message is display text only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub path: FieldPath,
    pub message: String,
}

/// Ordered collection of validation errors for one form record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field.
    pub fn push(&mut self, path: FieldPath, message: impl Into<String>) {
        self.errors.push(ValidationError {
            path,
            message: message.into(),
        });
    }

    /// True when every field passed, i.e. the form's completeness condition.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.errors.iter().any(|e| &e.path == path)
    }

    /// Display message for a field, if it failed.
    pub fn message_for(&self, path: &FieldPath) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| &e.path == path)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Project into a rendered-path → message map for display layers.
    ///
    /// Later entries for the same path win.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|e| (e.path.to_string(), e.message.clone()))
            .collect()
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }
}

impl IntoIterator for ValidationReport {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
