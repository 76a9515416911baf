//! Typed field paths for validation errors
//!
//! Error entries are keyed by the location of a field inside a form
//! record, down to individual list elements. Paths are built from typed
//! segments instead of concatenated strings, and render to the
//! dot-delimited form (`gates.0.capacity`) that display layers and test
//! assertions consume.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One step into a form record: a named field or a list index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// Location of a field inside a form record.
///
/// ```
/// use crowdplan_core::FieldPath;
///
/// let path = FieldPath::field("gates").index(0).then("capacity");
/// assert_eq!(path.to_string(), "gates.0.capacity");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Start a path at a named root field.
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Append a list index.
    pub fn index(mut self, idx: usize) -> Self {
        self.segments.push(PathSegment::Index(idx));
        self
    }

    /// Append a nested field name.
    #[allow(clippy::should_implement_trait)]
    pub fn then(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Field(name.into()));
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Root field name of the path.
    pub fn root(&self) -> &str {
        match &self.segments[0] {
            PathSegment::Field(name) => name,
            // Paths always start at a named field; builders enforce this.
            PathSegment::Index(_) => unreachable!("path rooted at an index"),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// Error parsing a dot-delimited path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePathError;

impl fmt::Display for ParsePathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("field path must be non-empty and rooted at a field name")
    }
}

impl std::error::Error for ParsePathError {}

impl FromStr for FieldPath {
    type Err = ParsePathError;

    /// Parse the dot form back into segments. Purely numeric segments
    /// become indices; everything else is a field name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParsePathError);
        }
        let mut segments = Vec::new();
        for part in s.split('.') {
            if part.is_empty() {
                return Err(ParsePathError);
            }
            match part.parse::<usize>() {
                Ok(idx) => segments.push(PathSegment::Index(idx)),
                Err(_) => segments.push(PathSegment::Field(part.to_string())),
            }
        }
        if matches!(segments[0], PathSegment::Index(_)) {
            return Err(ParsePathError);
        }
        Ok(Self { segments })
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
