//! CrowdPlan Core: Field Paths, Validation Reports, Shared Field Rules
//!
//! Primitives shared by every form validator in the event-safety planning
//! wizard.
//!
//! # Architecture
//!
//! ```text
//! Form Record → Validator → ValidationReport → is_empty()?
//!                  ↓              ↓                ↓
//!            field rules    {FieldPath,      completeness
//!            (this crate)    message}        (gates "Next")
//! ```
//!
//! # Example
//!
//! ```
//! use crowdplan_core::{FieldPath, ValidationReport};
//!
//! let mut report = ValidationReport::new();
//! report.push(
//!     FieldPath::field("gates").index(0).then("capacity"),
//!     "Capacity must be a positive number",
//! );
//!
//! assert!(!report.is_empty());
//! assert_eq!(report.to_map()["gates.0.capacity"], "Capacity must be a positive number");
//! ```

pub mod error;
pub mod fields;
pub mod path;
pub mod report;

pub use error::PlanError;
pub use fields::{
    is_blank, is_positive_count, is_time_of_day, parse_local_timestamp, parse_positive_count,
};
pub use path::{FieldPath, ParsePathError, PathSegment};
pub use report::{ValidationError, ValidationReport};

/// Versão do motor CrowdPlan
pub const CROWDPLAN_VERSION: &str = "0.1.0";
