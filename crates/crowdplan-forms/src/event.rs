//! Basic event form: name, type, dates, venue, attendance
//!
//! First step of the wizard. The only cross-field rule is date ordering:
//! the end must not precede the start, with equal timestamps accepted.

use crowdplan_core::{
    is_blank, parse_local_timestamp, parse_positive_count, FieldPath, ValidationReport,
};
use serde::{Deserialize, Serialize};

/// Event basics as entered on the first wizard page.
///
/// Dates arrive as the browser's `datetime-local` strings and attendance
/// as positive-integer text; both are parsed during validation rather
/// than at deserialization time so a half-filled payload still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicEventForm {
    pub event_name: Option<String>,
    /// One of [`crate::catalog::EVENT_TYPES`], or `"Other"`.
    pub event_type: Option<String>,
    /// Required only when `event_type` is `"Other"`.
    pub custom_event_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub venue: Option<String>,
    /// Positive-integer text; `"0"` counts as missing.
    pub estimated_attendance: Option<String>,
}

/// Validate the basic event form.
pub fn validate_basic_event_form(form: &BasicEventForm) -> ValidationReport {
    let mut report = ValidationReport::new();

    if is_blank(form.event_name.as_deref()) {
        report.push(FieldPath::field("eventName"), "Event name is required");
    }
    if is_blank(form.event_type.as_deref()) {
        report.push(FieldPath::field("eventType"), "Event type is required");
    }
    if form.event_type.as_deref() == Some("Other") && is_blank(form.custom_event_type.as_deref()) {
        report.push(
            FieldPath::field("customEventType"),
            "Please specify custom event type",
        );
    }

    let start = check_timestamp(&mut report, "startDate", form.start_date.as_deref(), "Start date");
    let end = check_timestamp(&mut report, "endDate", form.end_date.as_deref(), "End date");
    if let (Some(start), Some(end)) = (start, end) {
        // Equal timestamps pass; only a strictly earlier end is an error.
        if start > end {
            report.push(
                FieldPath::field("endDate"),
                "End date must be after start date",
            );
        }
    }

    if is_blank(form.venue.as_deref()) {
        report.push(FieldPath::field("venue"), "Venue is required");
    }

    match form.estimated_attendance.as_deref() {
        Some(text) if !is_blank(Some(text)) => {
            if parse_positive_count(text).is_none() {
                report.push(
                    FieldPath::field("estimatedAttendance"),
                    "Estimated attendance must be a positive number",
                );
            }
        }
        _ => report.push(
            FieldPath::field("estimatedAttendance"),
            "Estimated attendance is required",
        ),
    }

    report
}

/// Derived completeness: zero validation errors.
pub fn is_basic_event_form_complete(form: &BasicEventForm) -> bool {
    validate_basic_event_form(form).is_empty()
}

/// Require a `datetime-local` field and parse it. A present but
/// unparseable value gets a format error and the caller skips the
/// ordering check for it.
pub(crate) fn check_timestamp(
    report: &mut ValidationReport,
    field: &str,
    value: Option<&str>,
    label: &str,
) -> Option<chrono::NaiveDateTime> {
    if is_blank(value) {
        report.push(FieldPath::field(field), format!("{} is required", label));
        return None;
    }
    let value = value.unwrap_or_default();
    match parse_local_timestamp(value) {
        Some(ts) => Some(ts),
        None => {
            report.push(
                FieldPath::field(field),
                format!("{} must be a valid date and time", label),
            );
            None
        }
    }
}
