//! Environmental and external-factors form
//!
//! Last step of the wizard: weather, nearby events, free-form notes.
//! `nearbyEvents` is tri-state: the question must be answered
//! explicitly, so "unanswered" is distinct from "no" and is itself an
//! error. Only a "yes" makes the nested event fields required.

use crate::event::check_timestamp;
use crowdplan_core::{is_blank, is_positive_count, FieldPath, ValidationReport};
use serde::{Deserialize, Serialize};

/// Environmental context as entered on the final wizard page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvironmentalForm {
    /// One of [`crate::catalog::WEATHER_OPTIONS`].
    pub weather: Option<String>,
    /// Tri-state: `None` means the question was never answered.
    pub nearby_events: Option<bool>,
    /// Name of the nearby event.
    pub event_name: Option<String>,
    pub event_location: Option<String>,
    pub event_start: Option<String>,
    pub event_end: Option<String>,
    pub expected_attendance: Option<u32>,
    /// Optional free text, never validated.
    pub special_notes: Option<String>,
}

/// Validate the environmental form.
pub fn validate_environmental_form(form: &EnvironmentalForm) -> ValidationReport {
    let mut report = ValidationReport::new();

    if is_blank(form.weather.as_deref()) {
        report.push(
            FieldPath::field("weather"),
            "Please select the weather forecast/consideration.",
        );
    }

    match form.nearby_events {
        None => report.push(
            FieldPath::field("nearbyEvents"),
            "Please indicate if there are nearby events.",
        ),
        Some(false) => {}
        Some(true) => {
            if is_blank(form.event_name.as_deref()) {
                report.push(FieldPath::field("eventName"), "Event name is required.");
            }
            if is_blank(form.event_location.as_deref()) {
                report.push(
                    FieldPath::field("eventLocation"),
                    "Event location is required.",
                );
            }

            let start = check_timestamp(
                &mut report,
                "eventStart",
                form.event_start.as_deref(),
                "Event start date and time",
            );
            let end = check_timestamp(
                &mut report,
                "eventEnd",
                form.event_end.as_deref(),
                "Event end date and time",
            );
            if let (Some(start), Some(end)) = (start, end) {
                if end < start {
                    report.push(
                        FieldPath::field("eventEnd"),
                        "Event end cannot be before start time.",
                    );
                }
            }

            if !is_positive_count(form.expected_attendance) {
                report.push(
                    FieldPath::field("expectedAttendance"),
                    "Expected attendance must be greater than 0.",
                );
            }
        }
    }

    report
}

/// Derived completeness: zero validation errors.
pub fn is_environmental_form_complete(form: &EnvironmentalForm) -> bool {
    validate_environmental_form(form).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unanswered_nearby_events_is_an_error() {
        let form = EnvironmentalForm {
            weather: Some("Sunny".into()),
            ..EnvironmentalForm::default()
        };
        let report = validate_environmental_form(&form);
        assert!(report.contains(&FieldPath::field("nearbyEvents")));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_answered_no_is_complete() {
        let form = EnvironmentalForm {
            weather: Some("Hazy".into()),
            nearby_events: Some(false),
            ..EnvironmentalForm::default()
        };
        assert!(validate_environmental_form(&form).is_empty());
        assert!(is_environmental_form_complete(&form));
    }

    #[test]
    fn test_answered_no_ignores_nested_fields() {
        // Gate off: junk nested content does not block completeness.
        let form = EnvironmentalForm {
            weather: Some("Rainy".into()),
            nearby_events: Some(false),
            event_name: Some("".into()),
            expected_attendance: Some(0),
            ..EnvironmentalForm::default()
        };
        assert!(validate_environmental_form(&form).is_empty());
    }

    #[test]
    fn test_answered_yes_requires_nested_group() {
        let form = EnvironmentalForm {
            weather: Some("Hot".into()),
            nearby_events: Some(true),
            ..EnvironmentalForm::default()
        };
        let report = validate_environmental_form(&form);
        for field in [
            "eventName",
            "eventLocation",
            "eventStart",
            "eventEnd",
            "expectedAttendance",
        ] {
            assert!(report.contains(&FieldPath::field(field)), "missing {}", field);
        }
    }

    #[test]
    fn test_nearby_event_ordering_boundary() {
        let mut form = EnvironmentalForm {
            weather: Some("Sunny".into()),
            nearby_events: Some(true),
            event_name: Some("Night Market".into()),
            event_location: Some("Jalan Alor".into()),
            event_start: Some("2025-08-30T18:00".into()),
            event_end: Some("2025-08-30T18:00".into()),
            expected_attendance: Some(2000),
            ..EnvironmentalForm::default()
        };
        // Equal start and end passes.
        assert!(validate_environmental_form(&form).is_empty());

        form.event_end = Some("2025-08-30T17:00".into());
        let report = validate_environmental_form(&form);
        assert!(report.contains(&FieldPath::field("eventEnd")));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_special_notes_never_validated() {
        let form = EnvironmentalForm {
            weather: Some("Unknown".into()),
            nearby_events: Some(false),
            special_notes: None,
            ..EnvironmentalForm::default()
        };
        assert!(validate_environmental_form(&form).is_empty());
    }

    #[test]
    fn test_tristate_survives_serde() {
        let unanswered: EnvironmentalForm = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(unanswered.nearby_events, None);

        let answered_no: EnvironmentalForm =
            serde_json::from_value(serde_json::json!({ "nearbyEvents": false })).unwrap();
        assert_eq!(answered_no.nearby_events, Some(false));
    }
}
