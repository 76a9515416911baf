//! Transport and access form
//!
//! Two gated groups: public transport (modes, schedule times, optional
//! capacity per trip) and parking (capacity plus lane counts). Schedule
//! entries must be 24-hour `HH:MM` strings; each malformed entry gets its
//! own indexed error.

use crowdplan_core::{is_positive_count, is_time_of_day, FieldPath, ValidationReport};
use serde::{Deserialize, Serialize};

/// Transport arrangements as entered on the fourth wizard page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportForm {
    pub public_transport_available: bool,
    /// Selected modes, e.g. "Bus", "LRT".
    pub transport_modes: Vec<String>,
    /// Departure times in `HH:MM`.
    pub transport_schedules: Vec<String>,
    /// Optional: validated only when supplied.
    pub transport_capacity_per_trip: Option<u32>,

    pub parking_available: bool,
    pub parking_capacity: Option<u32>,
    pub entry_lanes: Option<u32>,
    pub exit_lanes: Option<u32>,
}

/// Validate the transport form.
pub fn validate_transport_form(form: &TransportForm) -> ValidationReport {
    let mut report = ValidationReport::new();

    if form.public_transport_available {
        if form.transport_modes.is_empty() {
            report.push(
                FieldPath::field("transportModes"),
                "Please select at least one transport mode",
            );
        }

        if form.transport_schedules.is_empty() {
            report.push(
                FieldPath::field("transportSchedules"),
                "Please add at least one schedule time",
            );
        } else {
            for (idx, time) in form.transport_schedules.iter().enumerate() {
                if !is_time_of_day(time) {
                    report.push(
                        FieldPath::field("transportSchedules").index(idx),
                        "Invalid time format (HH:MM)",
                    );
                }
            }
        }

        // Optional field, invalid-if-present: absent passes, zero fails.
        if let Some(capacity) = form.transport_capacity_per_trip {
            if capacity < 1 {
                report.push(
                    FieldPath::field("transportCapacityPerTrip"),
                    "Capacity per trip must be a positive number",
                );
            }
        }
    }

    if form.parking_available {
        if !is_positive_count(form.parking_capacity) {
            report.push(
                FieldPath::field("parkingCapacity"),
                "Please enter a valid parking capacity",
            );
        }
        if !is_positive_count(form.entry_lanes) {
            report.push(
                FieldPath::field("entryLanes"),
                "Please enter a valid number of entry lanes",
            );
        }
        if !is_positive_count(form.exit_lanes) {
            report.push(
                FieldPath::field("exitLanes"),
                "Please enter a valid number of exit lanes",
            );
        }
    }

    report
}

/// Derived completeness: zero validation errors.
pub fn is_transport_form_complete(form: &TransportForm) -> bool {
    validate_transport_form(form).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_gates_off_is_complete() {
        assert!(validate_transport_form(&TransportForm::default()).is_empty());
    }

    #[test]
    fn test_bad_schedule_entry_and_zero_capacity() {
        let form = TransportForm {
            public_transport_available: true,
            transport_modes: vec!["Bus".into()],
            transport_schedules: vec!["08:00".into(), "25:61".into()],
            transport_capacity_per_trip: Some(0),
            ..TransportForm::default()
        };
        let report = validate_transport_form(&form);
        assert!(!report.contains(&FieldPath::field("transportSchedules").index(0)));
        assert!(report.contains(&FieldPath::field("transportSchedules").index(1)));
        assert!(report.contains(&FieldPath::field("transportCapacityPerTrip")));
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_capacity_per_trip_optional_when_absent() {
        let form = TransportForm {
            public_transport_available: true,
            transport_modes: vec!["Shuttle".into()],
            transport_schedules: vec!["09:30".into()],
            transport_capacity_per_trip: None,
            ..TransportForm::default()
        };
        assert!(validate_transport_form(&form).is_empty());
    }

    #[test]
    fn test_empty_schedule_list() {
        let form = TransportForm {
            public_transport_available: true,
            transport_modes: vec!["MRT".into()],
            ..TransportForm::default()
        };
        let report = validate_transport_form(&form);
        assert!(report.contains(&FieldPath::field("transportSchedules")));
        // List-level error, no indexed entries.
        assert!(!report.contains(&FieldPath::field("transportSchedules").index(0)));
    }

    #[test]
    fn test_parking_lane_counts() {
        let mut form = TransportForm {
            parking_available: true,
            parking_capacity: Some(300),
            entry_lanes: Some(2),
            exit_lanes: Some(0),
            ..TransportForm::default()
        };
        let report = validate_transport_form(&form);
        assert!(report.contains(&FieldPath::field("exitLanes")));
        assert!(!report.contains(&FieldPath::field("entryLanes")));

        form.exit_lanes = Some(1);
        assert!(validate_transport_form(&form).is_empty());
    }

    #[test]
    fn test_gate_off_ignores_parking_fields() {
        let form = TransportForm {
            parking_available: false,
            parking_capacity: Some(0),
            ..TransportForm::default()
        };
        assert!(validate_transport_form(&form).is_empty());
    }
}
