//! Staff and safety form
//!
//! Three gated groups: security staff, first aid, emergency exits. The
//! selection fields draw their options from the venue form submitted
//! earlier (deployment zones and first-aid locations from section names,
//! emergency-exit locations from gate names), so the validator takes an
//! explicit [`VenueSnapshot`] rather than reading shared state.
//!
//! Selections are checked for non-emptiness only. Membership in the
//! snapshot is deliberately not enforced, which keeps a staff form valid
//! even if the venue form is edited afterwards; see the tests.

use crate::venue::VenueSnapshot;
use crowdplan_core::{is_positive_count, FieldPath, ValidationReport};
use serde::{Deserialize, Serialize};

/// Staffing and safety coverage as entered on the fifth wizard page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffSafetyForm {
    pub security_staff_available: bool,
    pub total_staff_count: Option<u32>,
    /// Section names staff are deployed to.
    pub deployment_zones: Vec<String>,

    pub first_aid_available: bool,
    pub number_of_stations: Option<u32>,
    /// Section names hosting first-aid stations.
    pub first_aid_locations: Vec<String>,

    pub emergency_exits_marked: bool,
    pub number_of_emergency_exits: Option<u32>,
    /// Gate names marked as emergency exits.
    pub emergency_exit_locations: Vec<String>,
}

/// Validate the staff/safety form against a venue snapshot.
///
/// The snapshot supplies the available options (an empty snapshot means
/// the venue form has not been submitted, so no selection can be made and
/// gated groups cannot be completed) but selections are not checked for
/// membership in it.
pub fn validate_staff_safety_form(
    form: &StaffSafetyForm,
    _venue: &VenueSnapshot,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    if form.security_staff_available {
        if !is_positive_count(form.total_staff_count) {
            report.push(
                FieldPath::field("totalStaffCount"),
                "Please enter a valid total staff count.",
            );
        }
        if form.deployment_zones.is_empty() {
            report.push(
                FieldPath::field("deploymentZones"),
                "Please select at least one deployment zone.",
            );
        }
    }

    if form.first_aid_available {
        if !is_positive_count(form.number_of_stations) {
            report.push(
                FieldPath::field("numberOfStations"),
                "Please enter a valid number of first aid stations.",
            );
        }
        if form.first_aid_locations.is_empty() {
            report.push(
                FieldPath::field("firstAidLocations"),
                "Please select at least one first aid location.",
            );
        }
    }

    if form.emergency_exits_marked {
        if !is_positive_count(form.number_of_emergency_exits) {
            report.push(
                FieldPath::field("numberOfEmergencyExits"),
                "Please enter a valid number of emergency exits.",
            );
        }
        if form.emergency_exit_locations.is_empty() {
            report.push(
                FieldPath::field("emergencyExitLocations"),
                "Please select at least one exit location.",
            );
        }
    }

    report
}

/// Derived completeness: zero validation errors.
pub fn is_staff_safety_form_complete(form: &StaffSafetyForm, venue: &VenueSnapshot) -> bool {
    validate_staff_safety_form(form, venue).is_empty()
}
