//! Venue layout form: sections, gates, VIP zones, restricted areas
//!
//! Second step of the wizard and the one other forms depend on: the
//! section and gate names entered here become the selection options for
//! the staff/safety step, exposed through [`VenueSnapshot`].
//!
//! Gate rule worth noting: every gate must connect to at least one
//! section unless its type is `Service/Delivery`, which is exempt.

use crowdplan_core::{is_blank, is_positive_count, FieldPath, ValidationReport};
use serde::{Deserialize, Serialize};

/// How the venue layout is described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutType {
    /// Sections are listed inline on the form.
    Standard,
    /// Layout comes from an uploaded file; the upload itself is handled
    /// by an external service, only the reference lands here.
    Custom,
}

/// A named seating/standing section with a capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueSection {
    pub name: Option<String>,
    pub capacity: Option<u32>,
}

/// Physical gate classification. Wire strings match the UI dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateType {
    General,
    #[serde(rename = "VIP Only")]
    VipOnly,
    #[serde(rename = "Staff Only")]
    StaffOnly,
    #[serde(rename = "Emergency Exit")]
    EmergencyExit,
    #[serde(rename = "Service/Delivery")]
    ServiceDelivery,
}

impl GateType {
    /// Service/delivery gates serve vehicles, not crowd flow, so they
    /// are exempt from the connected-sections requirement.
    pub fn requires_connected_sections(self) -> bool {
        !matches!(self, GateType::ServiceDelivery)
    }
}

/// A venue entrance/exit record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VenueGate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub gate_type: Option<GateType>,
    pub capacity: Option<u32>,
    /// Names of sections reachable through this gate.
    pub connected_sections: Vec<String>,
    /// Free-text accessibility tags; never validated.
    pub accessibility: Vec<String>,
}

/// A VIP zone with its dedicated entry/exit gates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VipZone {
    pub name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<u32>,
    /// Names of gates serving this zone.
    pub entry_exit_gates: Vec<String>,
}

/// An area closed to the public for part or all of the event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestrictedArea {
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub area_type: Option<String>,
    /// Free text, never validated.
    pub duration: Option<String>,
}

/// Venue layout as entered on the second wizard page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VenueForm {
    pub layout_type: Option<LayoutType>,
    /// Required (non-empty) when the layout is `Standard`.
    pub sections: Vec<VenueSection>,
    /// Opaque upload reference; required when the layout is `Custom`.
    pub custom_file: Option<String>,
    pub gates: Vec<VenueGate>,
    #[serde(rename = "hasVIPZones")]
    pub has_vip_zones: bool,
    #[serde(rename = "vipZones")]
    pub vip_zones: Vec<VipZone>,
    pub has_restricted_areas: bool,
    pub restricted_areas: Vec<RestrictedArea>,
}

impl VenueForm {
    /// Read-only projection of section and gate names for the forms that
    /// come after this one (deployment zones, first-aid locations,
    /// emergency-exit locations). Blank names are dropped.
    pub fn snapshot(&self) -> VenueSnapshot {
        VenueSnapshot {
            sections: self
                .sections
                .iter()
                .filter_map(|s| s.name.as_deref())
                .filter(|n| !n.trim().is_empty())
                .map(str::to_string)
                .collect(),
            gates: self
                .gates
                .iter()
                .filter_map(|g| g.name.as_deref())
                .filter(|n| !n.trim().is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Point-in-time snapshot of venue names consumed by later forms.
///
/// Passed to downstream validators explicitly instead of letting them
/// read shared session state. Empty when the venue form has not been
/// submitted yet; that is a sequencing concern for the caller, not an
/// error here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSnapshot {
    pub sections: Vec<String>,
    pub gates: Vec<String>,
}

impl VenueSnapshot {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.gates.is_empty()
    }
}

/// Validate the venue layout form.
pub fn validate_venue_form(form: &VenueForm) -> ValidationReport {
    let mut report = ValidationReport::new();

    match form.layout_type {
        None => report.push(
            FieldPath::field("layoutType"),
            "Please select a seating layout type",
        ),
        Some(LayoutType::Standard) => {
            if form.sections.is_empty() {
                report.push(
                    FieldPath::field("sections"),
                    "At least one section is required",
                );
            } else {
                for (i, section) in form.sections.iter().enumerate() {
                    if is_blank(section.name.as_deref()) {
                        report.push(
                            FieldPath::field("sections").index(i).then("name"),
                            "Section name is required",
                        );
                    }
                    if !is_positive_count(section.capacity) {
                        report.push(
                            FieldPath::field("sections").index(i).then("capacity"),
                            "Capacity must be a positive number",
                        );
                    }
                }
            }
        }
        Some(LayoutType::Custom) => {
            if is_blank(form.custom_file.as_deref()) {
                report.push(
                    FieldPath::field("customFile"),
                    "Please upload a CSV or JSON file",
                );
            }
        }
    }

    if form.gates.is_empty() {
        report.push(FieldPath::field("gates"), "At least one gate is required");
    } else {
        for (i, gate) in form.gates.iter().enumerate() {
            if is_blank(gate.name.as_deref()) {
                report.push(
                    FieldPath::field("gates").index(i).then("name"),
                    "Gate name is required",
                );
            }
            match gate.gate_type {
                None => report.push(
                    FieldPath::field("gates").index(i).then("type"),
                    "Gate type is required",
                ),
                Some(gate_type) => {
                    if gate_type.requires_connected_sections() && gate.connected_sections.is_empty()
                    {
                        report.push(
                            FieldPath::field("gates").index(i).then("connectedSections"),
                            "Select at least one section",
                        );
                    }
                }
            }
            if !is_positive_count(gate.capacity) {
                report.push(
                    FieldPath::field("gates").index(i).then("capacity"),
                    "Capacity must be a positive number",
                );
            }
        }
    }

    if form.has_vip_zones {
        if form.vip_zones.is_empty() {
            report.push(FieldPath::field("vipZones"), "Add at least one VIP zone");
        } else {
            for (i, zone) in form.vip_zones.iter().enumerate() {
                if is_blank(zone.name.as_deref()) {
                    report.push(
                        FieldPath::field("vipZones").index(i).then("name"),
                        "VIP zone name is required",
                    );
                }
                if is_blank(zone.location.as_deref()) {
                    report.push(
                        FieldPath::field("vipZones").index(i).then("location"),
                        "Location is required",
                    );
                }
                if zone.entry_exit_gates.is_empty() {
                    report.push(
                        FieldPath::field("vipZones").index(i).then("entryExitGates"),
                        "Select at least one gate",
                    );
                }
                if !is_positive_count(zone.capacity) {
                    report.push(
                        FieldPath::field("vipZones").index(i).then("capacity"),
                        "Capacity must be a positive number",
                    );
                }
            }
        }
    }

    if form.has_restricted_areas {
        if form.restricted_areas.is_empty() {
            report.push(
                FieldPath::field("restrictedAreas"),
                "Add at least one restricted area",
            );
        } else {
            for (i, area) in form.restricted_areas.iter().enumerate() {
                if is_blank(area.location.as_deref()) {
                    report.push(
                        FieldPath::field("restrictedAreas").index(i).then("location"),
                        "Location is required",
                    );
                }
                if is_blank(area.area_type.as_deref()) {
                    report.push(
                        FieldPath::field("restrictedAreas").index(i).then("type"),
                        "Restriction type is required",
                    );
                }
            }
        }
    }

    report
}

/// Derived completeness: zero validation errors.
pub fn is_venue_form_complete(form: &VenueForm) -> bool {
    validate_venue_form(form).is_empty()
}
