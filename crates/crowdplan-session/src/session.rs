//! Planning session: the store of submitted forms
//!
//! Form data lives in the UI layer while it is being edited; a record
//! only lands here once its validator reports zero errors. Stored records
//! are point-in-time snapshots: there is no back-edit reconciliation,
//! and the only cross-form read is the venue snapshot consumed by the
//! staff/safety step.

use crowdplan_core::PlanError;
use crowdplan_forms::{
    validate_basic_event_form, validate_environmental_form, validate_facilities_form,
    validate_staff_safety_form, validate_transport_form, validate_venue_form, BasicEventForm,
    EnvironmentalForm, FacilitiesForm, StaffSafetyForm, TransportForm, VenueForm, VenueSnapshot,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Key of a wizard form inside the session mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormKey {
    Event,
    Venue,
    Facilities,
    Transport,
    StaffSafety,
    Environmental,
}

impl FormKey {
    /// Section name used in the session mapping and in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            FormKey::Event => "event",
            FormKey::Venue => "venue",
            FormKey::Facilities => "facilities",
            FormKey::Transport => "transport",
            FormKey::StaffSafety => "staffSafety",
            FormKey::Environmental => "environmental",
        }
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session-scoped mapping of submitted forms, keyed by [`FormKey`].
///
/// `submit_*` runs the form's validator and rejects the record while any
/// error remains, so everything stored here is complete by construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanningSession {
    event: Option<BasicEventForm>,
    venue: Option<VenueForm>,
    facilities: Option<FacilitiesForm>,
    transport: Option<TransportForm>,
    staff_safety: Option<StaffSafetyForm>,
    environmental: Option<EnvironmentalForm>,
}

impl PlanningSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Venue names for downstream selection fields. Empty lists until
    /// the venue form is submitted; that is a sequencing state, not an
    /// error.
    pub fn venue_snapshot(&self) -> VenueSnapshot {
        self.venue
            .as_ref()
            .map(VenueForm::snapshot)
            .unwrap_or_default()
    }

    pub fn is_submitted(&self, key: FormKey) -> bool {
        match key {
            FormKey::Event => self.event.is_some(),
            FormKey::Venue => self.venue.is_some(),
            FormKey::Facilities => self.facilities.is_some(),
            FormKey::Transport => self.transport.is_some(),
            FormKey::StaffSafety => self.staff_safety.is_some(),
            FormKey::Environmental => self.environmental.is_some(),
        }
    }

    /// Keys of the forms submitted so far, in wizard order.
    pub fn submitted_keys(&self) -> Vec<FormKey> {
        [
            FormKey::Event,
            FormKey::Venue,
            FormKey::Facilities,
            FormKey::Transport,
            FormKey::StaffSafety,
            FormKey::Environmental,
        ]
        .into_iter()
        .filter(|key| self.is_submitted(*key))
        .collect()
    }

    pub fn event(&self) -> Option<&BasicEventForm> {
        self.event.as_ref()
    }

    pub fn venue(&self) -> Option<&VenueForm> {
        self.venue.as_ref()
    }

    pub fn facilities(&self) -> Option<&FacilitiesForm> {
        self.facilities.as_ref()
    }

    pub fn transport(&self) -> Option<&TransportForm> {
        self.transport.as_ref()
    }

    pub fn staff_safety(&self) -> Option<&StaffSafetyForm> {
        self.staff_safety.as_ref()
    }

    pub fn environmental(&self) -> Option<&EnvironmentalForm> {
        self.environmental.as_ref()
    }

    pub fn submit_event(&mut self, form: BasicEventForm) -> Result<(), PlanError> {
        Self::gate(FormKey::Event, validate_basic_event_form(&form).len())?;
        self.event = Some(form);
        Ok(())
    }

    pub fn submit_venue(&mut self, form: VenueForm) -> Result<(), PlanError> {
        Self::gate(FormKey::Venue, validate_venue_form(&form).len())?;
        self.venue = Some(form);
        Ok(())
    }

    pub fn submit_facilities(&mut self, form: FacilitiesForm) -> Result<(), PlanError> {
        Self::gate(FormKey::Facilities, validate_facilities_form(&form).len())?;
        self.facilities = Some(form);
        Ok(())
    }

    pub fn submit_transport(&mut self, form: TransportForm) -> Result<(), PlanError> {
        Self::gate(FormKey::Transport, validate_transport_form(&form).len())?;
        self.transport = Some(form);
        Ok(())
    }

    /// Staff/safety validates against this session's current venue
    /// snapshot.
    pub fn submit_staff_safety(&mut self, form: StaffSafetyForm) -> Result<(), PlanError> {
        let snapshot = self.venue_snapshot();
        Self::gate(
            FormKey::StaffSafety,
            validate_staff_safety_form(&form, &snapshot).len(),
        )?;
        self.staff_safety = Some(form);
        Ok(())
    }

    pub fn submit_environmental(&mut self, form: EnvironmentalForm) -> Result<(), PlanError> {
        Self::gate(
            FormKey::Environmental,
            validate_environmental_form(&form).len(),
        )?;
        self.environmental = Some(form);
        Ok(())
    }

    fn gate(key: FormKey, open: usize) -> Result<(), PlanError> {
        if open > 0 {
            warn!(form = key.as_str(), open, "rejected incomplete submission");
            return Err(PlanError::Incomplete {
                form: key.to_string(),
                open,
            });
        }
        debug!(form = key.as_str(), "form submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crowdplan_forms::{GateType, LayoutType, VenueGate, VenueSection};

    fn complete_venue() -> VenueForm {
        VenueForm {
            layout_type: Some(LayoutType::Standard),
            sections: vec![VenueSection {
                name: Some("Main Field".into()),
                capacity: Some(5000),
            }],
            gates: vec![VenueGate {
                name: Some("Gate A".into()),
                gate_type: Some(GateType::General),
                capacity: Some(1000),
                connected_sections: vec!["Main Field".into()],
                accessibility: vec![],
            }],
            ..VenueForm::default()
        }
    }

    #[test]
    fn test_incomplete_submission_is_rejected() {
        let mut session = PlanningSession::new();
        let err = session.submit_event(BasicEventForm::default()).unwrap_err();
        assert!(matches!(err, PlanError::Incomplete { ref form, open } if form == "event" && open > 0));
        assert!(!session.is_submitted(FormKey::Event));
    }

    #[test]
    fn test_snapshot_empty_before_venue_submission() {
        let session = PlanningSession::new();
        assert!(session.venue_snapshot().is_empty());
    }

    #[test]
    fn test_snapshot_after_venue_submission() {
        let mut session = PlanningSession::new();
        session.submit_venue(complete_venue()).unwrap();

        let snapshot = session.venue_snapshot();
        assert_eq!(snapshot.sections, vec!["Main Field"]);
        assert_eq!(snapshot.gates, vec!["Gate A"]);
        assert!(session.is_submitted(FormKey::Venue));
        assert_eq!(session.submitted_keys(), vec![FormKey::Venue]);
    }

    #[test]
    fn test_staff_safety_with_all_gates_off_passes_without_venue() {
        let mut session = PlanningSession::new();
        session
            .submit_staff_safety(StaffSafetyForm::default())
            .unwrap();
        assert!(session.is_submitted(FormKey::StaffSafety));
    }

    #[test]
    fn test_form_keys_render_session_section_names() {
        assert_eq!(FormKey::StaffSafety.as_str(), "staffSafety");
        assert_eq!(FormKey::Event.to_string(), "event");
        assert_eq!(
            serde_json::to_value(FormKey::StaffSafety).unwrap(),
            serde_json::json!("staffSafety")
        );
    }
}
