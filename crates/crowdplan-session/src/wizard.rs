//! Wizard step sequencing
//!
//! The wizard walks the six forms in page order and only moves forward
//! when the current form's validator reports zero errors, the same
//! condition that enables the Next button in the UI. Submitting a record
//! for any step other than the current one is rejected.

use crate::session::{FormKey, PlanningSession};
use crowdplan_core::PlanError;
use crowdplan_forms::{
    BasicEventForm, EnvironmentalForm, FacilitiesForm, StaffSafetyForm, TransportForm, VenueForm,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The six wizard pages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    Event,
    Venue,
    Facilities,
    Transport,
    StaffSafety,
    Environmental,
}

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        WizardStep::Event,
        WizardStep::Venue,
        WizardStep::Facilities,
        WizardStep::Transport,
        WizardStep::StaffSafety,
        WizardStep::Environmental,
    ];

    pub fn first() -> Self {
        WizardStep::Event
    }

    /// The step after this one; `None` after the last page.
    pub fn next(self) -> Option<Self> {
        match self {
            WizardStep::Event => Some(WizardStep::Venue),
            WizardStep::Venue => Some(WizardStep::Facilities),
            WizardStep::Facilities => Some(WizardStep::Transport),
            WizardStep::Transport => Some(WizardStep::StaffSafety),
            WizardStep::StaffSafety => Some(WizardStep::Environmental),
            WizardStep::Environmental => None,
        }
    }

    pub fn form_key(self) -> FormKey {
        match self {
            WizardStep::Event => FormKey::Event,
            WizardStep::Venue => FormKey::Venue,
            WizardStep::Facilities => FormKey::Facilities,
            WizardStep::Transport => FormKey::Transport,
            WizardStep::StaffSafety => FormKey::StaffSafety,
            WizardStep::Environmental => FormKey::Environmental,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_key().as_str())
    }
}

/// Sequencer over the wizard pages, backed by a [`PlanningSession`].
#[derive(Debug, Clone)]
pub struct Wizard {
    session: PlanningSession,
    /// `None` once the last step has been submitted.
    current: Option<WizardStep>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            session: PlanningSession::new(),
            current: Some(WizardStep::first()),
        }
    }

    pub fn current_step(&self) -> Option<WizardStep> {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    /// Read access to everything submitted so far.
    pub fn session(&self) -> &PlanningSession {
        &self.session
    }

    /// Consume the wizard, yielding the completed session.
    pub fn into_session(self) -> PlanningSession {
        self.session
    }

    pub fn submit_event(&mut self, form: BasicEventForm) -> Result<(), PlanError> {
        self.expect_step(WizardStep::Event)?;
        self.session.submit_event(form)?;
        self.advance(WizardStep::Event);
        Ok(())
    }

    pub fn submit_venue(&mut self, form: VenueForm) -> Result<(), PlanError> {
        self.expect_step(WizardStep::Venue)?;
        self.session.submit_venue(form)?;
        self.advance(WizardStep::Venue);
        Ok(())
    }

    pub fn submit_facilities(&mut self, form: FacilitiesForm) -> Result<(), PlanError> {
        self.expect_step(WizardStep::Facilities)?;
        self.session.submit_facilities(form)?;
        self.advance(WizardStep::Facilities);
        Ok(())
    }

    pub fn submit_transport(&mut self, form: TransportForm) -> Result<(), PlanError> {
        self.expect_step(WizardStep::Transport)?;
        self.session.submit_transport(form)?;
        self.advance(WizardStep::Transport);
        Ok(())
    }

    pub fn submit_staff_safety(&mut self, form: StaffSafetyForm) -> Result<(), PlanError> {
        self.expect_step(WizardStep::StaffSafety)?;
        self.session.submit_staff_safety(form)?;
        self.advance(WizardStep::StaffSafety);
        Ok(())
    }

    pub fn submit_environmental(&mut self, form: EnvironmentalForm) -> Result<(), PlanError> {
        self.expect_step(WizardStep::Environmental)?;
        self.session.submit_environmental(form)?;
        self.advance(WizardStep::Environmental);
        Ok(())
    }

    fn expect_step(&self, step: WizardStep) -> Result<(), PlanError> {
        match self.current {
            Some(current) if current == step => Ok(()),
            Some(current) => Err(PlanError::OutOfOrder {
                expected: current.form_key().to_string(),
                got: step.form_key().to_string(),
            }),
            None => Err(PlanError::AlreadyFinished),
        }
    }

    fn advance(&mut self, finished: WizardStep) {
        self.current = finished.next();
        match self.current {
            Some(next) => debug!(from = finished.form_key().as_str(), to = next.form_key().as_str(), "wizard advanced"),
            None => debug!(from = finished.form_key().as_str(), "wizard finished"),
        }
    }
}
