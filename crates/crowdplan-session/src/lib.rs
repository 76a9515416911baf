//! CrowdPlan Session: Submitted Forms and Wizard Sequencing
//!
//! Holds what the wizard has accepted so far and decides what comes
//! next. Validation itself lives in `crowdplan-forms`; this crate wires
//! the validators into the submit/advance flow.
//!
//! # Architecture
//!
//! ```text
//! Wizard ── expect_step ──→ PlanningSession ── validator ──→ store
//!    ↓                            ↓
//! current step              venue_snapshot() → staff/safety options
//! ```
//!
//! # Example
//!
//! ```
//! use crowdplan_session::{Wizard, WizardStep};
//! use crowdplan_forms::BasicEventForm;
//!
//! let mut wizard = Wizard::new();
//! assert_eq!(wizard.current_step(), Some(WizardStep::Event));
//!
//! // An empty event form is incomplete, so the wizard stays put.
//! assert!(wizard.submit_event(BasicEventForm::default()).is_err());
//! assert_eq!(wizard.current_step(), Some(WizardStep::Event));
//! ```

pub mod session;
pub mod wizard;

pub use session::{FormKey, PlanningSession};
pub use wizard::{Wizard, WizardStep};
