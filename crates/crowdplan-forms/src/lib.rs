//! CrowdPlan Forms: Wizard Records, Validators, Completeness
//!
//! One module per step of the event-safety planning wizard. Each module
//! pairs a serde record (wire field names match the browser payloads)
//! with a pure validator and a derived completeness predicate.
//!
//! # Architecture
//!
//! ```text
//! Event → Venue → Facilities → Transport → StaffSafety → Environmental
//!           ↓ snapshot()                        ↑
//!           └──── sections / gate names ────────┘
//! ```
//!
//! Validators never fail and never log: odd input becomes error entries,
//! so they are safe to run on every keystroke. Completeness is always
//! `validate(..).is_empty()`; there is no second rule set to drift.
//!
//! # Example
//!
//! ```
//! use crowdplan_forms::{BasicEventForm, validate_basic_event_form};
//!
//! let form: BasicEventForm = serde_json::from_value(serde_json::json!({
//!     "eventName": "Fest",
//!     "eventType": "Other",
//!     "customEventType": "",
//!     "startDate": "2025-01-01T10:00",
//!     "endDate": "2025-01-01T09:00",
//!     "venue": "Park",
//!     "estimatedAttendance": "500"
//! })).unwrap();
//!
//! let report = validate_basic_event_form(&form);
//! let errors = report.to_map();
//! assert!(errors.contains_key("customEventType"));
//! assert!(errors.contains_key("endDate"));
//! ```

pub mod catalog;
pub mod environmental;
pub mod event;
pub mod facilities;
pub mod staff_safety;
pub mod transport;
pub mod venue;

pub use environmental::{
    is_environmental_form_complete, validate_environmental_form, EnvironmentalForm,
};
pub use event::{is_basic_event_form_complete, validate_basic_event_form, BasicEventForm};
pub use facilities::{is_facilities_form_complete, validate_facilities_form, FacilitiesForm};
pub use staff_safety::{
    is_staff_safety_form_complete, validate_staff_safety_form, StaffSafetyForm,
};
pub use transport::{is_transport_form_complete, validate_transport_form, TransportForm};
pub use venue::{
    is_venue_form_complete, validate_venue_form, GateType, LayoutType, RestrictedArea, VenueForm,
    VenueGate, VenueSection, VenueSnapshot, VipZone,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completeness_is_derived_from_emptiness() {
        // One probe per form: the predicate must agree with the report.
        let event = BasicEventForm::default();
        assert_eq!(
            is_basic_event_form_complete(&event),
            validate_basic_event_form(&event).is_empty()
        );

        let venue = VenueForm::default();
        assert_eq!(
            is_venue_form_complete(&venue),
            validate_venue_form(&venue).is_empty()
        );

        let facilities = FacilitiesForm::default();
        assert_eq!(
            is_facilities_form_complete(&facilities),
            validate_facilities_form(&facilities).is_empty()
        );

        let transport = TransportForm::default();
        assert_eq!(
            is_transport_form_complete(&transport),
            validate_transport_form(&transport).is_empty()
        );

        let staff = StaffSafetyForm::default();
        let snapshot = VenueSnapshot::default();
        assert_eq!(
            is_staff_safety_form_complete(&staff, &snapshot),
            validate_staff_safety_form(&staff, &snapshot).is_empty()
        );

        let environmental = EnvironmentalForm::default();
        assert_eq!(
            is_environmental_form_complete(&environmental),
            validate_environmental_form(&environmental).is_empty()
        );
    }
}
