//! Fixed option catalogs
//!
//! The dropdown choices the wizard pages offer. Validators only require
//! non-blank values; catalogs feed the UI and the membership helpers
//! exist for callers that want to check, not for the validators.

/// Event types offered on the basic event form. "Other" unlocks the
/// custom-type text field.
pub const EVENT_TYPES: &[&str] = &[
    "Concert",
    "Football Match",
    "Festival",
    "Parade",
    "Political Rally",
    "Exhibition",
    "Other",
];

/// Venue layout choices.
pub const LAYOUT_OPTIONS: &[&str] = &["Standard", "Custom"];

/// Gate type choices; wire strings of [`crate::venue::GateType`].
pub const GATE_TYPES: &[&str] = &[
    "General",
    "VIP Only",
    "Staff Only",
    "Emergency Exit",
    "Service/Delivery",
];

/// Restricted-area classifications.
pub const RESTRICTION_TYPES: &[&str] = &["Construction", "Maintenance", "Other"];

/// Special attraction tags.
pub const ATTRACTION_TAGS: &[&str] = &[
    "Merch Booth",
    "Photo Spot",
    "Side Stage",
    "Meet & Greet",
    "Other",
];

/// Public transport modes.
pub const TRANSPORT_MODES: &[&str] = &["Train", "LRT", "MRT", "Bus", "Shuttle"];

/// Weather forecast options.
pub const WEATHER_OPTIONS: &[&str] = &["Sunny", "Rainy", "Hot", "Hazy", "Unknown"];

/// Is `value` one of the catalog's entries?
pub fn is_known(catalog: &[&str], value: &str) -> bool {
    catalog.iter().any(|entry| *entry == value)
}
