//! Facilities and attractions form
//!
//! Three independently gated groups: restrooms, food courts, special
//! attractions. Each group's fields are required only while its
//! availability flag is on.
//!
//! The attraction locations are a parallel array indexed by attraction:
//! attraction `i` must have a non-empty location list at
//! `specialAttractionsLocations.i`.

use crowdplan_core::{is_positive_count, FieldPath, ValidationReport};
use serde::{Deserialize, Serialize};

/// Facilities as entered on the third wizard page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacilitiesForm {
    pub restrooms_available: bool,
    pub restroom_count: Option<u32>,
    pub restroom_locations: Vec<String>,

    pub food_courts_available: bool,
    pub food_court_count: Option<u32>,
    /// Capacity per food court.
    pub food_court_capacity: Option<u32>,
    pub food_court_locations: Vec<String>,

    pub special_attractions_available: bool,
    /// Attraction tags, e.g. "Merch Booth".
    pub special_attractions: Vec<String>,
    /// Parallel to `special_attractions`: locations assigned to the
    /// attraction at the same index.
    pub special_attractions_locations: Vec<Vec<String>>,
}

/// Validate the facilities form.
pub fn validate_facilities_form(form: &FacilitiesForm) -> ValidationReport {
    let mut report = ValidationReport::new();

    if form.restrooms_available {
        if !is_positive_count(form.restroom_count) {
            report.push(
                FieldPath::field("restroomCount"),
                "Please enter a valid number of restrooms",
            );
        }
        if form.restroom_locations.is_empty() {
            report.push(
                FieldPath::field("restroomLocations"),
                "Please select at least one restroom location",
            );
        }
    }

    if form.food_courts_available {
        if !is_positive_count(form.food_court_count) {
            report.push(
                FieldPath::field("foodCourtCount"),
                "Please enter a valid number of food courts",
            );
        }
        if !is_positive_count(form.food_court_capacity) {
            report.push(
                FieldPath::field("foodCourtCapacity"),
                "Please enter a valid capacity per food court",
            );
        }
        if form.food_court_locations.is_empty() {
            report.push(
                FieldPath::field("foodCourtLocations"),
                "Please select at least one food court location",
            );
        }
    }

    if form.special_attractions_available {
        if form.special_attractions.is_empty() {
            report.push(
                FieldPath::field("specialAttractions"),
                "Please select at least one attraction",
            );
        }
        // Walk every index that has an attraction or a location entry; a
        // missing tail entry is the same as an empty one.
        let slots = form
            .special_attractions
            .len()
            .max(form.special_attractions_locations.len());
        for idx in 0..slots {
            let empty = form
                .special_attractions_locations
                .get(idx)
                .map_or(true, |locations| locations.is_empty());
            if empty {
                report.push(
                    FieldPath::field("specialAttractionsLocations").index(idx),
                    "Please assign a location for this attraction",
                );
            }
        }
    }

    report
}

/// Derived completeness: zero validation errors.
pub fn is_facilities_form_complete(form: &FacilitiesForm) -> bool {
    validate_facilities_form(form).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_gates_off_is_complete() {
        // Nothing is required while every availability flag is off.
        assert!(validate_facilities_form(&FacilitiesForm::default()).is_empty());
    }

    #[test]
    fn test_gate_off_erases_nested_errors() {
        // Junk nested content is irrelevant while the gate is false.
        let form = FacilitiesForm {
            restrooms_available: false,
            restroom_count: Some(0),
            restroom_locations: vec![],
            ..FacilitiesForm::default()
        };
        let report = validate_facilities_form(&form);
        assert!(!report.contains(&FieldPath::field("restroomCount")));
        assert!(!report.contains(&FieldPath::field("restroomLocations")));
    }

    #[test]
    fn test_restrooms_gate_on() {
        let mut form = FacilitiesForm {
            restrooms_available: true,
            ..FacilitiesForm::default()
        };
        let report = validate_facilities_form(&form);
        assert!(report.contains(&FieldPath::field("restroomCount")));
        assert!(report.contains(&FieldPath::field("restroomLocations")));

        form.restroom_count = Some(4);
        form.restroom_locations = vec!["North".into()];
        assert!(validate_facilities_form(&form).is_empty());
    }

    #[test]
    fn test_food_courts_require_all_three_fields() {
        let form = FacilitiesForm {
            food_courts_available: true,
            food_court_count: Some(2),
            food_court_capacity: Some(0),
            food_court_locations: vec!["South".into()],
            ..FacilitiesForm::default()
        };
        let report = validate_facilities_form(&form);
        assert!(report.contains(&FieldPath::field("foodCourtCapacity")));
        assert!(!report.contains(&FieldPath::field("foodCourtCount")));
        assert!(!report.contains(&FieldPath::field("foodCourtLocations")));
    }

    #[test]
    fn test_parallel_array_indexed_errors() {
        // Two attractions, second one left unplaced.
        let form = FacilitiesForm {
            special_attractions_available: true,
            special_attractions: vec!["Merch Booth".into(), "Photo Spot".into()],
            special_attractions_locations: vec![vec!["North".into()], vec![]],
            ..FacilitiesForm::default()
        };
        let report = validate_facilities_form(&form);
        assert!(!report.contains(&FieldPath::field("specialAttractionsLocations").index(0)));
        assert!(report.contains(&FieldPath::field("specialAttractionsLocations").index(1)));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_missing_location_tail_counts_as_empty() {
        let form = FacilitiesForm {
            special_attractions_available: true,
            special_attractions: vec!["Merch Booth".into(), "Side Stage".into()],
            special_attractions_locations: vec![vec!["North".into()]],
            ..FacilitiesForm::default()
        };
        let report = validate_facilities_form(&form);
        assert!(report.contains(&FieldPath::field("specialAttractionsLocations").index(1)));
    }

    #[test]
    fn test_no_attractions_selected() {
        let form = FacilitiesForm {
            special_attractions_available: true,
            ..FacilitiesForm::default()
        };
        let report = validate_facilities_form(&form);
        assert!(report.contains(&FieldPath::field("specialAttractions")));
    }
}
