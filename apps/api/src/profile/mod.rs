//! Background profile — user-supplied intake data distinct from the CAAS
//! ratings, plus the categorical option lists the presentation layer offers.
//!
//! Fields are filled incrementally via partial updates. A fixed subset is
//! required before the flow may advance to recommendations.

use serde::{Deserialize, Serialize};

pub const EDUCATION_LEVELS: &[&str] = &[
    "Less than high school",
    "Some high school",
    "High school diploma/GED",
    "Some college/vocational training",
    "College degree",
    "Other",
];

pub const INTEREST_AREAS: &[&str] = &[
    "Technology & Computers",
    "Healthcare & Medical",
    "Construction & Trades",
    "Business & Administration",
    "Creative Arts & Design",
    "Education & Teaching",
    "Food Service & Hospitality",
    "Manufacturing & Production",
    "Transportation & Logistics",
    "Other",
];

pub const POTENTIAL_BARRIERS: &[&str] = &[
    "Transportation issues",
    "Childcare needs",
    "Housing instability",
    "Legal concerns",
    "Health/medical issues",
    "Lack of work experience",
    "Education gaps",
    "Technology access",
    "Other",
];

pub const UK_COUNTIES: &[&str] = &[
    "Greater London",
    "Greater Manchester",
    "West Midlands",
    "West Yorkshire",
    "Kent",
    "Essex",
    "Merseyside",
    "South Yorkshire",
    "Hampshire",
    "Surrey",
];

/// Only the leading outward code of a UK postcode is collected.
const POSTCODE_AREA_MAX_LEN: usize = 4;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackgroundProfile {
    pub county: String,
    pub postcode_area: String,
    pub education: String,
    pub current_situation: String,
    pub interests: Vec<String>,
    pub barriers: Vec<String>,
    pub support_systems: String,
    pub goals: String,
    pub additional_info: String,
}

/// Partial update to a profile. Absent fields are left untouched, so the
/// form can be saved tab by tab.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackgroundUpdate {
    pub county: Option<String>,
    pub postcode_area: Option<String>,
    pub education: Option<String>,
    pub current_situation: Option<String>,
    pub interests: Option<Vec<String>>,
    pub barriers: Option<Vec<String>>,
    pub support_systems: Option<String>,
    pub goals: Option<String>,
    pub additional_info: Option<String>,
}

impl BackgroundProfile {
    /// Applies a partial update. Postcode areas are normalized to uppercase
    /// and rejected beyond the outward-code length.
    pub fn apply(&mut self, update: BackgroundUpdate) -> Result<(), String> {
        if let Some(postcode_area) = update.postcode_area {
            let normalized = postcode_area.trim().to_uppercase();
            if normalized.chars().count() > POSTCODE_AREA_MAX_LEN {
                return Err(format!(
                    "Postcode area must be at most {POSTCODE_AREA_MAX_LEN} characters (e.g. SW1, M1)"
                ));
            }
            self.postcode_area = normalized;
        }
        if let Some(county) = update.county {
            self.county = county;
        }
        if let Some(education) = update.education {
            self.education = education;
        }
        if let Some(current_situation) = update.current_situation {
            self.current_situation = current_situation;
        }
        if let Some(interests) = update.interests {
            self.interests = interests;
        }
        if let Some(barriers) = update.barriers {
            self.barriers = barriers;
        }
        if let Some(support_systems) = update.support_systems {
            self.support_systems = support_systems;
        }
        if let Some(goals) = update.goals {
            self.goals = goals;
        }
        if let Some(additional_info) = update.additional_info {
            self.additional_info = additional_info;
        }
        Ok(())
    }

    /// Required fields that are still empty, in form order. Barriers and
    /// additional info are optional.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.county.trim().is_empty() {
            missing.push("county");
        }
        if self.postcode_area.trim().is_empty() {
            missing.push("postcode_area");
        }
        if self.education.trim().is_empty() {
            missing.push("education");
        }
        if self.current_situation.trim().is_empty() {
            missing.push("current_situation");
        }
        if self.interests.is_empty() {
            missing.push("interests");
        }
        if self.goals.trim().is_empty() {
            missing.push("goals");
        }
        if self.support_systems.trim().is_empty() {
            missing.push("support_systems");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_profile() -> BackgroundProfile {
        BackgroundProfile {
            county: "Kent".to_string(),
            postcode_area: "ME1".to_string(),
            education: "High school diploma/GED".to_string(),
            current_situation: "Looking for work opportunities".to_string(),
            interests: vec!["Technology & Computers".to_string()],
            barriers: vec![],
            support_systems: "Family and a local mentor".to_string(),
            goals: "Find stable work in IT support".to_string(),
            additional_info: String::new(),
        }
    }

    #[test]
    fn test_empty_profile_reports_all_required_fields() {
        let profile = BackgroundProfile::default();
        assert!(!profile.is_complete());
        assert_eq!(
            profile.missing_fields(),
            vec![
                "county",
                "postcode_area",
                "education",
                "current_situation",
                "interests",
                "goals",
                "support_systems"
            ]
        );
    }

    #[test]
    fn test_complete_profile_passes_gate_without_optional_fields() {
        let profile = complete_profile();
        assert!(profile.barriers.is_empty());
        assert!(profile.additional_info.is_empty());
        assert!(profile.is_complete());
    }

    #[test]
    fn test_missing_goals_alone_blocks_completion() {
        let mut profile = complete_profile();
        profile.goals = String::new();
        assert!(!profile.is_complete());
        assert_eq!(profile.missing_fields(), vec!["goals"]);
    }

    #[test]
    fn test_whitespace_only_field_counts_as_empty() {
        let mut profile = complete_profile();
        profile.support_systems = "   ".to_string();
        assert_eq!(profile.missing_fields(), vec!["support_systems"]);
    }

    #[test]
    fn test_apply_normalizes_postcode_area() {
        let mut profile = BackgroundProfile::default();
        profile
            .apply(BackgroundUpdate {
                postcode_area: Some(" sw1 ".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(profile.postcode_area, "SW1");
    }

    #[test]
    fn test_apply_rejects_overlong_postcode_area() {
        let mut profile = BackgroundProfile::default();
        let result = profile.apply(BackgroundUpdate {
            postcode_area: Some("SW1A2".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
        assert!(profile.postcode_area.is_empty());
    }

    #[test]
    fn test_apply_leaves_absent_fields_untouched() {
        let mut profile = complete_profile();
        profile
            .apply(BackgroundUpdate {
                goals: Some("Become an electrician".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(profile.county, "Kent");
        assert_eq!(profile.goals, "Become an electrician");
    }

    #[test]
    fn test_reference_lists_cover_form_options() {
        assert_eq!(EDUCATION_LEVELS.len(), 6);
        assert_eq!(INTEREST_AREAS.len(), 10);
        assert_eq!(POTENTIAL_BARRIERS.len(), 9);
        assert!(UK_COUNTIES.contains(&"Greater London"));
    }
}
