//! Static recommendation tables, supplied at startup and read-only for the
//! lifetime of the process.
//!
//! Dimension and level form a closed key space, so their lookup is a match
//! over enums. Interest and barrier keys stay open strings — the set is
//! genuinely extensible — and unknown keys contribute nothing.

use serde::Serialize;

use crate::assessment::items::Dimension;
use crate::assessment::scoring::Level;

/// Entry-level career suggestions registered per interest area, in
/// registration order.
pub const CAREER_SUGGESTIONS: &[(&str, &[&str])] = &[
    (
        "Technology & Computers",
        &[
            "IT Support Specialist",
            "Web Developer",
            "Data Entry Specialist",
            "Computer Network Technician",
        ],
    ),
    (
        "Healthcare & Medical",
        &[
            "Medical Assistant",
            "Patient Care Technician",
            "Healthcare Support Worker",
            "Pharmacy Technician",
        ],
    ),
    (
        "Construction & Trades",
        &[
            "Apprentice Electrician",
            "Construction Worker",
            "HVAC Technician",
            "Carpenter's Assistant",
        ],
    ),
    (
        "Business & Administration",
        &[
            "Administrative Assistant",
            "Customer Service Representative",
            "Sales Associate",
            "Office Support Staff",
        ],
    ),
];

/// Fixed exploration checklist shown with each suggested career.
pub const CAREER_NEXT_STEPS: &[&str] = &[
    "Research typical job responsibilities",
    "Look for entry-level positions or apprenticeships",
    "Identify required certifications or training",
    "Connect with professionals in this field",
];

/// Skill-development activities for a dimension at a given level.
pub fn skill_recommendations(dimension: Dimension, level: Level) -> &'static [&'static str] {
    match (dimension, level) {
        (Dimension::Concern, Level::Low) => &[
            "Set short-term career goals (3-6 months)",
            "Create a weekly planning routine",
            "Research career paths in your interest areas",
            "Connect with a career counselor",
        ],
        (Dimension::Concern, Level::Medium) => &[
            "Develop a 1-year career plan",
            "Start networking in your chosen field",
            "Identify potential mentors",
            "Join professional organizations",
        ],
        (Dimension::Concern, Level::High) => &[
            "Create 3-5 year career plans",
            "Mentor others in career planning",
            "Explore advancement opportunities",
            "Lead career development workshops",
        ],
        (Dimension::Control, Level::Low) => &[
            "Practice daily decision-making exercises",
            "Learn basic project management skills",
            "Set small, achievable weekly goals",
            "Take a personal development course",
        ],
        (Dimension::Control, Level::Medium) => &[
            "Take on leadership roles in small projects",
            "Improve time management skills",
            "Build problem-solving abilities",
            "Learn conflict resolution techniques",
        ],
        (Dimension::Control, Level::High) => &[
            "Mentor others in decision-making",
            "Lead team projects",
            "Develop crisis management skills",
            "Train others in leadership skills",
        ],
        (Dimension::Curiosity, Level::Low) => &[
            "Try one new activity each week",
            "Read about different career paths",
            "Shadow someone in a job you're interested in",
            "Take personality and career assessments",
        ],
        (Dimension::Curiosity, Level::Medium) => &[
            "Attend career fairs and workshops",
            "Interview professionals in different fields",
            "Take courses in new subject areas",
            "Join professional networking groups",
        ],
        (Dimension::Curiosity, Level::High) => &[
            "Organize career exploration events",
            "Start a career research project",
            "Cross-train in different roles",
            "Write career guidance content",
        ],
        (Dimension::Confidence, Level::Low) => &[
            "Complete online skill-building courses",
            "Practice public speaking",
            "Document your daily achievements",
            "Join a supportive study group",
        ],
        (Dimension::Confidence, Level::Medium) => &[
            "Take on challenging assignments",
            "Present at team meetings",
            "Mentor newcomers in your field",
            "Lead small group projects",
        ],
        (Dimension::Confidence, Level::High) => &[
            "Teach others in your area of expertise",
            "Take on leadership positions",
            "Start your own initiatives",
            "Write expert guides or tutorials",
        ],
    }
}

/// Suggested pacing for a development plan at a given level.
pub fn development_timeline(level: Level) -> &'static str {
    match level {
        Level::Low => {
            "Focus on these activities over the next 1-3 months to build a strong foundation."
        }
        Level::Medium => {
            "Work on these activities over the next 3-6 months to enhance your capabilities."
        }
        Level::High => {
            "Incorporate these activities into your ongoing development to maintain and share your expertise."
        }
    }
}

/// A general employment-support resource.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub name: &'static str,
    pub description: &'static str,
    pub contact: Option<&'static str>,
    pub links: &'static [&'static str],
}

/// The full general-resource list, returned regardless of selected barriers.
pub const GENERAL_RESOURCES: &[Resource] = &[
    Resource {
        name: "Local Workforce Development Center",
        description: "Offers job training, resume writing, and career counseling services. Programs are often free or low-cost, and they can help connect you with local employers.",
        contact: Some("Visit CareerOneStop.org to find your nearest American Job Center"),
        links: &[],
    },
    Resource {
        name: "Community College Career Services",
        description: "Provides educational guidance, career development support, and often offers short-term certificate programs.",
        contact: Some("Search for your nearest community college online"),
        links: &["Use the College Navigator tool at NCES.ed.gov"],
    },
    Resource {
        name: "Online Learning Resources",
        description: "Free or low-cost online courses and certifications to build job-ready skills.",
        contact: None,
        links: &[
            "Coursera.org - Offers financial aid",
            "edX.org - Free courses available",
            "FreeCodeCamp.org - Completely free",
            "DigitalLiteracy.gov - Basic computer skills",
        ],
    },
    Resource {
        name: "Employment Support Organizations",
        description: "Organizations that provide job search assistance, interview preparation, and sometimes professional clothing for interviews.",
        contact: None,
        links: &[
            "Goodwill Career Centers",
            "Salvation Army Employment Services",
            "United Way Employment Programs",
        ],
    },
];

/// Guidance lines offered to every selected barrier.
pub const GENERIC_BARRIER_GUIDANCE: &[&str] = &[
    "Contact local support services",
    "Explore available assistance programs",
    "Connect with community organizations",
];

/// Extra guidance for barriers with specific support, keyed by exact barrier
/// string. Barriers without an entry get the generic lines only.
pub fn specific_barrier_guidance(barrier: &str) -> &'static [&'static str] {
    match barrier {
        "Transportation issues" => &[
            "Research public transportation options",
            "Look into carpool programs",
        ],
        "Childcare needs" => &[
            "Explore subsidized childcare programs",
            "Research flexible work arrangements",
        ],
        "Housing instability" => &[
            "Contact local housing assistance programs",
            "Connect with housing support services",
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_interest_registers_four_careers() {
        assert_eq!(CAREER_SUGGESTIONS.len(), 4);
        for (interest, careers) in CAREER_SUGGESTIONS {
            assert_eq!(careers.len(), 4, "{interest} should register 4 careers");
        }
    }

    #[test]
    fn test_skill_table_is_total_over_dimension_and_level() {
        for dimension in Dimension::ALL {
            for level in [Level::Low, Level::Medium, Level::High] {
                assert_eq!(
                    skill_recommendations(dimension, level).len(),
                    4,
                    "{} at {:?} should have 4 activities",
                    dimension.name(),
                    level
                );
            }
        }
    }

    #[test]
    fn test_general_resources_shape() {
        assert_eq!(GENERAL_RESOURCES.len(), 4);
        assert!(GENERAL_RESOURCES[0].contact.is_some());
        assert_eq!(GENERAL_RESOURCES[2].links.len(), 4);
    }

    #[test]
    fn test_specific_guidance_only_for_known_barriers() {
        assert!(!specific_barrier_guidance("Transportation issues").is_empty());
        assert!(!specific_barrier_guidance("Childcare needs").is_empty());
        assert!(!specific_barrier_guidance("Housing instability").is_empty());
        assert!(specific_barrier_guidance("Legal concerns").is_empty());
        assert!(specific_barrier_guidance("Unknown barrier").is_empty());
    }
}
