//! CAAS item bank — the four adaptability dimensions and their fixed items.
//!
//! Item text is the stable identity a rating is keyed by. The bank is defined
//! at startup and immutable for the lifetime of the process.

use serde::{Deserialize, Serialize};

/// One of the four CAAS trait categories. `ALL` is the display and paging
/// order — an explicit contract, not incidental container order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    Concern,
    Control,
    Curiosity,
    Confidence,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Concern,
        Dimension::Control,
        Dimension::Curiosity,
        Dimension::Confidence,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Concern => "Concern",
            Dimension::Control => "Control",
            Dimension::Curiosity => "Curiosity",
            Dimension::Confidence => "Confidence",
        }
    }

    /// The six self-rated items belonging to this dimension.
    pub fn items(self) -> &'static [&'static str] {
        match self {
            Dimension::Concern => &[
                "Thinking about what my future will be like",
                "Realizing that today's choices shape my future",
                "Preparing for the future",
                "Becoming aware of the educational and career choices I must make",
                "Planning how to achieve my goals",
                "Concerned about my career",
            ],
            Dimension::Control => &[
                "Keeping upbeat",
                "Making decisions by myself",
                "Taking responsibility for my actions",
                "Sticking up for my beliefs",
                "Counting on myself",
                "Doing what's right for me",
            ],
            Dimension::Curiosity => &[
                "Exploring my surroundings",
                "Looking for opportunities to grow as a person",
                "Investigating options before making a choice",
                "Observing different ways of doing things",
                "Probing deeply into questions I have",
                "Becoming curious about new opportunities",
            ],
            Dimension::Confidence => &[
                "Performing tasks efficiently",
                "Taking care to do things well",
                "Learning new skills",
                "Working up to my ability",
                "Overcoming obstacles",
                "Solving problems",
            ],
        }
    }

    /// Position of this dimension in `ALL`.
    pub fn index(self) -> usize {
        Dimension::ALL
            .iter()
            .position(|d| *d == self)
            .expect("dimension present in ALL")
    }
}

/// Total number of items across all dimensions.
pub fn total_items() -> usize {
    Dimension::ALL.iter().map(|d| d.items().len()).sum()
}

/// Reverse lookup: which dimension owns this item text, if any.
pub fn find_item(text: &str) -> Option<Dimension> {
    Dimension::ALL
        .iter()
        .copied()
        .find(|d| d.items().contains(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_dimensions_with_six_items_each() {
        assert_eq!(Dimension::ALL.len(), 4);
        for dimension in Dimension::ALL {
            assert_eq!(
                dimension.items().len(),
                6,
                "{} should have 6 items",
                dimension.name()
            );
        }
        assert_eq!(total_items(), 24);
    }

    #[test]
    fn test_display_order_is_concern_control_curiosity_confidence() {
        let names: Vec<&str> = Dimension::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["Concern", "Control", "Curiosity", "Confidence"]);
    }

    #[test]
    fn test_find_item_resolves_owning_dimension() {
        assert_eq!(
            find_item("Preparing for the future"),
            Some(Dimension::Concern)
        );
        assert_eq!(find_item("Solving problems"), Some(Dimension::Confidence));
        assert_eq!(find_item("Not an assessment item"), None);
    }

    #[test]
    fn test_item_texts_are_unique_across_dimensions() {
        let mut seen = std::collections::HashSet::new();
        for dimension in Dimension::ALL {
            for item in dimension.items() {
                assert!(seen.insert(*item), "duplicate item text: {item}");
            }
        }
    }
}
