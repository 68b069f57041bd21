//! Dimension scoring and classification.
//!
//! Ratings are the source of truth; scores are recomputed on demand. A
//! dimension with no answered items is explicitly unscored (`None`) rather
//! than scored 0 — 0 is impossible on a 1-5 scale and would double as a
//! sentinel. The score map simply omits unscored dimensions, so progress
//! gating and display stay consistent.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::assessment::items::Dimension;

/// Coarse classification of a dimension's mean score.
/// Band lower bounds are inclusive: `>= 4` is high, `>= 3` is medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

/// Classifies a mean score into a level. Total over all real scores.
pub fn classify(score: f64) -> Level {
    if score >= 4.0 {
        Level::High
    } else if score >= 3.0 {
        Level::Medium
    } else {
        Level::Low
    }
}

/// Mean of the ratings given to this dimension's items, rounded to 2 decimal
/// places. `None` when no item of the dimension has been answered.
pub fn score(dimension: Dimension, ratings: &HashMap<String, u8>) -> Option<f64> {
    let mut total: u32 = 0;
    let mut count: u32 = 0;
    for item in dimension.items() {
        if let Some(rating) = ratings.get(*item) {
            total += u32::from(*rating);
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    let mean = f64::from(total) / f64::from(count);
    Some((mean * 100.0).round() / 100.0)
}

/// Scores for every dimension with at least one answered item, in `ALL`
/// order (the `Ord` on `Dimension` follows declaration order).
pub fn dimension_scores(ratings: &HashMap<String, u8>) -> BTreeMap<Dimension, f64> {
    Dimension::ALL
        .iter()
        .filter_map(|d| score(*d, ratings).map(|s| (*d, s)))
        .collect()
}

/// Fixed interpretation line shown alongside a dimension's score.
pub fn interpretation(dimension: Dimension, score: f64) -> &'static str {
    let level = classify(score);
    match (dimension, level) {
        (Dimension::Concern, Level::High) => {
            "You show strong future orientation and career planning abilities."
        }
        (Dimension::Concern, Level::Medium) => {
            "You have a moderate level of career concern. Consider developing more specific future plans."
        }
        (Dimension::Concern, Level::Low) => {
            "You might benefit from activities that help you think more about your career future."
        }
        (Dimension::Control, Level::High) => {
            "You demonstrate excellent decision-making and responsibility-taking abilities."
        }
        (Dimension::Control, Level::Medium) => {
            "You have a good sense of control over your career decisions. Consider building more confidence in your choices."
        }
        (Dimension::Control, Level::Low) => {
            "You might benefit from activities that help you take more control of your career decisions."
        }
        (Dimension::Curiosity, Level::High) => {
            "You show strong exploratory tendencies and openness to new experiences."
        }
        (Dimension::Curiosity, Level::Medium) => {
            "You have a good level of curiosity. Consider exploring even more career options."
        }
        (Dimension::Curiosity, Level::Low) => {
            "You might benefit from activities that encourage more career exploration."
        }
        (Dimension::Confidence, Level::High) => {
            "You demonstrate high self-efficacy and problem-solving abilities."
        }
        (Dimension::Confidence, Level::Medium) => {
            "You have good confidence levels. Consider taking on more challenging tasks to build it further."
        }
        (Dimension::Confidence, Level::Low) => {
            "You might benefit from activities that help build your career confidence."
        }
    }
}
