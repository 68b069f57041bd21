//! Recommendation engine — three pure lookups over the static tables.
//!
//! Unknown interest or barrier strings contribute nothing; they are never an
//! error.

pub mod tables;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::assessment::items::Dimension;
use crate::assessment::scoring::{classify, Level};
use self::tables::{
    development_timeline, skill_recommendations, specific_barrier_guidance, Resource,
    CAREER_NEXT_STEPS, CAREER_SUGGESTIONS, GENERAL_RESOURCES, GENERIC_BARRIER_GUIDANCE,
};

/// Career suggestions are capped to keep the list actionable.
pub const MAX_CAREER_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerSuggestion {
    pub title: &'static str,
    /// The interest area the suggestion was registered under.
    pub interest: &'static str,
    pub next_steps: &'static [&'static str],
}

/// Career paths for the given interests, in caller-supplied interest order
/// and registration order within each interest, truncated to
/// `MAX_CAREER_SUGGESTIONS`.
pub fn career_paths(interests: &[String]) -> Vec<CareerSuggestion> {
    let mut suggestions = Vec::new();
    for interest in interests {
        let Some((registered, careers)) = CAREER_SUGGESTIONS
            .iter()
            .copied()
            .find(|(name, _)| *name == interest.as_str())
        else {
            continue;
        };
        for &career in careers {
            suggestions.push(CareerSuggestion {
                title: career,
                interest: registered,
                next_steps: CAREER_NEXT_STEPS,
            });
        }
    }
    suggestions.truncate(MAX_CAREER_SUGGESTIONS);
    suggestions
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillPlanEntry {
    pub dimension: Dimension,
    pub level: Level,
    pub score: f64,
    pub recommendations: &'static [&'static str],
    pub timeline: &'static str,
}

/// One development-plan entry per scored dimension. An empty input map means
/// the assessment is incomplete; the result is empty, not an error.
pub fn skill_plan(scores: &BTreeMap<Dimension, f64>) -> Vec<SkillPlanEntry> {
    scores
        .iter()
        .map(|(dimension, score)| {
            let level = classify(*score);
            SkillPlanEntry {
                dimension: *dimension,
                level,
                score: *score,
                recommendations: skill_recommendations(*dimension, level),
                timeline: development_timeline(level),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct BarrierSupport {
    pub barrier: String,
    pub guidance: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceGuide {
    pub resources: &'static [Resource],
    pub barrier_support: Vec<BarrierSupport>,
}

/// The full general-resource list plus per-barrier support entries. Barriers
/// only drive the supplementary guidance; the resource list itself is fixed.
pub fn resources(barriers: &[String]) -> ResourceGuide {
    let barrier_support = barriers
        .iter()
        .map(|barrier| {
            let mut guidance: Vec<&'static str> = GENERIC_BARRIER_GUIDANCE.to_vec();
            guidance.extend_from_slice(specific_barrier_guidance(barrier));
            BarrierSupport {
                barrier: barrier.clone(),
                guidance,
            }
        })
        .collect();

    ResourceGuide {
        resources: GENERAL_RESOURCES,
        barrier_support,
    }
}
