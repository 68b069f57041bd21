//! Narrative analysis — formats scores and background into a prompt, sends it
//! through the `AnalysisBackend` boundary, and substitutes a fixed fallback
//! report on any failure.
//!
//! The failure path never reaches the caller: it is logged and masked, and
//! the fallback carries the same field set as the success path so callers
//! need no failure-branch handling.

pub mod prompts;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use crate::assessment::items::Dimension;
use crate::assessment::scoring::classify;
use crate::llm_client::{LlmClient, LlmError};
use crate::profile::BackgroundProfile;
use self::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};

/// The text-generation boundary. One implementation calls the LLM; tests
/// swap in stubs. Carried in `AppState` as `Arc<dyn AnalysisBackend>`.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError>;
}

/// Production backend: a single Claude call through the shared client.
pub struct LlmAnalysisBackend {
    llm: LlmClient,
}

impl LlmAnalysisBackend {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl AnalysisBackend for LlmAnalysisBackend {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let response = self.llm.call(prompt, system).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeSource {
    Model,
    Fallback,
}

/// Best-effort decomposition of the narrative into the requested sections.
/// Presentation concern only — `text` is always the display blob of record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NarrativeSections {
    pub summary: String,
    pub career_recommendations: String,
    pub barrier_strategies: String,
    pub next_steps: String,
    pub long_term: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NarrativeReport {
    pub text: String,
    pub sections: NarrativeSections,
    pub source: NarrativeSource,
}

/// Renders each scored dimension as `name: score/5.0 (level)`, one per line.
pub fn format_scores(scores: &BTreeMap<Dimension, f64>) -> String {
    scores
        .iter()
        .map(|(dimension, score)| {
            format!(
                "{}: {:.2}/5.0 ({})",
                dimension.name(),
                score,
                classify(*score).label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fills the prompt template with formatted scores and background fields.
pub fn build_prompt(scores: &BTreeMap<Dimension, f64>, background: &BackgroundProfile) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{caas_scores}", &format_scores(scores))
        .replace("{county}", &background.county)
        .replace("{postcode_area}", &background.postcode_area)
        .replace("{education}", &background.education)
        .replace("{current_situation}", &background.current_situation)
        .replace("{interests}", &background.interests.join(", "))
        .replace("{barriers}", &background.barriers.join(", "))
        .replace("{support_systems}", &background.support_systems)
        .replace("{goals}", &background.goals)
}

/// Runs the analysis: one backend call, then either the model narrative with
/// best-effort sections or the fixed fallback. Never returns an error.
pub async fn generate_report(
    backend: &dyn AnalysisBackend,
    scores: &BTreeMap<Dimension, f64>,
    background: &BackgroundProfile,
) -> NarrativeReport {
    let prompt = build_prompt(scores, background);
    match backend.complete(&prompt, ANALYSIS_SYSTEM).await {
        Ok(text) => {
            let sections = split_sections(&text);
            NarrativeReport {
                text,
                sections,
                source: NarrativeSource::Model,
            }
        }
        Err(e) => {
            warn!("Analysis generation failed, serving fallback: {e}");
            fallback_report()
        }
    }
}

const FALLBACK_TEXT: &str = "### Analysis Currently Unavailable\n\n\
We apologize, but we're unable to generate a personalized analysis at the moment.\n\
Please refer to the Career Paths, Skill Development, and Resources tabs for guidance.\n";

/// The fixed report served when the text-generation call fails.
pub fn fallback_report() -> NarrativeReport {
    NarrativeReport {
        text: FALLBACK_TEXT.to_string(),
        sections: NarrativeSections {
            summary: "A personalized analysis could not be generated right now. Your dimension scores and levels above still apply.".to_string(),
            career_recommendations: "See the Career Paths tab for suggestions matched to your selected interests.".to_string(),
            barrier_strategies: "See the Resources tab for support options matched to the barriers you selected.".to_string(),
            next_steps: "Review your skill development plan and pick one activity to start this week.".to_string(),
            long_term: "Retake the assessment after a few months of working on your plan to track progress.".to_string(),
        },
        source: NarrativeSource::Fallback,
    }
}

/// Splits a markdown-headed narrative into the five requested sections by
/// header keyword. Headers the model did not emit leave their field empty.
fn split_sections(text: &str) -> NarrativeSections {
    const SUMMARY: usize = 0;
    const CAREERS: usize = 1;
    const BARRIERS: usize = 2;
    const NEXT_STEPS: usize = 3;
    const LONG_TERM: usize = 4;

    let mut buffers: [Vec<&str>; 5] = Default::default();
    let mut current: Option<usize> = None;

    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with('#') {
            let heading = trimmed.trim_start_matches('#').trim().to_lowercase();
            current = if heading.contains("strength") || heading.contains("summary") {
                Some(SUMMARY)
            } else if heading.contains("career") {
                Some(CAREERS)
            } else if heading.contains("barrier") {
                Some(BARRIERS)
            } else if heading.contains("next step") || heading.contains("immediate") {
                Some(NEXT_STEPS)
            } else if heading.contains("long-term") || heading.contains("long term") {
                Some(LONG_TERM)
            } else {
                None
            };
            continue;
        }
        if let Some(slot) = current {
            buffers[slot].push(line);
        }
    }

    let join = |lines: &[&str]| lines.join("\n").trim().to_string();
    NarrativeSections {
        summary: join(&buffers[SUMMARY]),
        career_recommendations: join(&buffers[CAREERS]),
        barrier_strategies: join(&buffers[BARRIERS]),
        next_steps: join(&buffers[NEXT_STEPS]),
        long_term: join(&buffers[LONG_TERM]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackend(&'static str);

    #[async_trait]
    impl AnalysisBackend for FixedBackend {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl AnalysisBackend for FailingBackend {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 529,
                message: "overloaded".to_string(),
            })
        }
    }

    fn scores() -> BTreeMap<Dimension, f64> {
        let mut scores = BTreeMap::new();
        scores.insert(Dimension::Concern, 4.17);
        scores.insert(Dimension::Control, 2.5);
        scores
    }

    fn background() -> BackgroundProfile {
        BackgroundProfile {
            county: "Kent".to_string(),
            postcode_area: "ME1".to_string(),
            education: "Some college/vocational training".to_string(),
            current_situation: "Working part-time".to_string(),
            interests: vec![
                "Technology & Computers".to_string(),
                "Construction & Trades".to_string(),
            ],
            barriers: vec!["Transportation issues".to_string()],
            support_systems: "Family".to_string(),
            goals: "Steady full-time work".to_string(),
            additional_info: String::new(),
        }
    }

    #[test]
    fn test_format_scores_renders_level_per_dimension() {
        let formatted = format_scores(&scores());
        assert_eq!(
            formatted,
            "Concern: 4.17/5.0 (high)\nControl: 2.50/5.0 (low)"
        );
    }

    #[test]
    fn test_build_prompt_embeds_scores_and_background() {
        let prompt = build_prompt(&scores(), &background());
        assert!(prompt.contains("Concern: 4.17/5.0 (high)"));
        assert!(prompt.contains("- Location: Kent, ME1"));
        assert!(prompt.contains("Technology & Computers, Construction & Trades"));
        assert!(prompt.contains("- Goals: Steady full-time work"));
        assert!(!prompt.contains("{caas_scores}"));
    }

    #[tokio::test]
    async fn test_generate_report_wraps_model_text() {
        let backend = FixedBackend("### Strengths and Development Areas\nStrong concern.\n");
        let report = generate_report(&backend, &scores(), &background()).await;
        assert_eq!(report.source, NarrativeSource::Model);
        assert!(report.text.contains("Strong concern."));
        assert_eq!(report.sections.summary, "Strong concern.");
    }

    #[tokio::test]
    async fn test_generate_report_masks_failure_with_fallback() {
        let report = generate_report(&FailingBackend, &scores(), &background()).await;
        assert_eq!(report.source, NarrativeSource::Fallback);
        assert!(report.text.contains("Analysis Currently Unavailable"));
        // Same field set as the success path, all populated.
        assert!(!report.sections.summary.is_empty());
        assert!(!report.sections.career_recommendations.is_empty());
        assert!(!report.sections.barrier_strategies.is_empty());
        assert!(!report.sections.next_steps.is_empty());
        assert!(!report.sections.long_term.is_empty());
    }

    #[test]
    fn test_split_sections_by_header_keywords() {
        let text = "### Strengths and Development Areas\nGood planning.\n\n\
### Career Recommendations\nIT support roles.\n\n\
### Overcoming Barriers\nBus pass scheme.\n\n\
### Immediate Next Steps\nUpdate CV.\n\n\
### Long-Term Development\nApprenticeship.";
        let sections = split_sections(text);
        assert_eq!(sections.summary, "Good planning.");
        assert_eq!(sections.career_recommendations, "IT support roles.");
        assert_eq!(sections.barrier_strategies, "Bus pass scheme.");
        assert_eq!(sections.next_steps, "Update CV.");
        assert_eq!(sections.long_term, "Apprenticeship.");
    }

    #[test]
    fn test_split_sections_without_headers_leaves_fields_empty() {
        let sections = split_sections("Plain prose with no headers at all.");
        assert!(sections.summary.is_empty());
        assert!(sections.long_term.is_empty());
    }

    #[test]
    fn test_unrecognized_headers_are_skipped() {
        let text = "### Introduction\nHello.\n### Career Recommendations\nTrades.";
        let sections = split_sections(text);
        assert!(sections.summary.is_empty());
        assert_eq!(sections.career_recommendations, "Trades.");
    }
}
