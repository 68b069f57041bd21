//! Session — one user's pass through the guided flow.
//!
//! Pages run welcome → assessment → background → recommendations. The
//! assessment is paginated per dimension with a results sub-state reachable
//! only once every item is rated; recommendations are gated on the required
//! background fields. All transitions are explicit user actions, and
//! re-entering a page preserves previously entered values.

pub mod handlers;
pub mod store;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::items::{find_item, total_items, Dimension};
use crate::errors::AppError;
use crate::profile::BackgroundProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Welcome,
    Assessment,
    Background,
    Recommendations,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub page: Page,
    pub current_dimension: Dimension,
    pub show_results: bool,
    /// Ratings keyed by item text; always a full integer in [1,5] or absent.
    pub ratings: HashMap<String, u8>,
    pub background: BackgroundProfile,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            page: Page::Welcome,
            current_dimension: Dimension::ALL[0],
            show_results: false,
            ratings: HashMap::new(),
            background: BackgroundProfile::default(),
        }
    }

    /// Records (or overwrites) a rating for one assessment item.
    pub fn record_rating(&mut self, item: &str, rating: u8) -> Result<(), AppError> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::Validation(format!(
                "Rating must be between 1 and 5, got {rating}"
            )));
        }
        if find_item(item).is_none() {
            return Err(AppError::Validation(format!(
                "Unknown assessment item: {item}"
            )));
        }
        self.ratings.insert(item.to_string(), rating);
        Ok(())
    }

    pub fn answered(&self) -> usize {
        self.ratings.len()
    }

    pub fn assessment_complete(&self) -> bool {
        self.answered() == total_items()
    }

    pub fn can_view_recommendations(&self) -> bool {
        self.assessment_complete() && self.background.is_complete()
    }

    pub fn next_section(&mut self) -> Result<(), AppError> {
        let index = self.current_dimension.index();
        if index + 1 >= Dimension::ALL.len() {
            return Err(AppError::Validation(
                "Already at the last assessment section".to_string(),
            ));
        }
        self.current_dimension = Dimension::ALL[index + 1];
        Ok(())
    }

    pub fn previous_section(&mut self) -> Result<(), AppError> {
        let index = self.current_dimension.index();
        if index == 0 {
            return Err(AppError::Validation(
                "Already at the first assessment section".to_string(),
            ));
        }
        self.current_dimension = Dimension::ALL[index - 1];
        Ok(())
    }

    /// Enters the results sub-state. Blocked until every item is rated.
    pub fn view_results(&mut self) -> Result<(), AppError> {
        if !self.assessment_complete() {
            return Err(AppError::Incomplete(format!(
                "Please answer all questions before viewing results ({}/{} answered)",
                self.answered(),
                total_items()
            )));
        }
        self.show_results = true;
        Ok(())
    }

    /// Blocking-warning check for everything recommendations-shaped.
    pub fn ensure_recommendations_ready(&self) -> Result<(), AppError> {
        if !self.assessment_complete() {
            return Err(AppError::Incomplete(
                "Please complete the assessment before viewing recommendations".to_string(),
            ));
        }
        if !self.background.is_complete() {
            return Err(AppError::Incomplete(format!(
                "Please fill in all required background fields to continue: {}",
                self.background.missing_fields().join(", ")
            )));
        }
        Ok(())
    }

    /// Explicit page navigation. Recommendations are gated; everything else
    /// is freely reachable and preserves prior state.
    pub fn goto(&mut self, page: Page) -> Result<(), AppError> {
        if page == Page::Recommendations {
            self.ensure_recommendations_ready()?;
        }
        self.page = page;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::BackgroundUpdate;

    fn answer_everything(session: &mut Session, rating: u8) {
        for dimension in Dimension::ALL {
            for item in dimension.items() {
                session.record_rating(item, rating).unwrap();
            }
        }
    }

    fn fill_background(session: &mut Session) {
        session
            .background
            .apply(BackgroundUpdate {
                county: Some("Essex".to_string()),
                postcode_area: Some("CM1".to_string()),
                education: Some("Some high school".to_string()),
                current_situation: Some("Looking for work".to_string()),
                interests: Some(vec!["Technology & Computers".to_string()]),
                support_systems: Some("Probation officer and family".to_string()),
                goals: Some("Get a stable job".to_string()),
                ..Default::default()
            })
            .unwrap();
    }

    #[test]
    fn test_new_session_starts_at_welcome_with_first_dimension() {
        let session = Session::new();
        assert_eq!(session.page, Page::Welcome);
        assert_eq!(session.current_dimension, Dimension::Concern);
        assert!(!session.show_results);
        assert_eq!(session.answered(), 0);
    }

    #[test]
    fn test_record_rating_validates_range_and_item() {
        let mut session = Session::new();
        assert!(session.record_rating("Keeping upbeat", 0).is_err());
        assert!(session.record_rating("Keeping upbeat", 6).is_err());
        assert!(session.record_rating("Not a real item", 3).is_err());
        assert!(session.record_rating("Keeping upbeat", 4).is_ok());
        assert_eq!(session.answered(), 1);
    }

    #[test]
    fn test_rating_overwrite_does_not_inflate_progress() {
        let mut session = Session::new();
        session.record_rating("Solving problems", 2).unwrap();
        session.record_rating("Solving problems", 5).unwrap();
        assert_eq!(session.answered(), 1);
        assert_eq!(session.ratings["Solving problems"], 5);
    }

    #[test]
    fn test_section_navigation_walks_dimension_order() {
        let mut session = Session::new();
        assert!(session.previous_section().is_err());
        session.next_section().unwrap();
        assert_eq!(session.current_dimension, Dimension::Control);
        session.next_section().unwrap();
        session.next_section().unwrap();
        assert_eq!(session.current_dimension, Dimension::Confidence);
        assert!(session.next_section().is_err());
        session.previous_section().unwrap();
        assert_eq!(session.current_dimension, Dimension::Curiosity);
    }

    #[test]
    fn test_view_results_blocked_until_all_answered() {
        let mut session = Session::new();
        session.record_rating("Preparing for the future", 4).unwrap();
        let err = session.view_results().unwrap_err();
        assert!(matches!(err, AppError::Incomplete(_)));
        assert!(!session.show_results);

        answer_everything(&mut session, 3);
        session.view_results().unwrap();
        assert!(session.show_results);
    }

    #[test]
    fn test_recommendations_gated_on_assessment_and_background() {
        let mut session = Session::new();
        assert!(session.goto(Page::Recommendations).is_err());

        answer_everything(&mut session, 4);
        assert!(session.goto(Page::Recommendations).is_err());

        fill_background(&mut session);
        session.goto(Page::Recommendations).unwrap();
        assert_eq!(session.page, Page::Recommendations);
    }

    #[test]
    fn test_missing_goals_alone_blocks_recommendations() {
        let mut session = Session::new();
        answer_everything(&mut session, 4);
        fill_background(&mut session);
        session.background.goals = String::new();

        assert!(!session.can_view_recommendations());
        let err = session.goto(Page::Recommendations).unwrap_err();
        match err {
            AppError::Incomplete(msg) => assert!(msg.contains("goals")),
            other => panic!("expected Incomplete, got {other:?}"),
        }
    }

    #[test]
    fn test_reentering_pages_preserves_state() {
        let mut session = Session::new();
        session.record_rating("Learning new skills", 5).unwrap();
        fill_background(&mut session);

        session.goto(Page::Background).unwrap();
        session.goto(Page::Assessment).unwrap();
        session.goto(Page::Welcome).unwrap();

        assert_eq!(session.ratings["Learning new skills"], 5);
        assert_eq!(session.background.county, "Essex");
    }
}
