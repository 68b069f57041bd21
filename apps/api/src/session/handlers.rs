use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{generate_report, NarrativeReport};
use crate::assessment::items::{total_items, Dimension};
use crate::assessment::scoring::{classify, dimension_scores, interpretation, Level};
use crate::errors::AppError;
use crate::profile::{BackgroundProfile, BackgroundUpdate};
use crate::recommendations::{
    career_paths, resources, skill_plan, CareerSuggestion, ResourceGuide, SkillPlanEntry,
};
use crate::session::{Page, Session};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProgressView {
    pub answered: usize,
    pub total: usize,
}

/// Snapshot of a session for the presentation layer: where the user is,
/// what to render, and which transitions are currently enabled.
#[derive(Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub page: Page,
    pub current_dimension: Dimension,
    pub current_items: &'static [&'static str],
    pub show_results: bool,
    pub progress: ProgressView,
    pub can_view_results: bool,
    pub can_view_recommendations: bool,
}

impl SessionView {
    fn from_session(session: &Session) -> Self {
        Self {
            session_id: session.id,
            created_at: session.created_at,
            page: session.page,
            current_dimension: session.current_dimension,
            current_items: session.current_dimension.items(),
            show_results: session.show_results,
            progress: ProgressView {
                answered: session.answered(),
                total: total_items(),
            },
            can_view_results: session.assessment_complete(),
            can_view_recommendations: session.can_view_recommendations(),
        }
    }
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let session = state.sessions.create()?;
    tracing::info!("Session {} created", session.id);
    Ok((StatusCode::CREATED, Json(SessionView::from_session(&session))))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id)?;
    Ok(Json(SessionView::from_session(&session)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id)?;
    tracing::info!("Session {id} destroyed");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct RateRequest {
    pub item: String,
    pub rating: u8,
}

/// POST /api/v1/sessions/:id/ratings
pub async fn handle_rate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RateRequest>,
) -> Result<Json<SessionView>, AppError> {
    let view = state.sessions.with(id, |session| {
        session.record_rating(&req.item, req.rating)?;
        Ok(SessionView::from_session(session))
    })?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/assessment/next
pub async fn handle_next_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = state.sessions.with(id, |session| {
        session.next_section()?;
        Ok(SessionView::from_session(session))
    })?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/assessment/previous
pub async fn handle_previous_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = state.sessions.with(id, |session| {
        session.previous_section()?;
        Ok(SessionView::from_session(session))
    })?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/assessment/results
pub async fn handle_view_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = state.sessions.with(id, |session| {
        session.view_results()?;
        Ok(SessionView::from_session(session))
    })?;
    Ok(Json(view))
}

#[derive(Deserialize)]
pub struct PageRequest {
    pub page: Page,
}

/// POST /api/v1/sessions/:id/page
pub async fn handle_goto_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<PageRequest>,
) -> Result<Json<SessionView>, AppError> {
    let view = state.sessions.with(id, |session| {
        session.goto(req.page)?;
        Ok(SessionView::from_session(session))
    })?;
    Ok(Json(view))
}

#[derive(Serialize)]
pub struct DimensionScoreView {
    pub dimension: Dimension,
    pub score: f64,
    pub level: Level,
    pub interpretation: &'static str,
}

#[derive(Serialize)]
pub struct ScoresView {
    pub complete: bool,
    pub scores: Vec<DimensionScoreView>,
}

/// GET /api/v1/sessions/:id/scores
///
/// Unscored dimensions are omitted rather than reported as 0.
pub async fn handle_get_scores(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScoresView>, AppError> {
    let session = state.sessions.get(id)?;
    let scores = dimension_scores(&session.ratings)
        .into_iter()
        .map(|(dimension, score)| DimensionScoreView {
            dimension,
            score,
            level: classify(score),
            interpretation: interpretation(dimension, score),
        })
        .collect();
    Ok(Json(ScoresView {
        complete: session.assessment_complete(),
        scores,
    }))
}

#[derive(Serialize)]
pub struct BackgroundView {
    pub profile: BackgroundProfile,
    pub missing_fields: Vec<&'static str>,
    pub complete: bool,
}

impl BackgroundView {
    fn from_profile(profile: &BackgroundProfile) -> Self {
        Self {
            profile: profile.clone(),
            missing_fields: profile.missing_fields(),
            complete: profile.is_complete(),
        }
    }
}

/// GET /api/v1/sessions/:id/background
pub async fn handle_get_background(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BackgroundView>, AppError> {
    let session = state.sessions.get(id)?;
    Ok(Json(BackgroundView::from_profile(&session.background)))
}

/// PUT /api/v1/sessions/:id/background
pub async fn handle_update_background(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<BackgroundUpdate>,
) -> Result<Json<BackgroundView>, AppError> {
    let view = state.sessions.with(id, |session| {
        session
            .background
            .apply(update)
            .map_err(AppError::Validation)?;
        Ok(BackgroundView::from_profile(&session.background))
    })?;
    Ok(Json(view))
}

#[derive(Serialize)]
pub struct RecommendationsView {
    pub career_paths: Vec<CareerSuggestion>,
    pub skill_plan: Vec<SkillPlanEntry>,
    pub resources: ResourceGuide,
}

/// GET /api/v1/sessions/:id/recommendations
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecommendationsView>, AppError> {
    let session = state.sessions.get(id)?;
    session.ensure_recommendations_ready()?;

    let scores = dimension_scores(&session.ratings);
    Ok(Json(RecommendationsView {
        career_paths: career_paths(&session.background.interests),
        skill_plan: skill_plan(&scores),
        resources: resources(&session.background.barriers),
    }))
}

/// POST /api/v1/sessions/:id/analysis
///
/// The narrative call is made outside the store lock against a snapshot of
/// the session; the endpoint never surfaces the service failure.
pub async fn handle_generate_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NarrativeReport>, AppError> {
    let session = state.sessions.get(id)?;
    session.ensure_recommendations_ready()?;

    let scores = dimension_scores(&session.ratings);
    let report = generate_report(state.analysis.as_ref(), &scores, &session.background).await;
    Ok(Json(report))
}
