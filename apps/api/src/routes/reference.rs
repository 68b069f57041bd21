use axum::Json;
use serde::Serialize;

use crate::assessment::items::Dimension;
use crate::profile::{EDUCATION_LEVELS, INTEREST_AREAS, POTENTIAL_BARRIERS, UK_COUNTIES};

#[derive(Serialize)]
pub struct DimensionItemsView {
    pub dimension: Dimension,
    pub items: &'static [&'static str],
}

/// Static reference data the presentation layer renders: the item bank in
/// display order plus the categorical form options.
#[derive(Serialize)]
pub struct ReferenceView {
    pub dimensions: Vec<DimensionItemsView>,
    pub rating_scale: &'static [&'static str],
    pub education_levels: &'static [&'static str],
    pub interest_areas: &'static [&'static str],
    pub potential_barriers: &'static [&'static str],
    pub uk_counties: &'static [&'static str],
}

/// GET /api/v1/reference
pub async fn reference_handler() -> Json<ReferenceView> {
    let dimensions = Dimension::ALL
        .iter()
        .map(|dimension| DimensionItemsView {
            dimension: *dimension,
            items: dimension.items(),
        })
        .collect();

    Json(ReferenceView {
        dimensions,
        rating_scale: &[
            "1 = Not Strong",
            "2 = Somewhat Strong",
            "3 = Strong",
            "4 = Very Strong",
            "5 = Strongest",
        ],
        education_levels: EDUCATION_LEVELS,
        interest_areas: INTEREST_AREAS,
        potential_barriers: POTENTIAL_BARRIERS,
        uk_counties: UK_COUNTIES,
    })
}
