//! Meal recommendation API routes

use crate::error::ApiResult;
use crate::services::RecommendationService;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use nutrilog_shared::types::{RecommendationQuery, RecommendationsResponse};

/// Create recommendation routes
pub fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/:meal_type", get(get_recommendations))
}

/// GET /api/v1/recommendations/:meal_type - Recommendations for a meal
async fn get_recommendations(
    State(state): State<AppState>,
    Path(meal_type): Path<String>,
    query: Result<Query<RecommendationQuery>, QueryRejection>,
) -> ApiResult<Json<RecommendationsResponse>> {
    let Query(query) = query?;
    let response = RecommendationService::get_recommendations(
        &state.config().recommendations,
        &meal_type,
        &query,
    )?;
    Ok(Json(response))
}
