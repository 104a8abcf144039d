//! Food analysis API routes

use crate::error::ApiResult;
use crate::services::NutritionService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use nutrilog_shared::types::{
    AnalyzeFoodRequest, AnalyzeFoodResponse, FoodDatabaseEntry, FoodDatabaseQuery,
};

/// Create food routes
pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze_food))
        .route("/database", get(list_foods))
}

/// POST /api/v1/food/analyze - Analyze a free-text food line
async fn analyze_food(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeFoodRequest>, JsonRejection>,
) -> ApiResult<Json<AnalyzeFoodResponse>> {
    let Json(req) = payload?;
    let response = NutritionService::analyze(state.parser(), &state.config().parser, &req.input)?;
    Ok(Json(response))
}

/// GET /api/v1/food/database - List known foods
async fn list_foods(
    query: Result<Query<FoodDatabaseQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<FoodDatabaseEntry>>> {
    let Query(query) = query?;
    Ok(Json(NutritionService::list_foods(query.q.as_deref())))
}
