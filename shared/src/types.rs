//! API request and response types

use crate::estimator::{NutritionAnalysis, NutritionTotals};
use crate::food_db::NutrientRecord;
use crate::models::{MealRecommendation, RecommendationContext};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free-text analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeFoodRequest {
    pub input: String,
}

/// Free-text analysis response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeFoodResponse {
    pub analysis: Vec<NutritionAnalysis>,
    pub totals: NutritionTotals,
    pub analyzed_at: DateTime<Utc>,
}

/// Knowledge base listing query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodDatabaseQuery {
    pub q: Option<String>,
}

/// One knowledge base entry
#[derive(Debug, Clone, Serialize)]
pub struct FoodDatabaseEntry {
    pub name: &'static str,
    #[serde(flatten)]
    pub nutrients: NutrientRecord,
}

/// Recommendation query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationQuery {
    pub goal: Option<String>,
    pub daily_calorie_target: Option<f64>,
    #[serde(default)]
    pub consumed_calories: f64,
}

/// Recommendation response
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<MealRecommendation>,
    pub context: RecommendationContext,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
