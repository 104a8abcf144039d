//! Nutrilog WASM Module
//!
//! WebAssembly bindings so the browser logger uses the same food tables and
//! parser as the server. Structured results cross the boundary as JSON.

use nutrilog_shared::{
    estimator, normalize, recommendations, FitnessGoal, MealType, NutritionAnalysis,
    NutritionTotals,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct AnalysisPayload {
    analysis: Vec<NutritionAnalysis>,
    totals: NutritionTotals,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Analyze one free-text food line, returning `{ analysis, totals }` as JSON
#[wasm_bindgen]
pub fn analyze_food_input(input: &str) -> Result<String, JsValue> {
    let analysis = estimator::analyze(input);
    let totals = estimator::summarize(&analysis);
    to_json(&AnalysisPayload { analysis, totals })
}

/// Canonical knowledge base key for a food name
#[wasm_bindgen]
pub fn normalize_food_name(input: &str) -> String {
    normalize(input)
}

/// Meal recommendations as a JSON array.
///
/// An unknown goal falls back to `maintain`; an unknown meal type is an error.
#[wasm_bindgen]
pub fn get_meal_recommendations(
    goal: &str,
    meal_type: &str,
    daily_calorie_target: f64,
    consumed_calories: f64,
) -> Result<String, JsValue> {
    let goal: FitnessGoal = goal.parse().unwrap_or_default();
    let meal_type: MealType = meal_type
        .parse()
        .map_err(|e: nutrilog_shared::NutritionError| JsValue::from_str(&e.to_string()))?;
    let target = if daily_calorie_target > 0.0 {
        daily_calorie_target
    } else {
        recommendations::DEFAULT_DAILY_CALORIE_TARGET
    };

    to_json(&recommendations::recommend(goal, meal_type, target, consumed_calories))
}
