//! Nutrilog Shared Library
//!
//! Food tables, the free-text parser, the nutrition estimator and the
//! recommendation selector, shared by the backend and the WASM module.

pub mod errors;
pub mod estimator;
pub mod food_db;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod recommendations;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use estimator::{analyze, analyze_with, estimate, summarize, NutritionAnalysis, NutritionTotals};
pub use food_db::{FoodCategory, NutrientRecord};
pub use models::{Difficulty, FitnessGoal, MealRecommendation, MealType, RecommendationContext};
pub use normalize::normalize;
pub use parser::{parse, FoodInputParser, ParsedToken, ParserOptions};
