//! Error types for the Nutrilog domain

use thiserror::Error;

/// Domain error types
///
/// Parsing and estimation never fail; these cover the values that arrive
/// from outside the core, such as meal type and goal strings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NutritionError {
    #[error("Invalid meal type: {0}")]
    InvalidMealType(String),

    #[error("Invalid fitness goal: {0}")]
    InvalidFitnessGoal(String),
}

impl NutritionError {
    /// Request field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            NutritionError::InvalidMealType(_) => "meal_type",
            NutritionError::InvalidFitnessGoal(_) => "goal",
        }
    }
}
