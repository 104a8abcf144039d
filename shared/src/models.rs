//! Domain models shared by the backend and the browser bindings

use crate::errors::NutritionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User fitness goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    #[default]
    Maintain,
    Athlete,
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 4] = [
        FitnessGoal::WeightLoss,
        FitnessGoal::MuscleGain,
        FitnessGoal::Maintain,
        FitnessGoal::Athlete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "weight_loss",
            FitnessGoal::MuscleGain => "muscle_gain",
            FitnessGoal::Maintain => "maintain",
            FitnessGoal::Athlete => "athlete",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        FitnessGoal::ALL
            .into_iter()
            .find(|goal| goal.as_str() == normalized)
            .ok_or_else(|| NutritionError::InvalidFitnessGoal(s.to_string()))
    }
}

/// Meal slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        MealType::ALL
            .into_iter()
            .find(|meal| meal.as_str() == normalized)
            .ok_or_else(|| NutritionError::InvalidMealType(s.to_string()))
    }
}

/// Preparation difficulty
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A canned meal suggestion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealRecommendation {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub ingredients: &'static [&'static str],
    pub cooking_method: &'static str,
    pub prep_time_minutes: u32,
    pub difficulty: Difficulty,
}

/// Inputs the recommendation selector worked from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationContext {
    pub meal_type: MealType,
    pub fitness_goal: FitnessGoal,
    pub daily_calorie_target: f64,
    pub consumed_calories: f64,
    pub remaining_calories: f64,
}
