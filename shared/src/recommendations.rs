//! Static meal recommendations filtered by the remaining calorie budget

use crate::models::{Difficulty, FitnessGoal, MealRecommendation, MealType, RecommendationContext};

/// Calorie target assumed when the user has none on file
pub const DEFAULT_DAILY_CALORIE_TARGET: f64 = 2000.0;

/// Most recommendations returned for one request
pub const MAX_RECOMMENDATIONS: usize = 2;

/// Accepted band around the per-meal calorie target
const LOWER_BAND: f64 = 0.5;
const UPPER_BAND: f64 = 1.3;

const WEIGHT_LOSS_BREAKFAST: &[MealRecommendation] = &[
    MealRecommendation {
        id: "wl-b1",
        name: "Protein Omelette with Vegetables",
        description: "Low-calorie, high-protein breakfast with mixed vegetables",
        calories: 220.0,
        protein: 18.0,
        fat: 14.0,
        carbs: 8.0,
        ingredients: &["2 eggs", "spinach", "tomatoes", "onions", "bell peppers"],
        cooking_method: "Pan-fried with minimal oil",
        prep_time_minutes: 10,
        difficulty: Difficulty::Easy,
    },
    MealRecommendation {
        id: "wl-b2",
        name: "Greek Yogurt with Berries",
        description: "High-protein, low-calorie breakfast with antioxidants",
        calories: 150.0,
        protein: 15.0,
        fat: 0.0,
        carbs: 18.0,
        ingredients: &["200g greek yogurt", "mixed berries", "stevia"],
        cooking_method: "No cooking required",
        prep_time_minutes: 2,
        difficulty: Difficulty::Easy,
    },
];

const WEIGHT_LOSS_LUNCH: &[MealRecommendation] = &[
    MealRecommendation {
        id: "wl-l1",
        name: "Grilled Chicken Salad",
        description: "Lean protein with fresh vegetables and minimal dressing",
        calories: 320.0,
        protein: 35.0,
        fat: 12.0,
        carbs: 15.0,
        ingredients: &["150g chicken breast", "mixed greens", "cucumber", "tomatoes", "olive oil"],
        cooking_method: "Grilled chicken, fresh salad",
        prep_time_minutes: 15,
        difficulty: Difficulty::Easy,
    },
    MealRecommendation {
        id: "wl-l2",
        name: "Vegetable Daliya Bowl",
        description: "High-fiber, low-calorie meal with vegetables",
        calories: 280.0,
        protein: 12.0,
        fat: 6.0,
        carbs: 45.0,
        ingredients: &["1 cup daliya", "mixed vegetables", "minimal oil"],
        cooking_method: "Steamed with vegetables",
        prep_time_minutes: 20,
        difficulty: Difficulty::Medium,
    },
];

const WEIGHT_LOSS_DINNER: &[MealRecommendation] = &[MealRecommendation {
    id: "wl-d1",
    name: "Steamed Fish with Vegetables",
    description: "Light, protein-rich dinner with minimal calories",
    calories: 250.0,
    protein: 30.0,
    fat: 8.0,
    carbs: 12.0,
    ingredients: &["150g fish fillet", "broccoli", "carrots", "herbs"],
    cooking_method: "Steamed with herbs and spices",
    prep_time_minutes: 20,
    difficulty: Difficulty::Medium,
}];

const MUSCLE_GAIN_BREAKFAST: &[MealRecommendation] = &[MealRecommendation {
    id: "mg-b1",
    name: "Protein Pancakes with Nuts",
    description: "High-protein, calorie-dense breakfast for muscle building",
    calories: 420.0,
    protein: 30.0,
    fat: 18.0,
    carbs: 35.0,
    ingredients: &["3 eggs", "oats", "protein powder", "almonds", "honey"],
    cooking_method: "Pan-fried with ghee",
    prep_time_minutes: 15,
    difficulty: Difficulty::Medium,
}];

const MUSCLE_GAIN_LUNCH: &[MealRecommendation] = &[MealRecommendation {
    id: "mg-l1",
    name: "Chicken Biryani with Raita",
    description: "High-protein, high-carb meal for muscle building",
    calories: 650.0,
    protein: 40.0,
    fat: 25.0,
    carbs: 65.0,
    ingredients: &["200g chicken", "1.5 cups basmati rice", "yogurt", "spices"],
    cooking_method: "Slow-cooked biryani",
    prep_time_minutes: 45,
    difficulty: Difficulty::Hard,
}];

const MUSCLE_GAIN_DINNER: &[MealRecommendation] = &[MealRecommendation {
    id: "mg-d1",
    name: "Grilled Chicken with Sweet Potato",
    description: "Lean protein with complex carbs for recovery",
    calories: 520.0,
    protein: 45.0,
    fat: 15.0,
    carbs: 45.0,
    ingredients: &["200g chicken breast", "150g sweet potato", "vegetables"],
    cooking_method: "Grilled chicken, roasted sweet potato",
    prep_time_minutes: 30,
    difficulty: Difficulty::Medium,
}];

const MAINTAIN_BREAKFAST: &[MealRecommendation] = &[MealRecommendation {
    id: "m-b1",
    name: "Poha with Peanuts",
    description: "Balanced breakfast with moderate calories",
    calories: 280.0,
    protein: 8.0,
    fat: 12.0,
    carbs: 38.0,
    ingredients: &["1 cup poha", "peanuts", "onions", "curry leaves", "oil"],
    cooking_method: "Sautéed with minimal oil",
    prep_time_minutes: 15,
    difficulty: Difficulty::Easy,
}];

const MAINTAIN_LUNCH: &[MealRecommendation] = &[MealRecommendation {
    id: "m-l1",
    name: "Mixed Vegetable Curry with Roti",
    description: "Balanced meal with vegetables and whole grains",
    calories: 420.0,
    protein: 15.0,
    fat: 14.0,
    carbs: 58.0,
    ingredients: &["mixed vegetables", "2 rotis", "dal", "oil"],
    cooking_method: "Sautéed vegetables with rotis",
    prep_time_minutes: 25,
    difficulty: Difficulty::Medium,
}];

const MAINTAIN_DINNER: &[MealRecommendation] = &[MealRecommendation {
    id: "m-d1",
    name: "Chapati with Dal and Sabzi",
    description: "Traditional balanced dinner",
    calories: 380.0,
    protein: 16.0,
    fat: 12.0,
    carbs: 55.0,
    ingredients: &["2 chapatis", "1 cup dal", "seasonal vegetables"],
    cooking_method: "Home-cooked dal and vegetables",
    prep_time_minutes: 30,
    difficulty: Difficulty::Medium,
}];

const ATHLETE_BREAKFAST: &[MealRecommendation] = &[MealRecommendation {
    id: "a-b1",
    name: "High-Energy Smoothie Bowl",
    description: "Nutrient-dense breakfast for athletic performance",
    calories: 450.0,
    protein: 25.0,
    fat: 15.0,
    carbs: 55.0,
    ingredients: &["protein powder", "banana", "oats", "berries", "nuts"],
    cooking_method: "Blended smoothie with toppings",
    prep_time_minutes: 8,
    difficulty: Difficulty::Easy,
}];

const ATHLETE_LUNCH: &[MealRecommendation] = &[MealRecommendation {
    id: "a-l1",
    name: "Power Bowl with Quinoa",
    description: "Complete nutrition for sustained energy",
    calories: 580.0,
    protein: 35.0,
    fat: 20.0,
    carbs: 65.0,
    ingredients: &["quinoa", "grilled chicken", "avocado", "vegetables", "nuts"],
    cooking_method: "Grilled and assembled",
    prep_time_minutes: 20,
    difficulty: Difficulty::Medium,
}];

const ATHLETE_DINNER: &[MealRecommendation] = &[MealRecommendation {
    id: "a-d1",
    name: "Salmon with Brown Rice",
    description: "Omega-3 rich meal for recovery",
    calories: 520.0,
    protein: 40.0,
    fat: 18.0,
    carbs: 45.0,
    ingredients: &["salmon fillet", "brown rice", "asparagus", "olive oil"],
    cooking_method: "Baked salmon with steamed rice",
    prep_time_minutes: 25,
    difficulty: Difficulty::Medium,
}];

/// Static candidates for a goal and meal; snacks have none
pub fn candidates(goal: FitnessGoal, meal_type: MealType) -> &'static [MealRecommendation] {
    match (goal, meal_type) {
        (FitnessGoal::WeightLoss, MealType::Breakfast) => WEIGHT_LOSS_BREAKFAST,
        (FitnessGoal::WeightLoss, MealType::Lunch) => WEIGHT_LOSS_LUNCH,
        (FitnessGoal::WeightLoss, MealType::Dinner) => WEIGHT_LOSS_DINNER,
        (FitnessGoal::MuscleGain, MealType::Breakfast) => MUSCLE_GAIN_BREAKFAST,
        (FitnessGoal::MuscleGain, MealType::Lunch) => MUSCLE_GAIN_LUNCH,
        (FitnessGoal::MuscleGain, MealType::Dinner) => MUSCLE_GAIN_DINNER,
        (FitnessGoal::Maintain, MealType::Breakfast) => MAINTAIN_BREAKFAST,
        (FitnessGoal::Maintain, MealType::Lunch) => MAINTAIN_LUNCH,
        (FitnessGoal::Maintain, MealType::Dinner) => MAINTAIN_DINNER,
        (FitnessGoal::Athlete, MealType::Breakfast) => ATHLETE_BREAKFAST,
        (FitnessGoal::Athlete, MealType::Lunch) => ATHLETE_LUNCH,
        (FitnessGoal::Athlete, MealType::Dinner) => ATHLETE_DINNER,
        (_, MealType::Snack) => &[],
    }
}

/// Calorie budget for one meal: lunch takes half of what is left, other meals a third
pub fn meal_calorie_target(meal_type: MealType, remaining_calories: f64) -> f64 {
    match meal_type {
        MealType::Lunch => remaining_calories / 2.0,
        _ => remaining_calories / 3.0,
    }
}

/// Generic fallback when no candidate fits the budget
fn general_recommendation(meal_type: MealType, remaining_calories: f64) -> Option<MealRecommendation> {
    let remaining = remaining_calories.max(0.0);
    let recommendation = match meal_type {
        MealType::Breakfast => MealRecommendation {
            id: "gen-b1",
            name: "Balanced Breakfast",
            description: "A nutritious start to your day",
            calories: (remaining * 0.25).min(350.0).round(),
            protein: 15.0,
            fat: 10.0,
            carbs: 30.0,
            ingredients: &["whole grains", "protein source", "fruits"],
            cooking_method: "Various options available",
            prep_time_minutes: 10,
            difficulty: Difficulty::Easy,
        },
        MealType::Lunch => MealRecommendation {
            id: "gen-l1",
            name: "Balanced Lunch",
            description: "A satisfying midday meal",
            calories: (remaining * 0.4).min(500.0).round(),
            protein: 25.0,
            fat: 15.0,
            carbs: 45.0,
            ingredients: &["lean protein", "vegetables", "complex carbs"],
            cooking_method: "Grilled, steamed, or sautéed",
            prep_time_minutes: 20,
            difficulty: Difficulty::Medium,
        },
        MealType::Dinner => MealRecommendation {
            id: "gen-d1",
            name: "Light Dinner",
            description: "A nutritious end to your day",
            calories: (remaining * 0.35).min(400.0).round(),
            protein: 20.0,
            fat: 12.0,
            carbs: 35.0,
            ingredients: &["lean protein", "vegetables", "minimal carbs"],
            cooking_method: "Light cooking methods",
            prep_time_minutes: 25,
            difficulty: Difficulty::Medium,
        },
        MealType::Snack => return None,
    };
    Some(recommendation)
}

/// Pick recommendations whose calories sit within the band around this
/// meal's share of the remaining budget.
pub fn recommend(
    goal: FitnessGoal,
    meal_type: MealType,
    daily_calorie_target: f64,
    consumed_calories: f64,
) -> Vec<MealRecommendation> {
    let remaining = daily_calorie_target - consumed_calories;
    let target = meal_calorie_target(meal_type, remaining);

    let fitting: Vec<MealRecommendation> = candidates(goal, meal_type)
        .iter()
        .filter(|meal| meal.calories <= target * UPPER_BAND && meal.calories >= target * LOWER_BAND)
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect();

    if fitting.is_empty() {
        general_recommendation(meal_type, remaining).into_iter().collect()
    } else {
        fitting
    }
}

/// Build the context block returned alongside recommendations
pub fn context(
    goal: FitnessGoal,
    meal_type: MealType,
    daily_calorie_target: f64,
    consumed_calories: f64,
) -> RecommendationContext {
    RecommendationContext {
        meal_type,
        fitness_goal: goal,
        daily_calorie_target,
        consumed_calories,
        remaining_calories: daily_calorie_target - consumed_calories,
    }
}
