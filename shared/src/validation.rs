//! Input validation functions
//!
//! These checks run at the request boundary only. The parser and estimator
//! accept any string, so nothing here is needed to call them directly.

/// Default upper bound on one free-text food line
pub const DEFAULT_MAX_INPUT_LEN: usize = 500;

/// Validate a free-text food line
pub fn validate_food_input(input: &str, max_len: usize) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("Food input is required".to_string());
    }
    if input.chars().count() > max_len {
        return Err(format!("Food input must be at most {} characters", max_len));
    }
    Ok(())
}

/// Validate calorie value
pub fn validate_calories(calories: f64) -> Result<(), String> {
    if calories.is_nan() || calories.is_infinite() {
        return Err("Calories must be a valid number".to_string());
    }
    if calories < 0.0 {
        return Err("Calories cannot be negative".to_string());
    }
    if calories > 50000.0 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a daily calorie target; zero makes no sense as a target
pub fn validate_calorie_target(calories: f64) -> Result<(), String> {
    validate_calories(calories)?;
    if calories == 0.0 {
        return Err("Calorie target must be positive".to_string());
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map request field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "input" => "Food Input",
        "meal_type" => "Meal Type",
        "goal" => "Fitness Goal",
        "daily_calorie_target" => "Daily Calorie Target",
        "consumed_calories" => "Consumed Calories",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}
