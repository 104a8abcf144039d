//! Recommendation service - canned meal suggestions for the remaining budget

use crate::config::RecommendationConfig;
use crate::error::ApiError;
use nutrilog_shared::recommendations;
use nutrilog_shared::types::{RecommendationQuery, RecommendationsResponse};
use nutrilog_shared::validation::{validate_calorie_target, validate_calories, ValidationError};
use nutrilog_shared::{FitnessGoal, MealType};
use tracing::debug;

/// Recommendation service
pub struct RecommendationService;

impl RecommendationService {
    /// Recommendations for a meal type given the day's target and intake
    pub fn get_recommendations(
        config: &RecommendationConfig,
        meal_type: &str,
        query: &RecommendationQuery,
    ) -> Result<RecommendationsResponse, ApiError> {
        let meal_type: MealType = meal_type.parse()?;

        let goal = match query.goal.as_deref() {
            Some(goal) if !goal.trim().is_empty() => goal.parse::<FitnessGoal>()?,
            _ => FitnessGoal::default(),
        };

        let target = query
            .daily_calorie_target
            .unwrap_or(config.default_daily_calorie_target);
        validate_calorie_target(target)
            .map_err(|msg| ValidationError::new("daily_calorie_target", &msg))?;
        validate_calories(query.consumed_calories)
            .map_err(|msg| ValidationError::new("consumed_calories", &msg))?;

        let recommendations =
            recommendations::recommend(goal, meal_type, target, query.consumed_calories);
        let context =
            recommendations::context(goal, meal_type, target, query.consumed_calories);

        debug!(
            meal_type = %meal_type,
            goal = %goal,
            remaining = context.remaining_calories,
            count = recommendations.len(),
            "Selected meal recommendations"
        );

        Ok(RecommendationsResponse {
            recommendations,
            context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn query(goal: Option<&str>, target: Option<f64>, consumed: f64) -> RecommendationQuery {
        RecommendationQuery {
            goal: goal.map(str::to_string),
            daily_calorie_target: target,
            consumed_calories: consumed,
        }
    }

    #[test]
    fn test_defaults_to_maintain_and_config_target() {
        let response = RecommendationService::get_recommendations(
            &RecommendationConfig::default(),
            "lunch",
            &query(None, None, 1160.0),
        )
        .unwrap();
        assert_eq!(response.context.fitness_goal, FitnessGoal::Maintain);
        assert_eq!(response.context.daily_calorie_target, 2000.0);
        assert_eq!(response.context.remaining_calories, 840.0);
        assert_eq!(response.recommendations[0].id, "m-l1");
    }

    #[test]
    fn test_explicit_goal() {
        let response = RecommendationService::get_recommendations(
            &RecommendationConfig::default(),
            "Breakfast",
            &query(Some("weight_loss"), Some(1500.0), 600.0),
        )
        .unwrap();
        let ids: Vec<&str> = response.recommendations.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["wl-b1", "wl-b2"]);
    }

    #[rstest]
    #[case("brunch", None, None, 0.0)]
    #[case("lunch", Some("bulk"), None, 0.0)]
    #[case("lunch", None, Some(0.0), 0.0)]
    #[case("lunch", None, Some(-100.0), 0.0)]
    #[case("lunch", None, None, -5.0)]
    fn test_invalid_requests(
        #[case] meal_type: &str,
        #[case] goal: Option<&str>,
        #[case] target: Option<f64>,
        #[case] consumed: f64,
    ) {
        let result = RecommendationService::get_recommendations(
            &RecommendationConfig::default(),
            meal_type,
            &query(goal, target, consumed),
        );
        assert!(matches!(result, Err(ApiError::Validation { .. })));
    }
}
