//! Nutrition service - free-text food analysis

use crate::config::ParserConfig;
use crate::error::ApiError;
use chrono::Utc;
use nutrilog_shared::food_db;
use nutrilog_shared::types::{AnalyzeFoodResponse, FoodDatabaseEntry};
use nutrilog_shared::validation::{validate_food_input, ValidationError};
use nutrilog_shared::{estimator, FoodInputParser};
use tracing::{debug, warn};

/// Nutrition service
pub struct NutritionService;

impl NutritionService {
    /// Analyze one free-text food line
    ///
    /// Blank or oversized input is rejected here; everything else is
    /// analyzed, with unknown foods falling back to category estimates.
    pub fn analyze(
        parser: &FoodInputParser,
        config: &ParserConfig,
        input: &str,
    ) -> Result<AnalyzeFoodResponse, ApiError> {
        if let Err(msg) = validate_food_input(input, config.max_input_len) {
            warn!(input_len = input.len(), "Rejected food input: {}", msg);
            return Err(ValidationError::new("input", &msg).into());
        }

        let analysis = estimator::analyze_with(parser, input);
        let totals = estimator::summarize(&analysis);

        debug!(
            tokens = totals.items,
            estimated = totals.estimated_items,
            calories = totals.calories,
            "Analyzed food input"
        );

        Ok(AnalyzeFoodResponse {
            analysis,
            totals,
            analyzed_at: Utc::now(),
        })
    }

    /// List knowledge base entries, optionally filtered by a name substring
    pub fn list_foods(query: Option<&str>) -> Vec<FoodDatabaseEntry> {
        let needle = query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        food_db::entries()
            .filter(|(name, _)| needle.as_deref().map_or(true, |n| name.contains(n)))
            .map(|(name, record)| FoodDatabaseEntry {
                name,
                nutrients: *record,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn analyze(input: &str) -> Result<AnalyzeFoodResponse, ApiError> {
        NutritionService::analyze(&FoodInputParser::default(), &ParserConfig::default(), input)
    }

    #[test]
    fn test_analyze_returns_totals() {
        let response = analyze("2 roti, 1 omelette").unwrap();
        assert_eq!(response.analysis.len(), 2);
        assert_eq!(response.totals.calories, 296);
        assert_eq!(response.totals.estimated_items, 0);
    }

    #[test]
    fn test_analyze_rejects_blank_input() {
        let err = analyze("   ").unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }

    #[test]
    fn test_analyze_rejects_long_input() {
        let config = ParserConfig {
            max_input_len: 10,
            ..ParserConfig::default()
        };
        let result =
            NutritionService::analyze(&FoodInputParser::default(), &config, "2 roti, 1 omelette");
        assert!(result.is_err());
    }

    #[test]
    fn test_analyze_unrecognized_text_is_not_an_error() {
        // Digits only: no tokens survive, which is an empty analysis, not a failure
        let response = analyze("1,2").unwrap();
        assert!(response.analysis.is_empty());
        assert_eq!(response.totals.items, 0);
    }

    #[test]
    fn test_list_foods_filter() {
        let all = NutritionService::list_foods(None);
        assert_eq!(all.len(), food_db::food_count());

        let curries = NutritionService::list_foods(Some(" Curry "));
        let names: Vec<&str> = curries.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["chicken curry", "mutton curry", "fish curry"]);

        assert_eq!(NutritionService::list_foods(Some("")).len(), all.len());
        assert!(NutritionService::list_foods(Some("xyz")).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_totals_match_analysis(input in "([1-9] [a-z]{3,8},? ?){1,6}") {
            if let Ok(response) = analyze(&input) {
                let calories: u32 = response.analysis.iter().map(|a| a.calories).sum();
                prop_assert_eq!(response.totals.calories, calories);
                prop_assert_eq!(response.totals.items, response.analysis.len());
            }
        }
    }
}
