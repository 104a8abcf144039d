//! Nutrition estimation for parsed food tokens

use crate::food_db::{self, FoodCategory, NutrientRecord};
use crate::parser::{FoodInputParser, ParsedToken};
use serde::{Deserialize, Serialize};

/// Confidence attached to a knowledge base hit
pub const EXACT_MATCH_CONFIDENCE: f64 = 0.95;

/// Confidence attached to a category estimate
pub const ESTIMATED_CONFIDENCE: f64 = 0.3;

/// Unit label reported for category estimates
pub const ESTIMATED_UNIT: &str = "serving";

/// Nutrition result for one parsed token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionAnalysis {
    #[serde(rename = "food")]
    pub food_label: String,
    pub calories: u32,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fiber: f64,
    pub confidence: f64,
    #[serde(rename = "suggestions")]
    pub caveats: Vec<String>,
    pub unit: String,
    pub quantity: f64,
    /// Fallback category used when the name was not in the knowledge base
    #[serde(skip)]
    pub category: Option<FoodCategory>,
}

impl NutritionAnalysis {
    pub fn is_estimated(&self) -> bool {
        self.category.is_some()
    }
}

/// Summed values over a batch of analyses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: u32,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fiber: f64,
    pub items: usize,
    pub estimated_items: usize,
}

/// Round to the nearest whole number, halves rounding up
fn round_whole(value: f64) -> u32 {
    // `as` saturates, so absurd quantities cap instead of wrapping
    value.max(0.0).round() as u32
}

/// Round to one decimal place, halves rounding up
fn round_tenth(value: f64) -> f64 {
    (value.max(0.0) * 10.0).round() / 10.0
}

fn scaled(record: &NutrientRecord, quantity: f64) -> (u32, f64, f64, f64, f64) {
    (
        round_whole(record.calories * quantity),
        round_tenth(record.protein * quantity),
        round_tenth(record.fat * quantity),
        round_tenth(record.carbs * quantity),
        round_tenth(record.fiber * quantity),
    )
}

/// Estimate nutrition for a single token. Unknown names degrade to a
/// category estimate rather than failing.
pub fn estimate_token(token: &ParsedToken) -> NutritionAnalysis {
    let name = &token.canonical_food_name;
    let food_label = format!("{} {}", token.quantity, name);

    match food_db::lookup(name) {
        Some(record) => {
            let (calories, protein, fat, carbs, fiber) = scaled(record, token.quantity);
            NutritionAnalysis {
                food_label,
                calories,
                protein,
                fat,
                carbs,
                fiber,
                confidence: EXACT_MATCH_CONFIDENCE,
                caveats: Vec::new(),
                unit: record.unit.to_string(),
                quantity: token.quantity,
                category: None,
            }
        }
        None => {
            let category = FoodCategory::classify(name);
            let (calories, protein, fat, carbs, fiber) = scaled(category.estimate(), token.quantity);
            NutritionAnalysis {
                food_label,
                calories,
                protein,
                fat,
                carbs,
                fiber,
                confidence: ESTIMATED_CONFIDENCE,
                caveats: vec![format!(
                    "Food \"{}\" not found in database. Using estimated values.",
                    name
                )],
                unit: ESTIMATED_UNIT.to_string(),
                quantity: token.quantity,
                category: Some(category),
            }
        }
    }
}

/// Estimate nutrition for each token, preserving order
pub fn estimate(tokens: &[ParsedToken]) -> Vec<NutritionAnalysis> {
    tokens.iter().map(estimate_token).collect()
}

/// Parse a line with the given parser and estimate every token
pub fn analyze_with(parser: &FoodInputParser, line: &str) -> Vec<NutritionAnalysis> {
    estimate(&parser.parse(line))
}

/// Parse and estimate with default parser options
pub fn analyze(line: &str) -> Vec<NutritionAnalysis> {
    analyze_with(&FoodInputParser::default(), line)
}

/// Sum a batch of analyses
pub fn summarize(analyses: &[NutritionAnalysis]) -> NutritionTotals {
    let totals = analyses.iter().fold(NutritionTotals::default(), |acc, a| NutritionTotals {
        calories: acc.calories.saturating_add(a.calories),
        protein: acc.protein + a.protein,
        fat: acc.fat + a.fat,
        carbs: acc.carbs + a.carbs,
        fiber: acc.fiber + a.fiber,
        items: acc.items + 1,
        estimated_items: acc.estimated_items + usize::from(a.is_estimated()),
    });

    // Summing tenths drifts in binary floating point
    NutritionTotals {
        protein: round_tenth(totals.protein),
        fat: round_tenth(totals.fat),
        carbs: round_tenth(totals.carbs),
        fiber: round_tenth(totals.fiber),
        ..totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn token(quantity: f64, name: &str) -> ParsedToken {
        ParsedToken {
            quantity,
            raw_food_name: name.to_string(),
            canonical_food_name: name.to_string(),
        }
    }

    #[test]
    fn test_two_roti() {
        let result = analyze("2 roti");
        assert_eq!(result.len(), 1);
        let roti = &result[0];
        assert_eq!(roti.food_label, "2 roti");
        assert_eq!(roti.calories, 142);
        assert_eq!(roti.protein, 6.0);
        assert_eq!(roti.fat, 0.8);
        assert_eq!(roti.carbs, 30.0);
        assert_eq!(roti.fiber, 5.4);
        assert_eq!(roti.confidence, 0.95);
        assert!(roti.caveats.is_empty());
        assert_eq!(roti.unit, "1 piece");
    }

    #[test]
    fn test_one_omelette() {
        let result = analyze("1 omelette");
        let omelette = &result[0];
        assert_eq!(omelette.calories, 154);
        assert_eq!(omelette.protein, 11.0);
        assert_eq!(omelette.fat, 12.0);
        assert_eq!(omelette.carbs, 0.6);
        assert_eq!(omelette.confidence, 0.95);
    }

    #[test]
    fn test_unknown_food_defaults_to_vegetables() {
        let result = analyze("3 xyzfood");
        assert_eq!(result.len(), 1);
        let unknown = &result[0];
        assert_eq!(unknown.food_label, "3 xyzfood");
        assert_eq!(unknown.calories, 75);
        assert_eq!(unknown.confidence, 0.3);
        assert_eq!(unknown.caveats.len(), 1);
        assert!(unknown.caveats[0].contains("xyzfood"));
        assert_eq!(unknown.unit, "serving");
        assert_eq!(unknown.category, Some(FoodCategory::Vegetables));
    }

    #[test]
    fn test_empty_input() {
        assert!(analyze("").is_empty());
        assert!(analyze("  \t ").is_empty());
    }

    #[test]
    fn test_chicken_breast_without_quantity() {
        let result = analyze("chicken breast");
        assert_eq!(result.len(), 1);
        let chicken = &result[0];
        assert_eq!(chicken.food_label, "1 chicken breast");
        assert_eq!(chicken.quantity, 1.0);
        assert_eq!(chicken.calories, 165);
        assert_eq!(chicken.protein, 31.0);
        assert_eq!(chicken.fat, 3.6);
        assert_eq!(chicken.carbs, 0.0);
        assert_eq!(chicken.confidence, 0.95);
    }

    #[test]
    fn test_chicken_rice_estimates_as_grains() {
        let result = estimate(&[token(1.0, "chicken rice")]);
        assert_eq!(result[0].category, Some(FoodCategory::Grains));
        assert_eq!(result[0].calories, 130);
    }

    #[test]
    fn test_fractional_label() {
        let result = analyze("1.5 cup rice");
        assert_eq!(result[0].food_label, "1.5 cup rice");
        assert_eq!(result[0].category, Some(FoodCategory::Grains));
        assert_eq!(result[0].calories, 195);
        assert_eq!(result[0].carbs, 40.5);
    }

    #[test]
    fn test_order_preserved() {
        let result = analyze("2 roti, 1 omelette, 1 cup rice");
        let labels: Vec<&str> = result.iter().map(|a| a.food_label.as_str()).collect();
        assert_eq!(labels, vec!["2 roti", "1 omelette", "1 cup rice"]);
    }

    #[test]
    fn test_serialized_field_names() {
        let result = analyze("1 xyzfood");
        let json = serde_json::to_value(&result[0]).unwrap();
        for field in [
            "food", "calories", "protein", "fat", "carbs", "fiber", "confidence", "suggestions",
            "unit", "quantity",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_summarize() {
        let result = analyze("2 roti, 1 omelette, 3 xyzfood");
        let totals = summarize(&result);
        assert_eq!(totals.calories, 142 + 154 + 75);
        assert_eq!(totals.protein, 23.0);
        assert_eq!(totals.items, 3);
        assert_eq!(totals.estimated_items, 1);
        assert_eq!(summarize(&[]), NutritionTotals::default());
    }

    #[test]
    fn test_round_tenth_half_up() {
        assert_eq!(round_tenth(0.25), 0.3);
        assert_eq!(round_tenth(1.04), 1.0);
        assert_eq!(round_whole(70.5), 71);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_exact_match_scaling(idx in 0usize..food_db::food_count(), q in 0.1f64..20.0) {
            let (name, record) = food_db::FOOD_ENTRIES[idx];
            let result = estimate_token(&token(q, name));
            prop_assert_eq!(result.calories, (record.calories * q).round() as u32);
            prop_assert_eq!(result.confidence, EXACT_MATCH_CONFIDENCE);
            prop_assert!(result.caveats.is_empty());
        }

        #[test]
        fn prop_doubling_quantity_doubles_values(
            idx in 0usize..food_db::food_count(),
            q in 0.1f64..10.0
        ) {
            let (name, _) = food_db::FOOD_ENTRIES[idx];
            let single = estimate_token(&token(q, name));
            let double = estimate_token(&token(q * 2.0, name));
            prop_assert!((double.calories as f64 - 2.0 * single.calories as f64).abs() <= 1.0);
            prop_assert!((double.protein - 2.0 * single.protein).abs() <= 0.1 + 1e-9);
            prop_assert!((double.fat - 2.0 * single.fat).abs() <= 0.1 + 1e-9);
            prop_assert!((double.carbs - 2.0 * single.carbs).abs() <= 0.1 + 1e-9);
        }

        #[test]
        fn prop_unknown_names_are_estimated(name in "zz[a-z]{3,10}", q in 0.1f64..10.0) {
            let result = estimate_token(&token(q, &name));
            prop_assert_eq!(result.confidence, ESTIMATED_CONFIDENCE);
            prop_assert_eq!(result.caveats.len(), 1);
            prop_assert!(result.caveats[0].contains(&name));
        }

        #[test]
        fn prop_values_never_negative(input in "\\PC{0,40}") {
            for a in analyze(&input) {
                prop_assert!(a.protein >= 0.0 && a.fat >= 0.0 && a.carbs >= 0.0 && a.fiber >= 0.0);
                prop_assert!(a.confidence == EXACT_MATCH_CONFIDENCE || a.confidence == ESTIMATED_CONFIDENCE);
            }
        }
    }
}
