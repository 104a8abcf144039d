//! Static food knowledge base and category fallback table
//!
//! This is the only definition of the nutrition tables. The backend, the
//! WASM bindings and the parser all read from here, so the values cannot
//! drift between the server and the browser.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Nutrient values for one unit of a food
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientRecord {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fiber: f64,
    pub unit: &'static str,
}

const fn record(
    calories: f64,
    protein: f64,
    fat: f64,
    carbs: f64,
    fiber: f64,
    unit: &'static str,
) -> NutrientRecord {
    NutrientRecord {
        calories,
        protein,
        fat,
        carbs,
        fiber,
        unit,
    }
}

/// Knowledge base entries keyed by canonical (lowercase, singular) name.
/// Table order is the listing order of the food database endpoint.
pub const FOOD_ENTRIES: &[(&str, NutrientRecord)] = &[
    // Indian
    ("roti", record(71.0, 3.0, 0.4, 15.0, 2.7, "1 piece")),
    ("chapati", record(71.0, 3.0, 0.4, 15.0, 2.7, "1 piece")),
    ("naan", record(137.0, 4.6, 3.3, 23.0, 1.2, "1 piece")),
    ("rice", record(130.0, 2.7, 0.3, 28.0, 0.4, "100g")),
    ("dal", record(116.0, 9.0, 0.5, 20.0, 8.0, "100g")),
    ("omelette", record(154.0, 11.0, 12.0, 0.6, 0.0, "2 eggs")),
    ("egg", record(77.0, 6.0, 5.0, 0.6, 0.0, "1 piece")),
    ("paneer", record(321.0, 25.0, 25.0, 3.0, 0.0, "100g")),
    ("chicken curry", record(180.0, 25.0, 8.0, 5.0, 1.0, "100g")),
    ("mutton curry", record(250.0, 26.0, 15.0, 4.0, 1.0, "100g")),
    ("fish curry", record(150.0, 20.0, 6.0, 4.0, 1.0, "100g")),
    ("samosa", record(262.0, 5.0, 17.0, 23.0, 2.0, "1 piece")),
    ("paratha", record(126.0, 3.0, 4.5, 18.0, 2.5, "1 piece")),
    ("dosa", record(168.0, 4.0, 3.7, 31.0, 2.0, "1 piece")),
    ("idli", record(58.0, 2.0, 0.3, 12.0, 1.0, "1 piece")),
    ("upma", record(150.0, 4.0, 2.0, 30.0, 3.0, "100g")),
    ("poha", record(160.0, 3.0, 1.0, 35.0, 2.0, "100g")),
    ("rajma", record(127.0, 9.0, 0.5, 23.0, 6.0, "100g")),
    ("chole", record(164.0, 8.0, 2.6, 27.0, 8.0, "100g")),
    ("biryani", record(290.0, 12.0, 8.0, 45.0, 2.0, "1 cup")),
    // International
    ("bread", record(80.0, 4.0, 1.0, 15.0, 2.0, "1 slice")),
    ("toast", record(80.0, 4.0, 1.0, 15.0, 2.0, "1 slice")),
    ("pasta", record(220.0, 8.0, 1.5, 44.0, 3.0, "100g")),
    ("pizza", record(266.0, 11.0, 10.0, 33.0, 2.0, "1 slice")),
    ("burger", record(354.0, 16.0, 16.0, 35.0, 3.0, "1 piece")),
    ("sandwich", record(200.0, 8.0, 7.0, 28.0, 4.0, "1 piece")),
    ("salad", record(33.0, 3.0, 0.2, 6.0, 3.0, "100g")),
    // Fruits
    ("apple", record(52.0, 0.3, 0.2, 14.0, 2.4, "1 medium")),
    ("banana", record(89.0, 1.1, 0.3, 23.0, 2.6, "1 medium")),
    ("orange", record(47.0, 0.9, 0.1, 12.0, 2.4, "1 medium")),
    ("mango", record(60.0, 0.8, 0.4, 15.0, 1.6, "100g")),
    // Dairy
    ("milk", record(42.0, 3.4, 1.0, 5.0, 0.0, "100ml")),
    ("yogurt", record(59.0, 10.0, 0.4, 3.6, 0.0, "100g")),
    ("cheese", record(113.0, 7.0, 9.0, 1.0, 0.0, "1 slice")),
    // Proteins
    ("chicken breast", record(165.0, 31.0, 3.6, 0.0, 0.0, "100g")),
    ("fish", record(206.0, 22.0, 12.0, 0.0, 0.0, "100g")),
    ("salmon", record(208.0, 20.0, 13.0, 0.0, 0.0, "100g")),
    // Nuts and seeds
    ("almonds", record(579.0, 21.0, 50.0, 22.0, 12.0, "100g")),
    ("walnuts", record(654.0, 15.0, 65.0, 14.0, 7.0, "100g")),
    ("peanuts", record(567.0, 26.0, 49.0, 16.0, 8.0, "100g")),
    // Beverages
    ("tea", record(2.0, 0.0, 0.0, 0.7, 0.0, "1 cup")),
    ("coffee", record(2.0, 0.3, 0.0, 0.0, 0.0, "1 cup")),
    ("green tea", record(2.0, 0.5, 0.0, 0.0, 0.0, "1 cup")),
];

static KNOWLEDGE_BASE: Lazy<HashMap<&'static str, &'static NutrientRecord>> =
    Lazy::new(|| FOOD_ENTRIES.iter().map(|(name, rec)| (*name, rec)).collect());

/// Look up a canonical food name
pub fn lookup(canonical_name: &str) -> Option<&'static NutrientRecord> {
    KNOWLEDGE_BASE.get(canonical_name).copied()
}

/// Number of foods in the knowledge base
pub fn food_count() -> usize {
    FOOD_ENTRIES.len()
}

/// Iterate knowledge base entries in table order
pub fn entries() -> impl Iterator<Item = (&'static str, &'static NutrientRecord)> {
    FOOD_ENTRIES.iter().map(|(name, rec)| (*name, rec))
}

/// Coarse food category used when a name is not in the knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Grains,
    #[default]
    Vegetables,
    Fruits,
    Meat,
    Dairy,
    Nuts,
}

/// Keyword lists checked in order; the first category with a keyword
/// contained in the name wins.
const CATEGORY_KEYWORDS: &[(FoodCategory, &[&str])] = &[
    (FoodCategory::Grains, &["rice", "wheat", "bread"]),
    (FoodCategory::Meat, &["chicken", "meat", "fish"]),
    (FoodCategory::Dairy, &["milk", "cheese", "yogurt"]),
    (FoodCategory::Nuts, &["almond", "nut", "seed"]),
    (FoodCategory::Fruits, &["apple", "banana", "fruit"]),
];

const GRAINS_ESTIMATE: NutrientRecord = record(130.0, 3.0, 1.0, 27.0, 2.0, "serving");
const VEGETABLES_ESTIMATE: NutrientRecord = record(25.0, 2.0, 0.2, 5.0, 3.0, "serving");
const FRUITS_ESTIMATE: NutrientRecord = record(50.0, 0.5, 0.2, 13.0, 2.0, "serving");
const MEAT_ESTIMATE: NutrientRecord = record(200.0, 25.0, 10.0, 0.0, 0.0, "serving");
const DAIRY_ESTIMATE: NutrientRecord = record(60.0, 6.0, 3.0, 5.0, 0.0, "serving");
const NUTS_ESTIMATE: NutrientRecord = record(550.0, 20.0, 45.0, 15.0, 8.0, "serving");

impl FoodCategory {
    /// Classify a canonical food name by keyword containment
    pub fn classify(canonical_name: &str) -> Self {
        CATEGORY_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| canonical_name.contains(kw)))
            .map(|(category, _)| *category)
            .unwrap_or_default()
    }

    /// Per-serving estimate for this category
    pub fn estimate(self) -> &'static NutrientRecord {
        match self {
            FoodCategory::Grains => &GRAINS_ESTIMATE,
            FoodCategory::Vegetables => &VEGETABLES_ESTIMATE,
            FoodCategory::Fruits => &FRUITS_ESTIMATE,
            FoodCategory::Meat => &MEAT_ESTIMATE,
            FoodCategory::Dairy => &DAIRY_ESTIMATE,
            FoodCategory::Nuts => &NUTS_ESTIMATE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Grains => "grains",
            FoodCategory::Vegetables => "vegetables",
            FoodCategory::Fruits => "fruits",
            FoodCategory::Meat => "meat",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Nuts => "nuts",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_lookup_exact_key() {
        let roti = lookup("roti").unwrap();
        assert_eq!(roti.calories, 71.0);
        assert_eq!(roti.unit, "1 piece");

        let chicken = lookup("chicken breast").unwrap();
        assert_eq!(chicken.protein, 31.0);
    }

    #[test]
    fn test_lookup_is_exact_only() {
        assert!(lookup("Roti").is_none());
        assert!(lookup("rotis").is_none());
        assert!(lookup(" roti").is_none());
        assert!(lookup("chicken").is_none());
    }

    #[test]
    fn test_table_has_unique_canonical_keys() {
        assert_eq!(KNOWLEDGE_BASE.len(), FOOD_ENTRIES.len());
        for (name, _) in entries() {
            assert_eq!(name, name.trim().to_lowercase());
        }
    }

    #[test]
    fn test_all_values_non_negative() {
        for (name, rec) in entries() {
            for value in [rec.calories, rec.protein, rec.fat, rec.carbs, rec.fiber] {
                assert!(value >= 0.0, "{} has a negative nutrient", name);
            }
        }
    }

    #[rstest]
    #[case("brown rice", FoodCategory::Grains)]
    #[case("wheat flakes", FoodCategory::Grains)]
    #[case("garlic bread", FoodCategory::Grains)]
    #[case("chicken tikka", FoodCategory::Meat)]
    #[case("minced meat", FoodCategory::Meat)]
    #[case("fish fry", FoodCategory::Meat)]
    #[case("milkshake", FoodCategory::Dairy)]
    #[case("cottage cheese", FoodCategory::Dairy)]
    #[case("greek yogurt", FoodCategory::Dairy)]
    #[case("almond butter", FoodCategory::Nuts)]
    #[case("cashew nut", FoodCategory::Nuts)]
    #[case("sunflower seed", FoodCategory::Nuts)]
    #[case("apple pie", FoodCategory::Fruits)]
    #[case("banana chips", FoodCategory::Fruits)]
    #[case("dragon fruit", FoodCategory::Fruits)]
    #[case("xyzfood", FoodCategory::Vegetables)]
    #[case("", FoodCategory::Vegetables)]
    fn test_classify(#[case] name: &str, #[case] expected: FoodCategory) {
        assert_eq!(FoodCategory::classify(name), expected);
    }

    #[rstest]
    #[case("chicken rice", FoodCategory::Grains)]
    #[case("fish and cheese", FoodCategory::Meat)]
    #[case("milk with almonds", FoodCategory::Dairy)]
    #[case("peanut banana", FoodCategory::Nuts)]
    fn test_classify_keyword_priority(#[case] name: &str, #[case] expected: FoodCategory) {
        assert_eq!(FoodCategory::classify(name), expected);
    }

    #[test]
    fn test_category_estimates() {
        assert_eq!(FoodCategory::Vegetables.estimate().calories, 25.0);
        assert_eq!(FoodCategory::Nuts.estimate().fat, 45.0);
        assert_eq!(FoodCategory::Meat.estimate().carbs, 0.0);
        assert_eq!(FoodCategory::Grains.estimate().unit, "serving");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(FoodCategory::Dairy.to_string(), "dairy");
        assert_eq!(FoodCategory::default(), FoodCategory::Vegetables);
    }
}
