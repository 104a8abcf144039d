//! Free-text food input parser
//!
//! A line such as `"2 roti, 1 omelette"` is turned into quantity + food name
//! tokens. Parsing tries an ordered list of [`MatchStrategy`] values and the
//! first one that yields at least one token decides the whole line. A line
//! that mixes formats (`"2 roti, omelette"`) is therefore only partially
//! recognised; that is a known limitation, not a per-token decision.

use crate::normalize::normalize;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

static QUANTITY_THEN_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*([a-zA-Z\s]+)").expect("quantity-then-name pattern is valid")
});

static NAME_THEN_QUANTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z\s]+)\s*(\d+(?:\.\d+)?)").expect("name-then-quantity pattern is valid")
});

static NAME_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z\s]+").expect("name-only pattern is valid"));

static DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,&\s]+").expect("delimiter pattern is valid"));

/// Names shorter than this many characters are dropped by the name-only strategies
const MIN_NAME_LEN: usize = 3;

/// One quantity + food name pair extracted from an input line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedToken {
    pub quantity: f64,
    pub raw_food_name: String,
    pub canonical_food_name: String,
}

impl ParsedToken {
    fn new(quantity: f64, raw: &str) -> Self {
        Self {
            quantity,
            raw_food_name: raw.trim().to_string(),
            canonical_food_name: normalize(raw),
        }
    }
}

/// Parser behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Read `"roti 2"` as two rotis.
    ///
    /// Off by default: lines in that shape have always been read with the
    /// captures in quantity-then-name order, which yields a food named after
    /// the number with quantity 1. Flip only once the product decision is made.
    pub correct_name_then_quantity: bool,
}

/// Matchers in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    QuantityThenName,
    NameThenQuantity,
    NameOnly,
    DelimiterSplit,
}

impl MatchStrategy {
    pub const ORDER: [MatchStrategy; 4] = [
        MatchStrategy::QuantityThenName,
        MatchStrategy::NameThenQuantity,
        MatchStrategy::NameOnly,
        MatchStrategy::DelimiterSplit,
    ];

    /// Tokens this strategy extracts from the whole line, or `None` when it
    /// finds nothing usable.
    pub fn tokens(self, line: &str, options: ParserOptions) -> Option<Vec<ParsedToken>> {
        let tokens: Vec<ParsedToken> = match self {
            MatchStrategy::QuantityThenName => QUANTITY_THEN_NAME
                .captures_iter(line)
                .map(|caps| ParsedToken::new(parse_quantity(&caps[1]), &caps[2]))
                .collect(),
            MatchStrategy::NameThenQuantity => NAME_THEN_QUANTITY
                .captures_iter(line)
                .map(|caps| {
                    if options.correct_name_then_quantity {
                        ParsedToken::new(parse_quantity(&caps[2]), &caps[1])
                    } else {
                        ParsedToken::new(parse_quantity(&caps[1]), &caps[2])
                    }
                })
                .collect(),
            MatchStrategy::NameOnly => NAME_ONLY
                .find_iter(line)
                .map(|m| m.as_str())
                .filter(|name| name.trim().chars().count() >= MIN_NAME_LEN)
                .map(|name| ParsedToken::new(1.0, name))
                .collect(),
            MatchStrategy::DelimiterSplit => DELIMITERS
                .split(line)
                .filter(|word| word.chars().count() >= MIN_NAME_LEN)
                .map(|word| ParsedToken::new(1.0, word))
                .collect(),
        };

        let tokens: Vec<ParsedToken> = tokens
            .into_iter()
            .filter(|t| !t.canonical_food_name.is_empty())
            .collect();

        if tokens.is_empty() {
            None
        } else {
            Some(tokens)
        }
    }
}

/// Parse a quantity, falling back to 1 for anything that is not a finite
/// positive number.
pub fn parse_quantity(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite() && *q > 0.0)
        .unwrap_or(1.0)
}

/// Food input parser
#[derive(Debug, Clone, Copy, Default)]
pub struct FoodInputParser {
    options: ParserOptions,
}

impl FoodInputParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Parse one input line. Never fails; an unusable line yields no tokens.
    pub fn parse(&self, line: &str) -> Vec<ParsedToken> {
        MatchStrategy::ORDER
            .iter()
            .find_map(|strategy| strategy.tokens(line, self.options))
            .unwrap_or_default()
    }
}

/// Parse with default options
pub fn parse(line: &str) -> Vec<ParsedToken> {
    FoodInputParser::default().parse(line)
}
