//! Food name normalization
//!
//! Folds plurals and alternate spellings onto knowledge base keys.

/// Alternate surface form -> canonical key
pub const NORMALIZATION_TABLE: &[(&str, &str)] = &[
    ("rotis", "roti"),
    ("chapatis", "chapati"),
    ("eggs", "egg"),
    ("omelettes", "omelette"),
    ("breads", "bread"),
    ("apples", "apple"),
    ("bananas", "banana"),
    ("oranges", "orange"),
    ("parathas", "paratha"),
    ("dosas", "dosa"),
    ("idlis", "idli"),
    ("samosas", "samosa"),
    ("mangoes", "mango"),
    ("mangos", "mango"),
];

/// Lowercase, trim, and fold alternate spellings.
///
/// Names missing from the table are returned lowercased and trimmed; whether
/// they exist in the knowledge base is the caller's concern.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let trimmed = lowered.trim();

    NORMALIZATION_TABLE
        .iter()
        .find(|(alternate, _)| *alternate == trimmed)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or_else(|| trimmed.to_string())
}
