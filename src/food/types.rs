//! Food document type definitions.
//!
//! Defines [`FoodRecord`] (the subset of a food document the canonicalizer
//! reads) and [`FoodProperty`] (the nested `property` mapping). Every field is
//! individually optional: documents come from an upstream catalog where any
//! field may be missing, and extra fields are ignored on deserialization.

use serde::Deserialize;
use serde_json::Value;

/// The canonicalizer's view of a food document.
///
/// Deserialized from the raw JSON document stored alongside each record.
/// Unknown top-level fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub directions: Option<Vec<String>>,
    #[serde(default)]
    pub property: FoodProperty,
}

/// The `property` sub-document: boolean tags plus time, difficulty, and
/// ingredient fields. Field names follow the upstream camelCase keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodProperty {
    // Meal types
    pub is_breakfast: bool,
    pub is_lunch: bool,
    pub is_dinner: bool,
    pub is_snack: bool,
    pub is_dessert: bool,

    // Dietary tags
    pub is_high_protein: bool,
    pub is_low_carb: bool,
    pub is_low_fat: bool,
    pub is_high_fiber: bool,
    pub is_low_sodium: bool,

    // Required equipment
    pub needs_microwave: bool,
    pub needs_oven: bool,
    pub needs_stove: bool,
    pub needs_grill: bool,
    pub needs_blender: bool,
    pub needs_slow_cooker: bool,

    /// Total preparation + cooking time in minutes. Kept as a JSON number so
    /// the canonical text renders it exactly as stored (integer or float).
    pub total_time: Option<serde_json::Number>,

    /// Difficulty score. A value of exactly 0 means "unset" upstream.
    pub complexity: Option<f64>,

    // Dish type
    pub main_dish: bool,
    pub side_dish: bool,

    /// Usually hyphen-delimited text ("microwaved-sweet-potato"), but the
    /// upstream export occasionally stores other JSON types here.
    pub major_ingredients: Option<Value>,
}

impl FoodRecord {
    /// Parse a record from a raw JSON document string.
    pub fn from_json(doc: &str) -> serde_json::Result<Self> {
        serde_json::from_str(doc)
    }
}
