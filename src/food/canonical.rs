//! Document-to-text canonicalization.
//!
//! [`create_embedding_text`] maps one [`FoodRecord`] to the single descriptive
//! string that gets embedded. The output is deterministic: sections appear in
//! a fixed order, each emitted only when its source field is present and
//! non-empty after cleaning, joined by `". "`. The embedding model sees this
//! text and nothing else, so the ordering and wording here directly shape
//! retrieval quality.

use serde_json::Value;

use super::constants::category_label;
use super::types::FoodRecord;

/// Hard cutoff for the joined directions text, in characters.
const DIRECTIONS_CHAR_LIMIT: usize = 500;

/// The upstream export encodes missing values as the literal strings "nan" or
/// "NaN" (an artifact of its numeric-library pipeline). Applies to
/// `description` and `majorIngredients` only.
fn is_missing_sentinel(value: &str) -> bool {
    matches!(value, "nan" | "NaN" | "")
}

/// Map a difficulty score to its display tier. Callers must filter out the
/// zero-means-unset case first.
fn difficulty_tier(complexity: f64) -> &'static str {
    if complexity < 3.0 {
        "very easy"
    } else if complexity < 5.0 {
        "easy"
    } else if complexity < 7.0 {
        "medium"
    } else {
        "hard"
    }
}

/// Collect the labels of the set boolean flags, preserving the given order.
fn flag_labels<'a>(flags: &[(bool, &'a str)]) -> Vec<&'a str> {
    flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, label)| *label)
        .collect()
}

/// Render the `majorIngredients` value, or `None` if it should be omitted.
///
/// Text values get every hyphen replaced with a space ("microwaved-sweet-potato"
/// reads as "microwaved sweet potato" to the model). Non-text values render via
/// their JSON representation. Empty and sentinel values are treated as absent.
fn major_ingredients_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !is_missing_sentinel(s) => Some(s.replace('-', " ")),
        Value::String(_) => None,
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(a) if a.is_empty() => None,
        Value::Object(o) if o.is_empty() => None,
        other => {
            let text = other.to_string();
            if is_missing_sentinel(&text) {
                None
            } else {
                Some(text)
            }
        }
    }
}

/// Build the canonical embedding text for one food document.
///
/// Pure and total: no I/O, no mutation, and no failure mode — every optional
/// field degrades to omission. Calling it twice on the same record yields
/// byte-identical output.
pub fn create_embedding_text(record: &FoodRecord) -> String {
    let mut parts: Vec<String> = Vec::new();

    // 1. Name
    if let Some(name) = record.name.as_deref().filter(|n| !n.is_empty()) {
        parts.push(format!("Name: {name}"));
    }

    // 2. Description
    if let Some(desc) = record
        .description
        .as_deref()
        .filter(|d| !is_missing_sentinel(d))
    {
        parts.push(format!("Description: {desc}"));
    }

    // 3. Categories — map codes through the fixed table, drop unmapped ones
    if let Some(categories) = &record.categories {
        let labels: Vec<&str> = categories
            .iter()
            .filter_map(|code| category_label(code))
            .collect();
        if !labels.is_empty() {
            parts.push(format!("Categories: {}", labels.join(", ")));
        }
    }

    // 4. Directions, joined and truncated
    if let Some(directions) = record.directions.as_ref().filter(|d| !d.is_empty()) {
        let joined = directions.join(" ");
        let truncated: String = joined.chars().take(DIRECTIONS_CHAR_LIMIT).collect();
        parts.push(format!("Instructions: {truncated}"));
    }

    let prop = &record.property;

    // 5. Meal types
    push_flag_section(
        &mut parts,
        "Meal types",
        &[
            (prop.is_breakfast, "breakfast"),
            (prop.is_lunch, "lunch"),
            (prop.is_dinner, "dinner"),
            (prop.is_snack, "snack"),
            (prop.is_dessert, "dessert"),
        ],
    );

    // 6. Dietary tags
    push_flag_section(
        &mut parts,
        "Dietary",
        &[
            (prop.is_high_protein, "high protein"),
            (prop.is_low_carb, "low carb"),
            (prop.is_low_fat, "low fat"),
            (prop.is_high_fiber, "high fiber"),
            (prop.is_low_sodium, "low sodium"),
        ],
    );

    // 7. Required equipment
    push_flag_section(
        &mut parts,
        "Cooking methods",
        &[
            (prop.needs_microwave, "microwave"),
            (prop.needs_oven, "oven"),
            (prop.needs_stove, "stove"),
            (prop.needs_grill, "grill"),
            (prop.needs_blender, "blender"),
            (prop.needs_slow_cooker, "slow cooker"),
        ],
    );

    // 8. Total time — rendered as stored, omitted unless strictly positive
    if let Some(minutes) = &prop.total_time {
        if minutes.as_f64().is_some_and(|m| m > 0.0) {
            parts.push(format!("Total time: {minutes} minutes"));
        }
    }

    // 9. Difficulty — complexity of exactly 0 means "unset", not "very easy"
    if let Some(complexity) = prop.complexity.filter(|&c| c != 0.0) {
        parts.push(format!("Difficulty: {}", difficulty_tier(complexity)));
    }

    // 10. Dish type
    push_flag_section(
        &mut parts,
        "Dish type",
        &[(prop.main_dish, "main dish"), (prop.side_dish, "side dish")],
    );

    // 11. Main ingredients
    if let Some(text) = prop
        .major_ingredients
        .as_ref()
        .and_then(major_ingredients_text)
    {
        parts.push(format!("Main ingredients: {text}"));
    }

    parts.join(". ")
}

fn push_flag_section(parts: &mut Vec<String>, heading: &str, flags: &[(bool, &str)]) {
    let labels = flag_labels(flags);
    if !labels.is_empty() {
        parts.push(format!("{heading}: {}", labels.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::types::FoodRecord;

    fn record(json: &str) -> FoodRecord {
        FoodRecord::from_json(json).unwrap()
    }

    #[test]
    fn empty_record_yields_empty_text() {
        assert_eq!(create_embedding_text(&FoodRecord::default()), "");
        assert_eq!(create_embedding_text(&record("{}")), "");
    }

    #[test]
    fn canonicalization_is_deterministic() {
        let r = record(
            r#"{"name": "Pho", "description": "Beef noodle soup",
                "property": {"isDinner": true, "complexity": 6}}"#,
        );
        assert_eq!(create_embedding_text(&r), create_embedding_text(&r));
    }

    #[test]
    fn end_to_end_soup_example() {
        let r = record(
            r#"{"name": "Soup",
                "property": {"isLunch": true, "needsStove": true, "totalTime": 20}}"#,
        );
        assert_eq!(
            create_embedding_text(&r),
            "Name: Soup. Meal types: lunch. Cooking methods: stove. Total time: 20 minutes"
        );
    }

    #[test]
    fn empty_name_is_omitted() {
        let r = record(r#"{"name": "", "description": "Tasty"}"#);
        assert_eq!(create_embedding_text(&r), "Description: Tasty");
    }

    #[test]
    fn nan_description_is_omitted() {
        for sentinel in ["nan", "NaN", ""] {
            let r = record(&format!(r#"{{"name": "X", "description": "{sentinel}"}}"#));
            assert_eq!(create_embedding_text(&r), "Name: X");
        }
    }

    #[test]
    fn categories_map_through_table_and_drop_unknown() {
        let r = record(r#"{"categories": ["soups", "unknown_code", "vegan"]}"#);
        assert_eq!(
            create_embedding_text(&r),
            "Categories: Soups & Stews, Vegan"
        );
    }

    #[test]
    fn all_unknown_categories_omit_section() {
        let r = record(r#"{"categories": ["unknown_code", "another"]}"#);
        assert_eq!(create_embedding_text(&r), "");
    }

    #[test]
    fn directions_join_with_space_and_truncate_to_500_chars() {
        let step = "Step one. "; // 10 chars
        let steps: Vec<String> = std::iter::repeat(step.to_string()).take(100).collect();
        let r = FoodRecord {
            directions: Some(steps),
            ..Default::default()
        };
        let text = create_embedding_text(&r);
        let payload = text.strip_prefix("Instructions: ").unwrap();
        assert_eq!(payload.chars().count(), 500);
    }

    #[test]
    fn short_directions_are_not_padded() {
        let r = record(r#"{"directions": ["Boil water.", "Add noodles."]}"#);
        assert_eq!(
            create_embedding_text(&r),
            "Instructions: Boil water. Add noodles."
        );
    }

    #[test]
    fn empty_directions_omit_section() {
        let r = record(r#"{"directions": []}"#);
        assert_eq!(create_embedding_text(&r), "");
    }

    #[test]
    fn meal_types_follow_fixed_order() {
        let r = record(
            r#"{"property": {"isDessert": true, "isBreakfast": true, "isSnack": true}}"#,
        );
        assert_eq!(
            create_embedding_text(&r),
            "Meal types: breakfast, snack, dessert"
        );
    }

    #[test]
    fn dietary_and_cooking_sections() {
        let r = record(
            r#"{"property": {
                "isHighProtein": true, "isLowSodium": true,
                "needsOven": true, "needsSlowCooker": true}}"#,
        );
        assert_eq!(
            create_embedding_text(&r),
            "Dietary: high protein, low sodium. Cooking methods: oven, slow cooker"
        );
    }

    #[test]
    fn total_time_zero_or_negative_is_omitted() {
        for t in ["0", "-5", "0.0"] {
            let r = record(&format!(r#"{{"property": {{"totalTime": {t}}}}}"#));
            assert_eq!(create_embedding_text(&r), "");
        }
    }

    #[test]
    fn total_time_renders_as_stored() {
        let r = record(r#"{"property": {"totalTime": 20.5}}"#);
        assert_eq!(create_embedding_text(&r), "Total time: 20.5 minutes");
    }

    #[test]
    fn complexity_zero_suppresses_difficulty() {
        let r = record(r#"{"property": {"complexity": 0}}"#);
        assert_eq!(create_embedding_text(&r), "");
    }

    #[test]
    fn difficulty_tier_boundaries() {
        let cases = [
            (2.9, "very easy"),
            (3.0, "easy"),
            (4.99, "easy"),
            (5.0, "medium"),
            (6.99, "medium"),
            (7.0, "hard"),
            (9.5, "hard"),
        ];
        for (complexity, tier) in cases {
            let r = record(&format!(r#"{{"property": {{"complexity": {complexity}}}}}"#));
            assert_eq!(
                create_embedding_text(&r),
                format!("Difficulty: {tier}"),
                "complexity {complexity}"
            );
        }
    }

    #[test]
    fn dish_type_section() {
        let r = record(r#"{"property": {"sideDish": true, "mainDish": true}}"#);
        assert_eq!(create_embedding_text(&r), "Dish type: main dish, side dish");
    }

    #[test]
    fn major_ingredients_hyphens_become_spaces() {
        let r = record(r#"{"property": {"majorIngredients": "microwaved-sweet-potato"}}"#);
        assert_eq!(
            create_embedding_text(&r),
            "Main ingredients: microwaved sweet potato"
        );
    }

    #[test]
    fn major_ingredients_sentinels_are_omitted() {
        for sentinel in [r#""nan""#, r#""NaN""#, r#""""#, "null", "false", "0", "[]"] {
            let r = record(&format!(
                r#"{{"property": {{"majorIngredients": {sentinel}}}}}"#
            ));
            assert_eq!(create_embedding_text(&r), "", "value {sentinel}");
        }
    }

    #[test]
    fn major_ingredients_non_text_renders_textually() {
        let r = record(r#"{"property": {"majorIngredients": 42}}"#);
        assert_eq!(create_embedding_text(&r), "Main ingredients: 42");
    }

    #[test]
    fn sections_keep_fixed_order_for_any_subset() {
        let r = record(
            r#"{"name": "Banh Mi",
                "description": "Crusty baguette sandwich",
                "categories": ["sandwiches"],
                "directions": ["Split the bread.", "Fill with pork"],
                "property": {
                    "isLunch": true,
                    "isHighProtein": true,
                    "needsOven": true,
                    "totalTime": 15,
                    "complexity": 2,
                    "mainDish": true,
                    "majorIngredients": "pork-pate-pickles"
                }}"#,
        );
        assert_eq!(
            create_embedding_text(&r),
            "Name: Banh Mi. Description: Crusty baguette sandwich. \
             Categories: Sandwiches & Wraps. Instructions: Split the bread. Fill with pork. \
             Meal types: lunch. Dietary: high protein. Cooking methods: oven. \
             Total time: 15 minutes. Difficulty: very easy. Dish type: main dish. \
             Main ingredients: pork pate pickles"
        );
    }
}
