//! Fixed category code → display label table.
//!
//! Category codes on food documents are short slugs assigned by the upstream
//! catalog. Codes not in this table are dropped during canonicalization rather
//! than rendered raw.

/// Category code to display label, in catalog order.
pub const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("rice-dishes", "Rice Dishes"),
    ("noodles", "Noodles & Pasta"),
    ("soups", "Soups & Stews"),
    ("salads", "Salads"),
    ("sandwiches", "Sandwiches & Wraps"),
    ("grilled", "Grilled & Roasted"),
    ("stir-fry", "Stir-fried"),
    ("steamed", "Steamed"),
    ("seafood", "Seafood"),
    ("poultry", "Poultry"),
    ("beef-pork", "Beef & Pork"),
    ("vegetarian", "Vegetarian"),
    ("vegan", "Vegan"),
    ("desserts", "Desserts & Sweets"),
    ("baked-goods", "Baked Goods"),
    ("drinks", "Drinks & Smoothies"),
    ("snacks", "Snacks & Appetizers"),
    ("sauces", "Sauces & Condiments"),
    ("breakfast-dishes", "Breakfast Dishes"),
    ("one-pot", "One-pot Meals"),
];

/// Look up the display label for a category code. Unknown codes map to `None`.
pub fn category_label(code: &str) -> Option<&'static str> {
    CATEGORY_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}
