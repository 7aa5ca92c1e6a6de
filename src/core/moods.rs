/// Mood to Yelp category mapping
///
/// Each mood keyword selects a fixed, ordered set of Yelp category tags.
/// The table is static and never mutated at runtime. Unknown moods map to
/// an empty list, which means the upstream search runs unfiltered.
pub const MOOD_CATEGORIES: &[(&str, &[&str])] = &[
    ("comfort", &["comfortfood", "southern"]),
    ("spicy", &["thai", "indpak", "mexican"]),
    ("budget", &["foodtrucks", "hotdogs", "cheap"]),
    ("fancy", &["steak", "french", "sushi"]),
    ("clean", &["vegan", "salad", "healthy"]),
    ("sweet", &["desserts", "cupcakes", "icecream"]),
    ("random", &[]), // No filter
];

/// Look up the category tags for a mood keyword.
///
/// Returns the empty slice for unrecognized moods.
pub fn categories_for_mood(mood: &str) -> &'static [&'static str] {
    MOOD_CATEGORIES
        .iter()
        .find(|(name, _)| *name == mood)
        .map(|(_, categories)| *categories)
        .unwrap_or(&[])
}

/// Join a mood's categories into the comma-separated form Yelp expects.
pub fn category_filter(mood: &str) -> String {
    categories_for_mood(mood).join(",")
}
