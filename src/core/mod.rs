// Core exports
pub mod moods;

pub use moods::{categories_for_mood, category_filter, MOOD_CATEGORIES};
