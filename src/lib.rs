//! Noms API - Restaurant discovery proxy for the RandomNoms app
//!
//! This library wires two public POST endpoints to two upstream REST APIs:
//! the Yelp Fusion business search and the OpenCage forward geocoder. A
//! caller supplies either raw coordinates or a mood keyword plus a location,
//! and the service relays ranked restaurant listings back.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{categories_for_mood, category_filter, MOOD_CATEGORIES};
pub use models::{ErrorResponse, GeocodeResult, MoodSearchRequest, SearchRequest};
pub use services::{BusinessSearch, GeocodeClient, YelpClient};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(categories_for_mood("fancy"), &["steak", "french", "sushi"]);
    }
}
