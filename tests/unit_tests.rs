// Unit tests for the RandomNoms search proxy

use noms_api::core::moods::{categories_for_mood, category_filter, MOOD_CATEGORIES};
use noms_api::models::{MoodSearchRequest, SearchRequest};
use validator::Validate;

#[test]
fn test_mood_table_covers_expected_keywords() {
    let keywords: Vec<&str> = MOOD_CATEGORIES.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        keywords,
        vec!["comfort", "spicy", "budget", "fancy", "clean", "sweet", "random"]
    );
}

#[test]
fn test_known_moods_map_in_table_order() {
    assert_eq!(category_filter("comfort"), "comfortfood,southern");
    assert_eq!(category_filter("spicy"), "thai,indpak,mexican");
    assert_eq!(category_filter("budget"), "foodtrucks,hotdogs,cheap");
    assert_eq!(category_filter("fancy"), "steak,french,sushi");
    assert_eq!(category_filter("clean"), "vegan,salad,healthy");
    assert_eq!(category_filter("sweet"), "desserts,cupcakes,icecream");
}

#[test]
fn test_unknown_mood_maps_to_no_filter() {
    assert!(categories_for_mood("nostalgic").is_empty());
    assert_eq!(category_filter("nostalgic"), "");
}

#[test]
fn test_mood_lookup_is_case_sensitive() {
    // Keywords are lowercase by contract; anything else is unrecognized
    assert!(categories_for_mood("Spicy").is_empty());
}

#[test]
fn test_search_request_requires_every_field() {
    let complete: SearchRequest = serde_json::from_str(
        r#"{"latitude":40.7,"longitude":-74.0,"radius":1000,"categories":["sushi"]}"#,
    )
    .unwrap();
    assert!(complete.is_complete());

    for missing in [
        r#"{"longitude":-74.0,"radius":1000,"categories":["sushi"]}"#,
        r#"{"latitude":40.7,"radius":1000,"categories":["sushi"]}"#,
        r#"{"latitude":40.7,"longitude":-74.0,"categories":["sushi"]}"#,
        r#"{"latitude":40.7,"longitude":-74.0,"radius":1000}"#,
        r#"{}"#,
    ] {
        let req: SearchRequest = serde_json::from_str(missing).unwrap();
        assert!(!req.is_complete(), "expected incomplete: {}", missing);
    }
}

#[test]
fn test_search_request_accepts_zero_coordinate_and_radius() {
    // Presence checks, not truthiness: 0 is a legitimate value
    let req: SearchRequest =
        serde_json::from_str(r#"{"latitude":0,"longitude":0.0,"radius":0,"categories":["pizza"]}"#)
            .unwrap();
    assert!(req.is_complete());
    assert_eq!(req.latitude, Some(0.0));
    assert_eq!(req.radius, Some(0));
}

#[test]
fn test_mood_search_request_requires_mood() {
    let missing: MoodSearchRequest = serde_json::from_str(r#"{"zip":"94103"}"#).unwrap();
    assert!(missing.validate().is_err());

    let empty: MoodSearchRequest =
        serde_json::from_str(r#"{"mood":"","zip":"94103"}"#).unwrap();
    assert!(empty.validate().is_err());

    let present: MoodSearchRequest =
        serde_json::from_str(r#"{"mood":"sweet","zip":"94103"}"#).unwrap();
    assert!(present.validate().is_ok());
}

#[test]
fn test_mood_search_request_parses_both_location_forms() {
    let by_zip: MoodSearchRequest =
        serde_json::from_str(r#"{"mood":"spicy","zip":"94103"}"#).unwrap();
    assert_eq!(by_zip.zip.as_deref(), Some("94103"));
    assert!(by_zip.latitude.is_none());

    let by_coords: MoodSearchRequest =
        serde_json::from_str(r#"{"mood":"spicy","latitude":40.7,"longitude":-74.0}"#).unwrap();
    assert!(by_coords.zip.is_none());
    assert_eq!(by_coords.latitude, Some(40.7));
    assert_eq!(by_coords.longitude, Some(-74.0));
}
