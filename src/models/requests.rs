use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for a coordinate-based restaurant search
///
/// All four fields are required. They are modeled as `Option` so the handler
/// can answer a missing field with the documented 400 message instead of a
/// deserialization error. Presence is what matters: a literal `0` coordinate
/// or radius is valid input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Search radius in meters
    pub radius: Option<u32>,
    pub categories: Option<Vec<String>>,
}

impl SearchRequest {
    /// True when every required field is present.
    pub fn is_complete(&self) -> bool {
        self.latitude.is_some()
            && self.longitude.is_some()
            && self.radius.is_some()
            && self.categories.is_some()
    }
}

/// Request for a mood-based restaurant search
///
/// `mood` is required; the location comes from either a ZIP code or a raw
/// latitude/longitude pair. When both are supplied the ZIP takes precedence.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MoodSearchRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub mood: String,
    pub zip: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
