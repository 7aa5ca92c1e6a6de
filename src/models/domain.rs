use serde::{Deserialize, Serialize};

/// Geographic coordinates resolved from a postal code
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
}
