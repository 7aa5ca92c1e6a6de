// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::GeocodeResult;
pub use requests::{MoodSearchRequest, SearchRequest};
pub use responses::{ErrorResponse, HealthResponse};
