// Service exports
pub mod geocode;
pub mod yelp;

pub use geocode::{GeocodeClient, GeocodeError};
pub use yelp::{BusinessSearch, YelpClient, YelpError};
