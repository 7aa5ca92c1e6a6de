use crate::core::category_filter;
use crate::models::{ErrorResponse, HealthResponse, MoodSearchRequest, SearchRequest};
use crate::services::{BusinessSearch, GeocodeClient, YelpClient};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

const COORDINATE_SEARCH_LIMIT: u8 = 20;
const MOOD_SEARCH_LIMIT: u8 = 10;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub yelp: Arc<YelpClient>,
    pub geocode: Arc<GeocodeClient>,
}

/// Configure all search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/search", web::post().to(coordinate_search))
        .route("/mood-search", web::post().to(mood_search));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Coordinate-based search endpoint
///
/// POST /api/search
///
/// Request body:
/// ```json
/// {
///   "latitude": 40.7,
///   "longitude": -74.0,
///   "radius": 1000,
///   "categories": ["sushi"]
/// }
/// ```
///
/// Relays the Yelp response envelope verbatim on success.
async fn coordinate_search(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    if !req.is_complete() {
        tracing::info!(
            "Rejecting incomplete search request: latitude={:?}, longitude={:?}, radius={:?}, categories={:?}",
            req.latitude,
            req.longitude,
            req.radius,
            req.categories
        );
        return HttpResponse::BadRequest().json(ErrorResponse::new("Missing required fields."));
    }

    // is_complete checked above; the unwraps cannot fire
    let params = BusinessSearch {
        latitude: req.latitude.unwrap(),
        longitude: req.longitude.unwrap(),
        radius: req.radius,
        categories: Some(req.categories.clone().unwrap().join(",")),
        limit: COORDINATE_SEARCH_LIMIT,
    };

    match state.yelp.search(&params).await {
        Ok(envelope) => HttpResponse::Ok().json(envelope),
        Err(e) => {
            tracing::error!("Yelp API error: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch data from Yelp."))
        }
    }
}

/// Mood-based search endpoint
///
/// POST /api/mood-search
///
/// Request body:
/// ```json
/// {
///   "mood": "spicy",
///   "zip": "94103"
/// }
/// ```
/// or
/// ```json
/// {
///   "mood": "spicy",
///   "latitude": 40.7,
///   "longitude": -74.0
/// }
/// ```
///
/// The ZIP takes precedence when both location forms are present. Returns
/// only the listings array from the Yelp envelope.
async fn mood_search(
    state: web::Data<AppState>,
    req: web::Json<MoodSearchRequest>,
) -> impl Responder {
    if req.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("Mood is required."));
    }

    let (latitude, longitude) = if let Some(zip) = &req.zip {
        match state.geocode.resolve_postal_code(zip).await {
            Ok(Some(location)) => (location.latitude, location.longitude),
            Ok(None) => {
                tracing::info!("Postal code resolved to no results: {}", zip);
                return HttpResponse::BadRequest().json(ErrorResponse::new("Invalid ZIP code."));
            }
            Err(e) => {
                tracing::error!("Geocode error for {}: {}", zip, e);
                return HttpResponse::InternalServerError()
                    .json(ErrorResponse::new("Failed to perform mood-based search."));
            }
        }
    } else if let (Some(latitude), Some(longitude)) = (req.latitude, req.longitude) {
        (latitude, longitude)
    } else {
        return HttpResponse::BadRequest().json(ErrorResponse::new("ZIP or coordinates required."));
    };

    let params = BusinessSearch {
        latitude,
        longitude,
        radius: None,
        categories: Some(category_filter(&req.mood)),
        limit: MOOD_SEARCH_LIMIT,
    };

    tracing::debug!(
        "Mood search: mood={}, lat={}, lng={}, categories={:?}",
        req.mood,
        latitude,
        longitude,
        params.categories
    );

    match state.yelp.search_listings(&params).await {
        Ok(listings) => HttpResponse::Ok().json(listings),
        Err(e) => {
            tracing::error!("Mood search Yelp error: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to perform mood-based search."))
        }
    }
}
