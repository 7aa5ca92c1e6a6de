use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when querying the Yelp Fusion API
#[derive(Debug, Error)]
pub enum YelpError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Parameters for a business search
///
/// The `term` is always the literal "restaurants"; category filtering travels
/// in the dedicated `categories` parameter. `radius` is in meters and only
/// sent for coordinate searches.
#[derive(Debug, Clone)]
pub struct BusinessSearch {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: Option<u32>,
    pub categories: Option<String>,
    pub limit: u8,
}

/// Yelp Fusion API client
///
/// Issues business-search queries authenticated with a bearer token and
/// relays the response envelope without interpreting the listings.
pub struct YelpClient {
    base_url: String,
    api_key: String,
    client: Client,
}

const SEARCH_TERM: &str = "restaurants";
const SORT_BY: &str = "best_match";

impl YelpClient {
    /// Create a new Yelp client
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Search for businesses around a point
    ///
    /// Returns the raw response envelope; callers decide whether to relay it
    /// verbatim or extract the `businesses` array.
    pub async fn search(&self, params: &BusinessSearch) -> Result<Value, YelpError> {
        let url = format!(
            "{}/businesses/search",
            self.base_url.trim_end_matches('/')
        );

        let mut query: Vec<(&str, String)> = vec![
            ("latitude", params.latitude.to_string()),
            ("longitude", params.longitude.to_string()),
        ];
        if let Some(radius) = params.radius {
            query.push(("radius", radius.to_string()));
        }
        query.push(("term", SEARCH_TERM.to_string()));
        if let Some(categories) = &params.categories {
            query.push(("categories", categories.clone()));
        }
        query.push(("limit", params.limit.to_string()));
        query.push(("sort_by", SORT_BY.to_string()));

        tracing::debug!("Searching Yelp: {} params: {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Yelp search failed: {} - {}", status, body);
            return Err(YelpError::ApiError(format!(
                "Business search failed: {}",
                status
            )));
        }

        let json: Value = response.json().await?;
        Ok(json)
    }

    /// Search and return only the listings array from the envelope
    pub async fn search_listings(&self, params: &BusinessSearch) -> Result<Value, YelpError> {
        let envelope = self.search(params).await?;

        envelope
            .get("businesses")
            .cloned()
            .ok_or_else(|| YelpError::InvalidResponse("Missing businesses array".into()))
    }
}
