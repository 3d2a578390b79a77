use serde::{Deserialize, Serialize};

use crate::scrape::Event;

/// Body of `POST /api/scrape`
#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

/// Query of `GET /api/scrape`
#[derive(Debug, Deserialize)]
pub struct ScrapeQuery {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
