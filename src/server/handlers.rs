use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{error, info};

use crate::scrape::{self, ScrapeError};
use crate::server::ApiState;
use crate::server::types::{
    ErrorResponse, HealthResponse, ScrapeQuery, ScrapeRequest, ScrapeResponse,
};

pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/scrape` with a JSON `{"url": ...}` body
pub async fn scrape_post(
    State(state): State<ApiState>,
    request: Result<Json<ScrapeRequest>, JsonRejection>,
) -> Result<Json<ScrapeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = request.map_err(|rejection| bad_request(rejection.body_text()))?;
    run_scrape(&state, &request.url).await
}

/// `GET /api/scrape?url=...`, same semantics as the POST wrapper
pub async fn scrape_get(
    State(state): State<ApiState>,
    query: Result<Query<ScrapeQuery>, QueryRejection>,
) -> Result<Json<ScrapeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Query(query) = query.map_err(|rejection| bad_request(rejection.body_text()))?;
    run_scrape(&state, &query.url).await
}

// missing or malformed request input; the wrapper always answers with the
// JSON error envelope, never a plain-text rejection
fn bad_request(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
}

async fn run_scrape(
    state: &ApiState,
    url: &str,
) -> Result<Json<ScrapeResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(url, "scrape request");
    match scrape::scrape_events(&state.client, url).await {
        Ok(events) => Ok(Json(ScrapeResponse { events })),
        Err(err) => {
            error!(url, %err, "scrape failed");
            Err((
                status_for(&err),
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            ))
        }
    }
}

fn status_for(err: &ScrapeError) -> StatusCode {
    match err {
        ScrapeError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        ScrapeError::Http(_) | ScrapeError::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
    }
}
