use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::cache::CacheStats;
use crate::dto::apod_dto::{ApodByDateQuery, RecentApodsQuery};
use crate::models::ApodResponse;
use crate::state::AppState;
use crate::utils::dates::{date_key, parse_date_key};
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};

/// Configura las rutas de APOD
pub fn create_apod_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_apod_by_date))
        .route("/today", get(get_today_apod))
        .route("/recent", get(get_recent_apods))
        .route("/cache/stats", get(get_cache_stats))
}

async fn get_today_apod(State(state): State<AppState>) -> AppResult<Json<ApodResponse>> {
    state
        .apod_service
        .fetch_by_today()
        .await?
        .map(Json)
        .ok_or_else(|| not_found_error("APOD", "today"))
}

/// `GET /api/apod?date=YYYY-MM-DD`; también montado en `/api/apod/`
pub async fn get_apod_by_date(
    State(state): State<AppState>,
    Query(query): Query<ApodByDateQuery>,
) -> AppResult<Json<ApodResponse>> {
    let raw = query
        .date
        .ok_or_else(|| bad_request_error("Query parameter 'date' is required (YYYY-MM-DD)"))?;
    let date = parse_date_key(&raw)
        .map_err(|_| bad_request_error("Query parameter 'date' must be formatted YYYY-MM-DD"))?;
    let key = date_key(date);

    state
        .apod_service
        .fetch_by_key(&key)
        .await?
        .map(Json)
        .ok_or_else(|| not_found_error("APOD", &key))
}

async fn get_recent_apods(
    State(state): State<AppState>,
    Query(query): Query<RecentApodsQuery>,
) -> AppResult<Json<Vec<ApodResponse>>> {
    let days = query
        .clamped_days()
        .map_err(|_| bad_request_error("Query parameter 'days' must be an integer"))?;
    let apods = state.apod_service.fetch_recent(days).await?;
    Ok(Json(apods))
}

async fn get_cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.apod_service.cache().stats().await)
}
