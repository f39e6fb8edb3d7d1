use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{MarketDataBody, MarketDataParams},
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

/// Proxies one `news` or `bars` request to the upstream provider.
///
/// Repeated parameters keep their first value, so no query string is
/// rejected before the credentials check.
#[utoipa::path(
    get,
    path = "/api/market-data",
    params(MarketDataParams),
    responses(
        (status = 200, description = "Normalized news or upstream bars", body = MarketDataBody),
        (status = 400, description = "Invalid type, missing symbol or bad limit", body = crate::error::ErrorBody),
        (status = 500, description = "Missing credentials, upstream failure or timeout", body = crate::error::ErrorBody)
    )
)]
pub async fn get_market_data(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<MarketDataBody>> {
    let params = MarketDataParams::from_pairs(pairs);
    let response = tokio::time::timeout(
        state.request_timeout,
        state.market_data_service.handle(&params.into()),
    )
    .await
    .map_err(|_| ApiError::Timeout(state.request_timeout))??;
    Ok(Json(response.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/market-data", get(get_market_data))
        // Path the dashboard has always called
        .route("/alpaca", get(get_market_data))
}
