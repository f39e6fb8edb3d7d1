use std::{path::PathBuf, sync::Arc};

use crate::{
    config::Config,
    error::ErrorBody,
    main_lib::AppState,
    models::{BarsResponse, MarketDataBody, NewsItem, NewsResponse},
};
use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::OpenApi;

mod health;
mod market_data;

#[derive(OpenApi)]
#[openapi(
    paths(health::healthz, health::readyz, market_data::get_market_data),
    components(schemas(MarketDataBody, NewsResponse, BarsResponse, NewsItem, ErrorBody)),
    tags((name = "cryptodash"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(health::router())
        .merge(market_data::router());

    let mut router = Router::new()
        .nest("/api", api)
        .route(
            "/openapi.json",
            get(move || {
                let doc = openapi.clone();
                async move { Json(doc) }
            }),
        )
        .with_state(state);

    if let Some(static_dir) = &config.static_dir {
        let static_dir = PathBuf::from(static_dir);
        let index_file = static_dir.join("index.html");
        let static_service = ServeDir::new(static_dir).fallback(ServeFile::new(index_file));
        router = router.fallback_service(static_service);
    }

    router
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
}
