//! Main application router.

use crate::{
    controllers::{health_controller, stock_controller},
    middleware::logging_middleware,
    openapi::ApiDoc,
    state::AppState,
};
use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use stockapi_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let router = Router::new()
        // Health endpoints
        .merge(health_controller::router())
        // Stock API
        .nest("/api/stock", stock_controller::router())
        .with_state(state)
        // Swagger UI and OpenAPI spec
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Root endpoint
        .route("/", get(root))
        // Add middleware layers
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with stock endpoints and Swagger UI at /swagger-ui");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "StockApi v1"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use chrono::NaiveDate;
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use serde_json::Value;
    use std::sync::Arc;
    use stockapi_config::CacheSettings;
    use stockapi_core::StockRecord;
    use stockapi_repository::InMemoryStockDataSource;
    use stockapi_service::{CacheSelector, StockServiceImpl};
    use tower::ServiceExt;

    fn record(ticker: &str, open: i64, close: i64) -> StockRecord {
        StockRecord {
            ticker: ticker.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 5, 9).unwrap(),
            open: Decimal::new(open, 2),
            close: Decimal::new(close, 2),
            high: Decimal::new(close + 120, 2),
            low: Decimal::new(open - 25, 2),
            volume: 1_000_000,
        }
    }

    async fn app() -> Router {
        let source = Arc::new(InMemoryStockDataSource::new(vec![
            record("AAPL", 19815, 20230),
            record("MSFT", 43110, 43873),
            record("GOOGL", 15402, 15277),
        ]));
        let cache = CacheSelector::select(&CacheSettings::default(), None)
            .await
            .unwrap();
        let service = Arc::new(StockServiceImpl::new(source, cache));

        create_router(AppState::new(service), &ServerConfig::default())
    }

    async fn get(uri: &str) -> Response {
        app()
            .await
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_stock() {
        let response = get("/api/stock/aapl").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["ticker"], "AAPL");
        assert_eq!(body["data"]["date"], "2025-05-09");
        assert_eq!(body["data"]["open"], "198.15");
        assert_eq!(body["data"]["close"], "202.30");
    }

    #[tokio::test]
    async fn test_get_unknown_stock() {
        let response = get("/api/stock/ZZZZ").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Ticker 'ZZZZ' not found.");
    }

    #[tokio::test]
    async fn test_get_all_tickers() {
        let response = get("/api/stock/tickers").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["data"], serde_json::json!(["AAPL", "MSFT", "GOOGL"]));
    }

    #[tokio::test]
    async fn test_buying_option() {
        let response = get("/api/stock/AAPL/buy?budget=1000").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["data"]["ticker"], "AAPL");
        assert_eq!(body["data"]["budget"], "1000");
        assert_eq!(body["data"]["shares"], 4);
    }

    #[tokio::test]
    async fn test_buying_option_rejects_zero_budget() {
        let response = get("/api/stock/AAPL/buy?budget=0").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json(response).await;
        assert_eq!(body["error"]["message"], "Budget must be greater than zero.");
    }

    #[tokio::test]
    async fn test_buying_option_rejects_missing_budget() {
        let response = get("/api/stock/AAPL/buy").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_buying_option_for_unknown_ticker() {
        let response = get("/api/stock/ZZZZ/buy?budget=1000").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_reports_cache_backend() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["cache_backend"], "memory");
    }

    #[tokio::test]
    async fn test_liveness_and_readiness() {
        assert_eq!(get("/live").await.status(), StatusCode::OK);
        assert_eq!(get("/ready").await.status(), StatusCode::OK);
    }
}
