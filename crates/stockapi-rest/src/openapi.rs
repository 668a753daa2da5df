//! OpenAPI documentation configuration.
//!
//! This module provides OpenAPI/Swagger documentation generation for the REST API.

use crate::controllers::HealthResponse;
use stockapi_core::{ErrorResponse, StockRecord};
use stockapi_service::BuyingOptionResponse;
use utoipa::OpenApi;

/// OpenAPI documentation for the StockApi service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "StockApi",
        version = "1.0.0",
        description = "Stock prices and buying options served through a read-through cache",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Stock endpoints
        crate::controllers::stock_controller::get_all_tickers,
        crate::controllers::stock_controller::get_stock,
        crate::controllers::stock_controller::get_buying_option,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            StockRecord,
            BuyingOptionResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "stock", description = "Stock lookup endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_stock_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/api/stock/tickers"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/stock/{ticker}"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/stock/{ticker}/buy"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
