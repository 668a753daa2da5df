//! Application wiring.

use axum::Router;
use std::sync::Arc;
use stockapi_config::AppConfig;
use stockapi_core::StockApiResult;
use stockapi_repository::{FileStockDataSource, StockDataSource};
use stockapi_rest::{create_router, AppState};
use stockapi_service::{
    create_redis_pool, CacheSelector, RedisRemoteStore, RemoteStore, StockCache, StockService,
    StockServiceImpl,
};
use tracing::info;

/// A fully wired application, ready to serve.
pub struct App {
    router: Router,
    cache_backend: &'static str,
}

impl App {
    /// Builds the application from configuration.
    ///
    /// The cache backend is selected here, once. If the shared backend is
    /// configured and unreachable this returns an error and nothing is served.
    pub async fn build(config: &AppConfig) -> StockApiResult<Self> {
        let data_source: Arc<dyn StockDataSource> =
            Arc::new(FileStockDataSource::new(&config.data_source.path));
        info!("Stock data source: {}", config.data_source.path);

        let remote: Option<Arc<dyn RemoteStore>> = if config.cache.kind.is_shared() {
            let pool = create_redis_pool(&config.redis)?;
            Some(Arc::new(RedisRemoteStore::with_timeout(
                Arc::new(pool),
                config.cache.operation_timeout(),
            )))
        } else {
            None
        };

        let cache = CacheSelector::select(&config.cache, remote).await?;
        let cache_backend = cache.backend_name();

        let stock_service: Arc<dyn StockService> =
            Arc::new(StockServiceImpl::new(data_source, cache));
        let router = create_router(AppState::new(stock_service), &config.server);

        Ok(Self {
            router,
            cache_backend,
        })
    }

    /// Name of the committed cache backend.
    #[must_use]
    pub const fn cache_backend(&self) -> &'static str {
        self.cache_backend
    }

    /// Consumes the application, returning its router.
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }
}
