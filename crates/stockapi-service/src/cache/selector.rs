//! One-shot startup selection of the cache backend.

use super::{
    CacheKeys, CommittedCache, InMemoryStockCache, RemoteStore, SharedStockCache, StockCache,
};
use std::sync::Arc;
use stockapi_config::{CacheKind, CacheSettings};
use stockapi_core::{StockApiError, StockApiResult};
use tracing::{debug, error, info};

/// Value written by the liveness probe.
const PROBE_VALUE: &str = "1";

/// Chooses the cache backend once, at startup.
///
/// The configured kind is authoritative:
///
/// - [`CacheKind::Shared`] probes the remote store with a short-lived write.
///   Success commits the shared backend; any failure, or a missing store, is
///   returned as an error and the process must not start.
/// - [`CacheKind::Memory`] commits the in-memory backend without touching the
///   remote store.
///
/// There is no silent fallback from shared to memory.
pub struct CacheSelector;

impl CacheSelector {
    /// Runs the selection and returns the committed backend.
    pub async fn select(
        settings: &CacheSettings,
        remote: Option<Arc<dyn RemoteStore>>,
    ) -> StockApiResult<Arc<CommittedCache>> {
        let committed = match settings.kind {
            CacheKind::Memory => {
                if remote.is_some() {
                    debug!("Remote store provided but memory cache configured, not probing");
                }
                CommittedCache::memory(InMemoryStockCache::new())
            }
            CacheKind::Shared => {
                let remote = remote.ok_or_else(|| {
                    StockApiError::Configuration(
                        "Shared cache configured but no remote store is available".to_string(),
                    )
                })?;
                Self::probe(settings, remote.as_ref()).await?;
                CommittedCache::shared(SharedStockCache::new(remote, settings))
            }
        };

        info!(backend = committed.backend_name(), "Cache backend committed");
        Ok(Arc::new(committed))
    }

    /// Writes the probe key with its short TTL, bounded by that same TTL.
    async fn probe(settings: &CacheSettings, remote: &dyn RemoteStore) -> StockApiResult<()> {
        let key = CacheKeys::new(settings.key_prefix.clone()).probe(&settings.probe_key);
        let ttl = settings.probe_ttl();

        let outcome = tokio::time::timeout(ttl, remote.set_raw(&key, PROBE_VALUE, ttl))
            .await
            .map_err(|_| StockApiError::Timeout(format!("Cache probe exceeded {:?}", ttl)))
            .and_then(|result| result);

        match outcome {
            Ok(()) => {
                debug!(key = %key, "Shared cache probe succeeded");
                Ok(())
            }
            Err(e) => {
                error!(key = %key, error = %e, "Shared cache probe failed");
                Err(StockApiError::Cache(format!(
                    "Shared cache is configured but unreachable: {}",
                    e
                )))
            }
        }
    }
}
