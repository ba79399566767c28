use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::CacheConfig;
use crate::errors::Result;

/// Moka-backed in-memory cache. TTL is global, set at build time; the
/// per-item `ttl` argument is accepted for trait compatibility and ignored.
pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl MokaCacheWrapper {
    pub fn new(config: &CacheConfig) -> Self {
        let inner = Cache::builder()
            .max_capacity(config.memory.max_capacity)
            .time_to_live(std::time::Duration::from_secs(config.default_ttl))
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}",
            config.memory.max_capacity
        );
        Self { inner }
    }
}

pub fn create(config: &CacheConfig) -> Result<Arc<dyn ObjectCache>> {
    Ok(Arc::new(MokaCacheWrapper::new(config)))
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        if let Some(value) = self.inner.get(key).await {
            debug!("cache hit: {}", key);
            CacheResult::Found(value)
        } else {
            debug!("cache miss: {}", key);
            CacheResult::NotFound
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        self.inner.insert(key, value).await;
        if ttl != 0 {
            debug!("moka ignores per-item TTL, global TTL applies");
        }
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfig;

    fn test_cache() -> MokaCacheWrapper {
        MokaCacheWrapper::new(&CacheConfig {
            cache_type: "memory".to_string(),
            default_ttl: 60,
            memory: MemoryConfig { max_capacity: 64 },
        })
    }

    #[tokio::test]
    async fn insert_then_get() {
        let cache = test_cache();
        cache
            .insert_raw("token:1".to_string(), "usuario".to_string(), 0)
            .await;
        assert_eq!(
            cache.get_raw("token:1").await,
            CacheResult::Found("usuario".to_string())
        );
    }

    #[tokio::test]
    async fn remove_evicts_key() {
        let cache = test_cache();
        cache
            .insert_raw("token:2".to_string(), "usuario".to_string(), 0)
            .await;
        cache.remove("token:2").await;
        assert_eq!(cache.get_raw("token:2").await, CacheResult::NotFound);
    }
}
