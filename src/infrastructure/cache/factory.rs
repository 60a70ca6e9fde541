//! Cache factory for runtime backend selection

use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::cache::Cache;

use super::in_memory::{InMemoryCache, InMemoryCacheConfig};
use super::redis::{RedisCache, RedisCacheConfig};

/// Supported cache backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheType {
    /// In-memory cache using moka
    #[default]
    InMemory,
    /// Redis cache
    Redis,
}

impl std::fmt::Display for CacheType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheType::InMemory => write!(f, "in_memory"),
            CacheType::Redis => write!(f, "redis"),
        }
    }
}

impl std::str::FromStr for CacheType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in_memory" | "inmemory" | "in-memory" => Ok(CacheType::InMemory),
            "redis" => Ok(CacheType::Redis),
            _ => Err(DomainError::configuration(format!(
                "Unknown cache backend: {}. Valid backends: memory, redis",
                s
            ))),
        }
    }
}

/// Configuration for cache factory
#[derive(Debug, Clone, Default)]
pub struct CacheConfig {
    /// Backend to create
    pub cache_type: CacheType,
    /// Redis URL (required for the Redis backend)
    pub redis_url: Option<String>,
    /// Key prefix for namespacing (Redis)
    pub key_prefix: Option<String>,
    /// Maximum capacity (in-memory)
    pub max_capacity: Option<u64>,
}

impl CacheConfig {
    /// Creates a new configuration for the in-memory backend
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Creates a new configuration for the Redis backend
    pub fn redis(url: impl Into<String>) -> Self {
        Self {
            cache_type: CacheType::Redis,
            redis_url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Sets the key prefix
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }
}

/// Factory for creating cache instances
#[derive(Debug)]
pub struct CacheFactory;

impl CacheFactory {
    /// Creates a cache instance based on the configuration
    pub async fn create(config: &CacheConfig) -> Result<Arc<dyn Cache>, DomainError> {
        match config.cache_type {
            CacheType::InMemory => {
                let mut in_memory = InMemoryCacheConfig::default();

                if let Some(capacity) = config.max_capacity {
                    in_memory = in_memory.with_max_capacity(capacity);
                }

                Ok(Arc::new(InMemoryCache::with_config(in_memory)))
            }
            CacheType::Redis => {
                let url = config.redis_url.as_ref().ok_or_else(|| {
                    DomainError::configuration("Redis cache backend requires a URL")
                })?;

                let mut redis = RedisCacheConfig::new(url);

                if let Some(prefix) = &config.key_prefix {
                    redis = redis.with_key_prefix(prefix);
                }

                Ok(Arc::new(RedisCache::new(redis).await?))
            }
        }
    }
}
