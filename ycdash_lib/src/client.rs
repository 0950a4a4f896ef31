//! Caching wrapper around the API client.

use std::sync::Arc;
use std::time::Duration;

use ycoss_api::types::{ApiMeta, Company};
use ycoss_api::{Client, Endpoint, DEFAULT_TAG};

use crate::cache::MemoryCache;
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::snapshot::Snapshot;

/// API client wrapper that adds an in-memory cache.
///
/// Several views in one run often read the same document (the overview and
/// the directory both use the AI tag list); a cache hit bypasses the network
/// entirely. Failures are returned as-is: there is no retry or backoff.
pub struct CachedClient {
    inner: Client,
    companies: MemoryCache<Vec<Company>>,
    meta: MemoryCache<ApiMeta>,
}

impl CachedClient {
    /// Creates a new cached client using the public API URL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Client::new(),
            companies: MemoryCache::new(ttl),
            meta: MemoryCache::new(ttl),
        }
    }

    /// Creates a new cached client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str, ttl: Duration) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
            companies: MemoryCache::new(ttl),
            meta: MemoryCache::new(ttl),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::with_base_url(&config.api_url, config.cache_ttl)
    }

    async fn get_companies(
        &self,
        endpoint: Endpoint,
    ) -> Result<Arc<Vec<Company>>, DashboardError> {
        let cache_key = endpoint.to_string();

        if let Some(cached) = self.companies.get(&cache_key) {
            tracing::debug!("Cache hit for {}", cache_key);
            return Ok(cached);
        }

        let companies = match &endpoint {
            Endpoint::Tag(tag) => self.inner.get_tag_companies(tag).await?,
            Endpoint::AllCompanies => self.inner.get_all_companies().await?,
            other => {
                return Err(DashboardError::InvalidInput(format!(
                    "{} is not a company list",
                    other
                )))
            }
        };
        tracing::info!("Fetched {} companies from {}", companies.len(), cache_key);
        Ok(self.companies.set(cache_key, companies))
    }

    /// Fetches companies carrying `tag`, returning cached results when available.
    pub async fn get_tag_companies(&self, tag: &str) -> Result<Arc<Vec<Company>>, DashboardError> {
        self.get_companies(Endpoint::Tag(tag.to_string())).await
    }

    /// Fetches the AI-tagged companies, returning cached results when available.
    pub async fn get_ai_companies(&self) -> Result<Arc<Vec<Company>>, DashboardError> {
        self.get_tag_companies(DEFAULT_TAG).await
    }

    /// Fetches the full directory, returning cached results when available.
    pub async fn get_all_companies(&self) -> Result<Arc<Vec<Company>>, DashboardError> {
        self.get_companies(Endpoint::AllCompanies).await
    }

    /// Fetches dataset metadata, returning cached results when available.
    pub async fn get_meta(&self) -> Result<Arc<ApiMeta>, DashboardError> {
        let cache_key = Endpoint::Meta.to_string();
        if let Some(cached) = self.meta.get(&cache_key) {
            return Ok(cached);
        }
        let meta = self.inner.get_meta().await?;
        Ok(self.meta.set(cache_key, meta))
    }

    /// Fetches both snapshot documents under `snapshot_base` concurrently.
    ///
    /// The two requests are awaited jointly; if either fails the snapshot
    /// fails. Snapshots are static files and are not cached.
    pub async fn get_snapshot(&self, snapshot_base: &str) -> Result<Snapshot, DashboardError> {
        let (companies, stats) = tokio::try_join!(
            self.inner.get_snapshot_companies(snapshot_base),
            self.inner.get_snapshot_stats(snapshot_base),
        )?;
        Ok(Snapshot::new(companies, stats))
    }

    /// Removes all entries from the cache.
    pub fn clear_cache(&self) {
        self.companies.clear();
        self.meta.clear();
    }
}
