//! Runtime configuration read from the environment.
//!
//! Every setting has a default, so an empty environment yields a working
//! configuration against the public API. Unparseable numbers fall back to
//! the default with a warning.

use std::time::Duration;

use ycoss_api::DEFAULT_API_URL;

use crate::region::DEFAULT_REGION;

pub const ENV_API_URL: &str = "YCDASH_API_URL";
pub const ENV_SNAPSHOT_URL: &str = "YCDASH_SNAPSHOT_URL";
pub const ENV_CACHE_TTL_SECS: &str = "YCDASH_CACHE_TTL_SECS";
pub const ENV_PAGE_SIZE: &str = "YCDASH_PAGE_SIZE";
pub const ENV_REGION: &str = "YCDASH_REGION";

/// Rows per page in the company directory table.
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the yc-oss API.
    pub api_url: String,
    /// Base URL serving `yc_ai_companies.json` and `yc_ai_stats.json`, if any.
    pub snapshot_url: Option<String>,
    pub cache_ttl: Duration,
    pub page_size: usize,
    /// Marker used by the region view.
    pub region: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            snapshot_url: None,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            region: DEFAULT_REGION.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Reads the `YCDASH_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            api_url: non_empty(ENV_API_URL).unwrap_or(defaults.api_url),
            snapshot_url: non_empty(ENV_SNAPSHOT_URL),
            cache_ttl: Duration::from_secs(parse_or(
                ENV_CACHE_TTL_SECS,
                non_empty(ENV_CACHE_TTL_SECS),
                DEFAULT_CACHE_TTL_SECS,
            )),
            page_size: parse_or(ENV_PAGE_SIZE, non_empty(ENV_PAGE_SIZE), DEFAULT_PAGE_SIZE),
            region: non_empty(ENV_REGION).unwrap_or(defaults.region),
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match raw {
        None => default,
        Some(val) => val.trim().parse::<T>().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unparseable {}={:?}", key, val);
            default
        }),
    }
}
