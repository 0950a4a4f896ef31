//! Library layer for the YC dashboard: normalization, statistics, search,
//! pagination and a cached API client.
//!
//! Wraps the `ycoss_api` crate with an in-memory TTL cache, snapshot
//! loading, and the pure transforms behind each dashboard view.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod insights;
pub mod normalize;
pub mod paginate;
pub mod region;
pub mod search;
pub mod snapshot;
pub mod stats;
pub mod validation;
pub mod view;

pub use ycoss_api;
pub use ycoss_api::types;
pub use ycoss_api::{DEFAULT_API_URL, DEFAULT_TAG};

pub use client::CachedClient;
pub use config::DashboardConfig;
pub use error::DashboardError;
pub use normalize::{extract_country, extract_year, normalize, normalize_all, Normalizer};
pub use paginate::{paginate, total_pages, Page};
pub use region::select_region;
pub use search::filter;
pub use snapshot::Snapshot;
pub use stats::{aggregate, aggregate_region, RegionStatistics};
pub use view::{LoadState, ViewLoader};
