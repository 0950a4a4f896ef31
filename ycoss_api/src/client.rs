//! HTTP client for the yc-oss static JSON API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    endpoint::{Endpoint, DEFAULT_TAG},
    types::{ApiMeta, Company, CompanyStats, NormalizedCompany},
    user_agent::get_user_agent,
    Error,
};

/// Default base URL of the public yc-oss API.
pub const DEFAULT_API_URL: &str = "https://yc-oss.github.io/api";

/// HTTP client for the yc-oss API and for static snapshot documents.
///
/// Every call is a plain unauthenticated GET. Each request builds a fresh
/// `reqwest::Client` with a 30-second timeout; there is no retry.
pub struct Client {
    /// Base URL for API endpoints. Defaults to [`DEFAULT_API_URL`].
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the public yc-oss API.
    pub fn new() -> Self {
        Self {
            base_api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for mirrors and wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    async fn get<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        tracing::debug!("GET {}", url);
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            Error::Decode {
                message: e.to_string(),
            }
        })
    }

    /// Fetches every company carrying `tag` (a slug such as `fintech`).
    pub async fn get_tag_companies(&self, tag: &str) -> Result<Vec<Company>, Error> {
        let url = Endpoint::Tag(tag.to_string()).url(&self.base_api_url)?;
        self.get::<Vec<Company>>(url).await
    }

    /// Fetches the AI-tagged companies that back the default dashboard.
    pub async fn get_ai_companies(&self) -> Result<Vec<Company>, Error> {
        self.get_tag_companies(DEFAULT_TAG).await
    }

    /// Fetches the unfiltered company directory.
    pub async fn get_all_companies(&self) -> Result<Vec<Company>, Error> {
        let url = Endpoint::AllCompanies.url(&self.base_api_url)?;
        self.get::<Vec<Company>>(url).await
    }

    /// Fetches dataset metadata.
    pub async fn get_meta(&self) -> Result<ApiMeta, Error> {
        let url = Endpoint::Meta.url(&self.base_api_url)?;
        self.get::<ApiMeta>(url).await
    }

    /// Fetches the normalized company rows of a snapshot served under `snapshot_base`.
    pub async fn get_snapshot_companies(
        &self,
        snapshot_base: &str,
    ) -> Result<Vec<NormalizedCompany>, Error> {
        let url = Endpoint::SnapshotCompanies.url(snapshot_base)?;
        self.get::<Vec<NormalizedCompany>>(url).await
    }

    /// Fetches the precomputed statistics of a snapshot served under `snapshot_base`.
    pub async fn get_snapshot_stats(&self, snapshot_base: &str) -> Result<CompanyStats, Error> {
        let url = Endpoint::SnapshotStats.url(snapshot_base)?;
        self.get::<CompanyStats>(url).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
