//! Resource paths served by the yc-oss API and by a static dashboard snapshot.

use url::Url;

use crate::Error;

/// Tag whose company list backs the default dashboard.
pub const DEFAULT_TAG: &str = "artificial-intelligence";

/// File name of the normalized company list in a static snapshot.
pub const SNAPSHOT_COMPANIES_FILE: &str = "yc_ai_companies.json";

/// File name of the precomputed statistics in a static snapshot.
pub const SNAPSHOT_STATS_FILE: &str = "yc_ai_stats.json";

/// A JSON document the client knows how to fetch.
///
/// API endpoints resolve against the API base URL; snapshot documents
/// resolve against whatever base the snapshot is served from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Companies carrying a tag, e.g. `/tags/artificial-intelligence.json`.
    Tag(String),
    /// The unfiltered company directory.
    AllCompanies,
    /// Dataset metadata (`/meta.json`).
    Meta,
    /// Normalized company rows of a static snapshot.
    SnapshotCompanies,
    /// Precomputed statistics of a static snapshot.
    SnapshotStats,
}

impl Endpoint {
    /// Path of the document relative to its base, always starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Tag(tag) => format!("/tags/{}.json", tag),
            Endpoint::AllCompanies => "/companies/all.json".to_string(),
            Endpoint::Meta => "/meta.json".to_string(),
            Endpoint::SnapshotCompanies => format!("/{}", SNAPSHOT_COMPANIES_FILE),
            Endpoint::SnapshotStats => format!("/{}", SNAPSHOT_STATS_FILE),
        }
    }

    /// Joins the path onto `base`. A trailing slash on the base is ignored.
    pub fn url(&self, base: &str) -> Result<Url, Error> {
        let joined = format!("{}{}", base.trim_end_matches('/'), self.path());
        Url::parse(&joined).map_err(|e| {
            tracing::error!("Invalid URL constructed from {}: {}", joined, e);
            Error::InvalidUrl(joined.clone())
        })
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Tag(tag) => write!(f, "tag:{}", tag),
            Endpoint::AllCompanies => write!(f, "companies:all"),
            Endpoint::Meta => write!(f, "meta"),
            Endpoint::SnapshotCompanies => write!(f, "snapshot:companies"),
            Endpoint::SnapshotStats => write!(f, "snapshot:stats"),
        }
    }
}
