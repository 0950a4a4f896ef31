//! Static dashboard snapshot: normalized rows plus precomputed statistics.
//!
//! A snapshot is two JSON documents, `yc_ai_companies.json` and
//! `yc_ai_stats.json`, served next to the dashboard. They are written by
//! [`Snapshot::write_dir`] from a live fetch and read back with
//! [`Snapshot::load_dir`] or fetched over HTTP by the cached client.

use std::fs;
use std::path::Path;

use serde::Serialize;
use ycoss_api::types::{Company, CompanyStats, NormalizedCompany};
use ycoss_api::{SNAPSHOT_COMPANIES_FILE, SNAPSHOT_STATS_FILE};

use crate::error::DashboardError;
use crate::normalize::Normalizer;
use crate::stats::aggregate;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub companies: Vec<NormalizedCompany>,
    pub stats: CompanyStats,
}

impl Snapshot {
    /// Pairs rows with statistics loaded from elsewhere.
    ///
    /// The statistics are trusted as given; a mismatch with the rows is
    /// logged, not rejected.
    pub fn new(companies: Vec<NormalizedCompany>, stats: CompanyStats) -> Self {
        let snapshot = Self { companies, stats };
        if !snapshot.is_consistent() {
            tracing::warn!(
                "Snapshot statistics disagree with its {} company rows (stats total {})",
                snapshot.companies.len(),
                snapshot.stats.total_companies
            );
        }
        snapshot
    }

    /// Normalizes raw records with the default normalizer and aggregates them.
    pub fn from_companies(raw: &[Company]) -> Self {
        Self::from_companies_with(raw, &Normalizer::default())
    }

    pub fn from_companies_with(raw: &[Company], normalizer: &Normalizer) -> Self {
        Self::from_normalized(normalizer.normalize_all(raw))
    }

    /// Computes statistics for already-normalized rows.
    pub fn from_normalized(companies: Vec<NormalizedCompany>) -> Self {
        let stats = aggregate(&companies);
        Self { companies, stats }
    }

    /// Whether the statistics match a fresh aggregation of the rows.
    pub fn is_consistent(&self) -> bool {
        aggregate(&self.companies) == self.stats
    }

    /// Reads both snapshot documents from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, DashboardError> {
        let companies_path = dir.join(SNAPSHOT_COMPANIES_FILE);
        let stats_path = dir.join(SNAPSHOT_STATS_FILE);
        tracing::debug!("Loading snapshot from {}", dir.display());

        let companies: Vec<NormalizedCompany> =
            serde_json::from_str(&fs::read_to_string(&companies_path).map_err(|e| {
                tracing::error!("Failed to read {}: {}", companies_path.display(), e);
                e
            })?)?;
        let stats: CompanyStats =
            serde_json::from_str(&fs::read_to_string(&stats_path).map_err(|e| {
                tracing::error!("Failed to read {}: {}", stats_path.display(), e);
                e
            })?)?;
        Ok(Self::new(companies, stats))
    }

    /// Writes both documents into `dir`, creating it if needed.
    pub fn write_dir(&self, dir: &Path) -> Result<(), DashboardError> {
        fs::create_dir_all(dir)?;
        fs::write(
            dir.join(SNAPSHOT_COMPANIES_FILE),
            serde_json::to_string_pretty(&self.companies)?,
        )?;
        fs::write(
            dir.join(SNAPSHOT_STATS_FILE),
            serde_json::to_string_pretty(&self.stats)?,
        )?;
        tracing::info!(
            "Wrote snapshot of {} companies to {}",
            self.companies.len(),
            dir.display()
        );
        Ok(())
    }
}
