//! Documents of the static dashboard snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Category label to occurrence count. Key order carries no meaning.
pub type FrequencyTable = HashMap<String, u64>;

/// Company record after year and country derivation.
///
/// This is also the row shape of `yc_ai_companies.json`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NormalizedCompany {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub batch: String,
    /// Four-digit cohort year.
    pub year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Raw location text, `None` when the source had none.
    #[serde(default)]
    pub location: Option<String>,
    /// Country derived from the last location segment.
    #[serde(default)]
    pub country: Option<String>,
}

/// Aggregate counts shown on the overview, and the body of `yc_ai_stats.json`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyStats {
    pub total_companies: u64,
    #[serde(default)]
    pub by_year: FrequencyTable,
    #[serde(default)]
    pub by_country: FrequencyTable,
    #[serde(default)]
    pub by_status: FrequencyTable,
}
