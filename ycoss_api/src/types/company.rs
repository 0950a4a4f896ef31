//! Company records as published by the yc-oss API.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A single company from `/companies/all.json` or a `/tags/*.json` list.
///
/// The upstream data is scraped and uneven: any field may be missing or
/// `null`. Missing values deserialize to their defaults so a sparse record
/// never fails the whole document.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Company {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,

    /// Company display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,

    #[serde(deserialize_with = "null_as_default")]
    pub former_names: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub small_logo_thumb_url: String,

    #[serde(deserialize_with = "null_as_default")]
    pub website: String,

    /// Free-text locations, comma-separated, most specific first
    /// (e.g. `"Bengaluru, Karnataka, India"`).
    #[serde(deserialize_with = "null_as_default")]
    pub all_locations: String,

    #[serde(deserialize_with = "null_as_default")]
    pub long_description: String,

    #[serde(deserialize_with = "null_as_default")]
    pub one_liner: String,

    pub team_size: Option<u32>,

    /// Top-level industry label, e.g. `"B2B"` or `"Fintech"`.
    #[serde(deserialize_with = "null_as_default")]
    pub industry: String,

    #[serde(deserialize_with = "null_as_default")]
    pub subindustry: String,

    /// Unix timestamp of the launch post, when known.
    pub launched_at: Option<i64>,

    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub tags_highlighted: Vec<String>,

    /// Flagged by YC as a top company.
    #[serde(deserialize_with = "null_as_default")]
    pub top_company: bool,

    /// Currently advertising open roles.
    #[serde(rename = "isHiring", deserialize_with = "null_as_default")]
    pub is_hiring: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub nonprofit: bool,

    /// Cohort label such as `"Summer 2023"`.
    #[serde(deserialize_with = "null_as_default")]
    pub batch: String,

    /// Operating status: `Active`, `Acquired`, `Inactive`, `Public`, ...
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,

    #[serde(deserialize_with = "null_as_default")]
    pub industries: Vec<String>,

    /// Region names the company is listed under, e.g. `["India", "South Asia"]`.
    #[serde(deserialize_with = "null_as_default")]
    pub regions: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub stage: String,

    /// YC directory page.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,

    /// Per-company API document.
    #[serde(deserialize_with = "null_as_default")]
    pub api: String,
}

impl Company {
    /// Preferred outbound link: the company website, else its YC page.
    pub fn link(&self) -> &str {
        if self.website.is_empty() {
            &self.url
        } else {
            &self.website
        }
    }
}
