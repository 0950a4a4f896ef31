//! Record normalization: raw directory entries into dashboard rows.
//!
//! Derives the cohort year from the batch label and the country from the
//! free-text location. Every function here is total: absent or malformed
//! input falls back to a default instead of failing.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;
use ycoss_api::types::{Company, NormalizedCompany};

/// First run of four ASCII digits, e.g. the `2023` in `"Summer 2023"`.
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{4}").unwrap());

/// Abbreviations that appear as the trailing location segment.
pub const DEFAULT_COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("USA", "United States"),
    ("US", "United States"),
    ("UK", "United Kingdom"),
    ("UAE", "United Arab Emirates"),
];

static STANDARD_ALIASES: LazyLock<CountryAliases> = LazyLock::new(CountryAliases::standard);

/// Lookup table from a country abbreviation to its canonical name.
///
/// Matching is exact and case-sensitive. Tokens without an entry pass
/// through unchanged.
#[derive(Clone, Debug, Default)]
pub struct CountryAliases {
    aliases: HashMap<String, String>,
}

impl CountryAliases {
    /// The built-in table from [`DEFAULT_COUNTRY_ALIASES`].
    pub fn standard() -> Self {
        DEFAULT_COUNTRY_ALIASES
            .iter()
            .fold(Self::default(), |table, (alias, country)| {
                table.with_alias(alias, country)
            })
    }

    /// Returns a copy of the table with one more (or a replaced) entry.
    pub fn with_alias(mut self, alias: &str, country: &str) -> Self {
        self.aliases.insert(alias.to_string(), country.to_string());
        self
    }

    /// Canonical name for `token`, or `token` itself when unmapped.
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.aliases.get(token).map(String::as_str).unwrap_or(token)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Current calendar year in local time, the fallback for unparseable batches.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Extracts the cohort year from a batch label, falling back to the current year.
pub fn extract_year(batch: &str) -> i32 {
    extract_year_with_fallback(batch, current_year())
}

/// Extracts the cohort year from a batch label, or returns `fallback`.
pub fn extract_year_with_fallback(batch: &str, fallback: i32) -> i32 {
    find_year(batch).unwrap_or(fallback)
}

/// The first four-digit run in `batch`, if there is one.
pub fn find_year(batch: &str) -> Option<i32> {
    YEAR_RE
        .find(batch)
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

/// Derives a country from a comma-separated location using the built-in aliases.
pub fn extract_country(location: &str) -> Option<String> {
    extract_country_with(location, &STANDARD_ALIASES)
}

/// Derives a country from the last comma-separated segment of `location`.
///
/// Returns `None` only for an empty location. A whitespace-only location
/// trims to an empty segment and yields `Some("")`, which aggregation
/// counts as unknown.
pub fn extract_country_with(location: &str, aliases: &CountryAliases) -> Option<String> {
    if location.is_empty() {
        return None;
    }
    let last = location.rsplit(',').next().unwrap_or(location).trim();
    Some(aliases.resolve(last).to_string())
}

/// First comma-separated segment of `location`, trimmed. Used as the city.
pub fn first_location_segment(location: &str) -> Option<&str> {
    if location.is_empty() {
        return None;
    }
    location.split(',').next().map(str::trim)
}

/// Settings for a normalization pass.
///
/// Pinning `fallback_year` makes a pass reproducible across a year boundary.
#[derive(Clone, Debug)]
pub struct Normalizer {
    aliases: CountryAliases,
    fallback_year: i32,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            aliases: CountryAliases::standard(),
            fallback_year: current_year(),
        }
    }
}

impl Normalizer {
    pub fn new(aliases: CountryAliases, fallback_year: i32) -> Self {
        Self {
            aliases,
            fallback_year,
        }
    }

    pub fn with_fallback_year(mut self, year: i32) -> Self {
        self.fallback_year = year;
        self
    }

    pub fn with_aliases(mut self, aliases: CountryAliases) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn normalize(&self, raw: &Company) -> NormalizedCompany {
        NormalizedCompany {
            name: raw.name.clone(),
            batch: raw.batch.clone(),
            year: extract_year_with_fallback(&raw.batch, self.fallback_year),
            status: raw.status.clone(),
            location: if raw.all_locations.is_empty() {
                None
            } else {
                Some(raw.all_locations.clone())
            },
            country: extract_country_with(&raw.all_locations, &self.aliases),
        }
    }

    pub fn normalize_all(&self, raw: &[Company]) -> Vec<NormalizedCompany> {
        raw.iter().map(|c| self.normalize(c)).collect()
    }
}

/// Normalizes one record with the built-in aliases and current-year fallback.
pub fn normalize(raw: &Company) -> NormalizedCompany {
    Normalizer::default().normalize(raw)
}

/// Normalizes a sequence, preserving order.
pub fn normalize_all(raw: &[Company]) -> Vec<NormalizedCompany> {
    Normalizer::default().normalize_all(raw)
}
