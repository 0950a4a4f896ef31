//! Frequency tables and summary counts over company sequences.
//!
//! All functions are single-pass reductions with no I/O. Tables are plain
//! hash maps, so key order is unspecified; use [`ranked`] or
//! [`chronological`] before display.

use std::collections::BTreeMap;

use serde::Serialize;
use ycoss_api::types::{Company, CompanyStats, FrequencyTable, NormalizedCompany};

use crate::normalize::{find_year, first_location_segment};

/// Bucket label for a missing country, status or industry.
pub const UNKNOWN: &str = "Unknown";

pub const STATUS_ACTIVE: &str = "Active";
pub const STATUS_ACQUIRED: &str = "Acquired";
pub const STATUS_INACTIVE: &str = "Inactive";

fn bump(table: &mut FrequencyTable, key: &str) {
    *table.entry(key.to_string()).or_default() += 1;
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        UNKNOWN
    } else {
        value
    }
}

/// Counts normalized records by year, country and status.
///
/// A record with no country or an empty status lands in the `Unknown`
/// bucket, so each table sums to `records.len()`.
pub fn aggregate(records: &[NormalizedCompany]) -> CompanyStats {
    let mut stats = CompanyStats {
        total_companies: records.len() as u64,
        ..CompanyStats::default()
    };
    for record in records {
        bump(&mut stats.by_year, &record.year.to_string());
        bump(
            &mut stats.by_country,
            or_unknown(record.country.as_deref().unwrap_or_default()),
        );
        bump(&mut stats.by_status, or_unknown(&record.status));
    }
    stats
}

/// Counts for a region view, computed from raw records.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct RegionStatistics {
    pub total: u64,
    pub active: u64,
    pub acquired: u64,
    pub inactive: u64,
    pub hiring: u64,
    /// First location segment. Records without a location are not counted.
    pub by_city: FrequencyTable,
    pub by_industry: FrequencyTable,
    /// Only records whose batch carries a four-digit year are counted.
    pub by_year: FrequencyTable,
    /// Records flagged as top companies, in input order.
    pub top_companies: Vec<Company>,
}

/// Builds region statistics in one pass over raw records.
pub fn aggregate_region(records: &[Company]) -> RegionStatistics {
    let mut stats = RegionStatistics {
        total: records.len() as u64,
        ..RegionStatistics::default()
    };
    for company in records {
        match company.status.as_str() {
            STATUS_ACTIVE => stats.active += 1,
            STATUS_ACQUIRED => stats.acquired += 1,
            STATUS_INACTIVE => stats.inactive += 1,
            _ => {}
        }
        if company.is_hiring {
            stats.hiring += 1;
        }
        if let Some(city) = first_location_segment(&company.all_locations) {
            bump(&mut stats.by_city, city);
        }
        bump(&mut stats.by_industry, or_unknown(&company.industry));
        if let Some(year) = find_year(&company.batch) {
            bump(&mut stats.by_year, &year.to_string());
        }
        if company.top_company {
            stats.top_companies.push(company.clone());
        }
    }
    stats
}

/// Entries sorted by count descending, ties broken by label, cut to `limit`.
pub fn ranked(table: &FrequencyTable, limit: Option<usize>) -> Vec<(String, u64)> {
    let mut sorted: Vec<(String, u64)> = table.iter().map(|(k, v)| (k.clone(), *v)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }
    sorted
}

/// Year buckets in ascending order, optionally from `since` onwards.
///
/// Keys that are not integers are skipped.
pub fn chronological(by_year: &FrequencyTable, since: Option<i32>) -> Vec<(i32, u64)> {
    let years: BTreeMap<i32, u64> = by_year
        .iter()
        .filter_map(|(k, v)| k.trim().parse::<i32>().ok().map(|y| (y, *v)))
        .filter(|(y, _)| since.map_or(true, |s| *y >= s))
        .collect();
    years.into_iter().collect()
}

/// `part` as a percentage of `total`, or 0 when `total` is zero.
pub fn share(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// One point of a companies-per-year series.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct YearGrowth {
    pub year: i32,
    pub count: u64,
    /// Percent change against the previous point; `None` for the first
    /// point or when the previous count was zero.
    pub change_pct: Option<f64>,
}

/// Companies per year with the change against the preceding year in the series.
pub fn year_over_year(by_year: &FrequencyTable, since: Option<i32>) -> Vec<YearGrowth> {
    let mut previous: Option<u64> = None;
    chronological(by_year, since)
        .into_iter()
        .map(|(year, count)| {
            let change_pct = match previous {
                Some(prev) if prev > 0 => Some((count as f64 - prev as f64) / prev as f64 * 100.0),
                _ => None,
            };
            previous = Some(count);
            YearGrowth {
                year,
                count,
                change_pct,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, year: i32, status: &str, country: Option<&str>) -> NormalizedCompany {
        NormalizedCompany {
            name: name.to_string(),
            batch: format!("Summer {}", year),
            year,
            status: status.to_string(),
            location: country.map(|c| format!("Somewhere, {}", c)),
            country: country.map(str::to_string),
        }
    }

    fn sample_rows() -> Vec<NormalizedCompany> {
        vec![
            row("A", 2023, "Active", Some("United States")),
            row("B", 2023, "Acquired", Some("India")),
            row("C", 2021, "Active", Some("United States")),
            row("D", 2022, "", None),
            row("E", 2021, "Inactive", Some("")),
        ]
    }

    fn raw(name: &str, batch: &str, status: &str, locations: &str, industry: &str) -> Company {
        Company {
            name: name.to_string(),
            batch: batch.to_string(),
            status: status.to_string(),
            all_locations: locations.to_string(),
            industry: industry.to_string(),
            ..Company::default()
        }
    }

    #[test]
    fn test_aggregate_counts() {
        let stats = aggregate(&sample_rows());
        assert_eq!(stats.total_companies, 5);
        assert_eq!(stats.by_year["2023"], 2);
        assert_eq!(stats.by_year["2021"], 2);
        assert_eq!(stats.by_year["2022"], 1);
        assert_eq!(stats.by_country["United States"], 2);
        assert_eq!(stats.by_country["India"], 1);
        assert_eq!(stats.by_status["Active"], 2);
    }

    #[test]
    fn test_aggregate_unknown_buckets() {
        let stats = aggregate(&sample_rows());
        assert_eq!(stats.by_country[UNKNOWN], 2);
        assert_eq!(stats.by_status[UNKNOWN], 1);
    }

    #[test]
    fn test_aggregate_every_dimension_sums_to_total() {
        let rows = sample_rows();
        let stats = aggregate(&rows);
        let n = rows.len() as u64;
        assert_eq!(stats.by_status.values().sum::<u64>(), n);
        assert_eq!(stats.by_country.values().sum::<u64>(), n);
        assert_eq!(stats.by_year.values().sum::<u64>(), n);
    }

    #[test]
    fn test_aggregate_no_zero_fill() {
        let stats = aggregate(&sample_rows());
        assert!(!stats.by_status.contains_key("Public"));
        assert!(!stats.by_year.contains_key("2020"));
    }

    #[test]
    fn test_aggregate_empty() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total_companies, 0);
        assert!(stats.by_year.is_empty());
        assert!(stats.by_country.is_empty());
        assert!(stats.by_status.is_empty());
    }

    #[test]
    fn test_aggregate_idempotent_and_order_independent() {
        let rows = sample_rows();
        let first = aggregate(&rows);
        let second = aggregate(&rows);
        assert_eq!(first, second);

        let mut reversed = rows.clone();
        reversed.reverse();
        assert_eq!(aggregate(&reversed), first);
    }

    #[test]
    fn test_aggregate_region() {
        let mut top = raw("Paisa", "Winter 2016", "Acquired", "Mumbai, Maharashtra, India", "Fintech");
        top.top_company = true;
        let mut hiring = raw("Sarvam", "Winter 2022", "Active", "Bengaluru, Karnataka, India", "Fintech");
        hiring.is_hiring = true;
        let records = vec![
            hiring,
            top,
            raw("Kirana", "", "Inactive", "Bengaluru, India", ""),
            raw("Nowhere", "Summer 2020", "Public", "", "B2B"),
        ];

        let stats = aggregate_region(&records);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.acquired, 1);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.hiring, 1);
        assert_eq!(stats.by_city["Bengaluru"], 2);
        assert_eq!(stats.by_city["Mumbai"], 1);
        assert_eq!(stats.by_city.values().sum::<u64>(), 3);
        assert_eq!(stats.by_industry["Fintech"], 2);
        assert_eq!(stats.by_industry[UNKNOWN], 1);
        assert_eq!(stats.by_industry.values().sum::<u64>(), 4);
        assert_eq!(stats.by_year["2022"], 1);
        assert_eq!(stats.by_year["2016"], 1);
        assert_eq!(stats.by_year["2020"], 1);
        assert_eq!(stats.by_year.values().sum::<u64>(), 3);
        assert_eq!(stats.top_companies.len(), 1);
        assert_eq!(stats.top_companies[0].name, "Paisa");
    }

    #[test]
    fn test_ranked_orders_by_count_then_label() {
        let mut table = FrequencyTable::new();
        table.insert("Mumbai".into(), 3);
        table.insert("Bengaluru".into(), 5);
        table.insert("Delhi".into(), 3);
        table.insert("Pune".into(), 1);

        let all = ranked(&table, None);
        assert_eq!(
            all,
            vec![
                ("Bengaluru".to_string(), 5),
                ("Delhi".to_string(), 3),
                ("Mumbai".to_string(), 3),
                ("Pune".to_string(), 1),
            ]
        );
        assert_eq!(ranked(&table, Some(2)).len(), 2);
        assert_eq!(ranked(&table, Some(10)).len(), 4);
    }

    #[test]
    fn test_chronological_filters_and_sorts() {
        let mut table = FrequencyTable::new();
        table.insert("2023".into(), 4);
        table.insert("2019".into(), 1);
        table.insert("2021".into(), 2);
        table.insert("n/a".into(), 9);

        assert_eq!(chronological(&table, None), vec![(2019, 1), (2021, 2), (2023, 4)]);
        assert_eq!(chronological(&table, Some(2020)), vec![(2021, 2), (2023, 4)]);
    }

    #[test]
    fn test_share() {
        assert_eq!(share(1, 4), 25.0);
        assert_eq!(share(0, 10), 0.0);
        assert_eq!(share(3, 0), 0.0);
    }

    #[test]
    fn test_year_over_year() {
        let mut table = FrequencyTable::new();
        table.insert("2020".into(), 0);
        table.insert("2021".into(), 10);
        table.insert("2022".into(), 15);
        table.insert("2023".into(), 12);

        let series = year_over_year(&table, None);
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].change_pct, None);
        assert_eq!(series[1].change_pct, None);
        assert_eq!(series[2].change_pct, Some(50.0));
        assert_eq!(series[3].change_pct, Some(-20.0));
    }
}
