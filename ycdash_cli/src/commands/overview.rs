use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use ycdash_lib::insights::overview_insights;
use ycdash_lib::stats::{ranked, year_over_year, STATUS_ACQUIRED, STATUS_ACTIVE, STATUS_INACTIVE};
use ycdash_lib::types::CompanyStats;
use ycdash_lib::{CachedClient, DashboardError, Snapshot};

use crate::output::{
    build_count_rows, build_insight_rows, build_year_rows, card, print_json, print_rows,
    total_card, CardRow, CountRow, InsightRow, OutputFormat, YearRow,
};

#[derive(Args)]
pub struct OverviewArgs {
    /// Read yc_ai_companies.json and yc_ai_stats.json from a local directory
    #[arg(long, conflicts_with = "live")]
    pub snapshot_dir: Option<PathBuf>,

    /// Aggregate the live tag list instead of a published snapshot
    #[arg(long)]
    pub live: bool,

    /// First year shown in the companies-per-year series
    #[arg(long, default_value = "2020")]
    pub since: i32,

    /// Number of countries to list
    #[arg(long, default_value = "10")]
    pub top: usize,
}

#[derive(Serialize)]
struct OverviewReport {
    cards: Vec<CardRow>,
    countries: Vec<CountRow>,
    years: Vec<YearRow>,
    statuses: Vec<CountRow>,
    insights: Vec<InsightRow>,
}

pub async fn run(
    args: &OverviewArgs,
    client: &Arc<CachedClient>,
    snapshot_url: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let snapshot = if let Some(dir) = &args.snapshot_dir {
        let dir = dir.clone();
        super::load("snapshot", async move { Snapshot::load_dir(&dir) }).await?
    } else if let (false, Some(url)) = (args.live, snapshot_url) {
        let client = Arc::clone(client);
        let url = url.to_string();
        super::load("snapshot", async move { client.get_snapshot(&url).await }).await?
    } else {
        let client = Arc::clone(client);
        super::load("companies", async move {
            let raw = client.get_ai_companies().await?;
            Ok::<_, DashboardError>(Snapshot::from_companies(&raw))
        })
        .await?
    };

    let report = build_report(&snapshot.stats, args.since, args.top);

    match format {
        OutputFormat::Json => print_json(&report),
        _ => {
            print_rows(Some("Overview"), report.cards, format)?;
            print_rows(Some("Top countries"), report.countries, format)?;
            print_rows(
                Some(format!("Companies per year since {}", args.since).as_str()),
                report.years,
                format,
            )?;
            print_rows(Some("Status"), report.statuses, format)?;
            print_rows(Some("Insights"), report.insights, format)?;
        }
    }
    Ok(())
}

fn build_report(stats: &CompanyStats, since: i32, top: usize) -> OverviewReport {
    let total = stats.total_companies;
    let status = |name: &str| stats.by_status.get(name).copied().unwrap_or(0);

    OverviewReport {
        cards: vec![
            total_card("Total companies", total, "AI startups"),
            card(STATUS_ACTIVE, status(STATUS_ACTIVE), total),
            card(STATUS_ACQUIRED, status(STATUS_ACQUIRED), total),
            card(STATUS_INACTIVE, status(STATUS_INACTIVE), total),
        ],
        countries: build_count_rows(&ranked(&stats.by_country, Some(top)), total),
        years: build_year_rows(&year_over_year(&stats.by_year, Some(since))),
        statuses: build_count_rows(&ranked(&stats.by_status, None), total),
        insights: build_insight_rows(&overview_insights(stats, since)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn stats() -> CompanyStats {
        CompanyStats {
            total_companies: 4,
            by_year: HashMap::from([("2019".to_string(), 1), ("2023".to_string(), 3)]),
            by_country: HashMap::from([
                ("United States".to_string(), 3),
                ("India".to_string(), 1),
            ]),
            by_status: HashMap::from([("Active".to_string(), 3), ("Acquired".to_string(), 1)]),
        }
    }

    #[test]
    fn test_build_report_sections() {
        let report = build_report(&stats(), 2020, 1);
        assert_eq!(report.cards.len(), 4);
        assert_eq!(report.countries.len(), 1);
        assert_eq!(report.years.len(), 1);
        assert_eq!(report.statuses.len(), 2);
        assert!(!report.insights.is_empty());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["cards"][0]["Value"], 4);
        assert_eq!(json["cards"][1]["Detail"], "75.0% of total");
        assert_eq!(json["cards"][3]["Value"], 0);
        assert_eq!(json["countries"][0]["Label"], "United States");
        assert_eq!(json["years"][0]["Year"], 2023);
    }

    #[test]
    fn test_build_report_empty_stats() {
        let report = build_report(&CompanyStats::default(), 2020, 10);
        assert!(report.countries.is_empty());
        assert!(report.years.is_empty());
        assert!(report.insights.is_empty());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["cards"][1]["Detail"], "0.0% of total");
    }
}
