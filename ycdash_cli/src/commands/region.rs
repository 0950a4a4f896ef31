use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use ycdash_lib::insights::region_insights;
use ycdash_lib::stats::{ranked, year_over_year, STATUS_ACQUIRED, STATUS_ACTIVE, STATUS_INACTIVE};
use ycdash_lib::types::Company;
use ycdash_lib::{aggregate_region, select_region, validation, CachedClient, RegionStatistics};

use crate::output::{
    build_count_rows, build_insight_rows, build_region_company_rows, build_year_rows, card,
    print_json, print_rows, total_card, CardRow, CountRow, InsightRow, OutputFormat,
    RegionCompanyRow, YearRow,
};

#[derive(Args)]
pub struct RegionArgs {
    /// Region marker matched against locations and region lists (case-sensitive)
    #[arg(long)]
    pub marker: Option<String>,

    /// First year shown in the companies-per-year series
    #[arg(long, default_value = "2015")]
    pub since: i32,

    /// Number of cities to list
    #[arg(long, default_value = "10")]
    pub top_cities: usize,

    /// Number of industries to list
    #[arg(long, default_value = "8")]
    pub top_industries: usize,

    /// List every company in the region, not only the top companies
    #[arg(long)]
    pub list: bool,
}

#[derive(Serialize)]
struct RegionReport {
    region: String,
    cards: Vec<CardRow>,
    statuses: Vec<CountRow>,
    cities: Vec<CountRow>,
    industries: Vec<CountRow>,
    years: Vec<YearRow>,
    insights: Vec<InsightRow>,
    companies: Vec<RegionCompanyRow>,
}

pub async fn run(
    args: &RegionArgs,
    client: &Arc<CachedClient>,
    default_region: &str,
    format: &OutputFormat,
) -> Result<()> {
    let region = validation::validate_region(args.marker.as_deref().unwrap_or(default_region))?;

    let client = Arc::clone(client);
    let all = super::load("companies", async move { client.get_all_companies().await }).await?;

    let companies = select_region(&all, &region);
    let stats = aggregate_region(&companies);
    tracing::debug!("{} of {} companies matched {}", companies.len(), all.len(), region);

    let report = build_report(&region, &stats, &companies, args);

    match format {
        OutputFormat::Json => print_json(&report),
        _ => {
            let region = &report.region;
            print_rows(Some(format!("{} startups", region).as_str()), report.cards, format)?;
            print_rows(Some("Status"), report.statuses, format)?;
            print_rows(Some("Top cities"), report.cities, format)?;
            print_rows(Some("Top industries"), report.industries, format)?;
            print_rows(
                Some(format!("Companies per year since {}", args.since).as_str()),
                report.years,
                format,
            )?;
            print_rows(Some("Insights"), report.insights, format)?;
            let heading = if args.list { "Companies" } else { "Top companies" };
            print_rows(Some(heading), report.companies, format)?;
        }
    }
    Ok(())
}

fn build_report(
    region: &str,
    stats: &RegionStatistics,
    companies: &[Company],
    args: &RegionArgs,
) -> RegionReport {
    let total = stats.total;
    let listed = if args.list {
        companies
    } else {
        stats.top_companies.as_slice()
    };

    RegionReport {
        region: region.to_string(),
        cards: vec![
            total_card("Total companies", total, region),
            card(STATUS_ACTIVE, stats.active, total),
            card(STATUS_ACQUIRED, stats.acquired, total),
            card("Hiring", stats.hiring, total),
        ],
        statuses: build_count_rows(
            &[
                (STATUS_ACTIVE.to_string(), stats.active),
                (STATUS_ACQUIRED.to_string(), stats.acquired),
                (STATUS_INACTIVE.to_string(), stats.inactive),
            ],
            total,
        ),
        cities: build_count_rows(&ranked(&stats.by_city, Some(args.top_cities)), total),
        industries: build_count_rows(
            &ranked(&stats.by_industry, Some(args.top_industries)),
            total,
        ),
        years: build_year_rows(&year_over_year(&stats.by_year, Some(args.since))),
        insights: build_insight_rows(&region_insights(region, stats)),
        companies: build_region_company_rows(listed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str, location: &str, top: bool) -> Company {
        company_with_status(name, location, top, STATUS_ACTIVE)
    }

    fn company_with_status(name: &str, location: &str, top: bool, status: &str) -> Company {
        Company {
            name: name.to_string(),
            batch: "Winter 2022".to_string(),
            status: status.to_string(),
            all_locations: location.to_string(),
            industry: "Fintech".to_string(),
            top_company: top,
            ..Company::default()
        }
    }

    fn args(list: bool) -> RegionArgs {
        RegionArgs {
            marker: None,
            since: 2015,
            top_cities: 1,
            top_industries: 8,
            list,
        }
    }

    #[test]
    fn test_build_report_top_companies_only() {
        let companies = vec![
            company("Sarvam Stack", "Bengaluru, Karnataka, India", true),
            company_with_status("Paisa Pay", "Mumbai, India", false, STATUS_ACQUIRED),
            company_with_status("Kirana Cloud", "Bengaluru, India", false, STATUS_INACTIVE),
        ];
        let stats = aggregate_region(&companies);
        let report = build_report("India", &stats, &companies, &args(false));

        assert_eq!(report.cities.len(), 1);
        assert_eq!(report.companies.len(), 1);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["cities"][0]["Label"], "Bengaluru");
        assert_eq!(json["cities"][0]["Companies"], 2);
        assert_eq!(json["cards"][0]["Detail"], "India");
        assert_eq!(json["companies"][0]["Company"], "Sarvam Stack");

        assert_eq!(report.statuses.len(), 3);
        assert_eq!(json["statuses"][0]["Label"], "Active");
        assert_eq!(json["statuses"][1]["Label"], "Acquired");
        assert_eq!(json["statuses"][2]["Label"], "Inactive");
        assert_eq!(json["statuses"][2]["Companies"], 1);
        assert_eq!(json["statuses"][2]["Share"], "33.3%");
    }

    #[test]
    fn test_build_report_status_zero_counts_listed() {
        let companies = vec![company("Sarvam Stack", "Bengaluru, India", true)];
        let stats = aggregate_region(&companies);
        let report = build_report("India", &stats, &companies, &args(false));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["statuses"][0]["Companies"], 1);
        assert_eq!(json["statuses"][2]["Label"], "Inactive");
        assert_eq!(json["statuses"][2]["Companies"], 0);
        assert_eq!(json["statuses"][2]["Share"], "0.0%");
    }

    #[test]
    fn test_build_report_list_all() {
        let companies = vec![
            company("Sarvam Stack", "Bengaluru, India", true),
            company("Paisa Pay", "Mumbai, India", false),
        ];
        let stats = aggregate_region(&companies);
        let report = build_report("India", &stats, &companies, &args(true));
        assert_eq!(report.companies.len(), 2);
    }
}
