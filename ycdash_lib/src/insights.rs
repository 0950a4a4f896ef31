//! One-line text insights for the overview and region views.

use serde::Serialize;
use ycoss_api::types::CompanyStats;

use crate::stats::{chronological, ranked, share, RegionStatistics, STATUS_ACQUIRED, STATUS_ACTIVE, UNKNOWN};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Insight {
    pub category: String,
    pub title: String,
    pub description: String,
}

impl Insight {
    fn new(category: &str, title: &str, description: String) -> Self {
        Self {
            category: category.to_string(),
            title: title.to_string(),
            description,
        }
    }
}

/// Insights for the overview. Years before `since` are ignored for the peak.
pub fn overview_insights(stats: &CompanyStats, since: i32) -> Vec<Insight> {
    let total = stats.total_companies;
    if total == 0 {
        return Vec::new();
    }
    let mut insights = Vec::new();

    if let Some((country, count)) = ranked(&stats.by_country, None)
        .into_iter()
        .find(|(label, _)| label != UNKNOWN)
    {
        insights.push(Insight::new(
            "Geography",
            "Leading country",
            format!(
                "{} leads with {} companies ({:.1}% of total).",
                country,
                count,
                share(count, total)
            ),
        ));
    }

    let peak = chronological(&stats.by_year, Some(since))
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)));
    if let Some((year, count)) = peak {
        insights.push(Insight::new(
            "Growth",
            "Peak year",
            format!("{} saw the most new companies ({}) since {}.", year, count, since),
        ));
    }

    let active = stats.by_status.get(STATUS_ACTIVE).copied().unwrap_or(0);
    let acquired = stats.by_status.get(STATUS_ACQUIRED).copied().unwrap_or(0);
    insights.push(Insight::new(
        "Outcomes",
        "Survival",
        format!(
            "{:.1}% of companies remain active, while {} have been acquired.",
            share(active, total),
            acquired
        ),
    ));

    insights
}

/// Insights for a region view.
pub fn region_insights(region: &str, stats: &RegionStatistics) -> Vec<Insight> {
    let total = stats.total;
    if total == 0 {
        return Vec::new();
    }
    let mut insights = Vec::new();

    if let Some((city, count)) = ranked(&stats.by_city, Some(1)).into_iter().next() {
        insights.push(Insight::new(
            "Geography",
            "Startup hub",
            format!(
                "{} hosts {} companies ({:.1}% of {}).",
                city,
                count,
                share(count, total),
                region
            ),
        ));
    }

    let industries = ranked(&stats.by_industry, Some(2));
    let described: Vec<String> = industries
        .iter()
        .map(|(name, count)| format!("{} ({})", name, count))
        .collect();
    if !described.is_empty() {
        insights.push(Insight::new(
            "Industries",
            "Dominant sectors",
            format!("{} lead the {} ecosystem.", described.join(" and "), region),
        ));
    }

    insights.push(Insight::new(
        "Outcomes",
        "Survival",
        format!(
            "{:.1}% of companies remain active, with {} acquisitions.",
            share(stats.active, total),
            stats.acquired
        ),
    ));

    insights.push(Insight::new(
        "Talent",
        "Hiring",
        format!(
            "{} companies ({:.1}%) are actively hiring.",
            stats.hiring,
            share(stats.hiring, total)
        ),
    ));

    insights
}

#[cfg(test)]
mod tests {
    use ycoss_api::types::FrequencyTable;

    use super::*;

    fn table(pairs: &[(&str, u64)]) -> FrequencyTable {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn overview_insights_text() {
        let stats = CompanyStats {
            total_companies: 8,
            by_year: table(&[("2019", 9), ("2021", 2), ("2023", 5), ("2024", 1)]),
            by_country: table(&[(UNKNOWN, 5), ("United States", 2), ("India", 1)]),
            by_status: table(&[("Active", 6), ("Acquired", 2)]),
        };
        let insights = overview_insights(&stats, 2020);
        assert_eq!(insights.len(), 3);
        assert_eq!(
            insights[0].description,
            "United States leads with 2 companies (25.0% of total)."
        );
        assert_eq!(
            insights[1].description,
            "2023 saw the most new companies (5) since 2020."
        );
        assert_eq!(
            insights[2].description,
            "75.0% of companies remain active, while 2 have been acquired."
        );
    }

    #[test]
    fn peak_year_tie_prefers_earlier_year() {
        let stats = CompanyStats {
            total_companies: 4,
            by_year: table(&[("2021", 2), ("2022", 2)]),
            by_country: FrequencyTable::new(),
            by_status: FrequencyTable::new(),
        };
        let insights = overview_insights(&stats, 2020);
        assert_eq!(insights[0].title, "Peak year");
        assert!(insights[0].description.starts_with("2021"));
    }

    #[test]
    fn empty_stats_have_no_insights() {
        assert!(overview_insights(&CompanyStats::default(), 2020).is_empty());
        assert!(region_insights("India", &RegionStatistics::default()).is_empty());
    }

    #[test]
    fn region_insights_text() {
        let stats = RegionStatistics {
            total: 4,
            active: 2,
            acquired: 1,
            inactive: 1,
            hiring: 1,
            by_city: table(&[("Bengaluru", 2), ("Mumbai", 1)]),
            by_industry: table(&[("Fintech", 2), ("B2B", 1), (UNKNOWN, 1)]),
            by_year: FrequencyTable::new(),
            top_companies: Vec::new(),
        };
        let insights = region_insights("India", &stats);
        assert_eq!(insights.len(), 4);
        assert_eq!(
            insights[0].description,
            "Bengaluru hosts 2 companies (50.0% of India)."
        );
        assert_eq!(
            insights[1].description,
            "Fintech (2) and B2B (1) lead the India ecosystem."
        );
        assert_eq!(
            insights[3].description,
            "1 companies (25.0%) are actively hiring."
        );
    }
}
