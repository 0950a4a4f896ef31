use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use ycdash_lib::insights::Insight;
use ycdash_lib::stats::{share, YearGrowth};
use ycdash_lib::types::{Company, NormalizedCompany};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct CompanyRow {
    #[tabled(rename = "Company Name")]
    #[serde(rename = "Company Name")]
    name: String,
    #[tabled(rename = "Batch")]
    #[serde(rename = "Batch")]
    batch: String,
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: i32,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    country: String,
    #[tabled(rename = "Location")]
    #[serde(rename = "Location")]
    location: String,
}

#[derive(Tabled, Serialize)]
pub struct RegionCompanyRow {
    #[tabled(rename = "Company")]
    #[serde(rename = "Company")]
    name: String,
    #[tabled(rename = "Batch")]
    #[serde(rename = "Batch")]
    batch: String,
    #[tabled(rename = "Industry")]
    #[serde(rename = "Industry")]
    industry: String,
    #[tabled(rename = "Location")]
    #[serde(rename = "Location")]
    location: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Hiring")]
    #[serde(rename = "Hiring")]
    hiring: String,
    #[tabled(rename = "Link")]
    #[serde(rename = "Link")]
    link: String,
}

#[derive(Tabled, Serialize)]
pub struct CountRow {
    #[tabled(rename = "Label")]
    #[serde(rename = "Label")]
    label: String,
    #[tabled(rename = "Companies")]
    #[serde(rename = "Companies")]
    count: u64,
    #[tabled(rename = "Share")]
    #[serde(rename = "Share")]
    share: String,
}

#[derive(Tabled, Serialize)]
pub struct YearRow {
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: i32,
    #[tabled(rename = "Companies")]
    #[serde(rename = "Companies")]
    count: u64,
    #[tabled(rename = "Change")]
    #[serde(rename = "Change")]
    change: String,
}

#[derive(Tabled, Serialize)]
pub struct CardRow {
    #[tabled(rename = "Metric")]
    #[serde(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: u64,
    #[tabled(rename = "Detail")]
    #[serde(rename = "Detail")]
    detail: String,
}

#[derive(Tabled, Serialize)]
pub struct InsightRow {
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Insight")]
    #[serde(rename = "Insight")]
    title: String,
    #[tabled(rename = "Detail")]
    #[serde(rename = "Detail")]
    description: String,
}

#[derive(Tabled, Serialize)]
pub struct MetaRow {
    #[tabled(rename = "Key")]
    #[serde(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

impl MetaRow {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

// -- Row builders --

pub fn build_company_rows(companies: &[&NormalizedCompany]) -> Vec<CompanyRow> {
    companies
        .iter()
        .map(|c| CompanyRow {
            name: c.name.clone(),
            batch: c.batch.clone(),
            year: c.year,
            status: c.status.clone(),
            country: c.country.clone().unwrap_or_else(|| "-".to_string()),
            location: c.location.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

pub fn build_region_company_rows(companies: &[Company]) -> Vec<RegionCompanyRow> {
    companies
        .iter()
        .map(|c| RegionCompanyRow {
            name: c.name.clone(),
            batch: c.batch.clone(),
            industry: if c.industry.is_empty() {
                "N/A".to_string()
            } else {
                c.industry.clone()
            },
            location: c.all_locations.clone(),
            status: c.status.clone(),
            hiring: if c.is_hiring { "yes" } else { "" }.to_string(),
            link: c.link().to_string(),
        })
        .collect()
}

pub fn build_count_rows(entries: &[(String, u64)], total: u64) -> Vec<CountRow> {
    entries
        .iter()
        .map(|(label, count)| CountRow {
            label: label.clone(),
            count: *count,
            share: format_pct(share(*count, total)),
        })
        .collect()
}

pub fn build_year_rows(series: &[YearGrowth]) -> Vec<YearRow> {
    series
        .iter()
        .map(|point| YearRow {
            year: point.year,
            count: point.count,
            change: point
                .change_pct
                .map(format_change)
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

/// A summary card: a count plus its share of `total`, like "42.0% of total".
pub fn card(metric: &str, value: u64, total: u64) -> CardRow {
    CardRow {
        metric: metric.to_string(),
        value,
        detail: format!("{} of total", format_pct(share(value, total))),
    }
}

pub fn total_card(metric: &str, value: u64, detail: &str) -> CardRow {
    CardRow {
        metric: metric.to_string(),
        value,
        detail: detail.to_string(),
    }
}

pub fn build_insight_rows(insights: &[Insight]) -> Vec<InsightRow> {
    insights
        .iter()
        .map(|i| InsightRow {
            category: i.category.clone(),
            title: i.title.clone(),
            description: i.description.clone(),
        })
        .collect()
}

// -- Output --

/// Prints rows in the requested format. Table and Markdown get an optional
/// heading line; JSON and CSV stay machine-readable.
pub fn print_rows<R: Tabled + Serialize>(
    title: Option<&str>,
    rows: Vec<R>,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            if let Some(title) = title {
                println!("{}", title);
            }
            println!("{}", Table::new(rows));
        }
        OutputFormat::Markdown => {
            if let Some(title) = title {
                println!("## {}\n", title);
            }
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}\n", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_pct(pct: f64) -> String {
    format!("{:.1}%", pct)
}

fn format_change(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{:.1}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}
