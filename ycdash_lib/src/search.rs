//! Free-text search over normalized company rows.

use ycoss_api::types::NormalizedCompany;

/// Returns `true` when the lowercased `needle` occurs in the record's name,
/// batch, country, status or location. `needle` must already be lowercase.
fn matches(record: &NormalizedCompany, needle: &str) -> bool {
    let fields = [
        Some(record.name.as_str()),
        Some(record.batch.as_str()),
        record.country.as_deref(),
        Some(record.status.as_str()),
        record.location.as_deref(),
    ];
    fields
        .into_iter()
        .any(|field| field.unwrap_or_default().to_lowercase().contains(needle))
}

/// Case-insensitive substring filter that keeps input order.
///
/// An empty query selects every record.
pub fn filter<'a>(records: &'a [NormalizedCompany], query: &str) -> Vec<&'a NormalizedCompany> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records.iter().filter(|r| matches(r, &needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, batch: &str, status: &str, country: Option<&str>, location: Option<&str>) -> NormalizedCompany {
        NormalizedCompany {
            name: name.to_string(),
            batch: batch.to_string(),
            year: 2021,
            status: status.to_string(),
            location: location.map(str::to_string),
            country: country.map(str::to_string),
        }
    }

    fn sample() -> Vec<NormalizedCompany> {
        vec![
            row("Acme", "W21", "Active", Some("US"), Some("NY")),
            row("Bolt Labs", "Summer 2022", "Acquired", Some("India"), Some("Bengaluru, India")),
            row("Ghost", "Unspecified", "", None, None),
            row("Zephyr", "Winter 2023", "Inactive", Some("United Kingdom"), Some("London, UK")),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let rows = sample();
        let out = filter(&rows, "");
        assert_eq!(out.len(), rows.len());
        for (a, b) in out.iter().zip(rows.iter()) {
            assert!(std::ptr::eq(*a, b));
        }
    }

    #[test]
    fn test_case_insensitive_name_match() {
        let rows = vec![row("Acme", "W21", "Active", Some("US"), Some("NY"))];
        let out = filter(&rows, "acme");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Acme");
    }

    #[test]
    fn test_matches_each_field() {
        let rows = sample();
        assert_eq!(filter(&rows, "SUMMER")[0].name, "Bolt Labs");
        assert_eq!(filter(&rows, "kingdom")[0].name, "Zephyr");
        assert_eq!(filter(&rows, "inactive")[0].name, "Zephyr");
        assert_eq!(filter(&rows, "bengaluru")[0].name, "Bolt Labs");
        assert_eq!(filter(&rows, "ny")[0].name, "Acme");
    }

    #[test]
    fn test_missing_fields_do_not_match() {
        let rows = sample();
        let out = filter(&rows, "unspecified");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Ghost");
        assert!(filter(&rows, "nowhere").is_empty());
    }

    #[test]
    fn test_preserves_relative_order() {
        let rows = sample();
        let names: Vec<&str> = filter(&rows, "a").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Bolt Labs", "Zephyr"]);
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let rows = sample();
        let names: Vec<&str> = filter(&rows, " ").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bolt Labs", "Zephyr"]);
    }
}
