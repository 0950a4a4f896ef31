//! Region selection over the full company directory.

use ycoss_api::types::Company;

/// Region shown by the region view when none is given.
pub const DEFAULT_REGION: &str = "India";

/// Whether `company` belongs to the region named by `marker`.
///
/// Matches when the location text contains `marker` as a substring or the
/// region list holds it exactly. Both checks are case-sensitive. The
/// location check is a plain substring test, so `"Indianapolis, IN, USA"`
/// matches `"India"` too.
pub fn in_region(company: &Company, marker: &str) -> bool {
    company.all_locations.contains(marker) || company.regions.iter().any(|r| r == marker)
}

/// Companies in the region, in input order.
pub fn select_region(companies: &[Company], marker: &str) -> Vec<Company> {
    companies
        .iter()
        .filter(|c| in_region(c, marker))
        .cloned()
        .collect()
}
