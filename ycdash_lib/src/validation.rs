use crate::error::DashboardError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_TAG_LENGTH: usize = 60;
pub const MAX_REGION_LENGTH: usize = 60;
pub const MAX_PAGE_SIZE: usize = 100;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, DashboardError> {
    if input.len() > max_len {
        return Err(DashboardError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(DashboardError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search query. A blank query is allowed and means "no filter".
pub fn validate_search(input: &str) -> Result<String, DashboardError> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a tag slug: lowercase ASCII letters, digits and hyphens.
///
/// Uppercase input and spaces are folded (`"Artificial Intelligence"` becomes
/// `artificial-intelligence`).
pub fn validate_tag(input: &str) -> Result<String, DashboardError> {
    let cleaned = sanitize_text(input, MAX_TAG_LENGTH)?;
    let slug = cleaned.to_lowercase().replace(' ', "-");
    if slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        Ok(slug)
    } else {
        Err(DashboardError::InvalidInput(format!(
            "invalid tag '{}'. Tags are slugs such as artificial-intelligence or fintech",
            input
        )))
    }
}

/// Validate a region marker such as `India`. Case is preserved.
pub fn validate_region(input: &str) -> Result<String, DashboardError> {
    sanitize_text(input, MAX_REGION_LENGTH)
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: usize) -> Result<usize, DashboardError> {
    if page < 1 {
        return Err(DashboardError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Validate page size (must be 1..=100).
pub fn validate_page_size(page_size: usize) -> Result<usize, DashboardError> {
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(DashboardError::InvalidInput(format!(
            "page_size must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(page_size)
}
