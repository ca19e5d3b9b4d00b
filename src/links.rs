//! Normalize the links attendees type into their profile.

fn has_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Turn whatever an attendee typed for LinkedIn into a full URL. Bare
/// identifiers are assumed to be profile names.
pub fn linkedin_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }

    let normalized = if has_scheme(url) {
        url.to_string()
    } else if url.starts_with("www.") {
        format!("https://{}", url)
    } else if url.to_lowercase().starts_with("linkedin.com") {
        format!("https://www.{}", url)
    } else if url.starts_with('/') {
        format!("https://www.linkedin.com{}", url)
    } else if url.contains("/in/") || url.contains("/company/") {
        format!("https://www.linkedin.com/{}", url)
    } else {
        format!("https://www.linkedin.com/in/{}", url)
    };
    Some(normalized)
}

pub fn company_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }

    let normalized = if has_scheme(url) {
        url.to_string()
    } else if url.starts_with("www.") {
        format!("https://{}", url)
    } else {
        format!("https://www.{}", url)
    };
    Some(normalized)
}
