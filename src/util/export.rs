//! Export download URLs.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

/// Append `format=<format>` to `endpoint`, joining with `&` when the endpoint
/// already carries a query string. The format is passed through as given.
#[must_use]
pub fn export_url(endpoint: &str, format: &str) -> String {
    let separator = match endpoint.find('?') {
        Some(i) if i + 1 == endpoint.len() || endpoint.ends_with('&') => "",
        Some(_) => "&",
        None => "?",
    };
    format!("{endpoint}{separator}format={format}")
}
