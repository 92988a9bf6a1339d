//! Domain name normalization and validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::validation::ValidationError;

/// Dot-separated labels of 1-63 alphanumerics/hyphens (no leading or trailing
/// hyphen) ending in an alphabetic top-level label of two or more characters.
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$")
        .expect("domain pattern is a valid regex")
});

/// Removes a leading `http://` or `https://` scheme, if any.
pub fn strip_scheme(domain: &str) -> &str {
    domain
        .strip_prefix("https://")
        .or_else(|| domain.strip_prefix("http://"))
        .unwrap_or(domain)
}

/// Normalizes user input into the stored form and validates it.
///
/// Surrounding whitespace, the scheme and a trailing slash are dropped before the
/// hostname pattern is applied.
pub fn normalize_domain(input: &str) -> Result<String, ValidationError> {
    let stripped = strip_scheme(input.trim());
    let stripped = stripped.strip_suffix('/').unwrap_or(stripped);

    if DOMAIN_PATTERN.is_match(stripped) {
        Ok(stripped.to_string())
    } else {
        Err(ValidationError::InvalidDomain(input.trim().to_string()))
    }
}

/// Returns the domain as a URL, prefixing `https://` unless a scheme is present.
pub fn with_scheme(domain: &str) -> String {
    if domain.contains("://") {
        domain.to_string()
    } else {
        format!("https://{}", domain)
    }
}
