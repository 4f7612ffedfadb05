//! Target URL normalization.
//!
//! Destinations are never rejected: anything without an `http://` or
//! `https://` prefix is coerced to HTTPS by prepending the scheme. The rest of
//! the URL is passed through unchecked.

const HTTP: &str = "http://";
const HTTPS: &str = "https://";

/// Ensures a target URL carries an explicit HTTP(S) scheme.
///
/// # Rules
///
/// 1. Surrounding whitespace is trimmed
/// 2. `http://` / `https://` prefixes are kept (an upper-case scheme is lowered)
/// 3. Anything else gets `https://` prepended
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_target_url("example.com"), "https://example.com");
/// assert_eq!(normalize_target_url("http://example.com"), "http://example.com");
/// ```
pub fn normalize_target_url(input: &str) -> String {
    let trimmed = input.trim();

    for scheme in [HTTPS, HTTP] {
        if let Some(prefix) = trimmed.get(..scheme.len())
            && prefix.eq_ignore_ascii_case(scheme)
        {
            return format!("{}{}", scheme, &trimmed[scheme.len()..]);
        }
    }

    format!("{HTTPS}{trimmed}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_gets_https() {
        assert_eq!(normalize_target_url("example.com"), "https://example.com");
    }

    #[test]
    fn test_bare_domain_with_path() {
        assert_eq!(
            normalize_target_url("newsite.org/menu?table=4"),
            "https://newsite.org/menu?table=4"
        );
    }

    #[test]
    fn test_https_kept() {
        assert_eq!(
            normalize_target_url("https://example.com/path"),
            "https://example.com/path"
        );
    }

    #[test]
    fn test_http_kept() {
        assert_eq!(
            normalize_target_url("http://example.com"),
            "http://example.com"
        );
    }

    #[test]
    fn test_uppercase_scheme_lowered() {
        assert_eq!(
            normalize_target_url("HTTPS://Example.com/Path"),
            "https://Example.com/Path"
        );
    }

    #[test]
    fn test_uppercase_http_not_double_prefixed() {
        assert_eq!(normalize_target_url("HTTP://x"), "http://x");
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(normalize_target_url("  example.com \n"), "https://example.com");
    }

    #[test]
    fn test_other_scheme_is_coerced_not_rejected() {
        assert_eq!(
            normalize_target_url("ftp://files.example.com"),
            "https://ftp://files.example.com"
        );
    }

    #[test]
    fn test_short_input_does_not_panic() {
        assert_eq!(normalize_target_url("ht"), "https://ht");
        assert_eq!(normalize_target_url(""), "https://");
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        assert_eq!(normalize_target_url("münchen.de"), "https://münchen.de");
    }
}
