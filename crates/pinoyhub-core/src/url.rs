//! URL helpers for pinoymovieshub.ph
//!
//! Builds request URLs and normalizes the mix of absolute, protocol-relative
//! and root-relative hrefs the site emits.

/// Base URL for Pinoy Movies Hub
pub const PINOY_BASE_URL: &str = "https://pinoymovieshub.ph";

/// Path of the DooPlay player AJAX endpoint
pub const AJAX_PATH: &str = "/wp-admin/admin-ajax.php";

/// Turn an href from the page into an absolute URL.
///
/// Returns `None` for a missing or blank href.
///
/// # Examples
/// ```
/// use pinoyhub_core::url::fix_url;
///
/// let base = "https://pinoymovieshub.ph";
/// assert_eq!(
///     fix_url(base, "/movies/heneral-luna/").as_deref(),
///     Some("https://pinoymovieshub.ph/movies/heneral-luna/")
/// );
/// assert_eq!(
///     fix_url(base, "//cdn.example.com/p.jpg").as_deref(),
///     Some("https://cdn.example.com/p.jpg")
/// );
/// assert_eq!(fix_url(base, "  "), None);
/// ```
pub fn fix_url(base_url: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }

    if let Some(rest) = href.strip_prefix("//") {
        return Some(format!("https://{}", rest));
    }

    let base = base_url.trim_end_matches('/');
    if href.starts_with('/') {
        Some(format!("{}{}", base, href))
    } else {
        Some(format!("{}/{}", base, href))
    }
}

/// Path of `url` relative to the site root, without the leading slash.
///
/// URLs on other hosts are returned unchanged.
pub fn site_relative_path<'a>(base_url: &str, url: &'a str) -> &'a str {
    let base = base_url.trim_end_matches('/');
    url.strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(url)
}

/// Build the search URL for a free-text query.
///
/// # Examples
/// ```
/// use pinoyhub_core::url::build_search_url;
///
/// assert_eq!(
///     build_search_url("https://pinoymovieshub.ph", "four sisters"),
///     "https://pinoymovieshub.ph/?s=four%20sisters"
/// );
/// ```
pub fn build_search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}/?s={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query)
    )
}

/// Build the player AJAX endpoint URL.
pub fn build_ajax_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), AJAX_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://pinoymovieshub.ph";

    #[test]
    fn test_fix_url_absolute() {
        assert_eq!(
            fix_url(BASE, "https://pinoymovieshub.ph/tvshows/abot-kamay/").as_deref(),
            Some("https://pinoymovieshub.ph/tvshows/abot-kamay/")
        );
        assert_eq!(
            fix_url(BASE, "http://other.site/x").as_deref(),
            Some("http://other.site/x")
        );
    }

    #[test]
    fn test_fix_url_relative() {
        assert_eq!(
            fix_url(BASE, "/movies/x/").as_deref(),
            Some("https://pinoymovieshub.ph/movies/x/")
        );
        assert_eq!(
            fix_url(BASE, "movies/x/").as_deref(),
            Some("https://pinoymovieshub.ph/movies/x/")
        );
        assert_eq!(
            fix_url("https://pinoymovieshub.ph/", "/movies/x/").as_deref(),
            Some("https://pinoymovieshub.ph/movies/x/")
        );
    }

    #[test]
    fn test_fix_url_blank() {
        assert_eq!(fix_url(BASE, ""), None);
        assert_eq!(fix_url(BASE, "   "), None);
    }

    #[test]
    fn test_site_relative_path() {
        assert_eq!(
            site_relative_path(BASE, "https://pinoymovieshub.ph/tvshows/abot-kamay/"),
            "tvshows/abot-kamay/"
        );
        assert_eq!(
            site_relative_path(BASE, "https://elsewhere.com/tvshows/x/"),
            "https://elsewhere.com/tvshows/x/"
        );
    }

    #[test]
    fn test_build_ajax_url() {
        assert_eq!(
            build_ajax_url(BASE),
            "https://pinoymovieshub.ph/wp-admin/admin-ajax.php"
        );
        assert_eq!(
            build_ajax_url("http://127.0.0.1:4000/"),
            "http://127.0.0.1:4000/wp-admin/admin-ajax.php"
        );
    }
}
