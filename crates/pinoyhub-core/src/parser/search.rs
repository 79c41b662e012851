//! Search results parser for pinoymovieshub.ph
//!
//! Results are `article` items inside `div#archive-content`.

use scraper::{Html, Selector};

use crate::types::CatalogEntry;

use super::listing::parse_listing;

/// Parse search results from the `/?s=` page HTML.
///
/// # Arguments
/// * `html` - Raw HTML content of the search results page
/// * `base_url` - Site root used to normalize links
///
/// # Returns
/// Entries in page order, empty when the results container is missing
pub fn parse_search_results(html: &str, base_url: &str) -> Vec<CatalogEntry> {
    let document = Html::parse_document(html);

    let (Ok(container_selector), Ok(article_selector)) = (
        Selector::parse("div#archive-content"),
        Selector::parse("article"),
    ) else {
        return Vec::new();
    };

    match document.select(&container_selector).next() {
        Some(container) => parse_listing(container.select(&article_selector), base_url),
        None => Vec::new(),
    }
}
