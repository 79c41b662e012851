//! Poster grid parser for pinoymovieshub.ph
//!
//! Home page sections and search results share the same DooPlay `article`
//! markup:
//!
//! ```html
//! <article class="item movies">
//!   <div class="poster"><img src="..."><span class="quality">HD</span></div>
//!   <div class="data"><h3><a href="...">Title</a></h3><span>Jan. 05, 2021</span></div>
//! </article>
//! ```

use scraper::{ElementRef, Selector};

use crate::types::{CatalogEntry, ContentKind, Quality};
use crate::url::{fix_url, site_relative_path};

use super::{element_text, image_source, parse_trailing_year};

/// Quality label the site uses for TV shows
const TV_LABEL: &str = "TV";

/// Path prefix of series pages
const TV_SHOW_PREFIX: &str = "tvshow";

/// Parse a sequence of `article` items into catalog entries.
///
/// Items without a detail link are dropped; order is preserved.
pub fn parse_listing<'a, I>(items: I, base_url: &str) -> Vec<CatalogEntry>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    items
        .into_iter()
        .filter_map(|item| parse_listing_item(&item, base_url))
        .collect()
}

/// Parse a single `article` item.
///
/// # Returns
/// * `Some(entry)` when the data block carries a detail link
/// * `None` otherwise
pub fn parse_listing_item(item: &ElementRef, base_url: &str) -> Option<CatalogEntry> {
    let poster_selector = Selector::parse("div.poster").ok()?;
    let data_selector = Selector::parse("div.data").ok()?;
    let link_selector = Selector::parse("a").ok()?;

    let poster = item.select(&poster_selector).next();
    let data = item.select(&data_selector).next()?;

    let link = data.select(&link_selector).next()?;
    let url = fix_url(base_url, link.value().attr("href")?)?;

    let quality_label = poster
        .map(|p| extract_quality_label(&p))
        .unwrap_or_default();

    let kind = classify(&quality_label, &url, base_url);
    let title = element_text(&link);
    let year = extract_year(&data);
    let poster_url = poster
        .and_then(|p| extract_poster(&p))
        .and_then(|src| fix_url(base_url, &src));

    Some(CatalogEntry {
        title,
        url,
        poster_url,
        year,
        quality: Quality::from_label(&quality_label),
        kind,
    })
}

/// Decide movie vs. series from the quality badge and the link path.
fn classify(quality_label: &str, url: &str, base_url: &str) -> ContentKind {
    if site_relative_path(base_url, url).starts_with(TV_SHOW_PREFIX) {
        return ContentKind::Series;
    }

    if quality_label.eq_ignore_ascii_case(TV_LABEL) {
        ContentKind::Series
    } else {
        ContentKind::Movie
    }
}

/// Text of every `span.quality` badge in the poster block.
fn extract_quality_label(poster: &ElementRef) -> String {
    let Ok(selector) = Selector::parse("span.quality") else {
        return String::new();
    };

    poster
        .select(&selector)
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Year from the first `span` of the data block.
fn extract_year(data: &ElementRef) -> Option<i32> {
    let selector = Selector::parse("span").ok()?;
    let span = data.select(&selector).next()?;
    parse_trailing_year(&element_text(&span))
}

/// Poster image of the poster block.
fn extract_poster(poster: &ElementRef) -> Option<String> {
    let selector = Selector::parse("img").ok()?;
    let img = poster.select(&selector).next()?;
    image_source(&img)
}
