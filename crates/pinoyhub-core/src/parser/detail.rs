//! Detail page parser for pinoymovieshub.ph
//!
//! A detail page is a movie unless it lists at least one episode.

use scraper::{ElementRef, Html, Selector};

use crate::types::{DetailResult, MovieDetail, SeriesDetail};
use crate::url::fix_url;

use super::episodes::parse_episodes;
use super::{element_text, parse_trailing_year};

/// Marker preceding the content id in the short-link href
const SHORTLINK_ID_MARKER: &str = "?p=";

/// Parse a detail page into a movie or series.
///
/// # Arguments
/// * `html` - Raw HTML of the detail page
/// * `url` - URL the page was fetched from
/// * `base_url` - Site root used to normalize links
pub fn parse_detail_page(html: &str, url: &str, base_url: &str) -> DetailResult {
    let document = Html::parse_document(html);
    let body = select_first(document.root_element(), "body");
    let header = body.and_then(|b| select_first(b, "div.sheader"));

    let poster_url = header
        .and_then(|h| select_first(h, "div.poster > img"))
        .and_then(|img| img.value().attr("src"))
        .and_then(|src| fix_url(base_url, src));

    let title = header
        .and_then(|h| select_first(h, "div.data > h1"))
        .map(|h1| element_text(&h1))
        .unwrap_or_default();

    let plot = body
        .and_then(|b| select_first(b, "div#info div.wp-content"))
        .map(|el| element_text(&el));

    let year = body
        .and_then(|b| select_first(b, "span.date"))
        .and_then(|el| parse_trailing_year(&element_text(&el)));

    let episodes = parse_episodes(&document, base_url);
    tracing::debug!(url, episodes = episodes.len(), "detail page parsed");

    if !episodes.is_empty() {
        return DetailResult::Series(SeriesDetail {
            title,
            url: url.to_string(),
            poster_url,
            year,
            plot,
            episodes,
        });
    }

    let playback_id = select_first(document.root_element(), "link[rel='shortlink']")
        .and_then(|link| link.value().attr("href"))
        .map(parse_playback_id)
        .unwrap_or_default();

    DetailResult::Movie(MovieDetail {
        title,
        url: url.to_string(),
        playback_id,
        poster_url,
        year,
        plot,
    })
}

/// Content id from a WordPress short-link href.
///
/// # Examples
/// ```
/// use pinoyhub_core::parser::parse_playback_id;
///
/// assert_eq!(parse_playback_id("https://pinoymovieshub.ph/?p=48213"), "48213");
/// assert_eq!(parse_playback_id("https://pinoymovieshub.ph/"), "");
/// ```
pub fn parse_playback_id(href: &str) -> String {
    href.find(SHORTLINK_ID_MARKER)
        .map(|idx| href[idx + SHORTLINK_ID_MARKER.len()..].trim().to_string())
        .unwrap_or_default()
}

fn select_first<'a>(element: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    element.select(&selector).next()
}
