//! Episodes parser for pinoymovieshub.ph
//!
//! Series pages list episodes as `li` rows inside `div#episodes`:
//!
//! ```html
//! <li>
//!   <div class="imagen"><img src="..."></div>
//!   <div class="numerando">5 - 2</div>
//!   <div class="episodiotitle"><a href="...">Episode 5</a><span class="date">Jan. 05, 2021</span></div>
//! </li>
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::types::EpisodeEntry;
use crate::url::fix_url;

use super::date::parse_date_from_string;
use super::{element_text, image_source};

/// Parse every episode row of a series page.
///
/// # Returns
/// Episodes in document order; empty when `div#episodes` is missing
pub fn parse_episodes(document: &Html, base_url: &str) -> Vec<EpisodeEntry> {
    let (Ok(container_selector), Ok(row_selector)) =
        (Selector::parse("div#episodes"), Selector::parse("li"))
    else {
        return Vec::new();
    };

    let Some(container) = document.select(&container_selector).next() else {
        return Vec::new();
    };

    container
        .select(&row_selector)
        .filter_map(|row| parse_episode_row(&row, base_url))
        .collect()
}

/// Parse a single episode row.
///
/// # Returns
/// * `Some(episode)` when the row has a title link with an href
/// * `None` otherwise
pub fn parse_episode_row(row: &ElementRef, base_url: &str) -> Option<EpisodeEntry> {
    let title_selector = Selector::parse("div.episodiotitle").ok()?;
    let link_selector = Selector::parse("a").ok()?;

    let title_block = row.select(&title_selector).next()?;
    let link = title_block.select(&link_selector).next()?;
    let data_url = fix_url(base_url, link.value().attr("href")?)?;

    let (episode, season) = select_text(row, "div.numerando")
        .map(|text| parse_numerando(&text))
        .unwrap_or((None, None));

    let poster_url = Selector::parse("img")
        .ok()
        .and_then(|selector| row.select(&selector).next())
        .and_then(|img| image_source(&img))
        .and_then(|src| fix_url(base_url, &src));

    let date_text = select_text(row, "span.date");
    let air_date = parse_date_from_string(date_text.as_deref());

    Some(EpisodeEntry {
        title: element_text(&link),
        data_url,
        poster_url,
        season,
        episode,
        air_date,
    })
}

/// Decode a numerando label into `(episode, season)`.
///
/// The label is split on `-` and every part that parses as an integer is kept.
/// One number is the episode. With two or more the first is the episode and
/// the second the season, which is the order the site prints them in.
///
/// # Examples
/// ```
/// use pinoyhub_core::parser::parse_numerando;
///
/// assert_eq!(parse_numerando("5"), (Some(5), None));
/// assert_eq!(parse_numerando("5 - 2"), (Some(5), Some(2)));
/// assert_eq!(parse_numerando("x"), (None, None));
/// ```
pub fn parse_numerando(text: &str) -> (Option<i32>, Option<i32>) {
    let numbers: Vec<i32> = text
        .split('-')
        .filter_map(|part| part.trim().parse().ok())
        .collect();

    match numbers.as_slice() {
        [] => (None, None),
        [episode] => (Some(*episode), None),
        [episode, season, ..] => (Some(*episode), Some(*season)),
    }
}

/// Whitespace-collapsed text of the first match of `css` under `element`.
fn select_text(element: &ElementRef, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    element.select(&selector).next().map(|el| element_text(&el))
}
