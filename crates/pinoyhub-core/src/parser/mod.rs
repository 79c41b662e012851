//! HTML parsers for pinoymovieshub.ph pages
//!
//! This module contains parsers for extracting data from the site's DooPlay pages:
//! - `date`: Free-text date heuristics
//! - `listing`: Poster grids shared by home page and search
//! - `home`: Home page sections
//! - `search`: Search results page
//! - `detail`: Movie / series detail page
//! - `episodes`: Episode rows of a series page

pub mod date;
pub mod detail;
pub mod episodes;
pub mod home;
pub mod listing;
pub mod search;

use scraper::ElementRef;

// Re-export main parsing functions
pub use date::{parse_date_from_string, parse_date_with_fallback_year};
pub use detail::{parse_detail_page, parse_playback_id};
pub use episodes::{parse_episode_row, parse_episodes, parse_numerando};
pub use home::{home_sections, parse_home_page, HomeSection};
pub use listing::{parse_listing, parse_listing_item};
pub use search::parse_search_results;

/// Text content of an element with whitespace collapsed to single spaces.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Image URL of an `img` element: `src`, or `data-src` when `src` is blank.
pub(crate) fn image_source(img: &ElementRef) -> Option<String> {
    let src = img.value().attr("src").map(str::trim).unwrap_or_default();
    if !src.is_empty() {
        return Some(src.to_string());
    }

    img.value()
        .attr("data-src")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Last `n` characters of `text`.
pub(crate) fn take_last_chars(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

/// Trailing four characters of `text` parsed as a year.
pub(crate) fn parse_trailing_year(text: &str) -> Option<i32> {
    take_last_chars(text.trim(), 4).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_take_last_chars() {
        assert_eq!(take_last_chars("Jan. 05, 2021", 4), "2021");
        assert_eq!(take_last_chars("21", 4), "21");
        assert_eq!(take_last_chars("", 4), "");
        assert_eq!(take_last_chars("abc", 0), "");
        assert_eq!(take_last_chars("Ene 5, 2020", 4), "2020");
    }

    #[test]
    fn test_parse_trailing_year() {
        assert_eq!(parse_trailing_year("  Mar. 10, 2019 "), Some(2019));
        assert_eq!(parse_trailing_year("2015"), Some(2015));
        assert_eq!(parse_trailing_year("N/A"), None);
        assert_eq!(parse_trailing_year(""), None);
    }

    #[test]
    fn test_element_text_collapses_whitespace() {
        let html = Html::parse_fragment("<p>  Four\n   <b>Sisters</b>  and a   Wedding </p>");
        let selector = Selector::parse("p").unwrap();
        let p = html.select(&selector).next().unwrap();
        assert_eq!(element_text(&p), "Four Sisters and a Wedding");
    }

    #[test]
    fn test_image_source_fallback() {
        let html = Html::parse_fragment(
            r#"<img id="a" src="https://x/a.jpg"><img id="b" src=" " data-src="https://x/b.jpg"><img id="c">"#,
        );
        let pick = |id: &str| {
            let selector = Selector::parse(&format!("img#{}", id)).unwrap();
            let img = html.select(&selector).next().unwrap();
            image_source(&img)
        };
        assert_eq!(pick("a").as_deref(), Some("https://x/a.jpg"));
        assert_eq!(pick("b").as_deref(), Some("https://x/b.jpg"));
        assert_eq!(pick("c"), None);
    }
}
