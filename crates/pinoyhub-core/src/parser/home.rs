//! Home page parser for pinoymovieshub.ph
//!
//! The home page is a fixed set of poster rows inside the first `div.module`.
//! Each row is located by its own selector and parsed with the listing parser.

use scraper::{ElementRef, Html, Selector};

use crate::types::{HomePageSection, ProviderSettings};

use super::listing::parse_listing;

/// A named home page row and the selector of its container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeSection {
    pub label: &'static str,
    pub selector: &'static str,
}

const SECTIONS: [HomeSection; 7] = [
    HomeSection {
        label: "Suggestion",
        selector: "div.items.featured",
    },
    HomeSection {
        label: "Pinoy Movies and TV",
        selector: "div.items.full",
    },
    HomeSection {
        label: "Action",
        selector: "div#genre_action",
    },
    HomeSection {
        label: "Comedy",
        selector: "div#genre_comedy",
    },
    HomeSection {
        label: "Romance",
        selector: "div#genre_romance",
    },
    HomeSection {
        label: "Horror",
        selector: "div#genre_horror",
    },
    HomeSection {
        label: "Drama",
        selector: "div#genre_drama",
    },
];

const ADULT_SECTION: HomeSection = HomeSection {
    label: "Rated-R 18+",
    selector: "div#genre_rated-r",
};

/// Home page rows in display order for the given settings.
///
/// The adult row is appended last, and only when `enable_adult` is set.
pub fn home_sections(settings: &ProviderSettings) -> Vec<HomeSection> {
    let mut sections = SECTIONS.to_vec();
    if settings.enable_adult {
        sections.push(ADULT_SECTION);
    }
    sections
}

/// Parse the home page into its non-empty sections.
///
/// # Arguments
/// * `html` - Raw HTML of the home page
/// * `base_url` - Site root used to normalize links
/// * `settings` - Provider settings (adult row toggle)
///
/// # Returns
/// Sections in declaration order; sections without entries are omitted.
pub fn parse_home_page(
    html: &str,
    base_url: &str,
    settings: &ProviderSettings,
) -> Vec<HomePageSection> {
    let document = Html::parse_document(html);
    let wrappers = content_wrappers(&document);

    let Ok(article_selector) = Selector::parse("article") else {
        return Vec::new();
    };

    home_sections(settings)
        .into_iter()
        .filter_map(|section| {
            let selector = Selector::parse(section.selector).ok()?;
            let mut items: Vec<ElementRef> = Vec::new();

            for wrapper in &wrappers {
                for container in wrapper.select(&selector) {
                    for article in container.select(&article_selector) {
                        if !items.iter().any(|seen| seen.id() == article.id()) {
                            items.push(article);
                        }
                    }
                }
            }

            let entries = parse_listing(items, base_url);
            tracing::debug!(
                section = section.label,
                count = entries.len(),
                "home section parsed"
            );

            if entries.is_empty() {
                return None;
            }

            Some(HomePageSection {
                label: section.label.to_string(),
                entries,
                display_horizontal: false,
            })
        })
        .collect()
}

/// Every full-width content block of the first `div.module`.
fn content_wrappers(document: &Html) -> Vec<ElementRef<'_>> {
    let (Ok(module_selector), Ok(content_selector)) = (
        Selector::parse("div.module"),
        Selector::parse("div.content.full_width_layout.full"),
    ) else {
        return Vec::new();
    };

    match document.select(&module_selector).next() {
        Some(module) => module.select(&content_selector).collect(),
        None => Vec::new(),
    }
}
