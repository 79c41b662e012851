//! Pinoy Movies Hub Scraper Core Library
//!
//! This crate provides the scraping functionality for pinoymovieshub.ph,
//! a WordPress (DooPlay) streaming catalog.
//!
//! # Features
//! - Home page rows (featured, all titles, genres, optional Rated-R)
//! - Free-text search
//! - Detail pages resolved into movies or series with episodes
//! - Player link resolution handed off to a host [`StreamExtractor`]

pub mod client;
pub mod error;
pub mod extractor;
pub mod parser;
pub mod resolver;
pub mod scraper;
pub mod types;
pub mod url;

// Re-export main types for convenience
pub use self::scraper::{PinoyScraper, PROVIDER_LANGUAGE, PROVIDER_NAME};
pub use client::{ClientConfig, PinoyClient};
pub use error::{PinoyError, Result};
pub use extractor::{LinkReceivers, LinkSink, StreamExtractor, StreamLink, SubtitleFile};
pub use types::{
    CatalogEntry, ContentKind, DetailResult, EpisodeEntry, HomePageSection, MovieDetail,
    ProviderInfo, ProviderSettings, Quality, SeriesDetail,
};
