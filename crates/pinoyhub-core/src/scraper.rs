//! Main Pinoy Movies Hub scraper API
//!
//! Combines the HTTP client with the parsers to provide the four provider
//! operations: home page, search, detail load and link resolution.

use std::sync::Arc;

use crate::client::PinoyClient;
use crate::error::Result;
use crate::extractor::{LinkSink, StreamExtractor};
use crate::parser::{parse_detail_page, parse_home_page, parse_search_results};
use crate::resolver::resolve_links;
use crate::types::{
    CatalogEntry, ContentKind, DetailResult, HomePageSection, ProviderInfo, ProviderSettings,
};
use crate::url::{build_search_url, PINOY_BASE_URL};

/// Display name of the provider
pub const PROVIDER_NAME: &str = "Pinoy Movies Hub";

/// Content language tag
pub const PROVIDER_LANGUAGE: &str = "tl";

static SUPPORTED_KINDS: [ContentKind; 2] = [ContentKind::Movie, ContentKind::Series];

/// Main scraper API for pinoymovieshub.ph
///
/// Every operation is a short sequence of requests. Nothing is cached
/// between calls.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
///
/// use async_trait::async_trait;
/// use pinoyhub_core::{LinkSink, PinoyScraper, ProviderSettings, StreamExtractor};
///
/// struct PrintExtractor;
///
/// #[async_trait]
/// impl StreamExtractor for PrintExtractor {
///     async fn extract(&self, embed_url: &str, _referer: &str, _sink: &LinkSink) {
///         println!("embed: {}", embed_url);
///     }
/// }
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = PinoyScraper::new(Arc::new(PrintExtractor))?;
///
///     let sections = scraper.main_page(&ProviderSettings::default()).await?;
///     println!("Found {} sections", sections.len());
///
///     Ok(())
/// }
/// ```
pub struct PinoyScraper {
    client: PinoyClient,
    extractor: Arc<dyn StreamExtractor>,
}

impl PinoyScraper {
    /// Create a new scraper with default client configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(extractor: Arc<dyn StreamExtractor>) -> Result<Self> {
        let client = PinoyClient::new()?;
        Ok(Self { client, extractor })
    }

    /// Create a new scraper with a custom client.
    ///
    /// This is useful for testing or when you need custom client configuration.
    pub fn with_client(client: PinoyClient, extractor: Arc<dyn StreamExtractor>) -> Self {
        Self { client, extractor }
    }

    /// Static provider metadata.
    pub fn info() -> ProviderInfo {
        ProviderInfo {
            name: PROVIDER_NAME,
            base_url: PINOY_BASE_URL,
            language: PROVIDER_LANGUAGE,
            supported_kinds: &SUPPORTED_KINDS,
            has_main_page: true,
            has_quick_search: false,
            has_download_support: true,
        }
    }

    /// Fetch the home page and split it into named sections.
    ///
    /// # Arguments
    /// * `settings` - Provider settings; `enable_adult` adds the Rated-R row
    ///
    /// # Returns
    /// * `Ok(sections)` in fixed display order, empty sections omitted
    /// * `Err(PinoyError)` if the page cannot be fetched
    pub async fn main_page(&self, settings: &ProviderSettings) -> Result<Vec<HomePageSection>> {
        let html = self.client.fetch("/").await?;
        let sections = parse_home_page(&html, self.client.base_url(), settings);
        tracing::debug!(sections = sections.len(), "home page assembled");
        Ok(sections)
    }

    /// Search the catalog.
    ///
    /// Returns whatever the site shows on its first results page.
    ///
    /// # Example
    /// ```no_run
    /// # use std::sync::Arc;
    /// # use pinoyhub_core::{LinkSink, PinoyScraper, StreamExtractor};
    /// # struct Noop;
    /// # #[async_trait::async_trait]
    /// # impl StreamExtractor for Noop {
    /// #     async fn extract(&self, _: &str, _: &str, _: &LinkSink) {}
    /// # }
    /// # async fn example() -> Result<(), pinoyhub_core::PinoyError> {
    /// let scraper = PinoyScraper::new(Arc::new(Noop))?;
    /// for entry in scraper.search("Four Sisters").await? {
    ///     println!("{} ({:?})", entry.title, entry.kind);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogEntry>> {
        let url = build_search_url(self.client.base_url(), query);
        let html = self.client.get(&url).await?;
        Ok(parse_search_results(&html, self.client.base_url()))
    }

    /// Load a detail page.
    ///
    /// # Arguments
    /// * `url` - Absolute detail page URL, usually a [`CatalogEntry::url`]
    ///
    /// # Returns
    /// * `Ok(DetailResult::Series)` when the page lists episodes
    /// * `Ok(DetailResult::Movie)` otherwise
    /// * `Err(PinoyError)` if the page cannot be fetched
    pub async fn load(&self, url: &str) -> Result<DetailResult> {
        let html = self.client.get(url).await?;
        Ok(parse_detail_page(&html, url, self.client.base_url()))
    }

    /// Resolve playable links for an opaque resolution key.
    ///
    /// `data` is sent as-is as the player's `post` field, usually a
    /// [`MovieDetail::playback_id`](crate::MovieDetail::playback_id).
    /// Streams and subtitles found by the extractor are sent into `sink`.
    ///
    /// # Returns
    /// * `Ok(true)` once the player request completed, even if nothing was found
    /// * `Err(PinoyError)` if the player request failed
    pub async fn load_links(&self, data: &str, sink: &LinkSink) -> Result<bool> {
        resolve_links(&self.client, self.extractor.as_ref(), data, sink).await
    }
}
