//! Data types for the Pinoy Movies Hub scraper
//!
//! Every value here is built fresh per request and never mutated afterwards.
//! All types implement Serialize and Deserialize for JSON compatibility with hosts.

use serde::{Deserialize, Serialize};

/// Kind of catalog content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    /// Single feature film
    Movie,
    /// TV series, teleserye or any show with episodes; Asian dramas are listed here too
    Series,
}

/// Release quality badge shown on listing posters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Quality {
    #[default]
    Unknown,
    Cam,
    CamRip,
    HdCam,
    Telesync,
    Telecine,
    WorkPrint,
    Hq,
    Hd,
    Hdr,
    Sdr,
    Sd,
    Dvd,
    BluRay,
    WebRip,
    FourK,
    Uhd,
}

impl Quality {
    /// Map a badge label to a quality, case-insensitively.
    ///
    /// Punctuation and spaces are ignored, so `"WEB-DL"` and `"web dl"` match.
    /// Labels that are not release qualities (including `"TV"`) map to
    /// [`Quality::Unknown`].
    ///
    /// # Examples
    /// ```
    /// use pinoyhub_core::Quality;
    ///
    /// assert_eq!(Quality::from_label("HD"), Quality::Hd);
    /// assert_eq!(Quality::from_label("web-dl"), Quality::WebRip);
    /// assert_eq!(Quality::from_label("TV"), Quality::Unknown);
    /// ```
    pub fn from_label(label: &str) -> Self {
        let key: String = label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "cam" => Quality::Cam,
            "camrip" => Quality::CamRip,
            "hdcam" => Quality::HdCam,
            "ts" | "hdts" | "telesync" => Quality::Telesync,
            "tc" | "hdtc" | "telecine" => Quality::Telecine,
            "wp" | "workprint" => Quality::WorkPrint,
            "hq" => Quality::Hq,
            "hd" | "720p" | "1080p" | "hdrip" => Quality::Hd,
            "hdr" => Quality::Hdr,
            "sdr" => Quality::Sdr,
            "sd" | "480p" => Quality::Sd,
            "dvd" | "dvdrip" | "dvdscr" => Quality::Dvd,
            "bluray" | "blueray" | "bdrip" | "brrip" => Quality::BluRay,
            "web" | "webrip" | "webdl" => Quality::WebRip,
            "4k" | "2160p" => Quality::FourK,
            "uhd" => Quality::Uhd,
            _ => Quality::Unknown,
        }
    }
}

/// A single item of a listing (home page section or search results)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name
    pub title: String,
    /// Absolute URL of the detail page; identifies the entry
    pub url: String,
    /// Poster image URL
    pub poster_url: Option<String>,
    /// Release year
    pub year: Option<i32>,
    /// Quality badge
    pub quality: Quality,
    /// Movie or series
    pub kind: ContentKind,
}

/// Episode row of a series detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeEntry {
    /// Episode title
    pub title: String,
    /// Absolute URL of the episode page, used as its link-resolution key
    pub data_url: String,
    /// Episode still
    pub poster_url: Option<String>,
    /// Season number
    pub season: Option<i32>,
    /// Episode number
    pub episode: Option<i32>,
    /// Air date as `YYYY-MM-DD`
    pub air_date: Option<String>,
}

/// Detail page of a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub title: String,
    pub url: String,
    /// Numeric content id from the page short-link, may be empty
    pub playback_id: String,
    pub poster_url: Option<String>,
    pub year: Option<i32>,
    pub plot: Option<String>,
}

/// Detail page of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDetail {
    pub title: String,
    pub url: String,
    pub poster_url: Option<String>,
    pub year: Option<i32>,
    pub plot: Option<String>,
    /// Episodes in document order
    pub episodes: Vec<EpisodeEntry>,
}

/// Parsed detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DetailResult {
    Movie(MovieDetail),
    Series(SeriesDetail),
}

impl DetailResult {
    /// Title of the movie or series
    pub fn title(&self) -> &str {
        match self {
            DetailResult::Movie(movie) => &movie.title,
            DetailResult::Series(series) => &series.title,
        }
    }

    /// URL the detail was loaded from
    pub fn url(&self) -> &str {
        match self {
            DetailResult::Movie(movie) => &movie.url,
            DetailResult::Series(series) => &series.url,
        }
    }

    /// Kind of content this detail describes
    pub fn kind(&self) -> ContentKind {
        match self {
            DetailResult::Movie(_) => ContentKind::Movie,
            DetailResult::Series(_) => ContentKind::Series,
        }
    }
}

/// One named row of the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomePageSection {
    /// Section heading
    pub label: String,
    /// Entries in page order, never empty
    pub entries: Vec<CatalogEntry>,
    /// Whether the host should render posters in landscape
    pub display_horizontal: bool,
}

/// User-facing provider settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Include the adult (Rated-R) home page section
    pub enable_adult: bool,
}

/// Static provider metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    /// Display name
    pub name: &'static str,
    /// Site root without trailing slash
    pub base_url: &'static str,
    /// Content language tag
    pub language: &'static str,
    /// Kinds of content the site lists
    pub supported_kinds: &'static [ContentKind],
    pub has_main_page: bool,
    pub has_quick_search: bool,
    pub has_download_support: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_from_label_known() {
        assert_eq!(Quality::from_label("HD"), Quality::Hd);
        assert_eq!(Quality::from_label(" hd "), Quality::Hd);
        assert_eq!(Quality::from_label("CAM"), Quality::Cam);
        assert_eq!(Quality::from_label("HDCam"), Quality::HdCam);
        assert_eq!(Quality::from_label("Blu-Ray"), Quality::BluRay);
        assert_eq!(Quality::from_label("WEB-DL"), Quality::WebRip);
        assert_eq!(Quality::from_label("4K"), Quality::FourK);
    }

    #[test]
    fn test_quality_from_label_unknown() {
        assert_eq!(Quality::from_label(""), Quality::Unknown);
        assert_eq!(Quality::from_label("TV"), Quality::Unknown);
        assert_eq!(Quality::from_label("Trailer"), Quality::Unknown);
    }

    #[test]
    fn test_content_kind_serialization() {
        let json = serde_json::to_string(&ContentKind::Series).unwrap();
        assert_eq!(json, "\"Series\"");
    }

    #[test]
    fn test_detail_result_tagged_serialization() {
        let detail = DetailResult::Movie(MovieDetail {
            title: "Heneral Luna".to_string(),
            url: "https://pinoymovieshub.ph/movies/heneral-luna/".to_string(),
            playback_id: "1234".to_string(),
            poster_url: None,
            year: Some(2015),
            plot: None,
        });

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["type"], "Movie");
        assert_eq!(json["playback_id"], "1234");

        let back: DetailResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.title(), "Heneral Luna");
        assert_eq!(back.kind(), ContentKind::Movie);
    }

    #[test]
    fn test_provider_settings_default_disables_adult() {
        assert!(!ProviderSettings::default().enable_adult);
    }
}
