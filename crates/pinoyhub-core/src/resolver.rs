//! Player link resolution for pinoymovieshub.ph
//!
//! The DooPlay player loads its iframe through `admin-ajax.php`. Posting a
//! playback id there returns `{"embed_url": "..."}`, which is handed to the
//! stream extractor together with the site root as referer.

use serde::Deserialize;

use crate::client::PinoyClient;
use crate::error::Result;
use crate::extractor::{LinkSink, StreamExtractor};
use crate::url::build_ajax_url;

/// AJAX action served by the DooPlay player
const PLAYER_ACTION: &str = "doo_player_ajax";

/// Player source index; the site only ever serves the first source
const PLAYER_NUME: &str = "1";

/// Player content type
const PLAYER_TYPE: &str = "movie";

#[derive(Debug, Deserialize)]
struct PlayerResponse {
    embed_url: Option<String>,
}

/// Form fields of the player AJAX request for `playback_id`.
pub fn player_form(playback_id: &str) -> [(&'static str, &str); 4] {
    [
        ("action", PLAYER_ACTION),
        ("post", playback_id),
        ("nume", PLAYER_NUME),
        ("type", PLAYER_TYPE),
    ]
}

/// Embed URL from a player AJAX response body.
///
/// # Returns
/// * `Some(url)` when the body is JSON with a non-blank `embed_url`
/// * `None` for malformed JSON, a missing field or a blank value
///
/// # Examples
/// ```
/// use pinoyhub_core::resolver::parse_embed_url;
///
/// assert_eq!(parse_embed_url(r#"{"embed_url":"https://x/y"}"#).as_deref(), Some("https://x/y"));
/// assert_eq!(parse_embed_url("{}"), None);
/// assert_eq!(parse_embed_url("<html>"), None);
/// ```
pub fn parse_embed_url(body: &str) -> Option<String> {
    let response: PlayerResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "player response is not valid JSON");
            return None;
        }
    };

    let embed_url = response.embed_url.map(|url| url.trim().to_string());
    match embed_url {
        Some(url) if !url.is_empty() => Some(url),
        _ => {
            tracing::debug!("player response has no embed_url");
            None
        }
    }
}

/// Resolve a playback id into streams.
///
/// Posts the id to the player endpoint and, when an embed URL comes back,
/// runs `extractor` on it. Streams and subtitles go to `sink`.
///
/// # Returns
/// `Ok(true)` once the request completed, whether or not a stream was found
///
/// # Errors
/// Transport failures of the AJAX request
pub async fn resolve_links(
    client: &PinoyClient,
    extractor: &dyn StreamExtractor,
    playback_id: &str,
    sink: &LinkSink,
) -> Result<bool> {
    let url = build_ajax_url(client.base_url());
    tracing::debug!(playback_id, "requesting player embed");

    let body = client.post_form(&url, &player_form(playback_id)).await?;

    if let Some(embed_url) = parse_embed_url(&body) {
        tracing::debug!(embed_url = %embed_url, "handing embed to extractor");
        extractor.extract(&embed_url, client.base_url(), sink).await;
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_form() {
        assert_eq!(
            player_form("48213"),
            [
                ("action", "doo_player_ajax"),
                ("post", "48213"),
                ("nume", "1"),
                ("type", "movie"),
            ]
        );
    }

    #[test]
    fn test_parse_embed_url_present() {
        assert_eq!(
            parse_embed_url(r#"{"embed_url":"https://x/y","type":"iframe"}"#).as_deref(),
            Some("https://x/y")
        );
    }

    #[test]
    fn test_parse_embed_url_missing_or_blank() {
        assert_eq!(parse_embed_url("{}"), None);
        assert_eq!(parse_embed_url(r#"{"embed_url":null}"#), None);
        assert_eq!(parse_embed_url(r#"{"embed_url":"   "}"#), None);
    }

    #[test]
    fn test_parse_embed_url_malformed() {
        assert_eq!(parse_embed_url(""), None);
        assert_eq!(parse_embed_url("0"), None);
        assert_eq!(parse_embed_url("<html>Forbidden</html>"), None);
        assert_eq!(parse_embed_url(r#"{"embed_url": 5}"#), None);
    }
}
