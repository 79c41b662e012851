//! Stream extractor interface
//!
//! Embed URLs returned by the player endpoint point at third-party hosts.
//! Turning them into playable links is the job of a host-provided
//! [`StreamExtractor`], which reports results through a [`LinkSink`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// A playable stream reported by an extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamLink {
    /// Extractor or host that produced the link
    pub source: String,
    /// Human readable label
    pub name: String,
    /// Direct media URL
    pub url: String,
    /// Referer required by the media host
    pub referer: String,
    /// Vertical resolution, if known
    pub quality: Option<u32>,
    /// Whether `url` is an HLS playlist
    pub is_m3u8: bool,
}

/// A subtitle track reported by an extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitleFile {
    /// Language label
    pub lang: String,
    /// Subtitle file URL
    pub url: String,
}

/// Output channels an extractor feeds.
///
/// Sending never waits. Values sent after the receivers are dropped are discarded.
#[derive(Debug, Clone)]
pub struct LinkSink {
    streams: UnboundedSender<StreamLink>,
    subtitles: UnboundedSender<SubtitleFile>,
}

/// Receiving ends of a [`LinkSink`]
#[derive(Debug)]
pub struct LinkReceivers {
    pub streams: UnboundedReceiver<StreamLink>,
    pub subtitles: UnboundedReceiver<SubtitleFile>,
}

impl LinkSink {
    /// Create a sink together with its receivers.
    pub fn channel() -> (Self, LinkReceivers) {
        let (stream_tx, stream_rx) = unbounded_channel();
        let (subtitle_tx, subtitle_rx) = unbounded_channel();
        (
            Self {
                streams: stream_tx,
                subtitles: subtitle_tx,
            },
            LinkReceivers {
                streams: stream_rx,
                subtitles: subtitle_rx,
            },
        )
    }

    /// Report a playable stream.
    pub fn stream(&self, link: StreamLink) {
        if self.streams.send(link).is_err() {
            tracing::trace!("stream receiver dropped");
        }
    }

    /// Report a subtitle track.
    pub fn subtitle(&self, subtitle: SubtitleFile) {
        if self.subtitles.send(subtitle).is_err() {
            tracing::trace!("subtitle receiver dropped");
        }
    }
}

/// Resolves an embed URL into playable streams and subtitles.
#[async_trait]
pub trait StreamExtractor: Send + Sync {
    /// Extract streams from `embed_url`, reporting each one into `sink`.
    async fn extract(&self, embed_url: &str, referer: &str, sink: &LinkSink);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(url: &str) -> StreamLink {
        StreamLink {
            source: "test".to_string(),
            name: "test 720p".to_string(),
            url: url.to_string(),
            referer: "https://pinoymovieshub.ph".to_string(),
            quality: Some(720),
            is_m3u8: url.ends_with(".m3u8"),
        }
    }

    #[test]
    fn test_sink_delivers_in_order() {
        let (sink, mut receivers) = LinkSink::channel();
        sink.stream(link("https://cdn/a.m3u8"));
        sink.stream(link("https://cdn/b.mp4"));
        sink.subtitle(SubtitleFile {
            lang: "English".to_string(),
            url: "https://cdn/a.vtt".to_string(),
        });

        let first = receivers.streams.try_recv().unwrap();
        assert_eq!(first.url, "https://cdn/a.m3u8");
        assert!(first.is_m3u8);
        assert_eq!(
            receivers.streams.try_recv().unwrap().url,
            "https://cdn/b.mp4"
        );
        assert!(receivers.streams.try_recv().is_err());
        assert_eq!(receivers.subtitles.try_recv().unwrap().lang, "English");
    }

    #[test]
    fn test_sink_ignores_dropped_receivers() {
        let (sink, receivers) = LinkSink::channel();
        drop(receivers);
        sink.stream(link("https://cdn/a.mp4"));
        sink.subtitle(SubtitleFile {
            lang: "Filipino".to_string(),
            url: "https://cdn/a.srt".to_string(),
        });
    }
}
