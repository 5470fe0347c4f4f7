use serde::Serialize;
use url::Url;

use crate::{
    attributes::parse_attribute_list,
    error::{TrackweaveError, TrackweaveResult},
    track::{Track, TrackKind},
    uri::resolve_uri,
};

const MEDIA_TAG: &str = "#EXT-X-MEDIA:";
const STREAM_INF_TAG: &str = "#EXT-X-STREAM-INF:";

/// Variant streams and renditions of a master playlist, in playlist order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub video: Vec<Track>,
    pub audio: Vec<Track>,
    pub subs: Vec<Track>,
}

impl Manifest {
    /// Classifies the `#EXT-X-MEDIA` and `#EXT-X-STREAM-INF` lines of `text`.
    ///
    /// Uris are resolved against `manifest_url`. Every other line is ignored.
    pub fn parse(text: &str, manifest_url: &Url) -> TrackweaveResult<Self> {
        let mut manifest = Self::default();
        let mut lines = text.lines();

        while let Some(line) = lines.next() {
            if let Some(rest) = line.strip_prefix(MEDIA_TAG) {
                let attributes = parse_attribute_list(rest)?;
                if attributes.is_empty() {
                    continue;
                }

                let r#type = attributes
                    .get("type")
                    .ok_or_else(|| TrackweaveError::MissingAttribute("TYPE", line.to_string()))?
                    .to_lowercase();
                let kind = match r#type.as_str() {
                    "audio" => TrackKind::Audio,
                    "subtitles" => TrackKind::Subtitle,
                    _ => {
                        log::warn!("Found unknown media type: {}", attributes["type"]);
                        continue;
                    }
                };

                let uri = attributes
                    .get("uri")
                    .ok_or_else(|| TrackweaveError::MissingAttribute("URI", line.to_string()))?;
                let url = resolve_uri(manifest_url, uri)?;
                let track = Track::new(kind, attributes, url);
                match kind {
                    TrackKind::Audio => manifest.audio.push(track),
                    _ => manifest.subs.push(track),
                }
            } else if let Some(rest) = line.strip_prefix(STREAM_INF_TAG) {
                let attributes = parse_attribute_list(rest)?;
                if attributes.is_empty() {
                    continue;
                }

                let uri = lines
                    .by_ref()
                    .map(str::trim)
                    .find(|l| !l.is_empty())
                    .ok_or_else(|| TrackweaveError::TruncatedManifest(line.to_string()))?;
                let url = resolve_uri(manifest_url, uri)?;
                manifest
                    .video
                    .push(Track::new(TrackKind::Video, attributes, url));
            }
        }

        log::info!(
            "Found {} video, {} audio and {} subtitle streams.",
            manifest.video.len(),
            manifest.audio.len(),
            manifest.subs.len()
        );
        Ok(manifest)
    }
}
