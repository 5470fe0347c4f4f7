use serde::Serialize;
use url::Url;

use crate::attributes::Attributes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Video,
    Audio,
    Subtitle,
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TrackKind::Video => "video",
            TrackKind::Audio => "audio",
            TrackKind::Subtitle => "subtitle",
        })
    }
}

/// A single playlist entry: its attribute list plus the resolved playlist url.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    #[serde(skip)]
    pub kind: TrackKind,

    #[serde(flatten)]
    pub attributes: Attributes,

    pub url: Url,
}

impl Track {
    pub fn new(kind: TrackKind, attributes: Attributes, url: Url) -> Self {
        Self {
            kind,
            attributes,
            url,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// `GROUP-ID` of an audio or subtitle rendition.
    pub fn group_id(&self) -> Option<&str> {
        self.get("group-id")
    }

    /// Audio group referenced by a variant stream.
    pub fn audio_group(&self) -> Option<&str> {
        self.get("audio")
    }

    /// Subtitle group referenced by a variant stream.
    pub fn subtitles_group(&self) -> Option<&str> {
        self.get("subtitles")
    }

    pub fn bandwidth(&self) -> Option<u64> {
        self.get("bandwidth").and_then(|b| b.parse().ok())
    }

    pub fn codecs(&self) -> Option<&str> {
        self.get("codecs")
    }

    pub fn resolution(&self) -> Option<&str> {
        self.get("resolution")
    }

    pub fn frame_rate(&self) -> Option<&str> {
        self.get("frame-rate")
    }

    pub fn channels(&self) -> Option<&str> {
        self.get("channels")
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    pub fn language(&self) -> Option<&str> {
        self.get("language")
    }
}
