use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use trackweave::{CorrelationReport, Representation, Url};

use crate::{
    error::{VimeoError, VimeoResult},
    html::find_tags,
};

static PLAYER_CONFIG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)var config\s*=\s*(.*?);\s*if\s*\(!config").unwrap());

/// oEmbed response of a video page.
#[derive(Debug, Deserialize)]
pub struct Embed {
    /// `<iframe>` snippet embedding the player
    pub html: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerFrame {
    pub src: String,
    pub title: String,
}

impl Embed {
    pub fn player_frame(&self) -> VimeoResult<PlayerFrame> {
        let mut frame = find_tags("iframe", &self.html)?
            .into_iter()
            .next()
            .ok_or(VimeoError::NoPlayerFrame)?;
        let src = frame.remove("src").ok_or(VimeoError::NoPlayerFrame)?;
        let title = frame
            .remove("title")
            .or_else(|| self.title.clone())
            .unwrap_or_default();

        Ok(PlayerFrame { src, title })
    }
}

#[derive(Debug, Deserialize)]
pub struct PlayerConfig {
    pub request: PlayerRequest,
}

#[derive(Debug, Deserialize)]
pub struct PlayerRequest {
    pub files: PlayerFiles,
}

#[derive(Debug, Deserialize)]
pub struct PlayerFiles {
    pub dash: DashFiles,
    pub hls: HlsFiles,
}

#[derive(Debug, Deserialize)]
pub struct DashFiles {
    #[serde(default)]
    pub streams: Vec<Representation>,
}

#[derive(Debug, Deserialize)]
pub struct HlsFiles {
    /// CDN name -> delivery info, in document order
    #[serde(default)]
    pub cdns: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct Cdn {
    pub url: String,
}

impl PlayerConfig {
    /// Extracts the `var config = {...}` object from the player page script.
    pub fn from_player_page(text: &str) -> VimeoResult<Self> {
        let json = PLAYER_CONFIG_REGEX
            .captures(text)
            .and_then(|cap| cap.get(1))
            .ok_or(VimeoError::NoPlayerConfig)?;

        Ok(serde_json::from_str(json.as_str())?)
    }

    pub fn representations(&self) -> &[Representation] {
        &self.request.files.dash.streams
    }

    /// Delivery url of the first listed CDN.
    pub fn delivery_url(&self) -> VimeoResult<String> {
        let (name, cdn) = self
            .request
            .files
            .hls
            .cdns
            .iter()
            .next()
            .ok_or(VimeoError::NoDeliveryUrl)?;
        let cdn: Cdn = serde_json::from_value(cdn.clone())?;
        log::debug!("Using CDN {name}: {url}", url = cdn.url);

        Ok(cdn.url)
    }
}

/// Best representation of a video and its correlated playlists.
#[derive(Debug, Serialize)]
pub struct VideoSelection {
    pub title: String,
    pub representation: Representation,
    pub manifest_url: Url,
    pub report: CorrelationReport,
}
