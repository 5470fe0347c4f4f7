pub mod error;
pub mod html;
pub mod model;

use fake_user_agent::get_chrome_rua;
use reqwest::Client;
use trackweave::{fetch::fetch_text, rebuild_stream_url, select_best, FetchStage, Manifest, Url};

pub use error::{VimeoError, VimeoResult};
use html::find_tags;
use model::*;

const OEMBED_TYPE: &str = "application/json+oembed";

/// Finds the oEmbed descriptor link of a video page.
pub fn extract_oembed_url(page: &str, page_url: &Url) -> VimeoResult<Url> {
    let href = find_tags("link", page)?
        .into_iter()
        .find(|link| link.get("type").map(String::as_str) == Some(OEMBED_TYPE))
        .and_then(|mut link| link.remove("href"))
        .ok_or(VimeoError::NoEmbed)?;

    Ok(page_url.join(&href)?)
}

pub struct VimeoClient(Client);

impl VimeoClient {
    pub fn new(client: Client) -> Self {
        Self(client)
    }

    pub async fn oembed_url(&self, page_url: &Url) -> VimeoResult<Url> {
        let page = fetch_text(&self.0, page_url.clone(), FetchStage::LandingPage).await?;
        extract_oembed_url(&page, page_url)
    }

    pub async fn embed(&self, oembed_url: Url) -> VimeoResult<Embed> {
        let text = fetch_text(&self.0, oembed_url, FetchStage::EmbedDescriptor).await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn player_config(&self, player_url: Url) -> VimeoResult<PlayerConfig> {
        let text = fetch_text(&self.0, player_url, FetchStage::Player).await?;
        PlayerConfig::from_player_page(&text)
    }

    /// Walks from a video page to the correlated playlists of its best representation.
    pub async fn analyze(&self, page_url: &str) -> VimeoResult<VideoSelection> {
        let page_url = Url::parse(page_url)?;

        let oembed_url = self.oembed_url(&page_url).await?;
        log::info!("Found embed descriptor: {oembed_url}");
        let embed = self.embed(oembed_url.clone()).await?;

        let frame = embed.player_frame()?;
        let player_url = oembed_url.join(&frame.src)?;
        log::info!("Found player: {player_url}");
        let config = self.player_config(player_url).await?;

        let representation = select_best(config.representations())?;
        let manifest_url = rebuild_stream_url(
            representation.representation_id(),
            &config.delivery_url()?,
        )?;
        let manifest_url = Url::parse(&manifest_url)?;

        let manifest = trackweave::fetch::fetch_manifest(&self.0, &manifest_url).await?;
        let report = manifest.correlate()?;

        Ok(VideoSelection {
            title: frame.title,
            representation: representation.clone(),
            manifest_url,
            report,
        })
    }

    /// Correlates a playlist url directly, skipping page discovery.
    pub async fn analyze_manifest(&self, manifest_url: &Url) -> VimeoResult<Manifest> {
        Ok(trackweave::fetch::fetch_manifest(&self.0, manifest_url).await?)
    }
}

impl Default for VimeoClient {
    fn default() -> Self {
        Self(
            Client::builder()
                .user_agent(get_chrome_rua())
                .build()
                .unwrap_or_default(),
        )
    }
}
