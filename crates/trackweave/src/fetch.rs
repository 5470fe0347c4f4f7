use reqwest::{Client, StatusCode, Url};

use crate::{
    error::{FetchStage, TrackweaveError, TrackweaveResult},
    manifest::Manifest,
};

/// Downloads a text resource, treating anything but `200 OK` as a failure of `stage`.
pub async fn fetch_text(
    client: &Client,
    url: Url,
    stage: FetchStage,
) -> TrackweaveResult<String> {
    log::debug!("Fetching {stage} from {url}");

    let request_error = |source: reqwest::Error| TrackweaveError::RequestError { stage, source };
    let response = client.get(url).send().await.map_err(request_error)?;
    let status = response.status();
    if status != StatusCode::OK {
        log::warn!("Unable to download the {stage}: {status}");
        return Err(TrackweaveError::FetchError { stage, status });
    }

    response.text().await.map_err(request_error)
}

pub async fn load_manifest_text(client: &Client, url: &Url) -> TrackweaveResult<String> {
    fetch_text(client, url.clone(), FetchStage::Manifest).await
}

/// Fetches and classifies the playlist at `url`.
pub async fn fetch_manifest(client: &Client, url: &Url) -> TrackweaveResult<Manifest> {
    log::info!("Start fetching M3U8 file.");
    let text = load_manifest_text(client, url).await?;
    log::info!("M3U8 file fetched.");

    Manifest::parse(&text, url)
}
