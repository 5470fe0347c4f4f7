use crate::AssertWrapper;
use trackweave::{reqwest::Client, TrackweaveError};
use trackweave_vimeo::{VimeoClient, VimeoError};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const LANDING: &str = include_str!("../fixtures/landing.html");
const OEMBED: &str = include_str!("../fixtures/oembed.json");
const PLAYER: &str = include_str!("../fixtures/player.html");
const MASTER: &str = include_str!("../fixtures/master.m3u8");

const MASTER_PATH: &str = "/exp=1700000000/video/bbbbbbbb/audio/dddddddd/sep/master.m3u8";

trait VimeoMock {
    async fn mock(&self, mock_path: &str, status: u16, body: &str) -> &Self;
}

impl VimeoMock for MockServer {
    async fn mock(&self, mock_path: &str, status: u16, body: &str) -> &Self {
        let body = body.replace("{server}", &self.uri());
        Mock::given(method("GET"))
            .and(path(mock_path))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(self)
            .await;
        self
    }
}

async fn setup_mock_server() -> MockServer {
    let server = MockServer::start().await;
    server
        .mock("/76979871", 200, LANDING)
        .await
        .mock("/api/oembed.json", 200, OEMBED)
        .await
        .mock("/video/76979871", 200, PLAYER)
        .await;
    server
}

#[tokio::test]
async fn test_analyze_selects_best_representation() -> anyhow::Result<()> {
    let server = setup_mock_server().await;
    server.mock(MASTER_PATH, 200, MASTER).await;

    let client = VimeoClient::new(Client::new());
    let selection = client
        .analyze(&format!("{}/76979871", server.uri()))
        .await
        .assert_success();

    assert_eq!(selection.title, "Mountain Timelapse");
    assert_eq!(selection.representation.quality, "1080p");
    assert_eq!(selection.representation.representation_id(), "bbbbbbbb");
    assert_eq!(
        selection.manifest_url.as_str(),
        format!("{}{MASTER_PATH}?query_string_ranges=1", server.uri())
    );

    let report = &selection.report;
    assert_eq!(report.tracks.len(), 1);
    assert_eq!(
        report.tracks[0].video.url.as_str(),
        format!("{}/exp=1700000000/parcel/video/bbbbbbbb.m3u8", server.uri())
    );
    assert_eq!(
        report.tracks[0].audio.url.as_str(),
        format!("{}/exp=1700000000/parcel/audio/dddddddd.m3u8", server.uri())
    );
    assert_eq!(
        report.tracks[0].subtitles.url.as_str(),
        format!("{}/exp=1700000000/texttrack/en.m3u8", server.uri())
    );
    assert_eq!(report.orphaned_audio.len(), 1);
    assert_eq!(report.orphaned_audio[0].name(), Some("Commentary"));
    assert!(report.orphaned_subs.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_analyze_manifest_unavailable() -> anyhow::Result<()> {
    let server = setup_mock_server().await;
    server.mock(MASTER_PATH, 404, "").await;

    let client = VimeoClient::new(Client::new());
    let error = client
        .analyze(&format!("{}/76979871", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        VimeoError::Trackweave(TrackweaveError::FetchError { .. })
    ));
    assert_eq!(error.exit_code(), 7);

    Ok(())
}

#[tokio::test]
async fn test_analyze_landing_page_unavailable() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    server.mock("/76979871", 500, "").await;

    let client = VimeoClient::new(Client::new());
    let error = client
        .analyze(&format!("{}/76979871", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(error.exit_code(), 1);

    Ok(())
}

#[tokio::test]
async fn test_analyze_without_player_frame() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    server
        .mock("/76979871", 200, LANDING)
        .await
        .mock("/api/oembed.json", 200, r#"{"type":"video","html":"<div></div>"}"#)
        .await;

    let client = VimeoClient::new(Client::new());
    let result = client.analyze(&format!("{}/76979871", server.uri())).await;
    assert!(matches!(result, Err(VimeoError::NoPlayerFrame)));

    Ok(())
}

#[tokio::test]
async fn test_analyze_manifest_directly() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    server.mock(MASTER_PATH, 200, MASTER).await;

    let client = VimeoClient::new(Client::new());
    let manifest = client
        .analyze_manifest(&format!("{}{MASTER_PATH}", server.uri()).parse()?)
        .await
        .assert_success();
    assert_eq!(manifest.video.len(), 1);
    assert_eq!(manifest.audio.len(), 2);

    client
        .analyze_manifest(&format!("{}/missing.m3u8", server.uri()).parse()?)
        .await
        .assert_error();

    Ok(())
}
