use crate::{master_fixture, AssertWrapper, MASTER_URL};
use trackweave::{Manifest, TrackKind, TrackweaveError, Url};

const PARCEL: &str = "https://cdn.example.com/exp=1700000000/";

#[test]
fn test_master_classification() -> anyhow::Result<()> {
    let url: Url = MASTER_URL.parse()?;
    let manifest = Manifest::parse(master_fixture(), &url).assert_success();

    assert_eq!(manifest.video.len(), 2);
    assert_eq!(manifest.audio.len(), 3);
    assert_eq!(manifest.subs.len(), 2);

    let video = &manifest.video[0];
    assert_eq!(video.kind, TrackKind::Video);
    assert_eq!(video.bandwidth(), Some(17892000));
    assert_eq!(video.codecs(), Some("avc1.640033,mp4a.40.2"));
    assert_eq!(video.resolution(), Some("3840x2160"));
    assert_eq!(video.frame_rate(), Some("29.970"));
    assert_eq!(
        video.url.as_str(),
        format!("{PARCEL}parcel/video/1a2b3c4d/playlist.m3u8")
    );

    assert_eq!(manifest.audio[2].channels(), Some("6"));
    assert_eq!(
        manifest.audio[0].url.as_str(),
        format!("{PARCEL}parcel/audio/4c7a3e1f/playlist.m3u8")
    );

    assert_eq!(manifest.subs[1].name(), Some("日本語"));
    assert_eq!(manifest.subs[1].language(), Some("ja"));
    assert_eq!(
        manifest.subs[1].url.as_str(),
        format!("{PARCEL}texttrack/1002.m3u8")
    );

    Ok(())
}

#[test]
fn test_master_classification_is_idempotent() -> anyhow::Result<()> {
    let url: Url = MASTER_URL.parse()?;
    let first = Manifest::parse(master_fixture(), &url)?;
    let second = Manifest::parse(master_fixture(), &url)?;

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first)?,
        serde_json::to_string(&second)?
    );

    Ok(())
}

#[test]
fn test_master_correlation() -> anyhow::Result<()> {
    let url: Url = MASTER_URL.parse()?;
    let report = Manifest::parse(master_fixture(), &url)?.correlate().assert_success();

    assert_eq!(report.tracks.len(), 2);
    assert_eq!(report.tracks[0].audio.group_id(), Some("audio-high"));
    assert_eq!(report.tracks[0].subtitles.group_id(), Some("subs-en"));
    assert_eq!(report.tracks[1].audio.group_id(), Some("audio-low"));
    assert_eq!(report.tracks[1].subtitles.group_id(), Some("subs-en"));

    assert_eq!(report.orphaned_audio.len(), 1);
    assert_eq!(report.orphaned_audio[0].group_id(), Some("audio-surround"));
    assert_eq!(report.orphaned_subs.len(), 1);
    assert_eq!(report.orphaned_subs[0].group_id(), Some("subs-ja"));

    Ok(())
}

#[test]
fn test_single_triple() -> anyhow::Result<()> {
    let text = r#"#EXTM3U
#EXT-X-MEDIA:TYPE=AUDIO,GROUP-ID="a1",URI="a.m3u8"
#EXT-X-MEDIA:TYPE=SUBTITLES,GROUP-ID="s1",URI="s.m3u8"
#EXT-X-STREAM-INF:BANDWIDTH=800000,AUDIO="a1",SUBTITLES="s1"
v.m3u8"#;
    let report = Manifest::parse(text, &"https://h/p/m.m3u8".parse()?)?.correlate()?;

    assert_eq!(report.tracks.len(), 1);
    let triple = &report.tracks[0];
    assert_eq!(triple.video.url.as_str(), "https://h/p/v.m3u8");
    assert_eq!(triple.audio.url.as_str(), "https://h/p/a.m3u8");
    assert_eq!(triple.subtitles.url.as_str(), "https://h/p/s.m3u8");
    assert!(report.orphaned_audio.is_empty());
    assert!(report.orphaned_subs.is_empty());

    Ok(())
}

#[test]
fn test_missing_group_has_no_report() -> anyhow::Result<()> {
    let text = master_fixture().replace(r#"AUDIO="audio-low""#, r#"AUDIO="audio-gone""#);
    let result = Manifest::parse(&text, &MASTER_URL.parse()?)?.correlate();

    match result {
        Err(TrackweaveError::CorrelationLookup { kind, group_id }) => {
            assert_eq!(kind, TrackKind::Audio);
            assert_eq!(group_id, "audio-gone");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    Ok(())
}

#[test]
fn test_truncated_master() -> anyhow::Result<()> {
    let text = "#EXTM3U\n#EXT-X-STREAM-INF:BANDWIDTH=1,AUDIO=\"a\"\n\n";
    Manifest::parse(text, &MASTER_URL.parse()?).assert_error();

    Ok(())
}
