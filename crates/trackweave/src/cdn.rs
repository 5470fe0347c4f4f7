use regex::Regex;
use std::sync::LazyLock;

use crate::error::{TrackweaveError, TrackweaveResult};

// Example: "https://skyfire.vimeocdn.com/1700000000-0x0/1234/video/aaaaaaaa,bbbbbbbb/audio/cccccccc/master.m3u8"
static DELIVERY_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?/video/)(.*?)(/audio/.*)$").unwrap());

/// Rewrites the `/video/<ids>/audio/` segment of a delivery url so it only
/// requests the representation `id`.
pub fn rebuild_stream_url(id: &str, sample_url: &str) -> TrackweaveResult<String> {
    let captures = DELIVERY_URL_REGEX
        .captures(sample_url)
        .ok_or_else(|| TrackweaveError::TemplateMismatch(sample_url.to_string()))?;
    let (prefix, videos, suffix) = (&captures[1], &captures[2], &captures[3]);

    if !videos.split(',').any(|video| video.contains(id)) {
        log::warn!("Representation {id} is not listed in the delivery url ({videos})");
    }

    Ok(format!("{prefix}{id}{suffix}"))
}
