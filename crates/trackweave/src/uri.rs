use url::Url;

use crate::error::TrackweaveResult;

/// Resolves a uri found inside a playlist against the playlist's own url.
///
/// Each leading `../` drops one more directory after the playlist file name, so
/// `../../c/d.m3u8` inside `https://host/a/b/manifest.m3u8` points to `https://host/c/d.m3u8`.
pub fn resolve_uri(manifest_url: &Url, uri: &str) -> TrackweaveResult<Url> {
    let resolved = manifest_url.join(uri.trim())?;
    log::debug!("Resolved {uri} to {resolved}");
    Ok(resolved)
}
