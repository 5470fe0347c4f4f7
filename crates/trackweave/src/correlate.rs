use serde::Serialize;
use std::collections::HashSet;

use crate::{
    error::{TrackweaveError, TrackweaveResult},
    manifest::Manifest,
    track::{Track, TrackKind},
};

/// A variant stream together with the renditions its groups point to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrelatedTrack {
    pub video: Track,
    pub audio: Track,
    pub subtitles: Track,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorrelationReport {
    pub tracks: Vec<CorrelatedTrack>,

    /// Audio renditions no variant stream refers to
    pub orphaned_audio: Vec<Track>,
    /// Subtitle renditions no variant stream refers to
    pub orphaned_subs: Vec<Track>,
}

fn find_group<'a>(
    tracks: &'a [Track],
    kind: TrackKind,
    video: &Track,
) -> TrackweaveResult<&'a Track> {
    let (attribute, group_id) = match kind {
        TrackKind::Audio => ("AUDIO", video.audio_group()),
        _ => ("SUBTITLES", video.subtitles_group()),
    };
    let group_id = group_id.ok_or_else(|| {
        TrackweaveError::MissingAttribute(attribute, format!("variant stream {}", video.url))
    })?;

    tracks
        .iter()
        .find(|track| track.group_id() == Some(group_id))
        .ok_or_else(|| TrackweaveError::CorrelationLookup {
            kind,
            group_id: group_id.to_string(),
        })
}

impl Manifest {
    /// Pairs every variant stream with the first audio and subtitle rendition of its groups.
    ///
    /// Fails as a whole when any referenced group does not exist.
    pub fn correlate(&self) -> TrackweaveResult<CorrelationReport> {
        let mut tracks = Vec::with_capacity(self.video.len());
        let mut used_audio = HashSet::new();
        let mut used_subs = HashSet::new();

        for video in &self.video {
            let audio = find_group(&self.audio, TrackKind::Audio, video)?;
            let subtitles = find_group(&self.subs, TrackKind::Subtitle, video)?;
            used_audio.insert(audio.group_id());
            used_subs.insert(subtitles.group_id());

            tracks.push(CorrelatedTrack {
                video: video.clone(),
                audio: audio.clone(),
                subtitles: subtitles.clone(),
            });
        }

        let orphaned_audio: Vec<Track> = self
            .audio
            .iter()
            .filter(|track| !used_audio.contains(&track.group_id()))
            .cloned()
            .collect();
        let orphaned_subs: Vec<Track> = self
            .subs
            .iter()
            .filter(|track| !used_subs.contains(&track.group_id()))
            .cloned()
            .collect();

        if !orphaned_audio.is_empty() || !orphaned_subs.is_empty() {
            log::debug!(
                "{} audio and {} subtitle streams are not referenced by any variant.",
                orphaned_audio.len(),
                orphaned_subs.len()
            );
        }

        Ok(CorrelationReport {
            tracks,
            orphaned_audio,
            orphaned_subs,
        })
    }
}
