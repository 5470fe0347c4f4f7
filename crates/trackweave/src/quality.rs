use serde::{Deserialize, Serialize};

use crate::error::{TrackweaveError, TrackweaveResult};

/// One encoding of the source video, as listed by the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Representation {
    pub id: String,

    /// Label such as `1080p` or `2160p`
    pub quality: String,

    #[serde(default)]
    pub fps: f64,
}

impl Representation {
    /// `1080p` -> 1080
    pub fn quality_value(&self) -> TrackweaveResult<u32> {
        parse_quality(&self.quality)
    }

    /// Id used in the delivery url path.
    pub fn representation_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((end, _)) => &self.id[..end],
            None => &self.id,
        }
    }
}

/// Strips the trailing unit character of a quality label and parses the rest.
pub fn parse_quality(label: &str) -> TrackweaveResult<u32> {
    let mut chars = label.trim().chars();
    chars.next_back();
    chars
        .as_str()
        .parse()
        .map_err(|_| TrackweaveError::InvalidQuality(label.to_string()))
}

/// Picks the representation with the highest quality.
///
/// Equal qualities are ordered by frame rate, then by their position in `representations`.
pub fn select_best(representations: &[Representation]) -> TrackweaveResult<&Representation> {
    let mut best: Option<(u32, &Representation)> = None;
    for representation in representations {
        let quality = representation.quality_value()?;
        let better = best.map_or(true, |(best_quality, best_representation)| {
            quality > best_quality
                || (quality == best_quality && representation.fps > best_representation.fps)
        });
        if better {
            best = Some((quality, representation));
        }
    }

    let (_, best) = best.ok_or(TrackweaveError::NoRepresentation)?;
    log::info!(
        "Best representation: {id} [{quality}@{fps}]",
        id = best.id,
        quality = best.quality,
        fps = best.fps
    );
    Ok(best)
}
