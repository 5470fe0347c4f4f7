use thiserror::Error;

use crate::track::TrackKind;

/// Network request that failed or produced a non-success response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    LandingPage,
    EmbedDescriptor,
    Player,
    Manifest,
}

impl std::fmt::Display for FetchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FetchStage::LandingPage => "landing page",
            FetchStage::EmbedDescriptor => "embed descriptor",
            FetchStage::Player => "player",
            FetchStage::Manifest => "playlist",
        })
    }
}

#[derive(Error, Debug)]
pub enum TrackweaveError {
    #[error("Unable to download the {stage}: HTTP {status}")]
    FetchError {
        stage: FetchStage,
        status: reqwest::StatusCode,
    },

    #[error("Invalid attribute list: {0}")]
    ParseError(String),

    #[error("Delivery url does not match the /video/<id>/audio/ template: {0}")]
    TemplateMismatch(String),

    #[error("No {kind} track found for group {group_id}")]
    CorrelationLookup { kind: TrackKind, group_id: String },

    #[error("Playlist ends right after a variant stream tag: {0}")]
    TruncatedManifest(String),

    #[error("Missing attribute {0} in line: {1}")]
    MissingAttribute(&'static str, String),

    #[error("No representation available")]
    NoRepresentation,

    #[error("Invalid quality label: {0}")]
    InvalidQuality(String),

    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),

    #[error("Unable to download the {stage}: {source}")]
    RequestError {
        stage: FetchStage,
        source: reqwest::Error,
    },
}

impl TrackweaveError {
    /// Process exit status distinguishing the failing stage.
    pub fn exit_code(&self) -> i32 {
        match self {
            TrackweaveError::FetchError { stage, .. }
            | TrackweaveError::RequestError { stage, .. } => match stage {
                FetchStage::LandingPage => 1,
                FetchStage::EmbedDescriptor => 3,
                FetchStage::Player => 5,
                FetchStage::Manifest => 7,
            },
            TrackweaveError::TemplateMismatch(_) => 6,
            TrackweaveError::ParseError(_)
            | TrackweaveError::TruncatedManifest(_)
            | TrackweaveError::MissingAttribute(..) => 8,
            TrackweaveError::CorrelationLookup { .. } => 9,
            _ => 10,
        }
    }
}

pub type TrackweaveResult<T> = Result<T, TrackweaveError>;
