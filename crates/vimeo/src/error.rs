use thiserror::Error;
use trackweave::TrackweaveError;

#[derive(Error, Debug)]
pub enum VimeoError {
    #[error("Unable to find the embeds for the video")]
    NoEmbed,

    #[error("Failed to find the iframed player")]
    NoPlayerFrame,

    #[error("Unable to find the player configuration")]
    NoPlayerConfig,

    #[error("No HLS delivery url in the player configuration")]
    NoDeliveryUrl,

    #[error(transparent)]
    Trackweave(#[from] TrackweaveError),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    RegexError(#[from] regex::Error),
}

impl VimeoError {
    /// Process exit status distinguishing the failing stage.
    pub fn exit_code(&self) -> i32 {
        match self {
            VimeoError::NoEmbed => 2,
            VimeoError::NoPlayerFrame => 4,
            VimeoError::NoPlayerConfig => 5,
            VimeoError::NoDeliveryUrl => 6,
            VimeoError::Trackweave(e) => e.exit_code(),
            _ => 10,
        }
    }
}

impl From<url::ParseError> for VimeoError {
    fn from(value: url::ParseError) -> Self {
        Self::Trackweave(value.into())
    }
}

pub type VimeoResult<T> = Result<T, VimeoError>;
