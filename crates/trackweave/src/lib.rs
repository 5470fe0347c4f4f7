pub mod attributes;
pub mod cdn;
pub mod correlate;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod quality;
pub mod track;
pub mod uri;

pub use attributes::{parse_attribute_list, Attributes};
pub use cdn::rebuild_stream_url;
pub use correlate::{CorrelatedTrack, CorrelationReport};
pub use error::{FetchStage, TrackweaveError, TrackweaveResult};
pub use manifest::Manifest;
pub use quality::{select_best, Representation};
pub use track::{Track, TrackKind};
pub use uri::resolve_uri;

pub use reqwest;
pub use url::Url;
