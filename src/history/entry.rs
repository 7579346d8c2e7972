use super::context::{TrackContextData, WaveContextData};
use crate::model::{Model, ModelData, Slot};
use crate::Result;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Why a group of history tracks was played.
///
/// The wire form is `{"type": ..., "data": ...}`. Only the `wave` kind carries
/// data; for every other kind a `data` key in the payload is ignored. Unknown
/// kinds are kept verbatim in [`HistoryTabContext::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HistoryTabContext {
    /// Played from search results
    Search,
    /// Played from a wave; `None` when the wave payload was missing or malformed
    Wave(Option<WaveContextData>),
    /// A kind this crate does not know about
    Other(String),
}

impl HistoryTabContext {
    pub const SEARCH: &'static str = "search";
    pub const WAVE: &'static str = "wave";

    /// Context for a raw `type` value, without data.
    pub fn from_kind(kind: &str) -> Self {
        if kind == Self::SEARCH {
            Self::Search
        } else if kind == Self::WAVE {
            Self::Wave(None)
        } else {
            Self::Other(kind.to_string())
        }
    }

    /// The raw `type` discriminator.
    pub fn kind(&self) -> &str {
        match self {
            Self::Search => Self::SEARCH,
            Self::Wave(_) => Self::WAVE,
            Self::Other(kind) => kind.as_str(),
        }
    }

    pub fn data(&self) -> Option<&WaveContextData> {
        match self {
            Self::Wave(data) => data.as_ref(),
            Self::Search | Self::Other(_) => None,
        }
    }
}

impl Serialize for HistoryTabContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let data = self.data();
        let mut map = serializer.serialize_map(Some(1 + usize::from(data.is_some())))?;
        map.serialize_entry("type", self.kind())?;
        if let Some(data) = data {
            map.serialize_entry("data", data)?;
        }
        map.end()
    }
}

impl Model for HistoryTabContext {
    const NAME: &'static str = "HistoryTabContext";

    fn from_data(data: &ModelData<'_>) -> Result<Self> {
        let kind = data.required_str("type")?;

        if kind == Self::WAVE {
            let wave =
                Slot::replace_unconditionally(data.raw("data"), WaveContextData::de_json)?;
            Ok(Self::Wave(wave.into_option()))
        } else {
            Ok(Self::from_kind(&kind))
        }
    }
}

/// One played entry inside a history tab item.
///
/// `data` is `None` when the payload's track data was missing or malformed;
/// such entries are skipped by [`HistoryTab::extract_tracks`](super::HistoryTab::extract_tracks).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HistoryTrack {
    /// Raw `type` discriminator, `track` for track entries
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Option<TrackContextData>,
}

impl HistoryTrack {
    pub const TRACK: &'static str = "track";

    pub fn new(kind: impl Into<String>, data: TrackContextData) -> Self {
        Self {
            kind: kind.into(),
            data: Some(data),
        }
    }

    pub fn is_track(&self) -> bool {
        self.kind == Self::TRACK
    }
}

impl Model for HistoryTrack {
    const NAME: &'static str = "HistoryTrack";

    fn from_data(data: &ModelData<'_>) -> Result<Self> {
        let track_data =
            Slot::replace_unconditionally(data.raw("data"), TrackContextData::de_json)?;

        Ok(Self {
            kind: data.required_str("type")?,
            data: track_data.into_option(),
        })
    }
}
