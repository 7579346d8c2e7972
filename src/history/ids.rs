use crate::model::{FieldAlias, Model, ModelData};
use crate::Result;
use serde::Serialize;

/// Identifies a track entry within listening history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TrackItemId {
    pub track_id: String,
    pub album_id: String,
}

impl TrackItemId {
    pub fn new(track_id: impl Into<String>, album_id: impl Into<String>) -> Self {
        Self {
            track_id: track_id.into(),
            album_id: album_id.into(),
        }
    }
}

impl Model for TrackItemId {
    const NAME: &'static str = "TrackItemId";
    const ALIASES: &'static [FieldAlias] = &[
        FieldAlias::new("track_id", "trackId"),
        FieldAlias::new("album_id", "albumId"),
    ];

    fn from_data(data: &ModelData<'_>) -> Result<Self> {
        Ok(Self {
            track_id: data.required_id("track_id")?,
            album_id: data.required_id("album_id")?,
        })
    }
}

/// Identifies a wave entry within listening history by its seeds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WaveItemId {
    pub seeds: Vec<String>,
}

impl WaveItemId {
    pub fn new<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            seeds: seeds.into_iter().map(Into::into).collect(),
        }
    }
}

impl Model for WaveItemId {
    const NAME: &'static str = "WaveItemId";

    fn from_data(data: &ModelData<'_>) -> Result<Self> {
        Ok(Self {
            seeds: data.required_str_list("seeds")?,
        })
    }
}
