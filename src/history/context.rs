use super::ids::{TrackItemId, WaveItemId};
use super::wave::WaveFullModel;
use crate::model::{Model, ModelData, Slot};
use crate::track::Track;
use crate::Result;
use serde::Serialize;

// Wire spelling first: the first truthy one wins.
const ITEM_ID_KEYS: &[&str] = &["itemId", "item_id"];
const FULL_MODEL_KEYS: &[&str] = &["fullModel", "full_model"];

/// A track reference paired with its full track record.
///
/// Both fields are always overwritten during decoding, so a malformed or
/// missing sub-object shows up as `None` rather than failing construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TrackContextData {
    pub item_id: Option<TrackItemId>,
    pub full_model: Option<Track>,
}

impl TrackContextData {
    pub fn new(item_id: TrackItemId, full_model: Track) -> Self {
        Self {
            item_id: Some(item_id),
            full_model: Some(full_model),
        }
    }
}

impl Model for TrackContextData {
    const NAME: &'static str = "TrackContextData";

    fn from_data(data: &ModelData<'_>) -> Result<Self> {
        let item_id =
            Slot::replace_unconditionally(data.first_truthy(ITEM_ID_KEYS), TrackItemId::de_json)?;
        let full_model =
            Slot::replace_unconditionally(data.first_truthy(FULL_MODEL_KEYS), Track::de_json)?;

        Ok(Self {
            item_id: item_id.into_option(),
            full_model: full_model.into_option(),
        })
    }
}

/// A wave reference paired with its full wave record.
///
/// Decoded with the same always-overwrite rule as [`TrackContextData`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WaveContextData {
    pub item_id: Option<WaveItemId>,
    pub full_model: Option<WaveFullModel>,
}

impl WaveContextData {
    pub fn new(item_id: WaveItemId, full_model: WaveFullModel) -> Self {
        Self {
            item_id: Some(item_id),
            full_model: Some(full_model),
        }
    }
}

impl Model for WaveContextData {
    const NAME: &'static str = "WaveContextData";

    fn from_data(data: &ModelData<'_>) -> Result<Self> {
        let item_id =
            Slot::replace_unconditionally(data.first_truthy(ITEM_ID_KEYS), WaveItemId::de_json)?;
        let full_model = Slot::replace_unconditionally(
            data.first_truthy(FULL_MODEL_KEYS),
            WaveFullModel::de_json,
        )?;

        Ok(Self {
            item_id: item_id.into_option(),
            full_model: full_model.into_option(),
        })
    }
}
