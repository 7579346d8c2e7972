//! Wave ("My Wave" style radio station) descriptions embedded in history contexts.

use crate::model::{FieldAlias, Model, ModelData, Slot};
use crate::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::hash::{Hash, Hasher};

/// Animated agent shown for a wave. Identity is `animation_uri` alone.
#[derive(Debug, Clone, Serialize)]
pub struct WaveAgent {
    pub animation_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Map<String, Value>>,
}

impl WaveAgent {
    pub fn new(animation_uri: impl Into<String>) -> Self {
        Self {
            animation_uri: animation_uri.into(),
            cover: None,
        }
    }

    pub fn with_cover(mut self, cover: Map<String, Value>) -> Self {
        self.cover = Some(cover);
        self
    }
}

impl PartialEq for WaveAgent {
    fn eq(&self, other: &Self) -> bool {
        self.animation_uri == other.animation_uri
    }
}

impl Eq for WaveAgent {}

impl Hash for WaveAgent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.animation_uri.hash(state);
    }
}

impl Model for WaveAgent {
    const NAME: &'static str = "WaveAgent";
    const ALIASES: &'static [FieldAlias] = &[FieldAlias::new("animation_uri", "animationUri")];

    fn from_data(data: &ModelData<'_>) -> Result<Self> {
        Ok(Self {
            animation_uri: data.required_str("animation_uri")?,
            cover: data.optional_object("cover")?,
        })
    }
}

/// Station description of a wave.
///
/// The `agent` key must be present, but a null or malformed agent leaves the
/// field `None` instead of failing the wave.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WaveData {
    pub title: String,
    pub header: String,
    pub station_id: String,
    pub seeds: Vec<String>,
    pub agent: Option<WaveAgent>,
}

impl Model for WaveData {
    const NAME: &'static str = "WaveData";
    const ALIASES: &'static [FieldAlias] = &[FieldAlias::new("station_id", "stationId")];

    fn from_data(data: &ModelData<'_>) -> Result<Self> {
        let agent = Slot::merge_if_present(data.raw("agent"), WaveAgent::de_json)?
            .required_key(Self::NAME, "agent")?;

        Ok(Self {
            title: data.required_str("title")?,
            header: data.required_str("header")?,
            station_id: data.required_str("station_id")?,
            seeds: data.required_str_list("seeds")?,
            agent,
        })
    }
}

/// Keys the nested wave object is found under. The service uses both casings.
const WAVE_KEYS: &[&str] = &["wave", "Wave"];

/// Full wave record as embedded in a wave context.
///
/// `wave` stays `None` when the payload carries no nested wave object; such a
/// model is incomplete but still constructs. Identity is `wave` alone.
#[derive(Debug, Clone, Serialize)]
pub struct WaveFullModel {
    pub wave: Option<WaveData>,
    pub simple_wave_foreground_image_url: Option<String>,
    pub simple_wave_background_color: Option<String>,
}

impl WaveFullModel {
    pub fn new(wave: WaveData) -> Self {
        Self {
            wave: Some(wave),
            simple_wave_foreground_image_url: None,
            simple_wave_background_color: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.wave.is_some()
    }
}

impl PartialEq for WaveFullModel {
    fn eq(&self, other: &Self) -> bool {
        self.wave == other.wave
    }
}

impl Eq for WaveFullModel {}

impl Hash for WaveFullModel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.wave.hash(state);
    }
}

impl Model for WaveFullModel {
    const NAME: &'static str = "WaveFullModel";
    const ALIASES: &'static [FieldAlias] = &[
        FieldAlias::new(
            "simple_wave_foreground_image_url",
            "simpleWaveForegroundImageUrl",
        ),
        FieldAlias::new("simple_wave_background_color", "simpleWaveBackgroundColor"),
    ];

    fn from_data(data: &ModelData<'_>) -> Result<Self> {
        let wave =
            Slot::merge_if_present(data.first_truthy(WAVE_KEYS), WaveData::de_json)?.into_option();

        Ok(Self {
            wave,
            simple_wave_foreground_image_url: data
                .optional_str("simple_wave_foreground_image_url")?,
            simple_wave_background_color: data.optional_str("simple_wave_background_color")?,
        })
    }
}
