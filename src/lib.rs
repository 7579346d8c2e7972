//! Typed models for Yandex Music listening history.
//!
//! Raw JSON from the "history tabs" endpoint is decoded bottom-up into a small
//! object graph ([`HistoryTab`] → [`HistoryTabItem`] → [`HistoryTrack`] → ...)
//! and can be flattened into the list of [`Track`]s played with
//! [`HistoryTab::extract_tracks`].

pub mod client;
pub mod error;
pub mod history;
pub mod model;
pub mod source;
pub mod track;

pub use client::{history_tabs, MusicHistoryClient};
pub use error::HistoryError;
pub use history::{
    HistoryTab, HistoryTabContext, HistoryTabItem, HistoryTrack, TrackContextData, TrackItemId,
    WaveAgent, WaveContextData, WaveData, WaveFullModel, WaveItemId,
};
pub use model::{FieldAlias, Model, ModelData, Slot};
#[cfg(feature = "mock")]
pub use source::MockHistorySource;
pub use source::{
    unwrap_envelope, FileHistorySource, HistoryRequest, HistorySource, DEFAULT_FULL_MODELS_COUNT,
};
pub use track::Track;

pub type Result<T> = std::result::Result<T, HistoryError>;
