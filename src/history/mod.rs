//! Listening-history models returned by the "history tabs" endpoint.
//!
//! The object graph, leaf first:
//!
//! - [`TrackItemId`], [`WaveItemId`]: identifiers of history entries
//! - [`WaveAgent`], [`WaveData`], [`WaveFullModel`]: wave descriptions
//! - [`TrackContextData`], [`WaveContextData`]: identifier plus full record
//! - [`HistoryTabContext`], [`HistoryTrack`]: discriminated history entries
//! - [`HistoryTabItem`], [`HistoryTab`]: the dated aggregates
//!
//! [`HistoryTab::extract_tracks`] flattens a list of tabs into played tracks.

pub mod context;
pub mod entry;
pub mod ids;
pub mod tab;
pub mod wave;

pub use context::{TrackContextData, WaveContextData};
pub use entry::{HistoryTabContext, HistoryTrack};
pub use ids::{TrackItemId, WaveItemId};
pub use tab::{HistoryTab, HistoryTabItem};
pub use wave::{WaveAgent, WaveData, WaveFullModel};
