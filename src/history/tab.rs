use super::entry::{HistoryTabContext, HistoryTrack};
use crate::model::{Model, ModelData, Slot};
use crate::track::Track;
use crate::Result;
use chrono::NaiveDate;
use serde::Serialize;

/// One grouping inside a history tab: a playback context and the tracks
/// played under it, in play order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HistoryTabItem {
    pub context: Option<HistoryTabContext>,
    pub tracks: Vec<HistoryTrack>,
}

impl HistoryTabItem {
    pub fn new(context: HistoryTabContext, tracks: Vec<HistoryTrack>) -> Self {
        Self {
            context: Some(context),
            tracks,
        }
    }
}

impl Model for HistoryTabItem {
    const NAME: &'static str = "HistoryTabItem";

    fn from_data(data: &ModelData<'_>) -> Result<Self> {
        let context =
            Slot::replace_unconditionally(data.raw("context"), HistoryTabContext::de_json)?;

        Ok(Self {
            context: context.into_option(),
            tracks: HistoryTrack::de_list(data.raw_or_null("tracks"))?,
        })
    }
}

/// One dated page of listening history.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use yandex_music_history::{HistoryTab, Model};
///
/// let tabs = HistoryTab::de_list(&json!([{
///     "date": "2026-01-23",
///     "items": [{
///         "context": {"type": "search"},
///         "tracks": [{
///             "type": "track",
///             "data": {
///                 "itemId": {"trackId": "1", "albumId": "10"},
///                 "fullModel": {"id": "1", "title": "First"}
///             }
///         }]
///     }]
/// }]))?;
///
/// let tracks = HistoryTab::extract_tracks(&tabs);
/// assert_eq!(tracks.len(), 1);
/// assert_eq!(tracks[0].title.as_deref(), Some("First"));
/// # Ok::<(), yandex_music_history::HistoryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HistoryTab {
    /// Day of the tab, `YYYY-MM-DD`
    pub date: String,
    pub items: Vec<HistoryTabItem>,
}

impl HistoryTab {
    pub fn new(date: impl Into<String>, items: Vec<HistoryTabItem>) -> Self {
        Self {
            date: date.into(),
            items,
        }
    }

    /// The tab's date, if it is a valid `YYYY-MM-DD` string.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Number of history entries in this tab, playable or not.
    pub fn track_count(&self) -> usize {
        self.items.iter().map(|item| item.tracks.len()).sum()
    }

    /// Borrow every playable track across `tabs`, in tab, item, then track order.
    ///
    /// An entry is playable when its kind is `track` and both its data and the
    /// data's full model are present. Everything else is skipped silently.
    pub fn iter_tracks(tabs: &[HistoryTab]) -> impl Iterator<Item = &Track> + '_ {
        tabs.iter()
            .flat_map(|tab| tab.items.iter())
            .flat_map(|item| item.tracks.iter())
            .filter_map(|entry| {
                let track = entry
                    .is_track()
                    .then_some(entry.data.as_ref())
                    .flatten()
                    .and_then(|data| data.full_model.as_ref());
                if track.is_none() {
                    log::trace!("Skipping history entry of kind '{}'", entry.kind);
                }
                track
            })
    }

    /// Flatten history tabs into the list of tracks played, in order.
    ///
    /// No deduplication is done: a track played twice appears twice. Null or
    /// empty entries were already dropped by [`Model::de_list`], so
    /// `track_count` may be lower than the raw entry count.
    pub fn extract_tracks(tabs: &[HistoryTab]) -> Vec<Track> {
        Self::iter_tracks(tabs).cloned().collect()
    }
}

impl Model for HistoryTab {
    const NAME: &'static str = "HistoryTab";

    fn from_data(data: &ModelData<'_>) -> Result<Self> {
        Ok(Self {
            date: data.required_str("date")?,
            items: HistoryTabItem::de_list(data.raw_or_null("items"))?,
        })
    }
}
