use crate::history::HistoryTab;
use crate::model::Model;
use crate::source::{unwrap_envelope, HistoryRequest, HistorySource};
use crate::track::Track;
use crate::{HistoryError, Result};
use serde_json::Value;

const HISTORY_TABS_KEYS: &[&str] = &["history_tabs", "historyTabs"];

/// Client facade for reading a user's listening history.
///
/// The client fetches the raw document through a [`HistorySource`] and runs
/// it through the model pipeline. It keeps no state between calls.
///
/// # Examples
///
/// ```rust,no_run
/// use yandex_music_history::{FileHistorySource, MusicHistoryClient, Result};
///
/// #[tokio::main]
/// async fn main() -> Result<()> {
///     let source = FileHistorySource::new("history.json");
///     let client = MusicHistoryClient::new(Box::new(source));
///
///     for track in client.get_music_history_tracks().await? {
///         println!("{track}");
///     }
///
///     Ok(())
/// }
/// ```
pub struct MusicHistoryClient {
    source: Box<dyn HistorySource>,
    request: HistoryRequest,
}

impl MusicHistoryClient {
    /// Create a client that requests history with default parameters.
    pub fn new(source: Box<dyn HistorySource>) -> Self {
        Self::with_request(source, HistoryRequest::default())
    }

    pub fn with_request(source: Box<dyn HistorySource>, request: HistoryRequest) -> Self {
        Self { source, request }
    }

    pub fn request(&self) -> &HistoryRequest {
        &self.request
    }

    /// Fetch and decode the listening history as dated tabs.
    ///
    /// A document without a tabs list yields an empty history. A document
    /// that is not a JSON object is [`HistoryError::Document`].
    pub async fn get_music_history(&self) -> Result<Vec<HistoryTab>> {
        let document = unwrap_envelope(self.source.fetch_history(&self.request).await?);
        let tabs = history_tabs(&document)?;

        log::debug!("Decoded {} history tabs", tabs.len());
        Ok(tabs)
    }

    /// Fetch the listening history flattened into the tracks played, in order.
    pub async fn get_music_history_tracks(&self) -> Result<Vec<Track>> {
        let tabs = self.get_music_history().await?;
        let tracks = HistoryTab::extract_tracks(&tabs);

        log::debug!(
            "Extracted {} tracks from {} history entries",
            tracks.len(),
            tabs.iter().map(HistoryTab::track_count).sum::<usize>()
        );
        Ok(tracks)
    }
}

/// Decode the tabs list of an (unwrapped) history document.
pub fn history_tabs(document: &Value) -> Result<Vec<HistoryTab>> {
    let Value::Object(map) = document else {
        return Err(HistoryError::Document(format!(
            "expected a JSON object, got {}",
            json_kind(document)
        )));
    };

    match HISTORY_TABS_KEYS.iter().find_map(|key| map.get(*key)) {
        Some(tabs) => HistoryTab::de_list(tabs),
        None => {
            log::debug!("History document has no tabs list");
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
