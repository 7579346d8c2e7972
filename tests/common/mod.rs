#![allow(dead_code)]
use serde_json::{json, Map, Value};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use yandex_music_history::{
    HistoryTab, HistoryTabContext, HistoryTabItem, HistoryTrack, Track, TrackContextData,
    TrackItemId, WaveAgent, WaveContextData, WaveData, WaveFullModel, WaveItemId,
};

pub const TRACK_ID: &str = "12345678";
pub const ALBUM_ID: &str = "11111111";
pub const DATE: &str = "2026-01-23";
pub const STATION_ID: &str = "user:onyourwave";
pub const ANIMATION_URI: &str = "https://music-custom-wave-media.s3.yandex.net/agent.json";

pub const FIXTURE_PATH: &str = "tests/fixtures/history_tabs.json";

pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

pub fn load_fixture() -> Value {
    let contents = std::fs::read_to_string(FIXTURE_PATH).expect("fixture should be readable");
    serde_json::from_str(&contents).expect("fixture should be valid JSON")
}

pub fn track() -> Track {
    let mut extra = Map::new();
    extra.insert("durationMs".to_string(), json!(215000));
    extra.insert("available".to_string(), json!(true));
    Track {
        id: TRACK_ID.to_string(),
        title: Some("Test Track".to_string()),
        extra,
    }
}

pub fn track_item_id() -> TrackItemId {
    TrackItemId::new(TRACK_ID, ALBUM_ID)
}

pub fn track_context_data() -> TrackContextData {
    TrackContextData::new(track_item_id(), track())
}

pub fn history_track() -> HistoryTrack {
    HistoryTrack::new(HistoryTrack::TRACK, track_context_data())
}

pub fn history_tab_context() -> HistoryTabContext {
    HistoryTabContext::Search
}

pub fn history_tab_item() -> HistoryTabItem {
    HistoryTabItem::new(history_tab_context(), vec![history_track()])
}

pub fn history_tab() -> HistoryTab {
    HistoryTab::new(DATE, vec![history_tab_item()])
}

pub fn wave_item_id() -> WaveItemId {
    WaveItemId::new([STATION_ID])
}

pub fn wave_agent() -> WaveAgent {
    let mut cover = Map::new();
    cover.insert("type".to_string(), json!("from-artist-photos"));
    WaveAgent::new(ANIMATION_URI).with_cover(cover)
}

pub fn wave_data() -> WaveData {
    WaveData {
        title: "My Wave".to_string(),
        header: "My Wave".to_string(),
        station_id: STATION_ID.to_string(),
        seeds: vec![STATION_ID.to_string()],
        agent: Some(wave_agent()),
    }
}

pub fn wave_full_model() -> WaveFullModel {
    WaveFullModel {
        wave: Some(wave_data()),
        simple_wave_foreground_image_url: Some("https://example.net/fg.png".to_string()),
        simple_wave_background_color: Some("#1A1A1A".to_string()),
    }
}

pub fn wave_context_data() -> WaveContextData {
    WaveContextData::new(wave_item_id(), wave_full_model())
}

/// Raw history entry for a track, in the service's camelCase spelling.
pub fn track_entry(kind: &str, track_id: &str, title: &str) -> Value {
    json!({
        "type": kind,
        "data": {
            "itemId": {"trackId": track_id, "albumId": "1"},
            "fullModel": {"id": track_id, "title": title}
        }
    })
}

/// Raw history tab with a single search item holding `tracks`.
pub fn tab_with_tracks(date: &str, tracks: Vec<Value>) -> Value {
    json!({
        "date": date,
        "items": [{"context": {"type": "search"}, "tracks": tracks}]
    })
}
