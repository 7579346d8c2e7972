mod common;

use common::*;
use serde_json::json;
use yandex_music_history::{history_tabs, HistoryTab, HistoryTrack, Model, Result, Track};

fn ids(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|track| track.id.as_str()).collect()
}

#[test_log::test]
fn test_extract_preserves_tab_item_track_order() -> Result<()> {
    let tabs = HistoryTab::de_list(&json!([
        tab_with_tracks(
            "2026-01-23",
            vec![
                track_entry("track", "T1", "First"),
                track_entry("track", "T2", "Second")
            ]
        ),
        tab_with_tracks("2026-01-22", vec![track_entry("track", "T3", "Third")])
    ]))?;

    let tracks = HistoryTab::extract_tracks(&tabs);

    assert_eq!(ids(&tracks), vec!["T1", "T2", "T3"]);
    assert_eq!(tracks[1].title.as_deref(), Some("Second"));
    Ok(())
}

#[test_log::test]
fn test_extract_survives_wave_with_null_agent() -> Result<()> {
    let tabs = HistoryTab::de_list(&json!([{
        "date": DATE,
        "items": [
            {
                "context": {
                    "type": "wave",
                    "data": {
                        "itemId": {"seeds": [STATION_ID]},
                        "fullModel": {
                            "wave": {
                                "title": "My Wave",
                                "header": "My Wave",
                                "stationId": STATION_ID,
                                "seeds": [STATION_ID],
                                "agent": null
                            }
                        }
                    }
                },
                "tracks": [track_entry("track", "T1", "First")]
            }
        ]
    }]))?;

    let wave = tabs[0].items[0]
        .context
        .as_ref()
        .and_then(|context| context.data())
        .and_then(|data| data.full_model.as_ref())
        .and_then(|model| model.wave.as_ref())
        .unwrap();
    assert_eq!(wave.agent, None);
    assert_eq!(ids(&HistoryTab::extract_tracks(&tabs)), vec!["T1"]);
    Ok(())
}

#[test_log::test]
fn test_extract_skips_other_kinds() -> Result<()> {
    let tabs = HistoryTab::de_list(&json!([tab_with_tracks(
        DATE,
        vec![
            track_entry("track", "T1", "Kept"),
            track_entry("other", "T2", "Skipped")
        ]
    )]))?;

    let tracks = HistoryTab::extract_tracks(&tabs);

    assert_eq!(ids(&tracks), vec!["T1"]);
    Ok(())
}

#[test_log::test]
fn test_extract_skips_entries_without_data() -> Result<()> {
    let tabs = HistoryTab::de_list(&json!([tab_with_tracks(
        DATE,
        vec![
            json!({"type": "track", "data": "malformed"}),
            json!({"type": "track"}),
            json!({"type": "track", "data": {"itemId": {"trackId": "T9", "albumId": "1"}}}),
            track_entry("track", "T1", "Kept")
        ]
    )]))?;

    // All four entries decode; only the complete one is playable.
    assert_eq!(tabs[0].track_count(), 4);
    assert!(tabs[0].items[0].tracks[0].data.is_none());
    assert_eq!(ids(&HistoryTab::extract_tracks(&tabs)), vec!["T1"]);
    Ok(())
}

#[test_log::test]
fn test_extract_empty_inputs() -> Result<()> {
    assert!(HistoryTab::extract_tracks(&[]).is_empty());

    let tabs = HistoryTab::de_list(&json!([
        {"date": DATE, "items": []},
        {"date": DATE},
        tab_with_tracks(DATE, vec![])
    ]))?;

    assert_eq!(tabs.len(), 3);
    assert!(HistoryTab::extract_tracks(&tabs).is_empty());
    Ok(())
}

#[test_log::test]
fn test_extract_keeps_duplicates() -> Result<()> {
    let tabs = HistoryTab::de_list(&json!([
        tab_with_tracks(
            DATE,
            vec![
                track_entry("track", "T1", "Again"),
                track_entry("track", "T1", "Again")
            ]
        ),
        tab_with_tracks("2026-01-22", vec![track_entry("track", "T1", "Again")])
    ]))?;

    assert_eq!(ids(&HistoryTab::extract_tracks(&tabs)), vec!["T1", "T1", "T1"]);
    Ok(())
}

#[test_log::test]
fn test_extract_from_constructed_models() {
    let mut other = history_track();
    other.kind = "clip".to_string();
    let mut broken = history_track();
    broken.data = None;

    let mut tab = history_tab();
    tab.items[0].tracks = vec![other, history_track(), broken];

    let tracks = HistoryTab::extract_tracks(&[tab.clone(), tab]);

    assert_eq!(tracks, vec![track(), track()]);
    assert!(!HistoryTrack::new("clip", track_context_data()).is_track());
}

#[test_log::test]
fn test_iter_tracks_borrows() {
    let tabs = vec![history_tab()];
    let borrowed: Vec<&Track> = HistoryTab::iter_tracks(&tabs).collect();

    assert_eq!(borrowed.len(), 1);
    assert!(std::ptr::eq(
        borrowed[0],
        tabs[0].items[0].tracks[0]
            .data
            .as_ref()
            .and_then(|data| data.full_model.as_ref())
            .unwrap()
    ));
}

#[test_log::test]
fn test_extract_from_saved_response() -> Result<()> {
    let document = yandex_music_history::unwrap_envelope(load_fixture());
    let tabs = history_tabs(&document)?;

    assert_eq!(tabs.len(), 2);
    assert_eq!(tabs[0].date, "2026-01-23");
    assert_eq!(tabs[0].items.len(), 2);
    // The null entry in the second item is dropped; the malformed one is kept.
    assert_eq!(tabs[0].track_count(), 5);
    assert_eq!(tabs[1].track_count(), 1);

    let wave = tabs[0].items[0]
        .context
        .as_ref()
        .and_then(|context| context.data())
        .and_then(|data| data.full_model.as_ref())
        .and_then(|model| model.wave.as_ref())
        .expect("wave context should be decoded");
    assert_eq!(wave.station_id, "user:onyourwave");
    assert_eq!(
        wave.agent.as_ref().map(|agent| agent.animation_uri.as_str()),
        Some(ANIMATION_URI)
    );

    let search = tabs[0].items[1].context.as_ref().unwrap();
    assert_eq!(search.kind(), "search");
    assert!(search.data().is_none());
    assert_eq!(tabs[1].items[0].context.as_ref().unwrap().kind(), "playlist");

    let tracks = HistoryTab::extract_tracks(&tabs);
    assert_eq!(ids(&tracks), vec!["101", "102", "101", "103"]);
    assert_eq!(
        tracks[0].extra.get("durationMs"),
        Some(&json!(201000))
    );

    // Re-serialized tabs decode to the same graph.
    let reserialized = tabs
        .iter()
        .map(Model::to_dict)
        .collect::<Result<Vec<_>>>()?;
    assert_eq!(HistoryTab::de_list(&json!(reserialized))?, tabs);
    Ok(())
}
