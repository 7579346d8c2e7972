use thiserror::Error;

/// Error types for listening-history deserialization and retrieval.
///
/// A payload that is simply not map-shaped is *not* an error: every
/// [`Model::de_json`](crate::Model::de_json) reports that as `Ok(None)`.
/// The variants here are the hard failures that must reach the caller.
///
/// # Error Handling Examples
///
/// ```rust
/// use serde_json::json;
/// use yandex_music_history::{HistoryError, Model, TrackItemId};
///
/// match TrackItemId::de_json(&json!({"trackId": "1"})) {
///     Err(HistoryError::MissingField { model, field }) => {
///         assert_eq!(model, "TrackItemId");
///         assert_eq!(field, "album_id");
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum HistoryError {
    /// A required field received no value after alias normalization.
    ///
    /// This indicates a genuine schema violation in the payload, distinct
    /// from an absent object (which decodes to `None`).
    #[error("{model}: required field `{field}` is missing")]
    MissingField {
        /// Model being constructed
        model: &'static str,
        /// Normalized (snake_case) field name
        field: &'static str,
    },

    /// A field is present but carries the wrong JSON type.
    #[error("{model}: field `{field}` must be {expected}")]
    InvalidField {
        /// Model being constructed
        model: &'static str,
        /// Normalized (snake_case) field name
        field: &'static str,
        /// Human readable description of the accepted shape
        expected: &'static str,
    },

    /// The fetched top-level document has an unexpected shape.
    #[error("Malformed history document: {0}")]
    Document(String),

    /// Failure reported by a [`HistorySource`](crate::HistorySource).
    #[error("History source error: {0}")]
    Source(String),

    /// JSON encoding or decoding errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system I/O errors.
    ///
    /// This can occur when reading saved history documents from disk.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
