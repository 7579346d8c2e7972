//! Where raw history documents come from.
//!
//! The models in this crate never perform I/O. A [`HistorySource`] hands over
//! the raw JSON document of the history-tabs endpoint; transport concerns
//! (authentication, retries, timeouts) belong to its implementation.

use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Number of full track models requested by default.
///
/// The endpoint returns bare stubs for tracks beyond this count, so it is set
/// high enough to cover a whole history page.
pub const DEFAULT_FULL_MODELS_COUNT: u32 = 1000;

/// Parameters a transport uses when fetching history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    /// How many entries should come back as full models rather than stubs
    pub full_models_count: u32,
}

impl Default for HistoryRequest {
    fn default() -> Self {
        Self {
            full_models_count: DEFAULT_FULL_MODELS_COUNT,
        }
    }
}

impl HistoryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_full_models_count(mut self, full_models_count: u32) -> Self {
        self.full_models_count = full_models_count;
        self
    }

    /// Query parameters as sent to the endpoint.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("fullModelsCount", self.full_models_count.to_string())]
    }
}

/// Trait for fetching the raw history document, mockable for testing.
///
/// When the `mock` feature is enabled, this crate provides `MockHistorySource`
/// generated by `mockall`.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait HistorySource {
    /// Fetch the raw history-tabs document.
    async fn fetch_history(&self, request: &HistoryRequest) -> Result<Value>;
}

/// Strip the service's response envelope.
///
/// Raw responses look like `{"invocationInfo": {...}, "result": {...}}`. When
/// a `result` object is present it is returned, otherwise the document itself.
pub fn unwrap_envelope(document: Value) -> Value {
    match document {
        Value::Object(mut map) if map.get("result").is_some_and(Value::is_object) => {
            map.remove("result").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Reads a previously saved history response from disk.
#[derive(Debug, Clone)]
pub struct FileHistorySource {
    path: PathBuf,
}

impl FileHistorySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait(?Send)]
impl HistorySource for FileHistorySource {
    async fn fetch_history(&self, request: &HistoryRequest) -> Result<Value> {
        log::debug!(
            "Reading history document from {} (full models requested: {})",
            self.path.display(),
            request.full_models_count
        );

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            log::warn!("Failed to read {}: {e}", self.path.display());
            e
        })?;

        Ok(serde_json::from_str(&contents)?)
    }
}
