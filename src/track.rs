use crate::model::{Model, ModelData};
use crate::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A full track record embedded in a history payload.
///
/// The history models treat tracks as opaque: only `id` (the identity) and
/// `title` are read, and every other wire key is carried verbatim in `extra`
/// so the record serializes back unchanged.
///
/// Two tracks are equal when their ids are equal.
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    /// Service track identifier
    pub id: String,
    /// Track title, when the payload carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Remaining wire fields, untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Track {
    pub fn new(id: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.map(str::to_string),
            extra: Map::new(),
        }
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{title}"),
            None => write!(f, "track {}", self.id),
        }
    }
}

impl Model for Track {
    const NAME: &'static str = "Track";

    fn from_data(data: &ModelData<'_>) -> Result<Self> {
        Ok(Self {
            id: data.required_id("id")?,
            title: data.optional_str("title")?,
            extra: data.remaining(&["id", "title"]),
        })
    }
}
