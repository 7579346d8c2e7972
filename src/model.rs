//! Shared deserialization contract for history models.
//!
//! Every model is built from a raw JSON value in three steps:
//!
//! 1. [`ModelData::new`] decides whether the input is a usable, non-empty JSON
//!    object. Anything else is *absence*, reported as `Ok(None)` by
//!    [`Model::de_json`] and never as an error.
//! 2. The object's keys are normalized through the model's static
//!    [`FieldAlias`] table, so `trackId` and `track_id` resolve to the same
//!    field. The snake_case spelling wins when both are present.
//! 3. [`Model::from_data`] reads typed fields. Nested objects go through one
//!    of the two [`Slot`] helpers, which differ in what happens when the
//!    source key is missing.

use crate::{HistoryError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

static NULL: Value = Value::Null;

/// One entry of a model's alias table: `wire` is accepted as a spelling of `field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldAlias {
    /// Canonical snake_case field name
    pub field: &'static str,
    /// Alternative spelling used by the service
    pub wire: &'static str,
}

impl FieldAlias {
    pub const fn new(field: &'static str, wire: &'static str) -> Self {
        Self { field, wire }
    }
}

/// Resolve a raw object's keys against an alias table.
///
/// All raw keys are kept as-is. For each alias, the wire spelling is copied
/// under the canonical name only if the canonical name is not already present.
pub fn normalize_fields<'a>(
    raw: &'a Map<String, Value>,
    aliases: &[FieldAlias],
) -> HashMap<&'a str, &'a Value> {
    let mut fields: HashMap<&'a str, &'a Value> =
        raw.iter().map(|(key, value)| (key.as_str(), value)).collect();

    for alias in aliases {
        if fields.contains_key(alias.field) {
            continue;
        }
        if let Some(value) = raw.get(alias.wire) {
            fields.insert(alias.field, value);
        }
    }

    fields
}

/// Truthiness as the service's payloads use it: null, `false`, zero and
/// empty strings, arrays or objects all count as "nothing there".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// A validated, map-shaped payload with its fields normalized for one model.
///
/// Holding a `ModelData` is the proof that the input was present; there is no
/// way to construct one from a non-object or an empty object.
#[derive(Debug, Clone)]
pub struct ModelData<'a> {
    model: &'static str,
    raw: &'a Map<String, Value>,
    fields: HashMap<&'a str, &'a Value>,
}

impl<'a> ModelData<'a> {
    /// Returns `None` when `data` is not a non-empty JSON object.
    pub fn new(model: &'static str, data: &'a Value, aliases: &[FieldAlias]) -> Option<Self> {
        match data {
            Value::Object(raw) if !raw.is_empty() => Some(Self {
                model,
                raw,
                fields: normalize_fields(raw, aliases),
            }),
            _ => None,
        }
    }

    /// Name of the model being built, used in error reports.
    pub fn model(&self) -> &'static str {
        self.model
    }

    /// Raw value under `key`, bypassing alias normalization.
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.raw.get(key)
    }

    /// Raw value under `key`, or JSON null when the key is missing.
    pub fn raw_or_null(&self, key: &str) -> &'a Value {
        self.raw.get(key).unwrap_or(&NULL)
    }

    /// First truthy raw value among `keys`, checked in order.
    pub fn first_truthy(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter()
            .filter_map(|key| self.raw.get(*key))
            .find(|value| is_truthy(value))
    }

    /// Clone every raw entry whose key is not listed in `known`.
    pub fn remaining(&self, known: &[&str]) -> Map<String, Value> {
        self.raw
            .iter()
            .filter(|(key, _)| !known.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn required_str(&self, name: &'static str) -> Result<String> {
        self.optional_str(name)?.ok_or_else(|| self.missing(name))
    }

    pub fn optional_str(&self, name: &'static str) -> Result<Option<String>> {
        match self.field(name) {
            None => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(_) => Err(self.invalid(name, "a string")),
        }
    }

    /// Identifier field: the service sends these as strings or as integers.
    pub fn required_id(&self, name: &'static str) -> Result<String> {
        match self.field(name) {
            None => Err(self.missing(name)),
            Some(Value::String(text)) => Ok(text.clone()),
            Some(Value::Number(number)) if !number.is_f64() => Ok(number.to_string()),
            Some(_) => Err(self.invalid(name, "a string or integer identifier")),
        }
    }

    pub fn required_str_list(&self, name: &'static str) -> Result<Vec<String>> {
        match self.field(name) {
            None => Err(self.missing(name)),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(text) => Ok(text.clone()),
                    _ => Err(self.invalid(name, "a list of strings")),
                })
                .collect(),
            Some(_) => Err(self.invalid(name, "a list of strings")),
        }
    }

    pub fn optional_object(&self, name: &'static str) -> Result<Option<Map<String, Value>>> {
        match self.field(name) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map.clone())),
            Some(_) => Err(self.invalid(name, "an object")),
        }
    }

    fn field(&self, name: &'static str) -> Option<&'a Value> {
        self.fields
            .get(name)
            .copied()
            .filter(|value| !value.is_null())
    }

    fn missing(&self, field: &'static str) -> HistoryError {
        HistoryError::MissingField {
            model: self.model,
            field,
        }
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> HistoryError {
        HistoryError::InvalidField {
            model: self.model,
            field,
            expected,
        }
    }
}

/// A nested field under construction.
///
/// The two constructors encode two different rules the service's models use:
///
/// - [`Slot::merge_if_present`] only touches the field when the source is
///   there. A missing source leaves the slot [`Slot::Unset`], which a required
///   key then reports as [`HistoryError::MissingField`]. A present but
///   undecodable source is [`Slot::Set`] with `None`.
/// - [`Slot::replace_unconditionally`] always writes the decoded result, even
///   when decoding produced nothing. The field ends up explicitly empty
///   instead of missing, and construction goes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    Unset,
    Set(Option<T>),
}

impl<T> Slot<T> {
    pub fn merge_if_present<F>(source: Option<&Value>, decode: F) -> Result<Self>
    where
        F: FnOnce(&Value) -> Result<Option<T>>,
    {
        match source {
            Some(value) => decode(value).map(Slot::Set),
            None => Ok(Slot::Unset),
        }
    }

    pub fn replace_unconditionally<F>(source: Option<&Value>, decode: F) -> Result<Self>
    where
        F: FnOnce(&Value) -> Result<Option<T>>,
    {
        decode(source.unwrap_or(&NULL)).map(Slot::Set)
    }

    /// Demand that the source key was there. Its value may still have
    /// decoded to nothing.
    pub fn required_key(self, model: &'static str, field: &'static str) -> Result<Option<T>> {
        match self {
            Slot::Set(value) => Ok(value),
            Slot::Unset => Err(HistoryError::MissingField { model, field }),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Slot::Set(value) => value,
            Slot::Unset => None,
        }
    }
}

/// Deserialization and serialization contract shared by all history models.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use yandex_music_history::{Model, TrackItemId};
///
/// let id = TrackItemId::de_json(&json!({"trackId": "1", "albumId": "2"}))?.unwrap();
/// assert_eq!(id, TrackItemId::new("1", "2"));
///
/// // Anything that is not a non-empty object is absence, not an error.
/// assert!(TrackItemId::de_json(&json!("nope"))?.is_none());
/// assert!(TrackItemId::de_list(&json!(null))?.is_empty());
/// # Ok::<(), yandex_music_history::HistoryError>(())
/// ```
pub trait Model: Sized + Serialize {
    /// Model name used in error reports.
    const NAME: &'static str;

    /// camelCase spellings accepted for this model's scalar fields.
    const ALIASES: &'static [FieldAlias] = &[];

    /// Build the model from a validated payload.
    fn from_data(data: &ModelData<'_>) -> Result<Self>;

    /// Decode one model; `Ok(None)` when `data` is not a non-empty object.
    fn de_json(data: &Value) -> Result<Option<Self>> {
        match ModelData::new(Self::NAME, data, Self::ALIASES) {
            Some(model_data) => Self::from_data(&model_data).map(Some),
            None => Ok(None),
        }
    }

    /// Decode every element of a JSON array in order.
    ///
    /// A null or non-array input is an empty list. Absent elements (non-objects
    /// and empty objects) are dropped, so the result can be shorter
    /// than the input array. The first hard construction error is returned
    /// as-is.
    fn de_list(data: &Value) -> Result<Vec<Self>> {
        let Value::Array(items) = data else {
            return Ok(Vec::new());
        };

        let mut models = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match Self::de_json(item)? {
                Some(model) => models.push(model),
                None => log::debug!("Dropping absent {} at index {index}", Self::NAME),
            }
        }
        Ok(models)
    }

    /// Serialize back to the snake_case wire shape.
    fn to_dict(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
