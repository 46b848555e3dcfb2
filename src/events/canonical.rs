//! Canonical events handed to the application layer.

use base64::Engine as _;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::engine::Bitmap;

/// Name of a canonical event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    ScreenshotTaken,
    RecordingStarted,
    RecordingStopped,
    Error,
    Initialized,
    FilterChanged,
}

impl EventName {
    pub fn as_str(self) -> &'static str {
        match self {
            EventName::ScreenshotTaken => "screenshotTaken",
            EventName::RecordingStarted => "recordingStarted",
            EventName::RecordingStopped => "recordingStopped",
            EventName::Error => "error",
            EventName::Initialized => "initialized",
            EventName::FilterChanged => "filterChanged",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value in a canonical payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadValue {
    Null,
    Bool(bool),
    Text(String),
    Image(Arc<Bitmap>),
}

impl PayloadValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PayloadValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PayloadValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&Arc<Bitmap>> {
        match self {
            PayloadValue::Image(bitmap) => Some(bitmap),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PayloadValue::Null)
    }
}

impl From<bool> for PayloadValue {
    fn from(value: bool) -> Self {
        PayloadValue::Bool(value)
    }
}

impl From<&str> for PayloadValue {
    fn from(value: &str) -> Self {
        PayloadValue::Text(value.to_string())
    }
}

impl From<String> for PayloadValue {
    fn from(value: String) -> Self {
        PayloadValue::Text(value)
    }
}

impl From<Option<Arc<Bitmap>>> for PayloadValue {
    fn from(value: Option<Arc<Bitmap>>) -> Self {
        value.map_or(PayloadValue::Null, PayloadValue::Image)
    }
}

/// Images serialize as `{width, height, format, data}` with base64 pixels.
impl Serialize for PayloadValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PayloadValue::Null => serializer.serialize_none(),
            PayloadValue::Bool(b) => serializer.serialize_bool(*b),
            PayloadValue::Text(s) => serializer.serialize_str(s),
            PayloadValue::Image(bitmap) => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("width", &bitmap.width)?;
                map.serialize_entry("height", &bitmap.height)?;
                map.serialize_entry("format", &bitmap.format)?;
                map.serialize_entry(
                    "data",
                    &base64::engine::general_purpose::STANDARD.encode(&bitmap.pixels),
                )?;
                map.end()
            }
        }
    }
}

/// Event payload. Key order carries no meaning.
pub type Payload = HashMap<String, PayloadValue>;

/// Translated form of one native callback.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalEvent {
    pub name: EventName,
    pub payload: Payload,
}

impl CanonicalEvent {
    pub fn new<K, V>(name: EventName, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<PayloadValue>,
    {
        Self {
            name,
            payload: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
