//! Host events and their typed payloads.
//!
//! The host publishes events by name with a JSON `detail` object. Depending
//! on the event kind, the payload delivered to callbacks is a field of that
//! object:
//!
//! | Kind                | Event name            | Payload                |
//! |---------------------|-----------------------|------------------------|
//! | `Scan`              | `scan`                | `detail.scan`          |
//! | `Timeout`           | `timeout`             | none                   |
//! | `CradleInsertion`   | `dlCradleInsertion`   | `detail.state`         |
//! | `CradleExtraction`  | `dlCradleExtraction`  | `detail.state`         |
//! | `TrolleyInsertion`  | `dlTrolleyInsertion`  | `detail.state`         |
//! | `TrolleyExtraction` | `dlTrolleyExtraction` | `detail.state`         |

use dlbridge_core::catalog::InsertState;
use dlbridge_core::{Error, Result, SymbologyId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Kind of host event a facade can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A barcode was decoded.
    Scan,
    /// A decode session ended without a result.
    Timeout,
    /// The device was placed in a cradle.
    CradleInsertion,
    /// The device was removed from a cradle.
    CradleExtraction,
    /// The device was placed in a trolley.
    TrolleyInsertion,
    /// The device was removed from a trolley.
    TrolleyExtraction,
}

impl EventKind {
    /// Every event kind.
    pub const ALL: [EventKind; 6] = [
        EventKind::Scan,
        EventKind::Timeout,
        EventKind::CradleInsertion,
        EventKind::CradleExtraction,
        EventKind::TrolleyInsertion,
        EventKind::TrolleyExtraction,
    ];

    /// Name under which the host dispatches this event.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Scan => "scan",
            Self::Timeout => "timeout",
            Self::CradleInsertion => "dlCradleInsertion",
            Self::CradleExtraction => "dlCradleExtraction",
            Self::TrolleyInsertion => "dlTrolleyInsertion",
            Self::TrolleyExtraction => "dlTrolleyExtraction",
        }
    }

    /// Field of `detail` holding the payload, if the event carries one.
    #[must_use]
    pub fn detail_field(self) -> Option<&'static str> {
        match self {
            Self::Scan => Some("scan"),
            Self::Timeout => None,
            Self::CradleInsertion
            | Self::CradleExtraction
            | Self::TrolleyInsertion
            | Self::TrolleyExtraction => Some("state"),
        }
    }

    /// Look up a kind by its event name.
    #[must_use]
    pub fn from_event_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.event_name() == name)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// A named event as dispatched by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct HostEvent {
    /// Event name, see [`EventKind::event_name`].
    pub name: String,
    /// Event detail object.
    pub detail: Value,
}

impl HostEvent {
    /// Create an event from raw parts.
    pub fn new(name: impl Into<String>, detail: Value) -> Self {
        Self {
            name: name.into(),
            detail,
        }
    }

    /// Create the event the host would dispatch for `payload`.
    pub fn from_payload<P: EventPayload>(kind: EventKind, payload: &P) -> Self {
        Self::new(kind.event_name(), payload.to_detail(kind))
    }

    /// Kind of this event, if the name is known.
    #[must_use]
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_event_name(&self.name)
    }
}

/// Payload delivered to an event callback.
pub trait EventPayload: Sized {
    /// Extract the payload from an event `detail`.
    ///
    /// # Errors
    /// Returns `Error::InvalidPayload` if the payload field is missing or
    /// does not have the expected shape.
    fn from_detail(kind: EventKind, detail: &Value) -> Result<Self>;

    /// Build the `detail` object carrying this payload.
    fn to_detail(&self, kind: EventKind) -> Value;
}

/// Result of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Symbology of the decoded label.
    pub id: SymbologyId,
    /// Raw bytes of the label.
    #[serde(default, deserialize_with = "deserialize_raw_data")]
    pub raw_data: Vec<u8>,
    /// Readable text of the label. Empty when the host sends none.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub text: String,
}

impl ScanResult {
    /// Create a scan result whose raw data is the UTF-8 text.
    pub fn new(id: SymbologyId, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id,
            raw_data: text.clone().into_bytes(),
            text,
        }
    }
}

/// Cradle or trolley state carried by docking events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CradleState {
    /// Raw insertion state, see [`InsertState`].
    pub id: i32,
}

impl CradleState {
    /// Create a state payload from an insertion state.
    pub fn new(state: InsertState) -> Self {
        Self { id: state.to_i32() }
    }

    /// Insertion state, if `id` is a catalog value.
    #[must_use]
    pub fn insert_state(&self) -> Option<InsertState> {
        InsertState::from_i32(self.id)
    }
}

/// Marker payload of the decode timeout event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeTimeout;

impl EventPayload for ScanResult {
    fn from_detail(kind: EventKind, detail: &Value) -> Result<Self> {
        nested_from_detail(kind, detail)
    }

    fn to_detail(&self, kind: EventKind) -> Value {
        nested_to_detail(kind, self)
    }
}

impl EventPayload for CradleState {
    fn from_detail(kind: EventKind, detail: &Value) -> Result<Self> {
        nested_from_detail(kind, detail)
    }

    fn to_detail(&self, kind: EventKind) -> Value {
        nested_to_detail(kind, self)
    }
}

impl EventPayload for DecodeTimeout {
    fn from_detail(_kind: EventKind, _detail: &Value) -> Result<Self> {
        Ok(DecodeTimeout)
    }

    fn to_detail(&self, _kind: EventKind) -> Value {
        Value::Null
    }
}

fn nested_from_detail<T: DeserializeOwned>(kind: EventKind, detail: &Value) -> Result<T> {
    let value = match kind.detail_field() {
        Some(field) => detail.get(field).ok_or_else(|| {
            Error::invalid_payload(kind.event_name(), format!("missing detail field `{field}`"))
        })?,
        None => detail,
    };
    T::deserialize(value).map_err(|e| Error::invalid_payload(kind.event_name(), e.to_string()))
}

fn nested_to_detail<T: Serialize>(kind: EventKind, payload: &T) -> Value {
    let value = serde_json::to_value(payload).unwrap_or(Value::Null);
    match kind.detail_field() {
        Some(field) => {
            let mut detail = Map::new();
            detail.insert(field.to_string(), value);
            Value::Object(detail)
        }
        None => value,
    }
}

/// Accepts raw scan data as a byte array, a signed byte array (Java
/// `byte[]`), a string or null.
fn deserialize_raw_data<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawData {
        Bytes(Vec<i16>),
        Text(String),
    }

    Ok(match Option::<RawData>::deserialize(deserializer)? {
        // -128..=255 covers both signed and unsigned bytes
        Some(RawData::Bytes(bytes)) => bytes.into_iter().map(|b| b as u8).collect(),
        Some(RawData::Text(text)) => text.into_bytes(),
        None => Vec::new(),
    })
}

fn deserialize_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
