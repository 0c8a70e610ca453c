use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a configurable scanner property.
///
/// Catalog values are associated constants (see [`crate::catalog::properties`]).
/// Arbitrary identifiers can be built with [`PropertyId::new`]; no bounds
/// checking is performed, the host decides whether an id is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(u32);

impl PropertyId {
    /// Create a property id from its raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        PropertyId(id)
    }

    /// Get the raw property id.
    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}({})", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<u32> for PropertyId {
    fn from(id: u32) -> Self {
        PropertyId(id)
    }
}

/// Identifier of a barcode symbology reported in scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbologyId(u32);

impl SymbologyId {
    /// Create a symbology id from its raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        SymbologyId(id)
    }

    /// Get the raw symbology id.
    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SymbologyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "UNKNOWN({})", self.0),
        }
    }
}

impl From<u32> for SymbologyId {
    fn from(id: u32) -> Self {
        SymbologyId(id)
    }
}

/// A value decoded from a host tagged string.
///
/// Every tag of the host representation has its own variant. Input whose tag
/// is not recognized decodes to [`HostValue::Unrecognized`], which callers
/// treat exactly like [`HostValue::Undefined`] (see [`HostValue::is_undefined`]).
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    /// `UND:` - no value.
    Undefined,
    /// `STR:` - text.
    Str(String),
    /// `INT:` - integer.
    Int(i64),
    /// `BOL:` - boolean.
    Bool(bool),
    /// `FLO:` - floating point number. Also produced for an `INT:` payload
    /// without a leading integer (NaN).
    Float(f64),
    /// `OBJ:` - JSON structure.
    Object(serde_json::Value),
    /// `NUL:` - explicit null.
    Null,
    /// `SYM:` - symbolic token.
    Symbol(String),
    /// Unknown tag or malformed input; holds the raw host text.
    Unrecognized(String),
}

impl HostValue {
    /// Returns `true` for `Undefined` and for unrecognized input.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined | Self::Unrecognized(_))
    }

    /// Returns `true` if the host sent an explicit null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the input could not be decoded.
    #[must_use]
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }

    /// Get the integer value, if this is an integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the numeric value of an integer or float.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the text of a string or symbol value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) | Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Get the JSON structure of an object value.
    #[must_use]
    pub fn as_object(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }

    /// Interpret the value the way the host treats property flags.
    ///
    /// Booleans map directly, integers are `true` when non-zero.
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(n) => Some(*n != 0),
            _ => None,
        }
    }
}

/// Formats the value in the host's tagged representation.
///
/// `Unrecognized` values are written back verbatim.
impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "UND:"),
            Self::Str(s) => write!(f, "STR:{s}"),
            Self::Int(n) => write!(f, "INT:{n}"),
            Self::Bool(b) => write!(f, "BOL:{b}"),
            Self::Float(n) if n.is_infinite() => {
                let sign = if n.is_sign_negative() { "-" } else { "" };
                write!(f, "FLO:{sign}Infinity")
            }
            Self::Float(n) => write!(f, "FLO:{n}"),
            Self::Object(v) => write!(f, "OBJ:{v}"),
            Self::Null => write!(f, "NUL:"),
            Self::Symbol(s) => write!(f, "SYM:{s}"),
            Self::Unrecognized(raw) => write!(f, "{raw}"),
        }
    }
}

/// A value to store into a scanner property.
///
/// The variant decides which host setter receives it: text goes through the
/// string setter, integers and flags through the integer setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Text property (prefixes, suffixes, intent names).
    Text(String),
    /// Integer property (lengths, enumerated options, timeouts).
    Int(i64),
    /// Boolean property, sent to the host as 1 or 0.
    Flag(bool),
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<char> for PropertyValue {
    /// Characters are stored as their code point (e.g. user defined code ids).
    fn from(value: char) -> Self {
        Self::Int(i64::from(u32::from(value)))
    }
}

macro_rules! property_value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

property_value_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// Argument of a host property setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostArgument {
    /// Routed to `set_property_string`.
    Str(String),
    /// Routed to `set_property_int`.
    Int(i64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_property_id_raw() {
        let id = PropertyId::new(256);
        assert_eq!(id.as_u32(), 256);
        assert_eq!(PropertyId::from(256), id);
    }

    #[test]
    fn test_property_id_display() {
        assert_eq!(PropertyId::new(256).to_string(), "CODE39_ENABLE(256)");
        assert_eq!(PropertyId::new(999_999).to_string(), "999999");
    }

    #[test]
    fn test_symbology_id_display() {
        assert_eq!(SymbologyId::new(1).to_string(), "CODE39");
        assert_eq!(SymbologyId::new(500).to_string(), "UNKNOWN(500)");
    }

    #[test]
    fn test_host_value_undefined_variants() {
        assert!(HostValue::Undefined.is_undefined());
        assert!(HostValue::Unrecognized("XYZ:abc".to_string()).is_undefined());
        assert!(!HostValue::Null.is_undefined());
        assert!(HostValue::Null.is_null());
        assert!(!HostValue::Undefined.is_unrecognized());
    }

    #[test]
    fn test_host_value_accessors() {
        assert_eq!(HostValue::Int(42).as_i64(), Some(42));
        assert_eq!(HostValue::Int(42).as_f64(), Some(42.0));
        assert_eq!(HostValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(HostValue::Bool(true).as_bool(), Some(true));
        assert_eq!(HostValue::Str("abc".into()).as_str(), Some("abc"));
        assert_eq!(HostValue::Symbol("tok".into()).as_str(), Some("tok"));
        assert_eq!(HostValue::Null.as_i64(), None);
    }

    #[rstest]
    #[case(HostValue::Bool(true), Some(true))]
    #[case(HostValue::Bool(false), Some(false))]
    #[case(HostValue::Int(1), Some(true))]
    #[case(HostValue::Int(0), Some(false))]
    #[case(HostValue::Str("1".into()), None)]
    fn test_host_value_as_flag(#[case] value: HostValue, #[case] expected: Option<bool>) {
        assert_eq!(value.as_flag(), expected);
    }

    #[rstest]
    #[case(HostValue::Undefined, "UND:")]
    #[case(HostValue::Str("abc".into()), "STR:abc")]
    #[case(HostValue::Int(-7), "INT:-7")]
    #[case(HostValue::Bool(false), "BOL:false")]
    #[case(HostValue::Float(2.5), "FLO:2.5")]
    #[case(HostValue::Float(f64::NEG_INFINITY), "FLO:-Infinity")]
    #[case(HostValue::Null, "NUL:")]
    #[case(HostValue::Symbol("s".into()), "SYM:s")]
    #[case(HostValue::Unrecognized("XYZ:abc".into()), "XYZ:abc")]
    fn test_host_value_display(#[case] value: HostValue, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn test_host_value_object_display() {
        let value = HostValue::Object(serde_json::json!({"a": 1}));
        assert_eq!(value.to_string(), r#"OBJ:{"a":1}"#);
    }

    #[test]
    fn test_property_value_conversions() {
        assert_eq!(PropertyValue::from("C"), PropertyValue::Text("C".into()));
        assert_eq!(PropertyValue::from(true), PropertyValue::Flag(true));
        assert_eq!(PropertyValue::from(20u8), PropertyValue::Int(20));
        assert_eq!(PropertyValue::from(-1i32), PropertyValue::Int(-1));
        assert_eq!(PropertyValue::from('C'), PropertyValue::Int(67));
    }

    #[test]
    fn test_property_value_deserialize_untagged() {
        let values: Vec<PropertyValue> = serde_json::from_str(r#"["abc", 5, true]"#).unwrap();
        assert_eq!(
            values,
            vec![
                PropertyValue::Text("abc".into()),
                PropertyValue::Int(5),
                PropertyValue::Flag(true),
            ]
        );
    }
}
