//! Tagged value codec.
//!
//! The host returns every property value as text prefixed with a four
//! character tag (three letters and a colon). The tag selects how the rest of
//! the text is parsed:
//!
//! ```text
//! INT:42
//! ^^^^ ^^
//! tag  payload
//! ```
//!
//! | Tag    | Result                                             |
//! |--------|----------------------------------------------------|
//! | `UND:` | [`HostValue::Undefined`]                           |
//! | `STR:` | [`HostValue::Str`], payload verbatim               |
//! | `INT:` | [`HostValue::Int`], leading integer of the payload |
//! | `BOL:` | [`HostValue::Bool`], `true` for `"true"` or `"1"`  |
//! | `FLO:` | [`HostValue::Float`], leading decimal of the payload |
//! | `OBJ:` | [`HostValue::Object`], JSON payload                |
//! | `NUL:` | [`HostValue::Null`]                                |
//! | `SYM:` | [`HostValue::Symbol`], payload verbatim            |
//!
//! Decoding is total: an unknown tag, input shorter than the tag or an
//! unparsable `OBJ:` payload produces [`HostValue::Unrecognized`] instead of
//! an error.
//!
//! The encode direction has no tags. A [`PropertyValue`] is turned into a
//! [`HostArgument`] that selects the host setter (string or integer).
//!
//! # Examples
//!
//! ```
//! use dlbridge_core::{HostArgument, HostValue, PropertyValue};
//! use dlbridge_protocol::codec::{decode, encode};
//!
//! assert_eq!(decode("INT:42"), HostValue::Int(42));
//! assert_eq!(decode("BOL:1"), HostValue::Bool(true));
//! assert!(decode("XYZ:abc").is_undefined());
//!
//! assert_eq!(encode(&PropertyValue::Flag(true)), HostArgument::Int(1));
//! ```

use dlbridge_core::constants::TAG_PREFIX_LENGTH;
use dlbridge_core::{HostArgument, HostValue, PropertyValue};
use std::fmt;
use std::str::FromStr;
use tracing::{trace, warn};

/// Tag prefix of a host value, colon included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Undefined,
    Str,
    Int,
    Bool,
    Float,
    Object,
    Null,
    Symbol,
}

impl Tag {
    /// Every tag, in host documentation order.
    pub const ALL: [Tag; 8] = [
        Tag::Undefined,
        Tag::Str,
        Tag::Int,
        Tag::Bool,
        Tag::Float,
        Tag::Object,
        Tag::Null,
        Tag::Symbol,
    ];

    /// The tag prefix as it appears on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Undefined => "UND:",
            Tag::Str => "STR:",
            Tag::Int => "INT:",
            Tag::Bool => "BOL:",
            Tag::Float => "FLO:",
            Tag::Object => "OBJ:",
            Tag::Null => "NUL:",
            Tag::Symbol => "SYM:",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL.into_iter().find(|tag| tag.as_str() == s).ok_or(())
    }
}

/// Decode a host tagged string.
///
/// Never fails; see the module documentation for the tag table.
#[must_use]
pub fn decode(text: &str) -> HostValue {
    let value = match split_tag(text) {
        Some((tag, payload)) => decode_payload(tag, payload, text),
        None => HostValue::Unrecognized(text.to_string()),
    };
    trace!("Decoded {:?} as {:?}", text, value);
    value
}

/// Choose the host setter argument for a property value.
///
/// Text goes to the string setter; flags become 1 or 0 and, like integers,
/// go to the integer setter.
#[must_use]
pub fn encode(value: &PropertyValue) -> HostArgument {
    match value {
        PropertyValue::Text(text) => HostArgument::Str(text.clone()),
        PropertyValue::Int(n) => HostArgument::Int(*n),
        PropertyValue::Flag(flag) => HostArgument::Int(i64::from(*flag)),
    }
}

fn split_tag(text: &str) -> Option<(Tag, &str)> {
    let prefix = text.get(..TAG_PREFIX_LENGTH)?;
    let tag = prefix.parse().ok()?;
    Some((tag, &text[TAG_PREFIX_LENGTH..]))
}

fn decode_payload(tag: Tag, payload: &str, text: &str) -> HostValue {
    match tag {
        Tag::Undefined => HostValue::Undefined,
        Tag::Str => HostValue::Str(payload.to_string()),
        Tag::Int => parse_leading_int(payload),
        Tag::Bool => HostValue::Bool(payload == "true" || payload == "1"),
        Tag::Float => HostValue::Float(parse_leading_float(payload)),
        Tag::Object => match serde_json::from_str(payload) {
            Ok(value) => HostValue::Object(value),
            Err(e) => {
                warn!("Undecodable object payload {:?}: {}", payload, e);
                HostValue::Unrecognized(text.to_string())
            }
        },
        Tag::Null => HostValue::Null,
        Tag::Symbol => HostValue::Symbol(payload.to_string()),
    }
}

/// Parse the leading base-10 integer of `payload`.
///
/// Leading whitespace and trailing garbage are ignored (`" 42px"` is 42).
/// Without any digit the result is a NaN float; integers beyond the `i64`
/// range are returned as floats.
fn parse_leading_int(payload: &str) -> HostValue {
    let trimmed = payload.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return HostValue::Float(f64::NAN);
    }

    let number = &trimmed[..end];
    match number.parse::<i64>() {
        Ok(n) => HostValue::Int(n),
        Err(_) => HostValue::Float(number.parse().unwrap_or(f64::NAN)),
    }
}

/// Parse the leading decimal number of `payload`, NaN if there is none.
fn parse_leading_float(payload: &str) -> f64 {
    let trimmed = payload.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if trimmed[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}
