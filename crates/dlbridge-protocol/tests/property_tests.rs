//! Property-based tests for the tagged-value codec.
//!
//! These tests use proptest to generate arbitrary host strings and verify
//! that decoding is total and that every tag follows its payload rule.

use dlbridge_core::{HostArgument, HostValue, PropertyValue};
use dlbridge_protocol::codec::{Tag, decode, encode};
use proptest::prelude::*;

/// Strategy for generating a known tag prefix.
fn known_tag() -> impl Strategy<Value = Tag> {
    prop::sample::select(Tag::ALL.to_vec())
}

/// Strategy for generating four-character prefixes that are not tags.
fn unknown_prefix() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{3}:")
        .expect("Failed to create prefix regex strategy")
        .prop_filter("must not be a known tag", |prefix| {
            prefix.parse::<Tag>().is_err()
        })
}

proptest! {
    /// Property: decoding never panics, whatever the input.
    #[test]
    fn prop_decode_is_total(text in any::<String>()) {
        let _ = decode(&text);
    }

    /// Property: any string payload comes back verbatim.
    #[test]
    fn prop_string_payload_verbatim(payload in any::<String>()) {
        let decoded = decode(&format!("STR:{payload}"));
        prop_assert_eq!(decoded, HostValue::Str(payload));
    }

    /// Property: every i64 survives the INT tag.
    #[test]
    fn prop_int_payload(n in any::<i64>(), suffix in "[a-z ]{0,5}") {
        let decoded = decode(&format!("INT:{n}{suffix}"));
        prop_assert_eq!(decoded, HostValue::Int(n));
    }

    /// Property: finite floats survive the FLO tag.
    #[test]
    fn prop_float_payload(n in -1.0e12f64..1.0e12f64) {
        let decoded = decode(&format!("FLO:{n}"));
        prop_assert_eq!(decoded, HostValue::Float(n));
    }

    /// Property: BOL is true exactly for "true" and "1".
    #[test]
    fn prop_bool_payload(payload in "[a-z0-9]{0,6}") {
        let expected = payload == "true" || payload == "1";
        prop_assert_eq!(decode(&format!("BOL:{payload}")), HostValue::Bool(expected));
    }

    /// Property: an unknown prefix is unrecognized and keeps the raw text.
    #[test]
    fn prop_unknown_prefix_unrecognized(prefix in unknown_prefix(), payload in ".{0,20}") {
        let text = format!("{prefix}{payload}");
        let decoded = decode(&text);
        prop_assert!(decoded.is_undefined());
        prop_assert_eq!(decoded, HostValue::Unrecognized(text));
    }

    /// Property: input of fewer than four characters is unrecognized.
    #[test]
    fn prop_short_input_unrecognized(text in ".{0,3}") {
        prop_assert!(decode(&text).is_unrecognized());
    }

    /// Property: a known tag never yields the unrecognized outcome, except
    /// for object payloads that are not JSON.
    #[test]
    fn prop_known_tag_recognized(tag in known_tag(), payload in "[a-z0-9]{0,10}") {
        let decoded = decode(&format!("{tag}{payload}"));
        if tag != Tag::Object {
            prop_assert!(!decoded.is_unrecognized());
        }
    }

    /// Property: text always selects the string setter and integers the
    /// integer setter.
    #[test]
    fn prop_encode_dispatch(text in any::<String>(), n in any::<i64>()) {
        prop_assert_eq!(encode(&PropertyValue::Text(text.clone())), HostArgument::Str(text));
        prop_assert_eq!(encode(&PropertyValue::Int(n)), HostArgument::Int(n));
    }
}
