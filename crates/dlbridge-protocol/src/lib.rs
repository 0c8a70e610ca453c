//! Host value codec and event payloads.
//!
//! The host objects answer property queries with tagged strings
//! (`"INT:42"`, `"STR:abc"`, ...) and publish named events whose payload
//! sits in a nested `detail` field. This crate turns both into typed Rust
//! values:
//!
//! - [`codec`]: total decoder for tagged strings and the setter dispatch for
//!   property values.
//! - [`event`]: event kinds, the raw [`HostEvent`] and the typed payloads
//!   delivered to callbacks.

pub mod codec;
pub mod event;

pub use codec::{Tag, decode, encode};
pub use event::{CradleState, DecodeTimeout, EventKind, EventPayload, HostEvent, ScanResult};
