//! Core types for the dlbridge device SDK.
//!
//! This crate holds everything the other crates agree on: the identifier
//! newtypes, the capability catalogs (property ids, symbology ids and the
//! enumerated option sets), the decoded/encoded value types exchanged with
//! the injected host objects, the error type and the SDK configuration.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::SdkConfig;
pub use error::{Error, Result};
pub use types::*;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
