//! SDK-wide constants.
//!
//! Names of the injected host symbols, manager interface versions and the
//! default limits used by the facades. Limits that callers may want to tune
//! are also exposed through [`SdkConfig`](crate::config::SdkConfig); the
//! constants here are its defaults.

// ============================================================================
// Injected Host Symbols
// ============================================================================

/// Global symbol under which the host runtime injects the barcode manager.
///
/// Appears verbatim in [`Error::HostNotInjected`](crate::Error::HostNotInjected)
/// so callers can tell which capability is missing.
pub const BARCODE_HOST_SYMBOL: &str = "_DLBarcodeMgr";

/// Global symbol under which the host runtime injects the cradle manager.
pub const CRADLE_HOST_SYMBOL: &str = "_DLCradleMgr";

/// Global symbol under which the host runtime injects the keyboard manager.
pub const KEYBOARD_HOST_SYMBOL: &str = "_DLKeyboardMgr";

// ============================================================================
// Manager Interface Versions
// ============================================================================

/// Interface version of the barcode manager surface.
pub const BARCODE_MANAGER_VERSION: u32 = 4;

/// Interface version of the cradle manager surface.
pub const CRADLE_MANAGER_VERSION: u32 = 1;

// ============================================================================
// Tagged Values
// ============================================================================

/// Length of the tag prefix of a host tagged value, colon included.
///
/// ```text
/// INT:42
/// ^^^^
/// ```
pub const TAG_PREFIX_LENGTH: usize = 4;

// ============================================================================
// Defaults
// ============================================================================

/// Decode timeout used by `start_decode` when the caller passes none (milliseconds).
///
/// # Value: 5000ms (5 seconds)
///
/// # Examples
///
/// ```
/// use dlbridge_core::constants::DEFAULT_DECODE_TIMEOUT_MS;
/// use std::time::Duration;
///
/// let timeout = Duration::from_millis(u64::from(DEFAULT_DECODE_TIMEOUT_MS));
/// assert_eq!(timeout.as_secs(), 5);
/// ```
pub const DEFAULT_DECODE_TIMEOUT_MS: u32 = 5000;

/// Maximum message length accepted by the cradle custom area (characters).
///
/// Enforced by the host, not by the cradle facade.
///
/// # Value: 512 characters
pub const CUSTOM_AREA_MAX_LENGTH: usize = 512;

/// Default bound of the pending host event queue.
pub const DEFAULT_EVENT_QUEUE_LIMIT: usize = 256;
