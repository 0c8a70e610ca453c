//! Host object trait definitions.
//!
//! Each trait mirrors the surface of one object injected by the host runtime.
//! Methods are synchronous and take `&self`: the host is shared between the
//! environment and the facades, and implementations keep their own state
//! behind interior mutability.
//!
//! Property values cross this boundary as tagged strings (see
//! [`dlbridge_protocol::codec`]); option sets and insertion states cross it
//! as raw integers. Interpreting them is the facades' job.

use dlbridge_core::PropertyId;

/// The barcode manager injected as `_DLBarcodeMgr`.
pub trait BarcodeHost {
    /// Current value of a property, as a tagged string.
    fn get_property(&self, id: PropertyId) -> String;

    /// Set a string-valued property.
    fn set_property_string(&self, id: PropertyId, value: &str) -> bool;

    /// Set an integer or boolean property.
    fn set_property_int(&self, id: PropertyId, value: i64) -> bool;

    /// Whether the device supports a property.
    fn is_available(&self, id: PropertyId) -> bool;

    /// Lower bound of a property, as a tagged string.
    fn get_min(&self, id: PropertyId) -> String;

    /// Upper bound of a property, as a tagged string.
    fn get_max(&self, id: PropertyId) -> String;

    /// Persist pending property changes.
    fn commit_properties(&self) -> bool;

    /// Enable or disable every symbology at once.
    fn enable_all_symbologies(&self, enable: bool) -> bool;

    /// Restore factory property values.
    fn set_defaults(&self) -> bool;

    /// Whether the scanner is initialized.
    fn is_initialized(&self) -> bool;

    /// Start a decode session that ends after `timeout_ms` without a read.
    fn start_decode(&self, timeout_ms: u32) -> bool;

    /// Stop the current decode session.
    fn stop_decode(&self) -> bool;

    /// Start dispatching `scan` events.
    fn add_read_listener(&self) -> bool;

    /// Stop dispatching `scan` events.
    fn remove_read_listener(&self) -> bool;

    /// Start dispatching `timeout` events.
    fn add_timeout_listener(&self) -> bool;

    /// Stop dispatching `timeout` events.
    fn remove_timeout_listener(&self) -> bool;
}

/// The cradle manager injected as `_DLCradleMgr`.
pub trait CradleHost {
    /// Lock or unlock the device, see [`LockAction`](dlbridge_core::catalog::LockAction).
    fn control_lock(&self, action: i32) -> bool;

    /// Drive the cradle LED, see [`LedAction`](dlbridge_core::catalog::LedAction).
    fn control_led(&self, action: i32) -> bool;

    /// Raw insertion state, see [`InsertState`](dlbridge_core::catalog::InsertState).
    fn get_insertion_state(&self) -> i32;

    /// Index of the cradle slot holding the device.
    fn get_slot_index(&self) -> i32;

    fn is_device_in_trolley(&self) -> bool;

    fn add_cradle_insertion_listener(&self) -> bool;
    fn remove_cradle_insertion_listener(&self) -> bool;
    fn add_cradle_extraction_listener(&self) -> bool;
    fn remove_cradle_extraction_listener(&self) -> bool;
    fn add_trolley_insertion_listener(&self) -> bool;
    fn remove_trolley_insertion_listener(&self) -> bool;
    fn add_trolley_extraction_listener(&self) -> bool;
    fn remove_trolley_extraction_listener(&self) -> bool;

    /// Message stored in the cradle, `None` if nothing is stored.
    fn read_custom_area(&self) -> Option<String>;

    /// Store a message in the cradle.
    ///
    /// The host rejects messages longer than its capacity.
    fn write_custom_area(&self, message: &str) -> bool;
}

/// The keyboard manager injected as `_DLKeyboardMgr`.
pub trait KeyboardHost {
    /// Enable or disable every trigger on the device.
    fn enable_triggers(&self, enable: bool) -> bool;
}
