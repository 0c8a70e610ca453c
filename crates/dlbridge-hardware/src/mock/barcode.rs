//! Mock barcode manager host.

use super::CallLog;
use crate::events::EventTarget;
use crate::traits::BarcodeHost;
use dlbridge_core::{HostValue, PropertyId};
use dlbridge_protocol::{DecodeTimeout, EventKind, HostEvent, ScanResult};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

/// In-memory barcode manager.
///
/// Properties start unset (`UND:`) and keep whatever is written to them.
/// Every property of the catalog is available unless marked otherwise.
///
/// # Examples
///
/// ```
/// use dlbridge_core::{PropertyId, SymbologyId};
/// use dlbridge_hardware::{BarcodeHost, EventTarget};
/// use dlbridge_hardware::mock::MockBarcodeHost;
/// use dlbridge_protocol::ScanResult;
///
/// let events = EventTarget::new();
/// let host = MockBarcodeHost::new(events.clone());
///
/// assert!(host.set_property_int(PropertyId::CODE39_ENABLE, 1));
/// assert_eq!(host.get_property(PropertyId::CODE39_ENABLE), "INT:1");
///
/// // no scan events until a read listener is enabled
/// assert!(!host.simulate_scan(ScanResult::new(SymbologyId::CODE39, "A1")));
/// host.add_read_listener();
/// assert!(host.simulate_scan(ScanResult::new(SymbologyId::CODE39, "A1")));
/// assert_eq!(events.pending(), 1);
/// ```
#[derive(Debug)]
pub struct MockBarcodeHost {
    events: EventTarget,
    log: CallLog,
    properties: RefCell<HashMap<PropertyId, HostValue>>,
    ranges: RefCell<HashMap<PropertyId, (i64, i64)>>,
    rejected: RefCell<HashSet<PropertyId>>,
    unavailable: RefCell<HashSet<PropertyId>>,
    initialized: Cell<bool>,
    symbologies_enabled: Cell<Option<bool>>,
    commits: Cell<usize>,
    decoding: Cell<bool>,
    last_decode_timeout: Cell<Option<u32>>,
    read_listener: Cell<bool>,
    timeout_listener: Cell<bool>,
    fail_listeners: Cell<bool>,
}

impl MockBarcodeHost {
    /// Create a host posting its events on `events`.
    pub fn new(events: EventTarget) -> Self {
        Self {
            events,
            log: CallLog::default(),
            properties: RefCell::new(HashMap::new()),
            ranges: RefCell::new(HashMap::new()),
            rejected: RefCell::new(HashSet::new()),
            unavailable: RefCell::new(HashSet::new()),
            initialized: Cell::new(true),
            symbologies_enabled: Cell::new(None),
            commits: Cell::new(0),
            decoding: Cell::new(false),
            last_decode_timeout: Cell::new(None),
            read_listener: Cell::new(false),
            timeout_listener: Cell::new(false),
            fail_listeners: Cell::new(false),
        }
    }

    /// Host methods called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.log.calls()
    }

    pub fn clear_calls(&self) {
        self.log.clear();
    }

    /// Stored value of a property, `None` if it was never set.
    pub fn property(&self, id: PropertyId) -> Option<HostValue> {
        self.properties.borrow().get(&id).cloned()
    }

    /// Make every set of `id` fail.
    pub fn reject_property(&self, id: PropertyId) {
        self.rejected.borrow_mut().insert(id);
    }

    /// Report `id` as unsupported by the device.
    pub fn mark_unavailable(&self, id: PropertyId) {
        self.unavailable.borrow_mut().insert(id);
    }

    /// Bounds reported by `get_min` and `get_max` for `id`.
    pub fn set_range(&self, id: PropertyId, min: i64, max: i64) {
        self.ranges.borrow_mut().insert(id, (min, max));
    }

    pub fn set_initialized(&self, initialized: bool) {
        self.initialized.set(initialized);
    }

    /// Make every `add_*_listener` call fail.
    pub fn fail_listeners(&self, fail: bool) {
        self.fail_listeners.set(fail);
    }

    /// Last value passed to `enable_all_symbologies`.
    pub fn symbologies_enabled(&self) -> Option<bool> {
        self.symbologies_enabled.get()
    }

    pub fn commit_count(&self) -> usize {
        self.commits.get()
    }

    pub fn is_decoding(&self) -> bool {
        self.decoding.get()
    }

    /// Timeout of the most recent `start_decode` call.
    pub fn last_decode_timeout(&self) -> Option<u32> {
        self.last_decode_timeout.get()
    }

    pub fn read_listener_enabled(&self) -> bool {
        self.read_listener.get()
    }

    pub fn timeout_listener_enabled(&self) -> bool {
        self.timeout_listener.get()
    }

    /// Post a `scan` event and end the decode session.
    ///
    /// Returns `false` if the read listener is disabled or the event queue
    /// is full.
    pub fn simulate_scan(&self, scan: ScanResult) -> bool {
        if !self.read_listener.get() {
            return false;
        }
        self.decoding.set(false);
        self.events.post(HostEvent::from_payload(EventKind::Scan, &scan))
    }

    /// Post a `timeout` event and end the decode session.
    pub fn simulate_timeout(&self) -> bool {
        if !self.timeout_listener.get() {
            return false;
        }
        self.decoding.set(false);
        self.events
            .post(HostEvent::from_payload(EventKind::Timeout, &DecodeTimeout))
    }

    fn store(&self, id: PropertyId, value: HostValue) -> bool {
        if self.rejected.borrow().contains(&id) {
            return false;
        }
        self.properties.borrow_mut().insert(id, value);
        true
    }

    fn bound(&self, id: PropertyId, pick: fn((i64, i64)) -> i64) -> String {
        self.ranges
            .borrow()
            .get(&id)
            .map(|range| HostValue::Int(pick(*range)))
            .unwrap_or(HostValue::Undefined)
            .to_string()
    }
}

impl BarcodeHost for MockBarcodeHost {
    fn get_property(&self, id: PropertyId) -> String {
        self.log.record("get_property");
        self.property(id).unwrap_or(HostValue::Undefined).to_string()
    }

    fn set_property_string(&self, id: PropertyId, value: &str) -> bool {
        self.log.record("set_property_string");
        self.store(id, HostValue::Str(value.to_string()))
    }

    fn set_property_int(&self, id: PropertyId, value: i64) -> bool {
        self.log.record("set_property_int");
        self.store(id, HostValue::Int(value))
    }

    fn is_available(&self, id: PropertyId) -> bool {
        self.log.record("is_available");
        id.name().is_some() && !self.unavailable.borrow().contains(&id)
    }

    fn get_min(&self, id: PropertyId) -> String {
        self.log.record("get_min");
        self.bound(id, |(min, _)| min)
    }

    fn get_max(&self, id: PropertyId) -> String {
        self.log.record("get_max");
        self.bound(id, |(_, max)| max)
    }

    fn commit_properties(&self) -> bool {
        self.log.record("commit_properties");
        self.commits.set(self.commits.get() + 1);
        true
    }

    fn enable_all_symbologies(&self, enable: bool) -> bool {
        self.log.record("enable_all_symbologies");
        self.symbologies_enabled.set(Some(enable));
        true
    }

    fn set_defaults(&self) -> bool {
        self.log.record("set_defaults");
        self.properties.borrow_mut().clear();
        true
    }

    fn is_initialized(&self) -> bool {
        self.log.record("is_initialized");
        self.initialized.get()
    }

    fn start_decode(&self, timeout_ms: u32) -> bool {
        self.log.record("start_decode");
        self.last_decode_timeout.set(Some(timeout_ms));
        self.decoding.set(true);
        true
    }

    fn stop_decode(&self) -> bool {
        self.log.record("stop_decode");
        self.decoding.replace(false)
    }

    fn add_read_listener(&self) -> bool {
        self.log.record("add_read_listener");
        if self.fail_listeners.get() {
            return false;
        }
        self.read_listener.set(true);
        true
    }

    fn remove_read_listener(&self) -> bool {
        self.log.record("remove_read_listener");
        self.read_listener.replace(false)
    }

    fn add_timeout_listener(&self) -> bool {
        self.log.record("add_timeout_listener");
        if self.fail_listeners.get() {
            return false;
        }
        self.timeout_listener.set(true);
        true
    }

    fn remove_timeout_listener(&self) -> bool {
        self.log.record("remove_timeout_listener");
        self.timeout_listener.replace(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlbridge_core::SymbologyId;

    #[test]
    fn test_unset_property_is_undefined() {
        let host = MockBarcodeHost::new(EventTarget::new());
        assert_eq!(host.get_property(PropertyId::LABEL_PREFIX), "UND:");
    }

    #[test]
    fn test_string_property() {
        let host = MockBarcodeHost::new(EventTarget::new());
        assert!(host.set_property_string(PropertyId::LABEL_SUFFIX, "\r\n"));
        assert_eq!(host.get_property(PropertyId::LABEL_SUFFIX), "STR:\r\n");
    }

    #[test]
    fn test_rejected_property() {
        let host = MockBarcodeHost::new(EventTarget::new());
        host.reject_property(PropertyId::SCAN_MODE);
        assert!(!host.set_property_int(PropertyId::SCAN_MODE, 1));
        assert_eq!(host.property(PropertyId::SCAN_MODE), None);
    }

    #[test]
    fn test_availability() {
        let host = MockBarcodeHost::new(EventTarget::new());
        host.mark_unavailable(PropertyId::DATAMATRIX_ENABLE);

        assert!(host.is_available(PropertyId::QRCODE_ENABLE));
        assert!(!host.is_available(PropertyId::DATAMATRIX_ENABLE));
        assert!(!host.is_available(PropertyId::new(999_999)));
    }

    #[test]
    fn test_ranges() {
        let host = MockBarcodeHost::new(EventTarget::new());
        host.set_range(PropertyId::CODE39_LENGTH1, 1, 99);

        assert_eq!(host.get_min(PropertyId::CODE39_LENGTH1), "INT:1");
        assert_eq!(host.get_max(PropertyId::CODE39_LENGTH1), "INT:99");
        assert_eq!(host.get_max(PropertyId::SCAN_MODE), "UND:");
    }

    #[test]
    fn test_set_defaults_clears_properties() {
        let host = MockBarcodeHost::new(EventTarget::new());
        host.set_property_int(PropertyId::CODE128_ENABLE, 0);
        assert!(host.set_defaults());
        assert_eq!(host.property(PropertyId::CODE128_ENABLE), None);
    }

    #[test]
    fn test_decode_session() {
        let events = EventTarget::new();
        let host = MockBarcodeHost::new(events.clone());
        host.add_read_listener();

        assert!(host.start_decode(3000));
        assert!(host.is_decoding());
        assert!(host.simulate_scan(ScanResult::new(SymbologyId::UPCA, "036000291452")));
        assert!(!host.is_decoding());
        assert!(!host.stop_decode());
        assert_eq!(events.pending(), 1);
    }

    #[test]
    fn test_remove_listener_reports_prior_state() {
        let host = MockBarcodeHost::new(EventTarget::new());
        assert!(!host.remove_timeout_listener());
        host.add_timeout_listener();
        assert!(host.timeout_listener_enabled());
        assert!(host.remove_timeout_listener());
        assert!(!host.simulate_timeout());
    }

    #[test]
    fn test_failing_listeners() {
        let host = MockBarcodeHost::new(EventTarget::new());
        host.fail_listeners(true);
        assert!(!host.add_read_listener());
        assert!(!host.read_listener_enabled());
    }
}
