//! Mock cradle manager host.

use super::CallLog;
use crate::events::EventTarget;
use crate::traits::CradleHost;
use dlbridge_core::catalog::{InsertState, LedAction, LockAction};
use dlbridge_core::constants::CUSTOM_AREA_MAX_LENGTH;
use dlbridge_protocol::{CradleState, EventKind, HostEvent};
use std::cell::{Cell, RefCell};

/// In-memory cradle manager.
///
/// Starts extracted, outside any trolley, with an empty custom area.
#[derive(Debug)]
pub struct MockCradleHost {
    events: EventTarget,
    log: CallLog,
    insertion_code: Cell<i32>,
    slot_index: Cell<i32>,
    in_trolley: Cell<bool>,
    lock: Cell<Option<LockAction>>,
    led: Cell<Option<LedAction>>,
    custom_area: RefCell<Option<String>>,
    custom_area_limit: usize,
    cradle_insertion: Cell<bool>,
    cradle_extraction: Cell<bool>,
    trolley_insertion: Cell<bool>,
    trolley_extraction: Cell<bool>,
}

impl MockCradleHost {
    /// Create a host posting its events on `events`.
    pub fn new(events: EventTarget) -> Self {
        Self {
            events,
            log: CallLog::default(),
            insertion_code: Cell::new(InsertState::Extracted.to_i32()),
            slot_index: Cell::new(0),
            in_trolley: Cell::new(false),
            lock: Cell::new(None),
            led: Cell::new(None),
            custom_area: RefCell::new(None),
            custom_area_limit: CUSTOM_AREA_MAX_LENGTH,
            cradle_insertion: Cell::new(false),
            cradle_extraction: Cell::new(false),
            trolley_insertion: Cell::new(false),
            trolley_extraction: Cell::new(false),
        }
    }

    /// Set the custom area capacity in characters.
    pub fn with_custom_area_limit(mut self, limit: usize) -> Self {
        self.custom_area_limit = limit;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.log.calls()
    }

    pub fn clear_calls(&self) {
        self.log.clear();
    }

    /// Last lock action applied.
    pub fn lock_state(&self) -> Option<LockAction> {
        self.lock.get()
    }

    /// Last LED action applied.
    pub fn led_state(&self) -> Option<LedAction> {
        self.led.get()
    }

    /// Raw code returned by `get_insertion_state`, catalog value or not.
    pub fn set_insertion_code(&self, code: i32) {
        self.insertion_code.set(code);
    }

    pub fn set_slot_index(&self, index: i32) {
        self.slot_index.set(index);
    }

    /// Seat the device in the cradle and post `dlCradleInsertion`.
    ///
    /// Returns `true` if the event was posted.
    pub fn simulate_insertion(&self, state: InsertState) -> bool {
        self.insertion_code.set(state.to_i32());
        self.notify(&self.cradle_insertion, EventKind::CradleInsertion, state)
    }

    /// Remove the device from the cradle and post `dlCradleExtraction`.
    pub fn simulate_extraction(&self) -> bool {
        self.insertion_code.set(InsertState::Extracted.to_i32());
        self.notify(&self.cradle_extraction, EventKind::CradleExtraction, InsertState::Extracted)
    }

    /// Place the device in a trolley and post `dlTrolleyInsertion`.
    pub fn simulate_trolley_insertion(&self, state: InsertState) -> bool {
        self.in_trolley.set(state.is_inserted());
        self.notify(&self.trolley_insertion, EventKind::TrolleyInsertion, state)
    }

    /// Remove the device from the trolley and post `dlTrolleyExtraction`.
    pub fn simulate_trolley_extraction(&self) -> bool {
        self.in_trolley.set(false);
        self.notify(&self.trolley_extraction, EventKind::TrolleyExtraction, InsertState::Extracted)
    }

    fn notify(&self, enabled: &Cell<bool>, kind: EventKind, state: InsertState) -> bool {
        if !enabled.get() {
            return false;
        }
        self.events
            .post(HostEvent::from_payload(kind, &CradleState::new(state)))
    }
}

impl CradleHost for MockCradleHost {
    fn control_lock(&self, action: i32) -> bool {
        self.log.record("control_lock");
        match LockAction::from_i32(action) {
            Some(action) => {
                self.lock.set(Some(action));
                true
            }
            None => false,
        }
    }

    fn control_led(&self, action: i32) -> bool {
        self.log.record("control_led");
        match LedAction::from_i32(action) {
            Some(action) => {
                self.led.set(Some(action));
                true
            }
            None => false,
        }
    }

    fn get_insertion_state(&self) -> i32 {
        self.log.record("get_insertion_state");
        self.insertion_code.get()
    }

    fn get_slot_index(&self) -> i32 {
        self.log.record("get_slot_index");
        self.slot_index.get()
    }

    fn is_device_in_trolley(&self) -> bool {
        self.log.record("is_device_in_trolley");
        self.in_trolley.get()
    }

    fn add_cradle_insertion_listener(&self) -> bool {
        self.log.record("add_cradle_insertion_listener");
        self.cradle_insertion.set(true);
        true
    }

    fn remove_cradle_insertion_listener(&self) -> bool {
        self.log.record("remove_cradle_insertion_listener");
        self.cradle_insertion.replace(false)
    }

    fn add_cradle_extraction_listener(&self) -> bool {
        self.log.record("add_cradle_extraction_listener");
        self.cradle_extraction.set(true);
        true
    }

    fn remove_cradle_extraction_listener(&self) -> bool {
        self.log.record("remove_cradle_extraction_listener");
        self.cradle_extraction.replace(false)
    }

    fn add_trolley_insertion_listener(&self) -> bool {
        self.log.record("add_trolley_insertion_listener");
        self.trolley_insertion.set(true);
        true
    }

    fn remove_trolley_insertion_listener(&self) -> bool {
        self.log.record("remove_trolley_insertion_listener");
        self.trolley_insertion.replace(false)
    }

    fn add_trolley_extraction_listener(&self) -> bool {
        self.log.record("add_trolley_extraction_listener");
        self.trolley_extraction.set(true);
        true
    }

    fn remove_trolley_extraction_listener(&self) -> bool {
        self.log.record("remove_trolley_extraction_listener");
        self.trolley_extraction.replace(false)
    }

    fn read_custom_area(&self) -> Option<String> {
        self.log.record("read_custom_area");
        self.custom_area.borrow().clone()
    }

    fn write_custom_area(&self, message: &str) -> bool {
        self.log.record("write_custom_area");
        if message.chars().count() > self.custom_area_limit {
            return false;
        }
        *self.custom_area.borrow_mut() = Some(message.to_string());
        true
    }
}
