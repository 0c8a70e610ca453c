//! The host runtime as seen by the facades.

use crate::events::EventTarget;
use crate::slot::HostSlot;
use crate::traits::{BarcodeHost, CradleHost, KeyboardHost};
use dlbridge_core::SdkConfig;
use dlbridge_core::constants::{BARCODE_HOST_SYMBOL, CRADLE_HOST_SYMBOL, KEYBOARD_HOST_SYMBOL};
use std::rc::Rc;

/// Injection slots, event target and configuration shared by the facades.
///
/// Facades built from an environment keep clones of its slots and event
/// target, so hosts can be injected or ejected after the facades exist.
#[derive(Debug, Clone)]
pub struct Environment {
    barcode: HostSlot<dyn BarcodeHost>,
    cradle: HostSlot<dyn CradleHost>,
    keyboard: HostSlot<dyn KeyboardHost>,
    events: EventTarget,
    config: SdkConfig,
}

impl Environment {
    /// Create an environment with empty slots and the default configuration.
    pub fn new() -> Self {
        Self::with_config(SdkConfig::default())
    }

    /// Create an environment with empty slots.
    ///
    /// The event target is bounded by `config.event_queue_limit`.
    pub fn with_config(config: SdkConfig) -> Self {
        Self {
            barcode: HostSlot::new(BARCODE_HOST_SYMBOL),
            cradle: HostSlot::new(CRADLE_HOST_SYMBOL),
            keyboard: HostSlot::new(KEYBOARD_HOST_SYMBOL),
            events: EventTarget::with_queue_limit(config.event_queue_limit),
            config,
        }
    }

    pub fn barcode_slot(&self) -> &HostSlot<dyn BarcodeHost> {
        &self.barcode
    }

    pub fn cradle_slot(&self) -> &HostSlot<dyn CradleHost> {
        &self.cradle
    }

    pub fn keyboard_slot(&self) -> &HostSlot<dyn KeyboardHost> {
        &self.keyboard
    }

    /// Event target hosts dispatch their events on.
    pub fn events(&self) -> &EventTarget {
        &self.events
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Inject the barcode manager host.
    pub fn inject_barcode(&self, host: Rc<dyn BarcodeHost>) {
        self.barcode.inject(host);
    }

    /// Inject the cradle manager host.
    pub fn inject_cradle(&self, host: Rc<dyn CradleHost>) {
        self.cradle.inject(host);
    }

    /// Inject the keyboard manager host.
    pub fn inject_keyboard(&self, host: Rc<dyn KeyboardHost>) {
        self.keyboard.inject(host);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_environment_is_empty() {
        let env = Environment::new();
        assert!(!env.barcode_slot().is_injected());
        assert!(!env.cradle_slot().is_injected());
        assert!(!env.keyboard_slot().is_injected());
        assert_eq!(env.barcode_slot().symbol(), "_DLBarcodeMgr");
        assert_eq!(env.cradle_slot().symbol(), "_DLCradleMgr");
        assert_eq!(env.keyboard_slot().symbol(), "_DLKeyboardMgr");
    }

    #[test]
    fn test_queue_limit_from_config() {
        use dlbridge_protocol::HostEvent;
        use serde_json::Value;

        let env = Environment::with_config(SdkConfig::default().event_queue_limit(1));
        assert!(env.events().post(HostEvent::new("scan", Value::Null)));
        assert!(!env.events().post(HostEvent::new("scan", Value::Null)));
    }

    #[test]
    fn test_clones_share_slots() {
        struct Triggers;
        impl KeyboardHost for Triggers {
            fn enable_triggers(&self, enable: bool) -> bool {
                enable
            }
        }

        let env = Environment::new();
        let clone = env.clone();
        env.inject_keyboard(Rc::new(Triggers));
        assert!(clone.keyboard_slot().is_injected());
    }
}
