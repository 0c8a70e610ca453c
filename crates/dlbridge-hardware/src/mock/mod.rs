//! Mock host implementations for testing and development.
//!
//! The mocks keep their state in memory, record every host call they
//! receive and post events on the shared [`EventTarget`](crate::EventTarget)
//! when a simulation helper is called and the corresponding host-side
//! listener is enabled.
//!
//! ```
//! use dlbridge_hardware::{CradleManager, Environment, mock};
//! use dlbridge_core::catalog::InsertState;
//!
//! let env = Environment::new();
//! let hosts = mock::install(&env);
//! let cradle = CradleManager::new(&env);
//!
//! hosts.cradle.simulate_insertion(InsertState::InsertedCorrectly);
//! assert_eq!(cradle.get_insertion_state().unwrap(), InsertState::InsertedCorrectly);
//! ```

pub mod barcode;
pub mod cradle;
pub mod keyboard;

pub use barcode::MockBarcodeHost;
pub use cradle::MockCradleHost;
pub use keyboard::MockKeyboardHost;

use crate::environment::Environment;
use std::cell::RefCell;
use std::rc::Rc;

/// Ordered log of host method names.
#[derive(Debug, Default)]
pub struct CallLog {
    calls: RefCell<Vec<&'static str>>,
}

impl CallLog {
    pub fn record(&self, method: &'static str) {
        self.calls.borrow_mut().push(method);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    /// Number of calls to `method`.
    pub fn count(&self, method: &str) -> usize {
        self.calls.borrow().iter().filter(|call| **call == method).count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

/// The three mock hosts installed by [`install`].
#[derive(Debug, Clone)]
pub struct MockHosts {
    pub barcode: Rc<MockBarcodeHost>,
    pub cradle: Rc<MockCradleHost>,
    pub keyboard: Rc<MockKeyboardHost>,
}

/// Inject a fresh mock into every slot of `env`.
///
/// The cradle mock takes its custom area capacity from the environment's
/// configuration.
pub fn install(env: &Environment) -> MockHosts {
    let barcode = Rc::new(MockBarcodeHost::new(env.events().clone()));
    let cradle = Rc::new(
        MockCradleHost::new(env.events().clone())
            .with_custom_area_limit(env.config().custom_area_limit),
    );
    let keyboard = Rc::new(MockKeyboardHost::new());

    env.inject_barcode(barcode.clone());
    env.inject_cradle(cradle.clone());
    env.inject_keyboard(keyboard.clone());

    MockHosts {
        barcode,
        cradle,
        keyboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_log() {
        let log = CallLog::default();
        log.record("start_decode");
        log.record("stop_decode");
        log.record("start_decode");

        assert_eq!(log.calls(), ["start_decode", "stop_decode", "start_decode"]);
        assert_eq!(log.count("start_decode"), 2);

        log.clear();
        assert!(log.calls().is_empty());
    }

    #[test]
    fn test_install_fills_every_slot() {
        let env = Environment::new();
        let _hosts = install(&env);
        assert!(env.barcode_slot().is_injected());
        assert!(env.cradle_slot().is_injected());
        assert!(env.keyboard_slot().is_injected());
    }
}
