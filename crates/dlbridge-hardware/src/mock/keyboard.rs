//! Mock keyboard manager host.

use super::CallLog;
use crate::traits::KeyboardHost;
use std::cell::Cell;

/// In-memory keyboard manager with every trigger enabled.
#[derive(Debug)]
pub struct MockKeyboardHost {
    log: CallLog,
    triggers_enabled: Cell<bool>,
    fail: Cell<bool>,
}

impl MockKeyboardHost {
    pub fn new() -> Self {
        Self {
            log: CallLog::default(),
            triggers_enabled: Cell::new(true),
            fail: Cell::new(false),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.log.calls()
    }

    pub fn triggers_enabled(&self) -> bool {
        self.triggers_enabled.get()
    }

    /// Make `enable_triggers` fail without changing the trigger state.
    pub fn fail_next(&self, fail: bool) {
        self.fail.set(fail);
    }
}

impl Default for MockKeyboardHost {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardHost for MockKeyboardHost {
    fn enable_triggers(&self, enable: bool) -> bool {
        self.log.record("enable_triggers");
        if self.fail.replace(false) {
            return false;
        }
        self.triggers_enabled.set(enable);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_next_is_one_shot() {
        let host = MockKeyboardHost::new();
        host.fail_next(true);

        assert!(!host.enable_triggers(false));
        assert!(host.triggers_enabled());
        assert!(host.enable_triggers(false));
        assert!(!host.triggers_enabled());
    }
}
