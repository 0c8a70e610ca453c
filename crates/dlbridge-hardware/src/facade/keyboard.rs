//! Keyboard trigger facade.

use crate::environment::Environment;
use crate::slot::HostSlot;
use crate::traits::KeyboardHost;
use dlbridge_core::Result;
use tracing::debug;

/// Typed access to the keyboard manager host (`_DLKeyboardMgr`).
#[derive(Debug, Clone)]
pub struct KeyboardManager {
    host: HostSlot<dyn KeyboardHost>,
}

impl KeyboardManager {
    pub fn new(env: &Environment) -> Self {
        Self {
            host: env.keyboard_slot().clone(),
        }
    }

    /// Enable or disable every trigger on the device.
    pub fn enable_triggers(&self, enable: bool) -> Result<bool> {
        let host = self.host.resolve()?;
        let success = host.enable_triggers(enable);
        debug!("enable_triggers({}) = {}", enable, success);
        Ok(success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_enable_triggers() {
        let env = Environment::new();
        let hosts = mock::install(&env);
        let keyboard = KeyboardManager::new(&env);

        assert!(keyboard.enable_triggers(false).unwrap());
        assert!(!hosts.keyboard.triggers_enabled());
        assert!(keyboard.enable_triggers(true).unwrap());
        assert!(hosts.keyboard.triggers_enabled());
        assert_eq!(hosts.keyboard.calls(), ["enable_triggers", "enable_triggers"]);
    }

    #[test]
    fn test_absent_host() {
        let env = Environment::new();
        let keyboard = KeyboardManager::new(&env);

        let err = keyboard.enable_triggers(true).unwrap_err();
        assert_eq!(err.missing_symbol(), Some("_DLKeyboardMgr"));
        assert_eq!(
            err.to_string(),
            "_DLKeyboardMgr has not been injected by Datalogic Enterprise Browser"
        );
    }
}
