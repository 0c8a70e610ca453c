//! Cradle action and state enumerations.

option_set! {
    /// Action for the cradle LED.
    LedAction {
        BlinkFast = 0 => "BLINK_FAST",
        BlinkSlow = 1 => "BLINK_SLOW",
        LedOff = 2 => "LED_OFF",
        LedOn = 3 => "LED_ON",
        Toggle = 4 => "TOGGLE",
    }
}

option_set! {
    /// Lock action for the device seated in the cradle.
    ///
    /// The `*_WITH_LED_*` variants also drive the cradle LED.
    LockAction {
        Lock = 0 => "LOCK",
        LockWithLedOff = 1 => "LOCK_WITH_LED_OFF",
        Unlock = 2 => "UNLOCK",
        UnlockWithLedOn = 3 => "UNLOCK_WITH_LED_ON",
    }
}

option_set! {
    /// Insertion state of the device with respect to the cradle.
    InsertState {
        InsertionUnknown = 0 => "INSERTION_UNKNOWN",
        DeviceInsertionNotSupported = 1 => "DEVICE_INSERTION_NOT_SUPPORTED",
        InsertedCorrectly = 2 => "INSERTED_CORRECTLY",
        InsertedWrongly = 3 => "INSERTED_WRONGLY",
        Extracted = 4 => "EXTRACTED",
    }
}

impl InsertState {
    /// Returns `true` if the device sits in the cradle, correctly or not.
    #[must_use]
    pub fn is_inserted(self) -> bool {
        matches!(self, Self::InsertedCorrectly | Self::InsertedWrongly)
    }

    /// Human readable description, as shown on a status line.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::InsertionUnknown => "Unknown",
            Self::DeviceInsertionNotSupported => "Insertion State not supported",
            Self::InsertedCorrectly => "Inserted correctly",
            Self::InsertedWrongly => "Inserted wrongly",
            Self::Extracted => "Extracted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_action_values() {
        assert_eq!(LedAction::BlinkFast.to_i32(), 0);
        assert_eq!(LedAction::Toggle.to_i32(), 4);
        assert_eq!(LedAction::from_i32(3), Some(LedAction::LedOn));
    }

    #[test]
    fn test_lock_action_values() {
        assert_eq!(LockAction::UnlockWithLedOn.to_i32(), 3);
        assert_eq!(LockAction::try_from(1).unwrap(), LockAction::LockWithLedOff);
        assert!(LockAction::try_from(4).is_err());
    }

    #[test]
    fn test_insert_state() {
        assert!(InsertState::InsertedCorrectly.is_inserted());
        assert!(InsertState::InsertedWrongly.is_inserted());
        assert!(!InsertState::Extracted.is_inserted());
        assert_eq!(InsertState::Extracted.description(), "Extracted");
        assert_eq!(InsertState::from_i32(1), Some(InsertState::DeviceInsertionNotSupported));
    }
}
