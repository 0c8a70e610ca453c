//! Cradle and trolley facade.

use crate::bridge::EventChannel;
use crate::environment::Environment;
use crate::slot::HostSlot;
use crate::traits::CradleHost;
use dlbridge_core::catalog::{InsertState, LedAction, LockAction};
use dlbridge_core::{Result, SdkConfig};
use dlbridge_protocol::{CradleState, EventKind};
use tracing::{debug, warn};

/// Typed access to the cradle manager host (`_DLCradleMgr`).
///
/// Docking events arrive on four independent channels (cradle insertion,
/// cradle extraction, trolley insertion, trolley extraction), each holding at
/// most one callback.
#[derive(Debug)]
pub struct CradleManager {
    host: HostSlot<dyn CradleHost>,
    config: SdkConfig,
    cradle_insertion: EventChannel<CradleState>,
    cradle_extraction: EventChannel<CradleState>,
    trolley_insertion: EventChannel<CradleState>,
    trolley_extraction: EventChannel<CradleState>,
}

impl CradleManager {
    /// Create a facade using the environment's configuration.
    pub fn new(env: &Environment) -> Self {
        Self::with_config(env, env.config().clone())
    }

    pub fn with_config(env: &Environment, config: SdkConfig) -> Self {
        let channel = |kind| EventChannel::new(kind, env.events().clone());
        Self {
            host: env.cradle_slot().clone(),
            config,
            cradle_insertion: channel(EventKind::CradleInsertion),
            cradle_extraction: channel(EventKind::CradleExtraction),
            trolley_insertion: channel(EventKind::TrolleyInsertion),
            trolley_extraction: channel(EventKind::TrolleyExtraction),
        }
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Channel for the given docking event kind, `None` for scanner events.
    pub fn channel(&self, kind: EventKind) -> Option<&EventChannel<CradleState>> {
        match kind {
            EventKind::CradleInsertion => Some(&self.cradle_insertion),
            EventKind::CradleExtraction => Some(&self.cradle_extraction),
            EventKind::TrolleyInsertion => Some(&self.trolley_insertion),
            EventKind::TrolleyExtraction => Some(&self.trolley_extraction),
            EventKind::Scan | EventKind::Timeout => None,
        }
    }

    /// Lock or unlock the device in the cradle.
    pub fn control_lock(&self, action: LockAction) -> Result<bool> {
        let host = self.host.resolve()?;
        let success = host.control_lock(action.to_i32());
        debug!("control_lock({}) = {}", action, success);
        Ok(success)
    }

    /// Drive the cradle LED.
    pub fn control_led(&self, action: LedAction) -> Result<bool> {
        let host = self.host.resolve()?;
        let success = host.control_led(action.to_i32());
        debug!("control_led({}) = {}", action, success);
        Ok(success)
    }

    /// Insertion state of the device.
    ///
    /// Codes outside the [`InsertState`] catalog are reported as
    /// [`InsertState::InsertionUnknown`].
    pub fn get_insertion_state(&self) -> Result<InsertState> {
        let host = self.host.resolve()?;
        let code = host.get_insertion_state();
        Ok(InsertState::from_i32(code).unwrap_or_else(|| {
            warn!("Unknown insertion state {}", code);
            InsertState::InsertionUnknown
        }))
    }

    pub fn get_slot_index(&self) -> Result<i32> {
        let host = self.host.resolve()?;
        Ok(host.get_slot_index())
    }

    pub fn is_device_in_trolley(&self) -> Result<bool> {
        let host = self.host.resolve()?;
        Ok(host.is_device_in_trolley())
    }

    /// Message stored in the cradle, `None` if nothing is stored.
    pub fn read_custom_area(&self) -> Result<Option<String>> {
        let host = self.host.resolve()?;
        Ok(host.read_custom_area())
    }

    /// Store a message in the cradle.
    ///
    /// The host enforces the capacity and returns `false` for oversized
    /// messages; the facade forwards every message.
    pub fn write_custom_area(&self, message: &str) -> Result<bool> {
        let host = self.host.resolve()?;
        let length = message.chars().count();
        if length > self.config.custom_area_limit {
            warn!(
                "Custom area message of {} characters exceeds the {} character limit",
                length, self.config.custom_area_limit
            );
        }
        let success = host.write_custom_area(message);
        debug!("write_custom_area({} chars) = {}", length, success);
        Ok(success)
    }

    pub fn on_cradle_insertion(&self, callback: impl FnMut(CradleState) + 'static) -> Result<bool> {
        let host = self.host.resolve()?;
        let success = host.add_cradle_insertion_listener();
        self.cradle_insertion.attach(callback);
        Ok(success)
    }

    pub fn ignore_cradle_insertion(&self) -> Result<bool> {
        self.cradle_insertion.detach();
        let host = self.host.resolve()?;
        Ok(host.remove_cradle_insertion_listener())
    }

    pub fn on_cradle_extraction(&self, callback: impl FnMut(CradleState) + 'static) -> Result<bool> {
        let host = self.host.resolve()?;
        let success = host.add_cradle_extraction_listener();
        self.cradle_extraction.attach(callback);
        Ok(success)
    }

    pub fn ignore_cradle_extraction(&self) -> Result<bool> {
        self.cradle_extraction.detach();
        let host = self.host.resolve()?;
        Ok(host.remove_cradle_extraction_listener())
    }

    pub fn on_trolley_insertion(&self, callback: impl FnMut(CradleState) + 'static) -> Result<bool> {
        let host = self.host.resolve()?;
        let success = host.add_trolley_insertion_listener();
        self.trolley_insertion.attach(callback);
        Ok(success)
    }

    pub fn ignore_trolley_insertion(&self) -> Result<bool> {
        self.trolley_insertion.detach();
        let host = self.host.resolve()?;
        Ok(host.remove_trolley_insertion_listener())
    }

    pub fn on_trolley_extraction(
        &self,
        callback: impl FnMut(CradleState) + 'static,
    ) -> Result<bool> {
        let host = self.host.resolve()?;
        let success = host.add_trolley_extraction_listener();
        self.trolley_extraction.attach(callback);
        Ok(success)
    }

    pub fn ignore_trolley_extraction(&self) -> Result<bool> {
        self.trolley_extraction.detach();
        let host = self.host.resolve()?;
        Ok(host.remove_trolley_extraction_listener())
    }
}
