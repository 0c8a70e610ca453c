//! Barcode scanner facade.

use crate::bridge::EventChannel;
use crate::environment::Environment;
use crate::slot::HostSlot;
use crate::traits::BarcodeHost;
use dlbridge_core::{HostArgument, HostValue, PropertyId, PropertyValue, Result, SdkConfig};
use dlbridge_protocol::codec::{decode, encode};
use dlbridge_protocol::{DecodeTimeout, EventKind, ScanResult};
use tracing::{debug, warn};

/// Typed access to the barcode manager host (`_DLBarcodeMgr`).
///
/// Property getters decode the host's tagged strings into [`HostValue`];
/// setters pick the host setter from the [`PropertyValue`] variant.
///
/// # Examples
///
/// ```
/// use dlbridge_core::{HostValue, PropertyId, PropertyValue};
/// use dlbridge_core::catalog::LengthControlMode;
/// use dlbridge_hardware::{BarcodeManager, Environment, mock};
///
/// let env = Environment::new();
/// let _hosts = mock::install(&env);
/// let barcode = BarcodeManager::new(&env);
///
/// let ids = [PropertyId::CODE39_LENGTH_CONTROL, PropertyId::LABEL_PREFIX];
/// let values: [PropertyValue; 2] = [LengthControlMode::Range.into(), "C".into()];
/// assert!(barcode.set_properties(&ids, &values).unwrap());
///
/// assert_eq!(barcode.get_property(PropertyId::CODE39_LENGTH_CONTROL).unwrap(), HostValue::Int(3));
/// assert_eq!(barcode.get_property(PropertyId::LABEL_PREFIX).unwrap(), HostValue::Str("C".into()));
/// ```
#[derive(Debug)]
pub struct BarcodeManager {
    host: HostSlot<dyn BarcodeHost>,
    config: SdkConfig,
    scan: EventChannel<ScanResult>,
    timeout: EventChannel<DecodeTimeout>,
}

impl BarcodeManager {
    /// Create a facade using the environment's configuration.
    pub fn new(env: &Environment) -> Self {
        Self::with_config(env, env.config().clone())
    }

    /// Create a facade with its own configuration.
    pub fn with_config(env: &Environment, config: SdkConfig) -> Self {
        Self {
            host: env.barcode_slot().clone(),
            config,
            scan: EventChannel::new(EventKind::Scan, env.events().clone()),
            timeout: EventChannel::new(EventKind::Timeout, env.events().clone()),
        }
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Channel carrying `scan` events.
    pub fn scan_channel(&self) -> &EventChannel<ScanResult> {
        &self.scan
    }

    /// Channel carrying `timeout` events.
    pub fn timeout_channel(&self) -> &EventChannel<DecodeTimeout> {
        &self.timeout
    }

    /// Current value of a property.
    pub fn get_property(&self, id: PropertyId) -> Result<HostValue> {
        let host = self.host.resolve()?;
        let value = decode(&host.get_property(id));
        debug!("get_property({}) = {}", id, value);
        Ok(value)
    }

    /// Set a property.
    ///
    /// Text goes to the host's string setter; integers, option sets and
    /// flags (as 1 or 0) go to its integer setter.
    pub fn set_property(&self, id: PropertyId, value: impl Into<PropertyValue>) -> Result<bool> {
        let host = self.host.resolve()?;
        let value = value.into();
        let success = match encode(&value) {
            HostArgument::Str(text) => host.set_property_string(id, &text),
            HostArgument::Int(n) => host.set_property_int(id, n),
        };
        debug!("set_property({}, {:?}) = {}", id, value, success);
        Ok(success)
    }

    /// Set several properties, pairing `ids` and `values` by position.
    ///
    /// Returns `Ok(false)` without touching the host when the lengths
    /// differ. Otherwise every pair is applied in order, even after a
    /// failure, and the result is `true` only if every set succeeded.
    /// Properties set before a failure stay set.
    pub fn set_properties(&self, ids: &[PropertyId], values: &[PropertyValue]) -> Result<bool> {
        if ids.len() != values.len() {
            warn!(
                "set_properties called with {} ids and {} values",
                ids.len(),
                values.len()
            );
            return Ok(false);
        }

        let mut success = true;
        for (id, value) in ids.iter().zip(values) {
            if !self.set_property(*id, value.clone())? {
                success = false;
            }
        }
        Ok(success)
    }

    /// Whether the device supports a property.
    pub fn is_available(&self, id: PropertyId) -> Result<bool> {
        let host = self.host.resolve()?;
        Ok(host.is_available(id))
    }

    /// Lower bound of a property.
    pub fn get_min(&self, id: PropertyId) -> Result<HostValue> {
        let host = self.host.resolve()?;
        Ok(decode(&host.get_min(id)))
    }

    /// Upper bound of a property.
    pub fn get_max(&self, id: PropertyId) -> Result<HostValue> {
        let host = self.host.resolve()?;
        Ok(decode(&host.get_max(id)))
    }

    /// Persist pending property changes.
    pub fn commit_properties(&self) -> Result<bool> {
        let host = self.host.resolve()?;
        let success = host.commit_properties();
        debug!("commit_properties() = {}", success);
        Ok(success)
    }

    pub fn enable_all_symbologies(&self, enable: bool) -> Result<bool> {
        let host = self.host.resolve()?;
        Ok(host.enable_all_symbologies(enable))
    }

    /// Restore factory property values.
    pub fn set_defaults(&self) -> Result<bool> {
        let host = self.host.resolve()?;
        let success = host.set_defaults();
        debug!("set_defaults() = {}", success);
        Ok(success)
    }

    pub fn is_initialized(&self) -> Result<bool> {
        let host = self.host.resolve()?;
        Ok(host.is_initialized())
    }

    /// Start a decode session.
    ///
    /// Without a timeout the configured default is used (5000 ms unless
    /// changed in [`SdkConfig`]).
    pub fn start_decode(&self, timeout_ms: Option<u32>) -> Result<bool> {
        let host = self.host.resolve()?;
        let timeout_ms = timeout_ms.unwrap_or(self.config.default_decode_timeout_ms);
        let success = host.start_decode(timeout_ms);
        debug!("start_decode({}) = {}", timeout_ms, success);
        Ok(success)
    }

    pub fn stop_decode(&self) -> Result<bool> {
        let host = self.host.resolve()?;
        let success = host.stop_decode();
        debug!("stop_decode() = {}", success);
        Ok(success)
    }

    /// Call `callback` with every scan result.
    ///
    /// Replaces any previous scan callback. Returns the host's flag for
    /// enabling scan events; the callback is attached either way.
    pub fn on_scan(&self, callback: impl FnMut(ScanResult) + 'static) -> Result<bool> {
        let host = self.host.resolve()?;
        let success = host.add_read_listener();
        self.scan.attach(callback);
        Ok(success)
    }

    /// Remove the scan callback and stop scan events.
    pub fn ignore_scan(&self) -> Result<bool> {
        self.scan.detach();
        let host = self.host.resolve()?;
        Ok(host.remove_read_listener())
    }

    /// Call `callback` whenever a decode session times out.
    pub fn on_timeout(&self, callback: impl FnMut(DecodeTimeout) + 'static) -> Result<bool> {
        let host = self.host.resolve()?;
        let success = host.add_timeout_listener();
        self.timeout.attach(callback);
        Ok(success)
    }

    /// Remove the timeout callback and stop timeout events.
    pub fn ignore_timeout(&self) -> Result<bool> {
        self.timeout.detach();
        let host = self.host.resolve()?;
        Ok(host.remove_timeout_listener())
    }
}
