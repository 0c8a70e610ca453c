//! Host abstraction layer and manager facades for the dlbridge device SDK.
//!
//! The device capabilities (barcode scanning, cradle docking, keyboard
//! triggers) are implemented by host objects that the enclosing runtime
//! injects at well-known symbols. This crate models that runtime as:
//!
//! - the [`BarcodeHost`], [`CradleHost`] and [`KeyboardHost`] traits, one
//!   per injected object;
//! - [`HostSlot`], the injection point resolved on every facade call;
//! - [`EventTarget`], the named-event substrate hosts dispatch events on;
//! - [`Environment`], which bundles the three slots, the event target and
//!   the [`SdkConfig`](dlbridge_core::SdkConfig).
//!
//! On top of it sit the facades applications use: [`BarcodeManager`],
//! [`CradleManager`] and [`KeyboardManager`]. Each host-facing call resolves
//! its slot first and fails with
//! [`Error::HostNotInjected`](dlbridge_core::Error::HostNotInjected) when the
//! host is absent; every other outcome is the host's own boolean or value.
//!
//! # Example
//!
//! ```
//! use dlbridge_core::{PropertyId, SymbologyId};
//! use dlbridge_hardware::{BarcodeManager, Environment, mock};
//! use dlbridge_protocol::ScanResult;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let env = Environment::new();
//! let hosts = mock::install(&env);
//! let barcode = BarcodeManager::new(&env);
//!
//! assert!(barcode.set_property(PropertyId::CODE39_ENABLE, true).unwrap());
//!
//! let scans = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&scans);
//! barcode.on_scan(move |scan| sink.borrow_mut().push(scan.text)).unwrap();
//!
//! hosts.barcode.simulate_scan(ScanResult::new(SymbologyId::EAN13, "4006381333931"));
//! env.events().dispatch_pending();
//!
//! assert_eq!(scans.borrow().as_slice(), ["4006381333931"]);
//! ```
//!
//! # Threading
//!
//! The host runtime is single threaded. Shared state uses `Rc` and interior
//! mutability, so facades and hosts are neither `Send` nor `Sync`. Events are
//! queued by [`EventTarget::post`] and delivered on the next
//! [`EventTarget::dispatch_pending`] turn, never from inside the call that
//! registered the callback.

pub mod bridge;
pub mod environment;
pub mod events;
pub mod facade;
pub mod mock;
pub mod slot;
pub mod traits;

// Re-export commonly used types for convenience
pub use bridge::{ChannelState, EventChannel};
pub use environment::Environment;
pub use events::{EventTarget, ListenerId};
pub use facade::{BarcodeManager, CradleManager, KeyboardManager};
pub use slot::HostSlot;
pub use traits::{BarcodeHost, CradleHost, KeyboardHost};
