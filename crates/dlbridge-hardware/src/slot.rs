//! Host injection slots.

use dlbridge_core::{Error, Result};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, warn};

/// Shared injection point for one host object.
///
/// Clones share the same slot, so a host injected (or ejected) through the
/// [`Environment`](crate::Environment) is seen by every facade holding a
/// clone. Facades call [`HostSlot::resolve`] on every operation; nothing is
/// cached.
///
/// # Examples
///
/// ```
/// use dlbridge_hardware::{HostSlot, KeyboardHost};
/// use std::rc::Rc;
///
/// struct Triggers;
///
/// impl KeyboardHost for Triggers {
///     fn enable_triggers(&self, _enable: bool) -> bool {
///         true
///     }
/// }
///
/// let slot: HostSlot<dyn KeyboardHost> = HostSlot::new("_DLKeyboardMgr");
/// assert!(slot.resolve().is_err());
///
/// slot.inject(Rc::new(Triggers));
/// assert!(slot.resolve().unwrap().enable_triggers(true));
/// ```
pub struct HostSlot<H: ?Sized> {
    symbol: &'static str,
    host: Rc<RefCell<Option<Rc<H>>>>,
}

impl<H: ?Sized> HostSlot<H> {
    /// Create an empty slot for the host injected at `symbol`.
    pub fn new(symbol: &'static str) -> Self {
        Self {
            symbol,
            host: Rc::new(RefCell::new(None)),
        }
    }

    /// Symbol the host is injected at.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Install a host, replacing any previous one.
    pub fn inject(&self, host: Rc<H>) {
        debug!("Injected {}", self.symbol);
        *self.host.borrow_mut() = Some(host);
    }

    /// Remove the host. Returns `true` if one was installed.
    pub fn eject(&self) -> bool {
        let ejected = self.host.borrow_mut().take().is_some();
        if ejected {
            debug!("Ejected {}", self.symbol);
        }
        ejected
    }

    /// Whether a host is currently installed.
    pub fn is_injected(&self) -> bool {
        self.host.borrow().is_some()
    }

    /// The installed host.
    ///
    /// # Errors
    ///
    /// Returns `Error::HostNotInjected` naming the slot's symbol if no host
    /// is installed.
    pub fn resolve(&self) -> Result<Rc<H>> {
        match self.host.borrow().as_ref() {
            Some(host) => Ok(Rc::clone(host)),
            None => {
                warn!("{} has not been injected", self.symbol);
                Err(Error::host_not_injected(self.symbol))
            }
        }
    }
}

impl<H: ?Sized> Clone for HostSlot<H> {
    fn clone(&self) -> Self {
        Self {
            symbol: self.symbol,
            host: Rc::clone(&self.host),
        }
    }
}

impl<H: ?Sized> fmt::Debug for HostSlot<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostSlot")
            .field("symbol", &self.symbol)
            .field("injected", &self.is_injected())
            .finish()
    }
}
