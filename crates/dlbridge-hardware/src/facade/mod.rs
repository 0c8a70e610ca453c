//! Manager facades.
//!
//! Each facade forwards calls to one injected host and republishes the
//! host's events as callback registrations. Every method that reaches the
//! host resolves the slot first, so the only error a facade returns is
//! [`Error::HostNotInjected`](dlbridge_core::Error::HostNotInjected).
//!
//! Event subscription follows the same sequence for every channel:
//!
//! 1. `on_*`: resolve the host and ask it to start producing the event,
//!    detach the previous callback, attach the new one and return the
//!    host's flag.
//! 2. `ignore_*`: detach the callback if any, then resolve the host and
//!    return its removal flag.

pub mod barcode;
pub mod cradle;
pub mod keyboard;

pub use barcode::BarcodeManager;
pub use cradle::CradleManager;
pub use keyboard::KeyboardManager;
