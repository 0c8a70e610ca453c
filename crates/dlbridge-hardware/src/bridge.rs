//! Event bridge between host events and typed callbacks.
//!
//! An [`EventChannel`] owns at most one listener on the [`EventTarget`] for
//! one [`EventKind`]. Attaching a callback replaces the previous one; the
//! listener extracts the typed payload from the event `detail` and forwards
//! it to the callback.
//!
//! ```text
//!            attach(cb)              attach(cb2)
//! Unregistered ---------> Registered -----------> Registered
//!      ^                      |
//!      +------- detach -------+
//! ```

use crate::events::{EventTarget, ListenerId};
use dlbridge_protocol::{EventKind, EventPayload};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Registration state of an [`EventChannel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// No callback attached.
    Unregistered,
    /// A callback is attached and receives events.
    Registered,
}

/// Single-callback slot for one event kind.
pub struct EventChannel<P> {
    kind: EventKind,
    target: EventTarget,
    listener: Cell<Option<ListenerId>>,
    _payload: PhantomData<fn(P)>,
}

impl<P: EventPayload + 'static> EventChannel<P> {
    /// Create an unregistered channel for `kind` on `target`.
    pub fn new(kind: EventKind, target: EventTarget) -> Self {
        Self {
            kind,
            target,
            listener: Cell::new(None),
            _payload: PhantomData,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn state(&self) -> ChannelState {
        if self.listener.get().is_some() {
            ChannelState::Registered
        } else {
            ChannelState::Unregistered
        }
    }

    /// Attach `callback`, detaching any previous one first.
    ///
    /// Events whose `detail` cannot be read as `P` are logged and dropped
    /// without reaching the callback.
    pub fn attach(&self, callback: impl FnMut(P) + 'static) -> ListenerId {
        self.detach();

        let kind = self.kind;
        let callback = RefCell::new(callback);
        let id = self.target.add_listener(kind.event_name(), move |event| {
            let payload = match P::from_detail(kind, &event.detail) {
                Ok(payload) => payload,
                Err(e) => {
                    warn!("Dropping '{}' event: {}", kind, e);
                    return;
                }
            };
            match callback.try_borrow_mut() {
                Ok(mut callback) => (&mut *callback)(payload),
                Err(_) => warn!("Dropping nested '{}' event, callback is still running", kind),
            }
        });

        debug!("Attached {} to '{}'", id, kind);
        self.listener.set(Some(id));
        id
    }

    /// Detach the current callback. Returns `true` if one was attached.
    pub fn detach(&self) -> bool {
        match self.listener.take() {
            Some(id) => {
                self.target.remove_listener(self.kind.event_name(), id);
                debug!("Detached {} from '{}'", id, self.kind);
                true
            }
            None => false,
        }
    }
}

impl<P> Drop for EventChannel<P> {
    fn drop(&mut self) {
        if let Some(id) = self.listener.take() {
            self.target.remove_listener(self.kind.event_name(), id);
        }
    }
}

impl<P> fmt::Debug for EventChannel<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventChannel")
            .field("kind", &self.kind)
            .field("listener", &self.listener.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlbridge_core::SymbologyId;
    use dlbridge_core::catalog::InsertState;
    use dlbridge_protocol::{CradleState, HostEvent, ScanResult};
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn test_attach_and_deliver() {
        let target = EventTarget::new();
        let channel: EventChannel<ScanResult> = EventChannel::new(EventKind::Scan, target.clone());
        assert_eq!(channel.state(), ChannelState::Unregistered);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        channel.attach(move |scan: ScanResult| sink.borrow_mut().push(scan.text));
        assert_eq!(channel.state(), ChannelState::Registered);

        let scan = ScanResult::new(SymbologyId::CODE128, "ABC");
        target.post(HostEvent::from_payload(EventKind::Scan, &scan));
        target.dispatch_pending();

        assert_eq!(seen.borrow().as_slice(), ["ABC"]);
    }

    #[test]
    fn test_attach_replaces_previous() {
        let target = EventTarget::new();
        let channel: EventChannel<CradleState> =
            EventChannel::new(EventKind::CradleInsertion, target.clone());

        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let a = Rc::clone(&first);
        let b = Rc::clone(&second);
        channel.attach(move |_| a.set(a.get() + 1));
        channel.attach(move |_| b.set(b.get() + 1));

        assert_eq!(target.listener_count("dlCradleInsertion"), 1);

        let state = CradleState::new(InsertState::InsertedCorrectly);
        target.post(HostEvent::from_payload(EventKind::CradleInsertion, &state));
        target.dispatch_pending();

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_detach() {
        let target = EventTarget::new();
        let channel: EventChannel<ScanResult> = EventChannel::new(EventKind::Scan, target.clone());

        assert!(!channel.detach());
        channel.attach(|_| {});
        assert!(channel.detach());
        assert_eq!(channel.state(), ChannelState::Unregistered);
        assert_eq!(target.listener_count("scan"), 0);
    }

    #[test]
    fn test_invalid_payload_is_dropped() {
        let target = EventTarget::new();
        let channel: EventChannel<ScanResult> = EventChannel::new(EventKind::Scan, target.clone());

        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        channel.attach(move |_| counter.set(counter.get() + 1));

        target.post(HostEvent::new("scan", json!({ "state": { "id": 2 } })));
        assert_eq!(target.dispatch_pending(), 1);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_drop_removes_listener() {
        let target = EventTarget::new();
        {
            let channel: EventChannel<ScanResult> =
                EventChannel::new(EventKind::Scan, target.clone());
            channel.attach(|_| {});
            assert_eq!(target.listener_count("scan"), 1);
        }
        assert_eq!(target.listener_count("scan"), 0);
    }
}
