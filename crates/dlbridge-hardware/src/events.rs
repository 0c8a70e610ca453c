//! Named-event target.
//!
//! [`EventTarget`] stands in for the host runtime's global event dispatcher.
//! Hosts [`post`](EventTarget::post) events; they are held in a bounded queue
//! until the owner of the event loop calls
//! [`dispatch_pending`](EventTarget::dispatch_pending), which delivers each
//! queued event to the listeners registered under its name.
//!
//! Dispatch works on a snapshot: the queue is drained before the first
//! listener runs and the listener list of each event is copied before it is
//! invoked. Listeners may therefore add or remove listeners and post new
//! events re-entrantly. Events posted during a turn are delivered on the next
//! turn, and a listener removed during a turn may still receive the event
//! being delivered.

use dlbridge_core::constants::DEFAULT_EVENT_QUEUE_LIMIT;
use dlbridge_protocol::HostEvent;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Identifier of a registered listener, unique per event target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

type Listener = Rc<dyn Fn(&HostEvent)>;

struct Inner {
    listeners: RefCell<HashMap<String, Vec<(ListenerId, Listener)>>>,
    queue: RefCell<VecDeque<HostEvent>>,
    queue_limit: usize,
    next_id: Cell<u64>,
}

/// Shared handle to a named-event dispatcher.
///
/// Clones refer to the same target.
///
/// # Examples
///
/// ```
/// use dlbridge_hardware::EventTarget;
/// use dlbridge_protocol::HostEvent;
/// use serde_json::Value;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let target = EventTarget::new();
/// let seen = Rc::new(Cell::new(0));
///
/// let counter = Rc::clone(&seen);
/// target.add_listener("timeout", move |_| counter.set(counter.get() + 1));
///
/// target.post(HostEvent::new("timeout", Value::Null));
/// assert_eq!(seen.get(), 0);
///
/// assert_eq!(target.dispatch_pending(), 1);
/// assert_eq!(seen.get(), 1);
/// ```
#[derive(Clone)]
pub struct EventTarget {
    inner: Rc<Inner>,
}

impl EventTarget {
    /// Create a target with the default queue bound.
    pub fn new() -> Self {
        Self::with_queue_limit(DEFAULT_EVENT_QUEUE_LIMIT)
    }

    /// Create a target holding at most `limit` undelivered events.
    pub fn with_queue_limit(limit: usize) -> Self {
        Self {
            inner: Rc::new(Inner {
                listeners: RefCell::new(HashMap::new()),
                queue: RefCell::new(VecDeque::new()),
                queue_limit: limit,
                next_id: Cell::new(1),
            }),
        }
    }

    /// Register a listener for events named `name`.
    pub fn add_listener(&self, name: &str, listener: impl Fn(&HostEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);

        self.inner
            .listeners
            .borrow_mut()
            .entry(name.to_string())
            .or_default()
            .push((id, Rc::new(listener)));

        trace!("Added {} for '{}'", id, name);
        id
    }

    /// Unregister a listener. Returns `false` if it was not registered
    /// under `name`.
    pub fn remove_listener(&self, name: &str, id: ListenerId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let Some(entries) = listeners.get_mut(name) else {
            return false;
        };

        let before = entries.len();
        entries.retain(|(entry, _)| *entry != id);
        let removed = entries.len() != before;

        if entries.is_empty() {
            listeners.remove(name);
        }
        if removed {
            trace!("Removed {} for '{}'", id, name);
        }
        removed
    }

    /// Number of listeners registered for `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.inner
            .listeners
            .borrow()
            .get(name)
            .map_or(0, Vec::len)
    }

    /// Queue an event for the next dispatch turn.
    ///
    /// Returns `false` and drops the event if the queue is full.
    pub fn post(&self, event: HostEvent) -> bool {
        let mut queue = self.inner.queue.borrow_mut();
        if queue.len() >= self.inner.queue_limit {
            warn!(
                "Event queue full ({} events), dropping '{}'",
                self.inner.queue_limit, event.name
            );
            return false;
        }

        debug!("Queued '{}' event", event.name);
        queue.push_back(event);
        true
    }

    /// Number of events waiting for a dispatch turn.
    pub fn pending(&self) -> usize {
        self.inner.queue.borrow().len()
    }

    /// Deliver every queued event. Returns the number of events delivered.
    pub fn dispatch_pending(&self) -> usize {
        let events: Vec<HostEvent> = self.inner.queue.borrow_mut().drain(..).collect();

        for event in &events {
            let listeners: Vec<Listener> = self
                .inner
                .listeners
                .borrow()
                .get(&event.name)
                .map(|entries| entries.iter().map(|(_, l)| Rc::clone(l)).collect())
                .unwrap_or_default();

            trace!("Dispatching '{}' to {} listener(s)", event.name, listeners.len());
            for listener in listeners {
                listener(event);
            }
        }

        events.len()
    }
}

impl Default for EventTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventTarget")
            .field("events", &self.inner.listeners.borrow().keys().collect::<Vec<_>>())
            .field("pending", &self.pending())
            .field("queue_limit", &self.inner.queue_limit)
            .finish()
    }
}
