use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{info, trace};

/// Receives notification messages from a [`Notifier`].
///
/// Any `Fn(&str) + Send + Sync` closure is a listener.
pub trait Listener: Send + Sync {
    fn update(&self, message: &str);
}

impl<F> Listener for F
where
    F: Fn(&str) + Send + Sync,
{
    fn update(&self, message: &str) {
        self(message);
    }
}

/// Handle returned by [`Notifier::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Arc<dyn Listener>)>,
}

/// Synchronous fan-out of text messages to registered listeners.
///
/// Delivery happens on the caller's thread, in registration order, and no
/// lock is held while a listener runs. A listener may subscribe or unsubscribe
/// (itself included) during delivery: a removed listener is skipped for the
/// rest of the current message, a new one first hears the next message.
#[derive(Default)]
pub struct Notifier {
    listeners: Mutex<Listeners>,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its handle.
    pub fn subscribe(&self, listener: impl Listener + 'static) -> ListenerId {
        self.subscribe_arc(Arc::new(listener))
    }

    /// Registers an already shared listener, letting the caller keep a handle to it.
    pub fn subscribe_arc(&self, listener: Arc<dyn Listener>) -> ListenerId {
        let mut listeners = self.listeners.lock();
        let id = ListenerId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push((id, listener));
        trace!(%id, total = listeners.entries.len(), "Listener subscribed");
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.entries.len();
        listeners.entries.retain(|(entry, _)| *entry != id);
        let removed = listeners.entries.len() != before;
        trace!(%id, removed, "Listener unsubscribe");
        removed
    }

    /// Delivers `message` to every listener and returns how many received it.
    pub fn notify(&self, message: &str) -> usize {
        let snapshot: Vec<(ListenerId, Arc<dyn Listener>)> = self
            .listeners
            .lock()
            .entries
            .iter()
            .map(|(id, l)| (*id, Arc::clone(l)))
            .collect();

        let mut delivered = 0;
        for (id, listener) in &snapshot {
            if !self.is_registered(*id) {
                trace!(%id, "Listener removed mid-delivery, skipping");
                continue;
            }
            listener.update(message);
            delivered += 1;
        }
        delivered
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.lock().entries.iter().any(|(entry, _)| *entry == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier").field("listeners", &self.len()).finish()
    }
}

/// A listener identified by a display name, e.g. an instructor watching a classroom.
///
/// Each delivery is logged as `Notification to {name}: {message}`; only the
/// most recent rendered line is kept.
#[derive(Debug)]
pub struct NamedListener {
    name: String,
    last: Mutex<Option<String>>,
}

impl NamedListener {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), last: Mutex::new(None) }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn render(&self, message: &str) -> String {
        format!("Notification to {}: {message}", self.name)
    }

    /// The last line delivered, if any.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.last.lock().clone()
    }
}

impl Listener for NamedListener {
    fn update(&self, message: &str) {
        let line = self.render(message);
        info!(listener = %self.name, "{line}");
        *self.last.lock() = Some(line);
    }
}
