/// Listener invoked when the cached `(min, max)` actually changes value.
///
/// Called synchronously inside `update_range`, after the new state has
/// been committed, at most once per call. A listener must not call back
/// into `update_range` on the same cache.
pub trait OnRangeChanged<T> {
    fn range_changed(&self, old: (Option<T>, Option<T>), new: (Option<T>, Option<T>));
}

impl<T, F> OnRangeChanged<T> for F
where
    F: Fn((Option<T>, Option<T>), (Option<T>, Option<T>)),
{
    fn range_changed(&self, old: (Option<T>, Option<T>), new: (Option<T>, Option<T>)) {
        self(old, new)
    }
}

/// Stable identifier for a registered listener, used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered collection of listeners with stable ids. Listeners are
/// `Send` so a cache can move behind a shared locked handle.
pub(crate) struct ListenerSet<T> {
    next_id: u64,
    listeners: Vec<(ListenerId, Box<dyn OnRangeChanged<T> + Send>)>,
}

impl<T> Default for ListenerSet<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }
}

impl<T: Copy> ListenerSet<T> {
    pub(crate) fn add(&mut self, listener: Box<dyn OnRangeChanged<T> + Send>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns false if the id was not registered.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub(crate) fn notify_all(
        &self,
        old: (Option<T>, Option<T>),
        new: (Option<T>, Option<T>),
    ) {
        for (_, listener) in &self.listeners {
            listener.range_changed(old, new);
        }
    }
}
