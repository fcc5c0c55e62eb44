use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::range_cache::RangeCache;

/// Clonable handle sharing one [`RangeCache`] across threads.
///
/// The cache itself is not thread-safe: all access goes through
/// [`lock`](Self::lock), which serializes the whole
/// read-plan-fold-notify sequence. The operation is I/O-bound, so a
/// single mutex around it costs nothing measurable.
pub struct SharedRangeCache<T, S> {
    inner: Arc<Mutex<RangeCache<T, S>>>,
}

impl<T, S> SharedRangeCache<T, S> {
    pub fn new(cache: RangeCache<T, S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Acquire exclusive access. Hold the guard across the entire
    /// update; do not call `lock` again from a range-change listener.
    pub fn lock(&self) -> MutexGuard<'_, RangeCache<T, S>> {
        self.inner.lock()
    }
}

impl<T, S> Clone for SharedRangeCache<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
