#![allow(dead_code)]

use std::cell::RefCell;

use gloo::timers::callback::Timeout;

/// Runs an action once `wait_ms` have passed without another call.
///
/// Not attached to any handler yet; scroll and resize listeners run on every
/// event.
pub(crate) struct Debouncer {
    wait_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub(crate) fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: RefCell::new(None),
        }
    }

    /// Replacing the pending timeout drops it, which clears the browser timer.
    pub(crate) fn call(&self, action: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.wait_ms, action);
        self.pending.replace(Some(timeout));
    }

    pub(crate) fn cancel(&self) {
        self.pending.take();
    }
}
