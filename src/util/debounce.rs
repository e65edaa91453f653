//! Trailing-edge debounce.
//!
//! Each call cancels the pending one and schedules the wrapped function with
//! the latest arguments after `wait_ms` of quiet. Clones share the same
//! pending slot; separate [`debounce`] calls get independent state.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::timer::{Scheduler, TimerHandle};

struct Inner<A> {
    scheduler: Rc<dyn Scheduler>,
    wait_ms: u32,
    func: Rc<dyn Fn(A)>,
    pending: RefCell<Option<TimerHandle>>,
}

pub struct Debounced<A> {
    inner: Rc<Inner<A>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

/// Wrap `func` so it runs once per quiet period of `wait_ms`.
pub fn debounce<A: 'static>(scheduler: Rc<dyn Scheduler>, wait_ms: u32, func: impl Fn(A) + 'static) -> Debounced<A> {
    Debounced {
        inner: Rc::new(Inner { scheduler, wait_ms, func: Rc::new(func), pending: RefCell::new(None) }),
    }
}

impl<A: 'static> Debounced<A> {
    /// Schedule the wrapped function with `args`, replacing any pending call.
    pub fn call(&self, args: A) {
        self.cancel();

        let func = Rc::clone(&self.inner.func);
        let weak: Weak<Inner<A>> = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.after(
            self.inner.wait_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.pending.borrow_mut().take();
                }
                func(args);
            }),
        );
        *self.inner.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        if let Some(previous) = self.inner.pending.borrow_mut().take() {
            previous.cancel();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }

    #[must_use]
    pub fn wait_ms(&self) -> u32 {
        self.inner.wait_ms
    }
}
