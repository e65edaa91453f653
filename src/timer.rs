//! One-shot timers with explicit cancellation handles.
//!
//! DESIGN
//! ======
//! Every operation that defers work (notification dismissal, debounce,
//! counter ticks, delayed loader hide) goes through [`Scheduler`] and hands
//! the caller a [`TimerHandle`]. Dropping a handle never cancels; only
//! [`TimerHandle::cancel`] does, so fire-and-forget callers need no
//! bookkeeping.
//!
//! The browser implementation sleeps on `gloo-timers` inside a local task.
//! [`ManualScheduler`] runs the same tasks against a virtual clock
//! so timer-driven behavior is testable without a browser.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Cancellation handle shared between a scheduled task and its owner.
///
/// Clones share the same flag. A single handle may guard a chain of tasks
/// (the counter animation reschedules itself under one handle).
#[derive(Clone, Debug, Default)]
pub struct TimerHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prevent any task guarded by this handle from running.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Source of deferred execution.
pub trait Scheduler {
    /// Run `task` after `delay_ms` unless `guard` has been cancelled by then.
    fn schedule(&self, delay_ms: u32, guard: TimerHandle, task: Task);

    /// Run `task` after `delay_ms` under a fresh handle.
    fn after(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let guard = TimerHandle::new();
        self.schedule(delay_ms, guard.clone(), task);
        guard
    }
}

/// Scheduler backed by `setTimeout` through `gloo-timers`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "csr")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, guard: TimerHandle, task: Task) {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
            if !guard.is_cancelled() {
                task();
            }
        });
    }
}

struct PendingTask {
    due_ms: u64,
    seq: u64,
    guard: TimerHandle,
    task: Task,
}

#[derive(Default)]
struct ManualQueue {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

impl ManualQueue {
    /// Remove the earliest task due at or before `until_ms`.
    fn pop_due(&mut self, until_ms: u64) -> Option<PendingTask> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(index))
    }
}

/// Virtual-clock scheduler. Time only moves when [`ManualScheduler::advance`]
/// is called; tasks run in due order, ties broken by scheduling order.
///
/// Clones share the same queue, so a test can keep one clone and hand
/// another to the kit.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<ManualQueue>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.queue.borrow().now_ms
    }

    /// Number of scheduled tasks whose handle has not been cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .pending
            .iter()
            .filter(|p| !p.guard.is_cancelled())
            .count()
    }

    /// Move the clock forward by `ms`, running every task that falls due.
    ///
    /// Tasks scheduled by running tasks are picked up in the same call when
    /// they fall due before the new time.
    pub fn advance(&self, ms: u64) {
        let until_ms = self.queue.borrow().now_ms + ms;
        loop {
            let next = self.queue.borrow_mut().pop_due(until_ms);
            let Some(pending) = next else {
                break;
            };
            self.queue.borrow_mut().now_ms = pending.due_ms;
            if !pending.guard.is_cancelled() {
                (pending.task)();
            }
        }
        self.queue.borrow_mut().now_ms = until_ms;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, guard: TimerHandle, task: Task) {
        let mut queue = self.queue.borrow_mut();
        let due_ms = queue.now_ms + u64::from(delay_ms);
        let seq = queue.next_seq;
        queue.next_seq += 1;
        queue.pending.push(PendingTask { due_ms, seq, guard, task });
    }
}
