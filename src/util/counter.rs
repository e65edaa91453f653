//! Numeric counter animation.
//!
//! The displayed value moves from the element's current number to the target
//! in fixed 16 ms ticks and snaps to the target once it is reached or crossed.
//!
//! DESIGN
//! ======
//! The element is abstracted as [`TextTarget`]. Each run writes a unique
//! marker onto its target; a tick that finds someone else's marker stops, so
//! a newer animation on the same element always takes over from an older one.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::timer::{Scheduler, TimerHandle};

pub const TICK_MS: u32 = 16;

static NEXT_RUN: AtomicU64 = AtomicU64::new(1);

/// Something with displayed text that a counter can drive.
pub trait TextTarget {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    /// Marker of the animation currently owning this target.
    fn run_marker(&self) -> Option<String>;
    fn set_run_marker(&self, marker: &str);
}

/// Parse the leading integer of `text` the way `parseInt` does: optional
/// leading whitespace and sign, then digits; anything after is ignored.
#[must_use]
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// One displayed value produced by [`CounterAnimation::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    Running(i64),
    Done(i64),
}

impl CounterFrame {
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Self::Running(v) | Self::Done(v) => v,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(start: i64, target: i64, duration_ms: u32) -> Self {
        let ticks = (f64::from(duration_ms) / f64::from(TICK_MS)).max(1.0);
        Self {
            target,
            increment: (target as f64 - start as f64) / ticks,
            current: start as f64,
        }
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Advance one tick.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::float_cmp)]
    pub fn step(&mut self) -> CounterFrame {
        self.current += self.increment;
        let target = self.target as f64;
        let reached = self.increment == 0.0
            || (self.increment > 0.0 && self.current >= target)
            || (self.increment < 0.0 && self.current <= target);
        if reached {
            self.current = target;
            CounterFrame::Done(self.target)
        } else {
            CounterFrame::Running(self.current.round() as i64)
        }
    }
}

struct CounterRun<T> {
    element: T,
    marker: String,
    animation: CounterAnimation,
}

impl<T: TextTarget> CounterRun<T> {
    fn owns_target(&self) -> bool {
        self.element.run_marker().as_deref() == Some(self.marker.as_str())
    }
}

/// Animate `element` from its displayed number to `target` over `duration_ms`.
///
/// Unparseable text starts from 0. The returned handle stops the animation
/// where it is.
pub fn animate_counter<T: TextTarget + 'static>(
    scheduler: &Rc<dyn Scheduler>,
    element: T,
    target: i64,
    duration_ms: u32,
) -> TimerHandle {
    let start = parse_leading_int(&element.text()).unwrap_or(0);
    let marker = NEXT_RUN.fetch_add(1, Ordering::Relaxed).to_string();
    element.set_run_marker(&marker);

    let run = CounterRun { element, marker, animation: CounterAnimation::new(start, target, duration_ms) };
    let guard = TimerHandle::new();
    schedule_tick(Rc::clone(scheduler), guard.clone(), run);
    guard
}

fn schedule_tick<T: TextTarget + 'static>(scheduler: Rc<dyn Scheduler>, guard: TimerHandle, mut run: CounterRun<T>) {
    let next_scheduler = Rc::clone(&scheduler);
    let next_guard = guard.clone();
    scheduler.schedule(
        TICK_MS,
        guard,
        Box::new(move || {
            if !run.owns_target() {
                return;
            }
            match run.animation.step() {
                CounterFrame::Running(value) => {
                    run.element.set_text(&value.to_string());
                    schedule_tick(next_scheduler, next_guard, run);
                }
                CounterFrame::Done(value) => run.element.set_text(&value.to_string()),
            }
        }),
    );
}
