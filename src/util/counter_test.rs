use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::timer::ManualScheduler;

#[derive(Clone, Default)]
struct FakeCounter {
    text: Rc<RefCell<String>>,
    marker: Rc<RefCell<Option<String>>>,
    writes: Rc<RefCell<usize>>,
}

impl FakeCounter {
    fn showing(text: &str) -> Self {
        let fake = Self::default();
        *fake.text.borrow_mut() = text.to_owned();
        fake
    }

    fn shown(&self) -> String {
        self.text.borrow().clone()
    }
}

impl TextTarget for FakeCounter {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.writes.borrow_mut() += 1;
        *self.text.borrow_mut() = text.to_owned();
    }

    fn run_marker(&self) -> Option<String> {
        self.marker.borrow().clone()
    }

    fn set_run_marker(&self, marker: &str) {
        *self.marker.borrow_mut() = Some(marker.to_owned());
    }
}

fn scheduler() -> (ManualScheduler, Rc<dyn Scheduler>) {
    let manual = ManualScheduler::new();
    let shared: Rc<dyn Scheduler> = Rc::new(manual.clone());
    (manual, shared)
}

// =============================================================
// parse_leading_int
// =============================================================

#[test]
fn parse_leading_int_reads_digit_prefix() {
    assert_eq!(parse_leading_int("42"), Some(42));
    assert_eq!(parse_leading_int("  17 users"), Some(17));
    assert_eq!(parse_leading_int("-8"), Some(-8));
    assert_eq!(parse_leading_int("+3"), Some(3));
}

#[test]
fn parse_leading_int_rejects_non_numeric_text() {
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("abc"), None);
    assert_eq!(parse_leading_int("-"), None);
    assert_eq!(parse_leading_int("—"), None);
}

#[test]
fn parse_leading_int_stops_at_separator() {
    assert_eq!(parse_leading_int("1,234"), Some(1));
}

// =============================================================
// CounterAnimation
// =============================================================

#[test]
fn increment_spreads_distance_over_ticks() {
    let anim = CounterAnimation::new(0, 100, 160);
    assert!((anim.increment() - 10.0).abs() < f64::EPSILON);
    assert_eq!(anim.target(), 100);
}

#[test]
fn step_counts_up_then_snaps_to_target() {
    let mut anim = CounterAnimation::new(0, 100, 160);
    let frames = (0..10).map(|_| anim.step()).collect::<Vec<_>>();
    assert_eq!(frames[0], CounterFrame::Running(10));
    assert_eq!(frames[8], CounterFrame::Running(90));
    assert_eq!(frames[9], CounterFrame::Done(100));
}

#[test]
fn step_counts_down_for_lower_target() {
    let mut anim = CounterAnimation::new(50, 0, 80);
    assert_eq!(anim.step(), CounterFrame::Running(40));
    let last = (0..4).map(|_| anim.step()).last().unwrap();
    assert_eq!(last, CounterFrame::Done(0));
}

#[test]
fn overshoot_snaps_to_target() {
    let mut anim = CounterAnimation::new(0, 7, 32);
    assert_eq!(anim.step(), CounterFrame::Running(4));
    assert_eq!(anim.step(), CounterFrame::Done(7));
}

#[test]
fn equal_start_and_target_finishes_on_first_tick() {
    let mut anim = CounterAnimation::new(5, 5, 1000);
    assert_eq!(anim.step(), CounterFrame::Done(5));
}

#[test]
fn zero_duration_finishes_on_first_tick() {
    let mut anim = CounterAnimation::new(0, 1000, 0);
    assert_eq!(anim.step().value(), 1000);
}

// =============================================================
// animate_counter
// =============================================================

#[test]
fn animate_counter_ends_exactly_on_target_and_stops() {
    let (manual, shared) = scheduler();
    let element = FakeCounter::showing("0");

    animate_counter(&shared, element.clone(), 100, 160);
    manual.advance(160);

    assert_eq!(element.shown(), "100");
    assert_eq!(manual.pending(), 0);
    let writes = *element.writes.borrow();
    manual.advance(1000);
    assert_eq!(*element.writes.borrow(), writes);
}

#[test]
fn animate_counter_shows_intermediate_values() {
    let (manual, shared) = scheduler();
    let element = FakeCounter::showing("0");

    animate_counter(&shared, element.clone(), 100, 160);
    manual.advance(48);

    assert_eq!(element.shown(), "30");
}

#[test]
fn unparseable_text_starts_from_zero() {
    let (manual, shared) = scheduler();
    let element = FakeCounter::showing("n/a");

    animate_counter(&shared, element.clone(), 20, 32);
    manual.advance(16);
    assert_eq!(element.shown(), "10");
    manual.advance(16);
    assert_eq!(element.shown(), "20");
}

#[test]
fn cancel_freezes_current_value() {
    let (manual, shared) = scheduler();
    let element = FakeCounter::showing("0");

    let handle = animate_counter(&shared, element.clone(), 100, 160);
    manual.advance(32);
    handle.cancel();
    manual.advance(500);

    assert_eq!(element.shown(), "20");
}

#[test]
fn second_animation_takes_over_same_element() {
    let (manual, shared) = scheduler();
    let element = FakeCounter::showing("0");

    animate_counter(&shared, element.clone(), 1000, 160);
    manual.advance(16);
    assert_eq!(element.shown(), "100");

    animate_counter(&shared, element.clone(), 0, 160);
    manual.advance(1000);

    assert_eq!(element.shown(), "0");
    assert_eq!(manual.pending(), 0);
}
