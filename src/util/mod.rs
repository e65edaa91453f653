//! Pure helpers shared by the kit and the page wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here touches the DOM directly; browser effects go through
//! [`crate::timer::Scheduler`] or a [`counter::TextTarget`] so every helper
//! runs in native tests.

pub mod counter;
pub mod datetime;
pub mod debounce;
pub mod export;
pub mod severity;
pub mod validate;
