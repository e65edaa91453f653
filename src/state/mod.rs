//! UI state rendered by the components.
//!
//! DESIGN
//! ======
//! Plain data held in Leptos signals by [`crate::UiKit`]. Mutations are
//! methods here so they stay testable without a reactive owner or a DOM.

pub mod loader;
pub mod notifications;
