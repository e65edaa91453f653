//! Networking helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps JSON calls to the admin backend and reports failures through
//! the kit's notifications. `script` turns the loosely typed options page
//! scripts pass into the same request model.

pub mod api;
pub mod script;
