//! # adminkit
//!
//! Browser-side helpers for the server-rendered admin panel, compiled to WASM.
//!
//! Pages are rendered by the backend; this crate attaches behavior to them on
//! load (tooltips, counters, anchor scrolling) and exposes a small toolkit to
//! inline scripts: toast notifications, a loading overlay, date formatting,
//! validators, a JSON fetch wrapper, clipboard copy, and export downloads.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`kit`] | [`kit::UiKit`] context object every operation runs against |
//! | [`state`] | Notification and loader state rendered by the components |
//! | [`components`] | Leptos hosts for notifications and the loader overlay |
//! | [`net`] | JSON fetch wrapper |
//! | [`timer`] | Cancellable timers behind the [`timer::Scheduler`] seam |
//! | [`platform`] | Browser APIs behind the [`platform::Platform`] seam |
//! | [`page`] | DOM scanning run on page load |
//! | [`util`] | Pure helpers: formatting, validation, debounce, counters |
//! | [`config`] | Page-supplied configuration and message catalog |
//!
//! Browser-only code is compiled with the `csr` feature. Without it the crate
//! builds natively so the logic can be tested with
//! [`timer::ManualScheduler`] and [`platform::HeadlessPlatform`].

pub mod components;
pub mod config;
pub mod kit;
pub mod net;
pub mod page;
pub mod platform;
pub mod state;
pub mod timer;
pub mod util;

#[cfg(feature = "csr")]
mod bindings;

pub use kit::UiKit;
pub use util::severity::Severity;

/// WASM entry point: set up logging, build the browser kit, and wire the page
/// once the DOM is parsed.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger already set: {err}").into());
    }

    let config = config::load_from_page();
    let kit = UiKit::browser(config);
    kit.install();

    page::on_dom_ready(move || {
        components::mount_hosts(&kit);
        page::init_page(&kit);
    });
}
