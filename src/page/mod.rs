//! Behavior attached to the server-rendered page once the DOM is parsed.
//!
//! SYSTEM CONTEXT
//! ==============
//! `boot()` calls [`on_dom_ready`] and then [`init_page`], which walks the
//! document once: tooltips, counters, then in-page anchor links. Each pass is
//! split into a DOM-free core (tested natively) and a thin `web-sys` layer.

pub mod anchors;
pub mod counters;
pub mod tooltips;

/// Run `f` once the document is parsed: immediately if it already is,
/// otherwise on `DOMContentLoaded`.
#[cfg(feature = "csr")]
pub fn on_dom_ready(f: impl FnOnce() + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; page init skipped");
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }

    let callback = Closure::once_into_js(f);
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
        log::error!("failed to wait for DOMContentLoaded: {err:?}");
    }
}

/// Attach tooltips, start counters, and wire anchor scrolling.
#[cfg(feature = "csr")]
pub fn init_page(kit: &crate::UiKit) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let tooltips = tooltips::init_tooltips(&document, &kit.config().tooltip_attribute);
    let counters = counters::init_counters(kit, &document);
    let anchors = anchors::init_anchor_scrolling(&document);
    log::info!("page init: tooltips={tooltips} counters={counters} anchors={anchors}");
}

/// Every element matching `selector`. An invalid selector yields nothing.
#[cfg(feature = "csr")]
pub(crate) fn query_elements(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    use wasm_bindgen::JsCast;

    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("invalid selector {selector}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<web_sys::Element>().cloned())
        .collect()
}

/// `[name]` attribute-presence selector.
#[must_use]
pub fn attribute_selector(name: &str) -> String {
    format!("[{name}]")
}
