//! Smooth scrolling for in-page `href="#..."` links.
//!
//! A click on such a link scrolls the referenced element to the top of the
//! viewport instead of jumping. A bare `#` is left to the browser; for any
//! other hash the default jump is always suppressed, even when no element
//! matches.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

/// Links handled by this pass.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Selector to scroll to for a link's `href`, or `None` when the click
/// should keep its default behavior.
#[must_use]
pub fn scroll_selector(href: &str) -> Option<&str> {
    if href.starts_with('#') && href != "#" {
        Some(href)
    } else {
        None
    }
}

#[cfg(feature = "csr")]
fn scroll_to(document: &web_sys::Document, selector: &str) {
    match document.query_selector(selector) {
        Ok(Some(target)) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Ok(None) => log::debug!("anchor target {selector} not found"),
        Err(err) => log::debug!("anchor {selector} is not a valid selector: {err:?}"),
    }
}

/// Install a click handler on every in-page link. Returns how many were wired.
#[cfg(feature = "csr")]
pub fn init_anchor_scrolling(document: &web_sys::Document) -> usize {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let mut wired = 0;
    for anchor in super::query_elements(document, ANCHOR_SELECTOR) {
        let link = anchor.clone();
        let doc = document.clone();
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(selector) = scroll_selector(&href) else {
                return;
            };
            ev.prevent_default();
            scroll_to(&doc, selector);
        });
        match anchor.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref()) {
            Ok(()) => {
                handler.forget();
                wired += 1;
            }
            Err(err) => log::warn!("anchor listener not installed: {err:?}"),
        }
    }
    wired
}
