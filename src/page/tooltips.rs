//! Hover tooltips declared with `data-tooltip="text"`.
//!
//! Each marked element gets class `tooltip` and a child
//! `<span class="tooltip-text">` holding the attribute text; the page CSS
//! does the showing. Elements that already carry a `.tooltip-text` child are
//! left alone, so running the pass twice adds nothing.

#[cfg(test)]
#[path = "tooltips_test.rs"]
mod tooltips_test;

use crate::platform::PlatformError;

pub const TOOLTIP_CLASS: &str = "tooltip";
pub const TOOLTIP_TEXT_CLASS: &str = "tooltip-text";

/// An element that can carry a tooltip.
pub trait TooltipElement {
    fn attribute(&self, name: &str) -> Option<String>;
    /// Whether a direct `.tooltip-text` child is already present.
    fn has_tooltip_text(&self) -> bool;
    /// Add the `tooltip` class and append the text span.
    ///
    /// # Errors
    ///
    /// Returns the DOM error if the span cannot be created or appended.
    fn attach_tooltip(&self, text: &str) -> Result<(), PlatformError>;
}

/// Attach tooltips to `elements`, returning how many were initialized.
pub fn apply_tooltips<E: TooltipElement>(elements: impl IntoIterator<Item = E>, attribute: &str) -> usize {
    let mut attached = 0;
    for element in elements {
        if element.has_tooltip_text() {
            continue;
        }
        let text = element.attribute(attribute).unwrap_or_default();
        match element.attach_tooltip(&text) {
            Ok(()) => attached += 1,
            Err(err) => log::warn!("tooltip not attached: {err}"),
        }
    }
    attached
}

#[cfg(feature = "csr")]
impl TooltipElement for web_sys::Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn has_tooltip_text(&self) -> bool {
        matches!(self.query_selector(&format!(":scope > .{TOOLTIP_TEXT_CLASS}")), Ok(Some(_)))
    }

    fn attach_tooltip(&self, text: &str) -> Result<(), PlatformError> {
        use crate::platform::js_error;

        let document = self.owner_document().ok_or(PlatformError::Unavailable("document"))?;
        self.class_list().add_1(TOOLTIP_CLASS).map_err(|e| js_error(&e))?;
        let span = document.create_element("span").map_err(|e| js_error(&e))?;
        span.set_class_name(TOOLTIP_TEXT_CLASS);
        span.set_text_content(Some(text));
        self.append_child(&span).map_err(|e| js_error(&e))?;
        Ok(())
    }
}

/// Initialize every element in `document` carrying `attribute`.
#[cfg(feature = "csr")]
pub fn init_tooltips(document: &web_sys::Document, attribute: &str) -> usize {
    let elements = super::query_elements(document, &super::attribute_selector(attribute));
    apply_tooltips(elements, attribute)
}
