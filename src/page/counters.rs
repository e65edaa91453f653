//! Counters declared with `data-counter="<target>"`.
//!
//! Every marked element counts up (or down) from its displayed number to the
//! target over the configured duration. An element whose target does not
//! parse is skipped with a warning instead of animating toward zero.

#[cfg(test)]
#[path = "counters_test.rs"]
mod counters_test;

use crate::util::counter::parse_leading_int;

/// Attribute holding the id of the animation that currently owns an element.
pub const RUN_MARKER_ATTRIBUTE: &str = "data-counter-run";

/// Target value of a counter element, read with `parseInt` rules.
#[must_use]
pub fn counter_target(raw: Option<&str>) -> Option<i64> {
    raw.and_then(parse_leading_int)
}

#[cfg(feature = "csr")]
impl crate::util::counter::TextTarget for web_sys::Element {
    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn run_marker(&self) -> Option<String> {
        self.get_attribute(RUN_MARKER_ATTRIBUTE)
    }

    fn set_run_marker(&self, marker: &str) {
        if let Err(err) = self.set_attribute(RUN_MARKER_ATTRIBUTE, marker) {
            log::warn!("counter marker not set: {err:?}");
        }
    }
}

/// Start an animation for every counter element in `document`.
#[cfg(feature = "csr")]
pub fn init_counters(kit: &crate::UiKit, document: &web_sys::Document) -> usize {
    let attribute = &kit.config().counter_attribute;
    let mut started = 0;
    for element in super::query_elements(document, &super::attribute_selector(attribute)) {
        let raw = element.get_attribute(attribute);
        let Some(target) = counter_target(raw.as_deref()) else {
            log::warn!("counter skipped: {attribute}={raw:?} is not a number");
            continue;
        };
        kit.animate_counter(element, target);
        started += 1;
    }
    started
}
