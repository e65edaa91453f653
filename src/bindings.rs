//! Functions exported to page scripts.
//!
//! Inline scripts in the backend templates call these by their camelCase
//! names. They all act on the kit installed by `boot()`; called before that,
//! they do nothing and report failure (`false`, a rejected promise).
//!
//! Only JS value conversion lives here; the rules behind each export are in
//! the modules it calls.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::UiKit;
use crate::net::api::{ApiError, FetchOptions, fetch_json_text};
use crate::net::script::{self, ScriptValue};
use crate::util::{datetime, severity::Severity, validate};

fn current_kit() -> Option<UiKit> {
    let kit = UiKit::installed();
    if kit.is_none() {
        log::debug!("adminkit called before boot");
    }
    kit
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

// --- Notifications and overlay ---

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: String, kind: Option<String>, duration: Option<u32>) {
    let Some(kit) = current_kit() else {
        return;
    };
    let severity = kind.as_deref().map_or(Severity::Success, Severity::from_name);
    let duration = duration.unwrap_or(kit.config().notification_duration_ms);
    kit.show_notification_for(message, severity, duration);
}

#[wasm_bindgen(js_name = showLoader)]
pub fn show_loader() -> bool {
    current_kit().is_some_and(|kit| kit.show_loader())
}

#[wasm_bindgen(js_name = hideLoader)]
pub fn hide_loader() -> bool {
    current_kit().is_some_and(|kit| kit.hide_loader())
}

#[wasm_bindgen(js_name = confirmAction)]
pub async fn confirm_action(message: String) -> bool {
    match current_kit() {
        Some(kit) => kit.confirm_action(&message).await,
        None => false,
    }
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub async fn copy_to_clipboard(text: String) -> bool {
    match current_kit() {
        Some(kit) => kit.copy_to_clipboard(&text).await,
        None => false,
    }
}

#[wasm_bindgen(js_name = exportData)]
pub fn export_data(format: String, endpoint: String) {
    if let Some(kit) = current_kit() {
        kit.export_data(&format, &endpoint);
    }
}

// --- Formatting and validation ---

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(input: String) -> String {
    datetime::format_date(&input)
}

#[wasm_bindgen(js_name = formatTime)]
pub fn format_time(input: String) -> String {
    datetime::format_time(&input)
}

#[wasm_bindgen(js_name = formatDateTime)]
pub fn format_date_time(input: String) -> String {
    datetime::format_date_time(&input)
}

#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email(input: String) -> bool {
    validate::validate_email(&input)
}

#[wasm_bindgen(js_name = validatePhone)]
pub fn validate_phone(input: String) -> bool {
    validate::validate_phone(&input)
}

// --- Timers ---

/// Debounced wrapper around `func`. The wrapper forwards its first argument.
/// Before boot `func` is returned unchanged.
#[wasm_bindgen(js_name = debounce)]
pub fn debounce(func: js_sys::Function, wait: u32) -> JsValue {
    let Some(kit) = current_kit() else {
        return func.into();
    };
    let debounced = kit.debounce(wait, move |arg: JsValue| {
        if let Err(err) = func.call1(&JsValue::NULL, &arg) {
            log::error!("debounced callback threw: {err:?}");
        }
    });
    Closure::<dyn Fn(JsValue)>::new(move |arg: JsValue| debounced.call(arg)).into_js_value()
}

#[wasm_bindgen(js_name = animateCounter)]
#[allow(clippy::cast_possible_truncation)]
pub fn animate_counter(element: web_sys::Element, target: f64, duration: Option<u32>) {
    let Some(kit) = current_kit() else {
        return;
    };
    if !target.is_finite() {
        log::warn!("animateCounter: target {target} is not a number");
        return;
    }
    let duration = duration.unwrap_or(kit.config().counter_duration_ms);
    kit.animate_counter_for(element, target.round() as i64, duration);
}

#[wasm_bindgen(js_name = initTooltips)]
pub fn init_tooltips() -> usize {
    let Some(kit) = current_kit() else {
        return 0;
    };
    match web_sys::window().and_then(|w| w.document()) {
        Some(document) => crate::page::tooltips::init_tooltips(&document, &kit.config().tooltip_attribute),
        None => 0,
    }
}

// --- HTTP ---

fn property(target: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

fn constructor_name(value: &JsValue) -> Option<String> {
    let Ok(constructor) = js_sys::Reflect::get(value, &JsValue::from_str("constructor")) else {
        return None;
    };
    constructor.dyn_ref::<js_sys::Function>().map(|f| String::from(f.name()))
}

/// Reduce a JS value to what a request can carry.
fn script_value(value: &JsValue) -> ScriptValue {
    if value.is_undefined() || value.is_null() {
        return ScriptValue::Missing;
    }
    if let Some(text) = value.as_string() {
        return ScriptValue::Text(text);
    }
    if let Some(n) = value.as_f64() {
        return ScriptValue::Number(n);
    }
    if let Some(b) = value.as_bool() {
        return ScriptValue::Bool(b);
    }
    if let Some(params) = value.dyn_ref::<web_sys::UrlSearchParams>() {
        return ScriptValue::Text(String::from(params.to_string()));
    }
    let name = constructor_name(value);
    let plain = js_sys::Array::is_array(value) || matches!(name.as_deref(), None | Some("Object"));
    if !plain {
        return ScriptValue::Opaque(name.unwrap_or_else(|| "object".to_owned()));
    }
    match js_sys::JSON::stringify(value) {
        Ok(text) => ScriptValue::Json(String::from(text)),
        Err(err) => {
            log::warn!("body could not be stringified: {err:?}");
            ScriptValue::Opaque("unserializable object".to_owned())
        }
    }
}

fn pair_entry(pair: &JsValue) -> Option<(String, String)> {
    let pair = js_sys::Array::from(pair);
    script::header_entry(&script_value(&pair.get(0)), &script_value(&pair.get(1)))
}

/// Headers from a `Headers` instance, an array of pairs or a plain record.
fn header_pairs(headers: &JsValue) -> Vec<(String, String)> {
    if !headers.is_object() {
        return Vec::new();
    }
    match js_sys::try_iter(headers) {
        Ok(Some(entries)) => entries
            .filter_map(|entry| match entry {
                Ok(pair) => pair_entry(&pair),
                Err(err) => {
                    log::warn!("header iteration failed: {err:?}");
                    None
                }
            })
            .collect(),
        Ok(None) => js_sys::Object::entries(headers.unchecked_ref())
            .iter()
            .filter_map(|pair| pair_entry(&pair))
            .collect(),
        Err(err) => {
            log::warn!("headers could not be read: {err:?}");
            Vec::new()
        }
    }
}

/// Read a `fetch`-style init object: `method`, `headers`, `body`.
fn fetch_options(init: &JsValue) -> Result<FetchOptions, ApiError> {
    if init.is_undefined() || init.is_null() {
        return Ok(FetchOptions::get());
    }
    let method = script::header_text(&script_value(&property(init, "method")));
    let headers = header_pairs(&property(init, "headers"));
    script::fetch_options(method.as_deref(), headers, script_value(&property(init, "body")))
}

/// Resolves with the parsed JSON body exactly as the server sent it.
#[wasm_bindgen(js_name = fetchAPI)]
pub async fn fetch_api_js(url: String, init: JsValue) -> Result<JsValue, JsValue> {
    let Some(kit) = current_kit() else {
        return Err(js_error(&ApiError::Unavailable.to_string()));
    };
    let text = fetch_json_text(&kit, &url, fetch_options(&init))
        .await
        .map_err(|err| js_error(&err.to_string()))?;
    js_sys::JSON::parse(&text)
}
