//! `fetch`-style options handed over by page scripts.
//!
//! The binding layer reduces each JS value to a [`ScriptValue`]; everything
//! after that (method tokens, header text, body text) is decided here so it
//! runs in native tests. Bodies are forwarded as the caller wrote them:
//! strings go out unchanged, plain objects and arrays as their JSON text.
//! Bodies that have no text form (`FormData`, `Blob`) are refused instead of
//! being sent as `"[object FormData]"`.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use crate::net::api::{ApiError, FetchOptions, HttpMethod, RequestBody};

/// A script value reduced to what a request can carry.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptValue {
    /// `undefined` or `null`.
    Missing,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Plain object or array, already run through `JSON.stringify`.
    Json(String),
    /// Any other object, named by its constructor.
    Opaque(String),
}

/// Number text as JS `String(n)` renders it.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn js_number_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned()
    } else if n == 0.0 {
        "0".to_owned()
    } else {
        n.to_string()
    }
}

/// Header text for a scalar value. Objects and missing values have none.
#[must_use]
pub fn header_text(value: &ScriptValue) -> Option<String> {
    match value {
        ScriptValue::Text(text) => Some(text.clone()),
        ScriptValue::Number(n) => Some(js_number_text(*n)),
        ScriptValue::Bool(b) => Some(b.to_string()),
        ScriptValue::Missing | ScriptValue::Json(_) | ScriptValue::Opaque(_) => None,
    }
}

/// One `[name, value]` header entry, or `None` when it cannot be sent.
#[must_use]
pub fn header_entry(name: &ScriptValue, value: &ScriptValue) -> Option<(String, String)> {
    let name = header_text(name).filter(|n| !n.trim().is_empty());
    let text = header_text(value);
    match (name, text) {
        (Some(name), Some(text)) => Some((name, text)),
        (name, _) => {
            log::debug!("header dropped: name={name:?} value={value:?}");
            None
        }
    }
}

/// Body text to send.
///
/// # Errors
///
/// Returns [`ApiError::Request`] for a body with no text form.
pub fn request_body(value: ScriptValue) -> Result<Option<RequestBody>, ApiError> {
    match value {
        ScriptValue::Missing => Ok(None),
        ScriptValue::Text(text) | ScriptValue::Json(text) => Ok(Some(RequestBody::Text(text))),
        ScriptValue::Number(n) => Ok(Some(RequestBody::Text(js_number_text(n)))),
        ScriptValue::Bool(b) => Ok(Some(RequestBody::Text(b.to_string()))),
        ScriptValue::Opaque(kind) => Err(ApiError::Request(format!("unsupported body type: {kind}"))),
    }
}

/// Assemble [`FetchOptions`] from script input. A missing method means GET.
///
/// # Errors
///
/// Returns [`ApiError::Request`] for a malformed or forbidden method token
/// and for a body with no text form.
pub fn fetch_options(
    method: Option<&str>,
    headers: Vec<(String, String)>,
    body: ScriptValue,
) -> Result<FetchOptions, ApiError> {
    let method = match method {
        None => HttpMethod::Get,
        Some(name) => {
            HttpMethod::from_name(name).ok_or_else(|| ApiError::Request(format!("unsupported method: {name}")))?
        }
    };
    Ok(FetchOptions { method, headers, body: request_body(body)? })
}
