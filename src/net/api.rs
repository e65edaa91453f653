//! JSON fetch wrapper for the admin backend.
//!
//! Requests go out through the kit's [`crate::platform::Platform`], so the
//! browser build uses `gloo-net` while native tests replay scripted responses.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, non-2xx status, undecodable body) is logged,
//! surfaced once as an error notification, and then returned to the caller
//! so it can react as well.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::{DeserializeOwned, IgnoredAny};

use crate::kit::UiKit;
use crate::util::severity::Severity;

/// Header sent with every request unless the caller overrides it.
pub const DEFAULT_HEADERS: [(&str, &str); 1] = [("Content-Type", "application/json")];

/// Error returned by [`fetch_api`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a status outside 200–299.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request could not be built.
    #[error("invalid request: {0}")]
    Request(String),
    /// No HTTP transport in this environment.
    #[error("HTTP requests are not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Request method. Standard names are normalized to upper case; any other
/// valid token is sent as written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Extension(String),
}

/// Methods `fetch` refuses to send.
const FORBIDDEN_METHODS: [&str; 3] = ["CONNECT", "TRACE", "TRACK"];

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Extension(token) => token,
        }
    }

    /// Parse a method token. Returns `None` for an empty or malformed token
    /// and for `CONNECT`, `TRACE` and `TRACK`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() || !name.chars().all(is_token_char) {
            return None;
        }
        if FORBIDDEN_METHODS.iter().any(|m| m.eq_ignore_ascii_case(name)) {
            return None;
        }
        let standard = [Self::Get, Self::Head, Self::Post, Self::Put, Self::Patch, Self::Delete, Self::Options]
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(name));
        Some(standard.unwrap_or_else(|| Self::Extension(name.to_owned())))
    }
}

/// Request payload.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// Serialized with `serde_json` when the request is built.
    Json(serde_json::Value),
    /// Sent byte for byte.
    Text(String),
}

/// Caller-side request options.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl FetchOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_method(method: HttpMethod, body: serde_json::Value) -> Self {
        Self { method, headers: Vec::new(), body: Some(RequestBody::Json(body)) }
    }

    #[must_use]
    pub fn post(body: serde_json::Value) -> Self {
        Self::with_method(HttpMethod::Post, body)
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Resolve into the request actually sent: merged headers, serialized body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if a JSON body cannot be serialized.
    pub fn into_request(self, url: &str) -> Result<ApiRequest, ApiError> {
        let body = match self.body {
            None => None,
            Some(RequestBody::Text(text)) => Some(text),
            Some(RequestBody::Json(value)) => {
                Some(serde_json::to_string(&value).map_err(|e| ApiError::Request(e.to_string()))?)
            }
        };
        Ok(ApiRequest {
            method: self.method,
            url: url.to_owned(),
            headers: merge_headers(&self.headers),
            body,
        })
    }
}

/// Fully resolved request handed to the platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Status and body text of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Combine [`DEFAULT_HEADERS`] with caller headers.
///
/// Header names compare case-insensitively. A caller header replaces a
/// default of the same name; among caller headers the last one wins.
#[must_use]
pub fn merge_headers(caller: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = DEFAULT_HEADERS
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect();
    for (name, value) in caller {
        merged.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        merged.push((name.clone(), value.clone()));
    }
    merged
}

fn check_status(raw: &RawResponse) -> Result<(), ApiError> {
    if (200..300).contains(&raw.status) {
        Ok(())
    } else {
        Err(ApiError::Status(raw.status))
    }
}

/// Check the status and decode the JSON body.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for a non-2xx status and [`ApiError::Decode`]
/// when the body does not deserialize into `T`.
pub fn decode_response<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, ApiError> {
    check_status(raw)?;
    serde_json::from_str(&raw.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Check the status and that the body is JSON, keeping the text as sent.
///
/// # Errors
///
/// Same as [`decode_response`].
pub fn json_body_text(raw: RawResponse) -> Result<String, ApiError> {
    check_status(&raw)?;
    serde_json::from_str::<IgnoredAny>(&raw.body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(raw.body)
}

async fn send(kit: &UiKit, url: &str, options: Result<FetchOptions, ApiError>) -> Result<RawResponse, ApiError> {
    let request = options?.into_request(url)?;
    let platform = kit.platform();
    platform.send(request).await
}

fn report<T>(kit: &UiKit, url: &str, outcome: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &outcome {
        log::error!("api error: url={url} error={err}");
        kit.show_notification(kit.config().messages.load_failed.clone(), Severity::Error);
    }
    outcome
}

/// Request `url` and decode its JSON body.
///
/// # Errors
///
/// Returns the [`ApiError`] after logging it and showing one error
/// notification.
pub async fn fetch_api<T: DeserializeOwned>(kit: &UiKit, url: &str, options: FetchOptions) -> Result<T, ApiError> {
    let outcome = send(kit, url, Ok(options)).await.and_then(|raw| decode_response(&raw));
    report(kit, url, outcome)
}

/// Request `url` for a page script and return the JSON body text untouched,
/// so the script parses it with key order and number text intact.
///
/// `options` is the result of reading the script's init object; a failure
/// there is reported like any other fetch failure.
///
/// # Errors
///
/// Returns the [`ApiError`] after logging it and showing one error
/// notification.
pub async fn fetch_json_text(
    kit: &UiKit,
    url: &str,
    options: Result<FetchOptions, ApiError>,
) -> Result<String, ApiError> {
    let outcome = send(kit, url, options).await.and_then(json_body_text);
    report(kit, url, outcome)
}
