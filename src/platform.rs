//! Browser API seam: confirm dialog, navigation, clipboard, and HTTP.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`BrowserPlatform`] is the only place that touches `window` for these
//! calls. [`HeadlessPlatform`] records every call and replays scripted
//! answers so kit operations can be exercised natively.

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::net::api::{ApiError, ApiRequest, RawResponse};

/// Failure reported by a browser API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// The API is not present in this environment (insecure context, no window).
    #[error("{0} is not available")]
    Unavailable(&'static str),
    /// The browser rejected the call.
    #[error("browser error: {0}")]
    Js(String),
}

/// Browser capabilities used by [`crate::UiKit`].
pub trait Platform {
    /// Show the blocking confirm dialog and return the user's answer.
    fn confirm(&self, message: &str) -> bool;

    /// Point the current page at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser refuses the navigation synchronously.
    fn navigate(&self, url: &str) -> Result<(), PlatformError>;

    /// Write `text` to the system clipboard.
    fn write_clipboard(&self, text: &str) -> LocalBoxFuture<'static, Result<(), PlatformError>>;

    /// Send an HTTP request and collect the status and body text.
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<RawResponse, ApiError>>;
}

#[cfg(feature = "csr")]
pub use browser::BrowserPlatform;
#[cfg(feature = "csr")]
pub(crate) use browser::js_error;

#[cfg(feature = "csr")]
mod browser {
    use futures::FutureExt;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    use super::{LocalBoxFuture, Platform, PlatformError};
    use crate::net::api::{ApiError, ApiRequest, HttpMethod, RawResponse};

    /// [`Platform`] backed by `web-sys` and `gloo-net`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserPlatform;

    /// Describe a rejected JS call.
    pub(crate) fn js_error(value: &JsValue) -> PlatformError {
        PlatformError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }

    fn method(method: &HttpMethod) -> Result<gloo_net::http::Method, ApiError> {
        gloo_net::http::Method::from_bytes(method.as_str().as_bytes()).map_err(|e| ApiError::Request(e.to_string()))
    }

    impl Platform for BrowserPlatform {
        fn confirm(&self, message: &str) -> bool {
            let Some(window) = web_sys::window() else {
                return false;
            };
            match window.confirm_with_message(message) {
                Ok(answer) => answer,
                Err(err) => {
                    log::warn!("confirm dialog failed: {err:?}");
                    false
                }
            }
        }

        fn navigate(&self, url: &str) -> Result<(), PlatformError> {
            let window = web_sys::window().ok_or(PlatformError::Unavailable("window"))?;
            window.location().set_href(url).map_err(|err| js_error(&err))
        }

        fn write_clipboard(&self, text: &str) -> LocalBoxFuture<'static, Result<(), PlatformError>> {
            let promise = web_sys::window()
                .map(|window| window.navigator().clipboard())
                .map(|clipboard| clipboard.write_text(text));
            async move {
                let promise = promise.ok_or(PlatformError::Unavailable("clipboard"))?;
                JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|err| js_error(&err))
            }
            .boxed_local()
        }

        fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<RawResponse, ApiError>> {
            async move {
                let method = method(&request.method)?;
                let mut builder = gloo_net::http::RequestBuilder::new(&request.url).method(method);
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                let built = match request.body {
                    Some(body) => builder.body(body),
                    None => builder.build(),
                };
                let resp = built
                    .map_err(|e| ApiError::Request(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                let status = resp.status();
                let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
                Ok(RawResponse { status, body })
            }
            .boxed_local()
        }
    }
}

#[derive(Default)]
struct HeadlessState {
    confirm_answer: bool,
    clipboard_denied: bool,
    navigation_error: Option<PlatformError>,
    responses: VecDeque<Result<RawResponse, ApiError>>,
    confirmations: Vec<String>,
    navigations: Vec<String>,
    clipboard: Vec<String>,
    requests: Vec<ApiRequest>,
}

/// Recording [`Platform`] for native builds and tests.
///
/// Defaults: confirm answers `false`, navigation and clipboard succeed, and
/// requests fail with [`ApiError::Unavailable`] unless a response is queued.
/// Clones share state.
#[derive(Clone, Default)]
pub struct HeadlessPlatform {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_confirm_answer(&self, answer: bool) {
        self.state.borrow_mut().confirm_answer = answer;
    }

    pub fn deny_clipboard(&self) {
        self.state.borrow_mut().clipboard_denied = true;
    }

    pub fn fail_navigation(&self, error: PlatformError) {
        self.state.borrow_mut().navigation_error = Some(error);
    }

    /// Queue a response for the next request.
    pub fn respond(&self, status: u16, body: impl Into<String>) {
        self.state
            .borrow_mut()
            .responses
            .push_back(Ok(RawResponse { status, body: body.into() }));
    }

    /// Queue a transport failure for the next request.
    pub fn fail_request(&self, error: ApiError) {
        self.state.borrow_mut().responses.push_back(Err(error));
    }

    #[must_use]
    pub fn confirmations(&self) -> Vec<String> {
        self.state.borrow().confirmations.clone()
    }

    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        self.state.borrow().navigations.clone()
    }

    #[must_use]
    pub fn clipboard(&self) -> Vec<String> {
        self.state.borrow().clipboard.clone()
    }

    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }
}

impl Platform for HeadlessPlatform {
    fn confirm(&self, message: &str) -> bool {
        let mut state = self.state.borrow_mut();
        state.confirmations.push(message.to_owned());
        state.confirm_answer
    }

    fn navigate(&self, url: &str) -> Result<(), PlatformError> {
        let mut state = self.state.borrow_mut();
        if let Some(err) = state.navigation_error.clone() {
            return Err(err);
        }
        state.navigations.push(url.to_owned());
        Ok(())
    }

    fn write_clipboard(&self, text: &str) -> LocalBoxFuture<'static, Result<(), PlatformError>> {
        let outcome = {
            let mut state = self.state.borrow_mut();
            if state.clipboard_denied {
                Err(PlatformError::Js("NotAllowedError: write permission denied".to_owned()))
            } else {
                state.clipboard.push(text.to_owned());
                Ok(())
            }
        };
        Box::pin(futures::future::ready(outcome))
    }

    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<RawResponse, ApiError>> {
        let outcome = {
            let mut state = self.state.borrow_mut();
            state.requests.push(request);
            state.responses.pop_front().unwrap_or(Err(ApiError::Unavailable))
        };
        Box::pin(futures::future::ready(outcome))
    }
}
